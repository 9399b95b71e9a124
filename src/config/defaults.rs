// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: Idle auto-hide threshold and poll cadence
//! - **Skip**: Keyboard seek amounts and skip badge lifetime
//! - **Volume**: Audio level bounds and key step
//! - **Preview**: Thumbnail naming convention and interval
//! - **Media**: Time-advance cadence of the simulated media clock

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Default inactivity before the controls overlay hides (in seconds).
pub const DEFAULT_IDLE_TIMEOUT_SECS: u32 = 3;

/// Minimum idle timeout (in seconds).
pub const MIN_IDLE_TIMEOUT_SECS: u32 = 1;

/// Maximum idle timeout (in seconds).
pub const MAX_IDLE_TIMEOUT_SECS: u32 = 30;

/// Cadence of the shared visibility/badge poll (in milliseconds).
pub const VISIBILITY_POLL_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Seek amount for the arrow keys and skip buttons (in seconds).
pub const SHORT_SKIP_SECS: f64 = 5.0;

/// Seek amount for the `j` / `l` keys (in seconds).
pub const LONG_SKIP_SECS: f64 = 15.0;

/// How long a skip badge stays visible (in milliseconds).
pub const SKIP_BADGE_DURATION_MS: u64 = 1_500;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment per arrow key press (10%).
pub const VOLUME_STEP: f32 = 0.1;

/// Volume above which the "high" icon is shown.
pub const HIGH_VOLUME_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Seconds of media covered by one pre-rendered preview image.
pub const PREVIEW_INTERVAL_SECS: f64 = 10.0;

/// File name prefix of preview images (`preview<N>.jpg`).
pub const PREVIEW_FILE_PREFIX: &str = "preview";

/// File extension of preview images.
pub const PREVIEW_FILE_EXTENSION: &str = "jpg";

/// Number of preview image handles kept in memory.
pub const PREVIEW_CACHE_CAPACITY: usize = 64;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Cadence of "time advanced" notifications from the simulated media.
pub const MEDIA_TICK_INTERVAL_MS: u64 = 250;

/// Duration of the simulated media when none is given (in seconds).
pub const DEFAULT_SIMULATED_DURATION_SECS: f64 = 125.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_IDLE_TIMEOUT_SECS > 0);
    assert!(MAX_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);

    assert!(VISIBILITY_POLL_INTERVAL_MS > 0);
    assert!(SKIP_BADGE_DURATION_MS > 0);
    assert!(SHORT_SKIP_SECS > 0.0);
    assert!(LONG_SKIP_SECS > SHORT_SKIP_SECS);

    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    assert!(PREVIEW_INTERVAL_SECS > 0.0);
    assert!(PREVIEW_CACHE_CAPACITY > 0);
    assert!(MEDIA_TICK_INTERVAL_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_IDLE_TIMEOUT_SECS, 3);
        assert!(DEFAULT_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
        assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);
    }

    #[test]
    fn skip_defaults_match_keyboard_table() {
        assert_eq!(SHORT_SKIP_SECS, 5.0);
        assert_eq!(LONG_SKIP_SECS, 15.0);
        assert_eq!(SKIP_BADGE_DURATION_MS, 1_500);
    }

    #[test]
    fn volume_defaults_are_valid() {
        assert!(DEFAULT_VOLUME >= MIN_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
        assert_eq!(VOLUME_STEP, 0.1);
    }

    #[test]
    fn preview_interval_is_ten_seconds() {
        assert_eq!(PREVIEW_INTERVAL_SECS, 10.0);
    }
}
