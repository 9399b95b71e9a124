// SPDX-License-Identifier: MPL-2.0
//! Transient "N Seconds" badge shown after a skip.

use crate::config::SKIP_BADGE_DURATION_MS;
use std::time::{Duration, Instant};

const BADGE_LIFETIME: Duration = Duration::from_millis(SKIP_BADGE_DURATION_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipSide {
    Left,
    Right,
}

/// The badge currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Badge {
    pub side: SkipSide,
    /// Absolute skip amount, in seconds.
    pub seconds: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SkipBadge {
    current: Option<Badge>,
    last_skip: Option<Instant>,
}

impl SkipBadge {
    /// Shows the badge for a skip of `delta_secs`. Backward skips use the left side.
    pub fn show(&mut self, delta_secs: f64, now: Instant) {
        if !delta_secs.is_finite() || delta_secs == 0.0 {
            return;
        }
        let side = if delta_secs < 0.0 {
            SkipSide::Left
        } else {
            SkipSide::Right
        };
        self.current = Some(Badge {
            side,
            seconds: delta_secs.abs().round() as u32,
        });
        self.last_skip = Some(now);
    }

    /// Clears the badge once it has been up for its full lifetime.
    ///
    /// Returns true when the badge was cleared by this call.
    pub fn check(&mut self, now: Instant) -> bool {
        let expired = self
            .last_skip
            .is_some_and(|t| now.saturating_duration_since(t) >= BADGE_LIFETIME);
        if expired && self.current.is_some() {
            self.current = None;
            self.last_skip = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<Badge> {
        self.current
    }
}
