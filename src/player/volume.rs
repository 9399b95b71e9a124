// SPDX-License-Identifier: MPL-2.0
//! Volume level and mute override.
//!
//! The stored level and the mute flag are independent: muting never touches
//! the level, so unmuting restores it exactly.

use crate::config::{DEFAULT_VOLUME, HIGH_VOLUME_THRESHOLD, MAX_VOLUME, MIN_VOLUME};

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use scrubline::player::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// let too_loud = Volume::new(2.0);
/// assert_eq!(too_loud.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Raises the level by `amount`, clamping to maximum.
    #[must_use]
    pub fn increased_by(self, amount: f32) -> Self {
        Self::new(self.0 + amount)
    }

    /// Lowers the level by `amount`, clamping to minimum.
    #[must_use]
    pub fn decreased_by(self, amount: f32) -> Self {
        Self::new(self.0 - amount)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// Which volume glyph the controls show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    /// Picks the glyph for a mute flag and level.
    #[must_use]
    pub fn select(muted: bool, volume: Volume) -> Self {
        if muted || volume.value() <= MIN_VOLUME {
            VolumeIcon::Muted
        } else if volume.value() > HIGH_VOLUME_THRESHOLD {
            VolumeIcon::High
        } else {
            VolumeIcon::Low
        }
    }
}

/// Where a volume change came from.
///
/// Only a user dragging the slider lifts the mute override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSource {
    Slider,
    Internal,
}

/// Current volume level and mute flag of one player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeState {
    volume: Volume,
    muted: bool,
}

impl VolumeState {
    #[must_use]
    pub fn new(volume: Volume, muted: bool) -> Self {
        Self { volume, muted }
    }

    /// Stored level, ignoring the mute override.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level the media primitive should play at.
    #[must_use]
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume.value()
        }
    }

    #[must_use]
    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::select(self.muted, self.volume)
    }

    pub fn set_volume(&mut self, volume: f32, source: VolumeSource) {
        if source == VolumeSource::Slider {
            self.muted = false;
        }
        self.volume = Volume::new(volume);
    }

    pub fn increase(&mut self, amount: f32) {
        self.volume = self.volume.increased_by(amount);
    }

    pub fn decrease(&mut self, amount: f32) {
        self.volume = self.volume.decreased_by(amount);
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Flips the mute flag and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}
