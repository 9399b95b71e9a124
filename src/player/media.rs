// SPDX-License-Identifier: MPL-2.0
//! Contract for the external media primitive, plus a clock-driven stand-in.
//!
//! Decoding and rendering live outside this crate. The player only needs a
//! handle that can play, pause, seek, set volume and report time, and that
//! notifies when its data is loaded and when time advances.

use std::time::Duration;

/// Notifications emitted by a media primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Duration and current time are now valid.
    DataLoaded,
    /// Playback position moved.
    TimeAdvanced,
}

/// Playback primitive driven by the player.
///
/// `is_paused` is the authoritative playing/paused state.
pub trait MediaElement {
    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the position. Implementations clamp to the playable range.
    fn set_current_time(&mut self, secs: f64);

    /// Total length in seconds, `None` until data is loaded.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);
}

/// Media primitive whose clock advances only when told to.
///
/// Used by the demo window in place of a decoder, and by tests.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    length_secs: f64,
    loaded: bool,
    paused: bool,
    position_secs: f64,
    volume: f32,
}

impl SimulatedMedia {
    /// Creates unloaded media of the given length.
    #[must_use]
    pub fn new(length_secs: f64) -> Self {
        Self {
            length_secs: length_secs.max(0.0),
            loaded: false,
            paused: true,
            position_secs: 0.0,
            volume: 1.0,
        }
    }

    /// Marks the data as loaded, making the duration visible.
    pub fn load(&mut self) -> MediaEvent {
        self.loaded = true;
        MediaEvent::DataLoaded
    }

    /// Advances the clock while playing.
    ///
    /// Pauses at the end of the media. Returns `None` when nothing moved.
    pub fn advance(&mut self, elapsed: Duration) -> Option<MediaEvent> {
        if !self.loaded || self.paused {
            return None;
        }

        self.position_secs = (self.position_secs + elapsed.as_secs_f64()).min(self.length_secs);
        if self.position_secs >= self.length_secs {
            self.paused = true;
        }
        Some(MediaEvent::TimeAdvanced)
    }
}

impl MediaElement for SimulatedMedia {
    fn play(&mut self) {
        if self.loaded && self.position_secs >= self.length_secs {
            self.position_secs = 0.0;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position_secs
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let upper = if self.loaded { self.length_secs } else { 0.0 };
        self.position_secs = secs.clamp(0.0, upper);
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.then_some(self.length_secs)
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
