// SPDX-License-Identifier: MPL-2.0
//! Playback controller wrapping the media primitive.
//!
//! The media primitive's paused flag is the source of truth. The controller
//! keeps a mirrored `is_playing` flag for presentation and republishes the
//! timer text and progress fraction whenever time moves.

use super::media::{MediaElement, MediaEvent};
use super::time_format::format_time;
use super::volume::VolumeState;

/// Snapshot of playback for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time: f64,
    /// `None` until the media signals that its data is loaded.
    pub duration: Option<f64>,
}

/// Formatted time text and timeline fill.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReadout {
    pub current: String,
    pub duration: String,
    /// `current_time / duration`, absent while the duration is unknown.
    pub progress: Option<f64>,
}

impl TimelineReadout {
    /// Timer label, e.g. `01:02/02:05`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.current, self.duration)
    }
}

impl Default for TimelineReadout {
    fn default() -> Self {
        Self {
            current: format_time(0.0),
            duration: format_time(0.0),
            progress: None,
        }
    }
}

/// Drives a media primitive. Every operation is a no-op while no media is attached.
#[derive(Debug)]
pub struct PlaybackController<M> {
    media: Option<M>,
    is_playing: bool,
    readout: TimelineReadout,
}

impl<M> Default for PlaybackController<M> {
    fn default() -> Self {
        Self {
            media: None,
            is_playing: false,
            readout: TimelineReadout::default(),
        }
    }
}

impl<M: MediaElement> PlaybackController<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the media primitive. Its duration stays unknown until it
    /// reports [`MediaEvent::DataLoaded`].
    pub fn attach(&mut self, media: M) {
        self.is_playing = !media.is_paused();
        self.media = Some(media);
        self.refresh_readout();
    }

    #[must_use]
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.media.as_mut()
    }

    /// Authoritative paused flag. True while no media is attached.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.media.as_ref().is_none_or(MediaElement::is_paused)
    }

    /// Mirrored playing flag used for presentation.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.media
            .as_ref()
            .and_then(MediaElement::duration)
            .filter(|d| d.is_finite() && *d > 0.0)
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.is_playing,
            current_time: self.media.as_ref().map_or(0.0, MediaElement::current_time),
            duration: self.media.as_ref().and_then(MediaElement::duration),
        }
    }

    #[must_use]
    pub fn readout(&self) -> &TimelineReadout {
        &self.readout
    }

    pub fn play(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        media.play();
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        media.pause();
        self.is_playing = false;
    }

    /// Plays when the media is paused, pauses otherwise.
    pub fn toggle(&mut self) {
        if self.media.is_none() {
            return;
        }
        if self.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Moves the position by `delta_secs`. The media primitive clamps.
    pub fn seek_by(&mut self, delta_secs: f64) {
        let Some(media) = self.media.as_mut() else {
            return;
        };
        let target = media.current_time() + delta_secs;
        media.set_current_time(target);
        self.refresh_readout();
    }

    /// Seeks to `fraction` of the duration.
    ///
    /// Returns false without touching the media when the duration is unknown.
    pub fn seek_to(&mut self, fraction: f64) -> bool {
        let Some(duration) = self.duration() else {
            return false;
        };
        if fraction.is_nan() {
            return false;
        }
        let Some(media) = self.media.as_mut() else {
            return false;
        };
        media.set_current_time(fraction.clamp(0.0, 1.0) * duration);
        self.refresh_readout();
        true
    }

    /// Pushes the effective volume to the media primitive.
    pub fn apply_volume(&mut self, volume: &VolumeState) {
        if let Some(media) = self.media.as_mut() {
            media.set_volume(volume.effective());
        }
    }

    /// Reacts to a media notification.
    pub fn handle_media_event(&mut self, event: MediaEvent, volume: &VolumeState) {
        match event {
            MediaEvent::DataLoaded => {
                self.apply_volume(volume);
                self.refresh_readout();
            }
            MediaEvent::TimeAdvanced => {
                // The media may have stopped by itself at the end
                self.is_playing = !self.is_paused();
                self.refresh_readout();
            }
        }
    }

    fn refresh_readout(&mut self) {
        let Some(media) = self.media.as_ref() else {
            return;
        };
        let current = media.current_time();
        let duration = self.duration();

        self.readout = TimelineReadout {
            current: format_time(current),
            duration: format_time(duration.unwrap_or(0.0)),
            progress: duration.map(|d| (current / d).clamp(0.0, 1.0)),
        };
    }
}
