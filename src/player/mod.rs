// SPDX-License-Identifier: MPL-2.0
//! Video control surface state.
//!
//! [`Player`] owns every piece of interaction state for one mounted player
//! and routes input to the sub-components:
//!
//! - [`volume`]: level and mute flag
//! - [`playback`]: wraps the media primitive
//! - [`scrub`]: timeline hover, drag and preview selection
//! - [`visibility`]: idle auto-hide of the controls
//! - [`skip_badge`]: transient skip feedback
//!
//! Nothing in this module depends on the UI toolkit. The host translates its
//! events into [`Event`]s and applies the returned [`Effect`].

pub mod fullscreen;
pub mod idle_timeout;
pub mod input;
pub mod media;
pub mod playback;
pub mod preview;
pub mod scrub;
pub mod skip_badge;
pub mod time_format;
pub mod visibility;
pub mod volume;

pub use fullscreen::{FullscreenCapability, FullscreenChange, PlayerId};
pub use idle_timeout::IdleTimeout;
pub use input::{route_key, Action, Focus, Key, KeyDispatch};
pub use media::{MediaElement, MediaEvent, SimulatedMedia};
pub use playback::{PlaybackController, PlaybackState, TimelineReadout};
pub use preview::{Preview, PreviewSource};
pub use scrub::{ScrubEngine, ScrubPhase, ScrubState, TimelineBounds};
pub use skip_badge::{Badge, SkipBadge, SkipSide};
pub use time_format::format_time;
pub use volume::{Volume, VolumeIcon, VolumeSource, VolumeState};

use crate::config::VOLUME_STEP;
use std::path::PathBuf;
use std::time::Instant;

/// Values a player is mounted with.
#[derive(Debug, Clone, Default)]
pub struct PlayerSettings {
    pub idle_timeout: IdleTimeout,
    pub volume: VolumeState,
    /// Folder holding `preview<N>.jpg`. No previews when absent.
    pub preview_folder: Option<PathBuf>,
}

/// Input delivered to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Key { key: Key, focus: Focus },
    /// Primary press on the video surface.
    ClickableAreaPressed,
    Timeline(scrub::Message),
    PointerMovedOverPlayer,
    PointerLeftPlayer,
    Media(MediaEvent),
    /// Shared idle and badge poll.
    Poll,
    /// The user dragged the volume slider.
    VolumeSlider(f32),
    PlayButtonPressed,
    MuteButtonPressed,
    SkipButtonPressed(f64),
    FullscreenButtonPressed,
    /// The host window reported its mode, possibly changed outside the player.
    WindowModeChanged { fullscreen: bool },
}

/// Work the host must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Fullscreen(FullscreenChange),
}

/// Read-only view of everything the controls render.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation<'a> {
    pub is_playing: bool,
    pub is_scrubbing: bool,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
    pub volume_active: bool,
    pub volume: Volume,
    pub is_muted: bool,
    pub volume_icon: VolumeIcon,
    pub readout: &'a TimelineReadout,
    /// Timeline fill: live drag position while scrubbing, playback otherwise.
    pub progress: Option<f64>,
    pub preview_position: f64,
    pub hover_preview: Option<&'a Preview>,
    pub drag_thumbnail: Option<&'a Preview>,
    pub skip_badge: Option<Badge>,
}

/// One mounted video player.
///
/// Dropping the player releases fullscreen if it holds it.
#[derive(Debug)]
pub struct Player<M> {
    id: PlayerId,
    volume: VolumeState,
    playback: PlaybackController<M>,
    scrub: ScrubEngine,
    visibility: visibility::State,
    skip_badge: SkipBadge,
    fullscreen: FullscreenCapability,
}

impl<M: MediaElement> Player<M> {
    #[must_use]
    pub fn new(settings: PlayerSettings, fullscreen: FullscreenCapability, now: Instant) -> Self {
        let source = settings.preview_folder.map(PreviewSource::new);
        Self {
            id: PlayerId::next(),
            volume: settings.volume,
            playback: PlaybackController::new(),
            scrub: ScrubEngine::new(source),
            visibility: visibility::State::new(settings.idle_timeout, now),
            skip_badge: SkipBadge::default(),
            fullscreen,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Attaches the media primitive and pushes the current volume to it.
    pub fn attach(&mut self, media: M) {
        self.playback.attach(media);
        self.playback.apply_volume(&self.volume);
    }

    #[must_use]
    pub fn media(&self) -> Option<&M> {
        self.playback.media()
    }

    pub fn media_mut(&mut self) -> Option<&mut M> {
        self.playback.media_mut()
    }

    #[must_use]
    pub fn volume(&self) -> &VolumeState {
        &self.volume
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackController<M> {
        &self.playback
    }

    #[must_use]
    pub fn scrub(&self) -> &ScrubEngine {
        &self.scrub
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen(self.id)
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation<'_> {
        let readout = self.playback.readout();
        Presentation {
            is_playing: self.playback.is_playing(),
            is_scrubbing: self.scrub.is_scrubbing(),
            is_fullscreen: self.is_fullscreen(),
            controls_visible: self.visibility.controls_visible(),
            volume_active: self.visibility.volume_active(),
            volume: self.volume.volume(),
            is_muted: self.volume.is_muted(),
            volume_icon: self.volume.icon(),
            readout,
            progress: self.scrub.drag_progress().or(readout.progress),
            preview_position: self.scrub.preview_position(),
            hover_preview: self.scrub.hover_preview(),
            drag_thumbnail: self.scrub.drag_thumbnail(),
            skip_badge: self.skip_badge.current(),
        }
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Effect {
        match event {
            Event::Key { key, focus } => {
                let dispatch = route_key(key, focus);
                if dispatch.suppress_default {
                    tracing::trace!(?key, "key handled by player");
                }
                match dispatch.action {
                    Some(action) => self.perform(action, now),
                    None => Effect::None,
                }
            }
            Event::ClickableAreaPressed | Event::PlayButtonPressed => {
                self.perform(Action::TogglePlayback, now)
            }
            Event::Timeline(msg) => {
                self.handle_timeline(msg, now);
                Effect::None
            }
            Event::PointerMovedOverPlayer => {
                self.visibility.handle(visibility::Message::Activity, now);
                Effect::None
            }
            Event::PointerLeftPlayer => {
                self.update_visibility(visibility::Message::PointerLeftPlayer, now);
                Effect::None
            }
            Event::Media(media_event) => {
                self.playback.handle_media_event(media_event, &self.volume);
                Effect::None
            }
            Event::Poll => {
                self.update_visibility(visibility::Message::Poll, now);
                self.skip_badge.check(now);
                Effect::None
            }
            Event::VolumeSlider(value) => {
                self.volume.set_volume(value, VolumeSource::Slider);
                self.playback.apply_volume(&self.volume);
                self.visibility.handle(visibility::Message::Activity, now);
                Effect::None
            }
            Event::MuteButtonPressed => {
                self.visibility.handle(visibility::Message::Activity, now);
                self.perform(Action::ToggleMute, now)
            }
            Event::SkipButtonPressed(delta) => self.perform(Action::SeekBy(delta), now),
            Event::FullscreenButtonPressed => {
                self.visibility.handle(visibility::Message::Activity, now);
                self.perform(Action::ToggleFullscreen, now)
            }
            Event::WindowModeChanged { fullscreen } => {
                self.fullscreen.sync(self.id, fullscreen);
                Effect::None
            }
        }
    }

    fn perform(&mut self, action: Action, now: Instant) -> Effect {
        match action {
            // The drag decides whether playback resumes on release
            Action::TogglePlayback if self.scrub.is_scrubbing() => {}
            Action::TogglePlayback => {
                self.playback.toggle();
                self.visibility.handle(visibility::Message::Activity, now);
            }
            Action::ToggleFullscreen => {
                return Effect::Fullscreen(self.fullscreen.toggle(self.id));
            }
            Action::ExitFullscreen => {
                return self
                    .fullscreen
                    .exit(self.id)
                    .map_or(Effect::None, Effect::Fullscreen);
            }
            Action::ToggleMute => {
                self.volume.toggle_mute();
                self.playback.apply_volume(&self.volume);
            }
            Action::SeekBy(delta) => {
                self.playback.seek_by(delta);
                self.skip_badge.show(delta, now);
                self.visibility.handle(visibility::Message::Activity, now);
            }
            Action::VolumeUp => {
                self.volume.increase(VOLUME_STEP);
                self.playback.apply_volume(&self.volume);
                self.visibility
                    .handle(visibility::Message::VolumeActivity, now);
            }
            Action::VolumeDown => {
                self.volume.decrease(VOLUME_STEP);
                self.playback.apply_volume(&self.volume);
            }
        }
        Effect::None
    }

    fn handle_timeline(&mut self, msg: scrub::Message, now: Instant) {
        let ctx = scrub::Context {
            duration: self.playback.duration(),
            paused: self.playback.is_paused(),
        };

        match self.scrub.handle(msg, ctx) {
            scrub::Effect::BeginScrub => self.playback.pause(),
            scrub::Effect::CommitSeek { fraction, resume } => {
                self.playback.seek_to(fraction);
                if resume {
                    self.playback.play();
                }
            }
            scrub::Effect::None | scrub::Effect::PreviewChanged => {}
        }

        let over_timeline = match msg {
            scrub::Message::Moved { inside, .. } | scrub::Message::Released { inside, .. } => {
                inside
            }
            scrub::Message::Pressed { .. } => true,
            scrub::Message::Left => false,
        };
        let pointer = if over_timeline {
            visibility::Message::PointerEnteredTimeline
        } else {
            visibility::Message::PointerLeftTimeline
        };
        self.update_visibility(pointer, now);
    }

    fn update_visibility(&mut self, msg: visibility::Message, now: Instant) {
        // The timeline must stay on screen until a drag is released
        let hides = matches!(
            msg,
            visibility::Message::Poll | visibility::Message::PointerLeftPlayer
        );
        if hides && self.scrub.is_scrubbing() {
            return;
        }
        if self.visibility.handle(msg, now) == visibility::Effect::Hidden {
            self.scrub.reset_preview_indicator();
        }
    }
}

impl<M> Drop for Player<M> {
    fn drop(&mut self) {
        if self.fullscreen.release(self.id) {
            tracing::debug!(id = ?self.id, "fullscreen released on unmount");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    const BOUNDS: TimelineBounds = TimelineBounds {
        left: 0.0,
        width: 400.0,
    };

    fn mounted(length: f64, start: Instant) -> Player<SimulatedMedia> {
        let settings = PlayerSettings {
            preview_folder: Some(PathBuf::from("previews")),
            ..PlayerSettings::default()
        };
        let mut player = Player::new(settings, FullscreenCapability::new(), start);
        let mut media = SimulatedMedia::new(length);
        let loaded = media.load();
        player.attach(media);
        player.handle(Event::Media(loaded), start);
        player
    }

    fn drag_to_half(player: &mut Player<SimulatedMedia>, now: Instant) {
        player.handle(
            Event::Timeline(scrub::Message::Pressed {
                x: 40.0,
                bounds: BOUNDS,
            }),
            now,
        );
        player.handle(
            Event::Timeline(scrub::Message::Released {
                x: 200.0,
                bounds: BOUNDS,
                inside: true,
            }),
            now,
        );
    }

    #[test]
    fn drag_while_playing_pauses_then_resumes() {
        let now = Instant::now();
        let mut player = mounted(125.0, now);
        player.handle(Event::PlayButtonPressed, now);
        assert!(player.playback().is_playing());

        player.handle(
            Event::Timeline(scrub::Message::Pressed {
                x: 40.0,
                bounds: BOUNDS,
            }),
            now,
        );
        assert!(player.playback().is_paused());
        assert!(player.presentation().is_scrubbing);

        player.handle(
            Event::Timeline(scrub::Message::Released {
                x: 200.0,
                bounds: BOUNDS,
                inside: true,
            }),
            now,
        );
        assert!(!player.playback().is_paused());
        assert_abs_diff_eq!(player.playback().state().current_time, 62.5);
        assert_eq!(player.presentation().readout.label(), "01:02/02:05");
    }

    #[test]
    fn drag_while_paused_stays_paused() {
        let now = Instant::now();
        let mut player = mounted(125.0, now);
        drag_to_half(&mut player, now);
        assert!(player.playback().is_paused());
        assert!(!player.presentation().is_scrubbing);
    }

    #[test]
    fn mute_key_is_ignored_in_text_input() {
        let now = Instant::now();
        let mut player = mounted(10.0, now);
        player.handle(
            Event::Key {
                key: Key::Character('m'),
                focus: Focus::TextInput,
            },
            now,
        );
        assert!(!player.volume().is_muted());

        player.handle(
            Event::Key {
                key: Key::Character('m'),
                focus: Focus::None,
            },
            now,
        );
        assert!(player.volume().is_muted());
        assert_abs_diff_eq!(player.media().map_or(1.0, |m| m.volume()), 0.0);
    }

    #[test]
    fn slider_clears_mute_and_applies_level() {
        let now = Instant::now();
        let mut player = mounted(10.0, now);
        player.handle(Event::MuteButtonPressed, now);
        player.handle(Event::VolumeSlider(0.3), now);
        assert!(!player.volume().is_muted());
        assert_abs_diff_eq!(player.media().map_or(0.0, |m| m.volume()), 0.3);
    }

    #[test]
    fn skip_shows_badge_and_clears_on_poll() {
        let now = Instant::now();
        let mut player = mounted(60.0, now);
        player.handle(
            Event::Key {
                key: Key::Character('l'),
                focus: Focus::None,
            },
            now,
        );
        assert_abs_diff_eq!(player.playback().state().current_time, 15.0);
        assert_eq!(
            player.presentation().skip_badge.map(|b| b.side),
            Some(SkipSide::Right)
        );

        player.handle(Event::Poll, now + Duration::from_secs(2));
        assert!(player.presentation().skip_badge.is_none());
    }

    #[test]
    fn idle_poll_hides_and_resets_preview() {
        let now = Instant::now();
        let mut player = mounted(125.0, now);
        player.handle(
            Event::Timeline(scrub::Message::Moved {
                x: 100.0,
                bounds: BOUNDS,
                inside: true,
            }),
            now,
        );
        player.handle(Event::Poll, now + Duration::from_secs(10));
        assert!(player.presentation().controls_visible);

        player.handle(Event::Timeline(scrub::Message::Left), now);
        player.handle(Event::Poll, now + Duration::from_secs(10));
        let presentation = player.presentation();
        assert!(!presentation.controls_visible);
        assert_abs_diff_eq!(presentation.preview_position, 0.0);
    }

    #[test]
    fn controls_stay_visible_during_drag() {
        let now = Instant::now();
        let mut player = mounted(125.0, now);
        player.handle(
            Event::Timeline(scrub::Message::Pressed {
                x: 100.0,
                bounds: BOUNDS,
            }),
            now,
        );
        player.handle(
            Event::Timeline(scrub::Message::Moved {
                x: 900.0,
                bounds: BOUNDS,
                inside: false,
            }),
            now,
        );
        player.handle(Event::PointerLeftPlayer, now);
        player.handle(Event::Poll, now + Duration::from_secs(10));
        assert!(player.presentation().controls_visible);
    }

    #[test]
    fn volume_up_marks_volume_control_active() {
        let now = Instant::now();
        let mut player = mounted(10.0, now);
        player.handle(
            Event::Key {
                key: Key::ArrowUp,
                focus: Focus::None,
            },
            now,
        );
        let presentation = player.presentation();
        assert!(presentation.volume_active);
        assert_abs_diff_eq!(presentation.volume.value(), 0.9);
    }

    #[test]
    fn dropping_player_releases_fullscreen() {
        let now = Instant::now();
        let capability = FullscreenCapability::new();
        let mut player: Player<SimulatedMedia> =
            Player::new(PlayerSettings::default(), capability.clone(), now);

        let effect = player.handle(Event::FullscreenButtonPressed, now);
        assert_eq!(effect, Effect::Fullscreen(FullscreenChange::Entered));
        assert!(player.presentation().is_fullscreen);

        drop(player);
        assert_eq!(capability.current(), None);
    }

    #[test]
    fn escape_leaves_fullscreen_and_f_reenters() {
        let now = Instant::now();
        let capability = FullscreenCapability::new();
        let mut player: Player<SimulatedMedia> =
            Player::new(PlayerSettings::default(), capability.clone(), now);
        let key = |key| Event::Key {
            key,
            focus: Focus::None,
        };

        assert_eq!(player.handle(key(Key::Escape), now), Effect::None);
        assert_eq!(
            player.handle(key(Key::Character('f')), now),
            Effect::Fullscreen(FullscreenChange::Entered)
        );
        assert_eq!(
            player.handle(key(Key::Escape), now),
            Effect::Fullscreen(FullscreenChange::Exited)
        );
        assert_eq!(capability.current(), None);
        assert_eq!(
            player.handle(key(Key::Character('f')), now),
            Effect::Fullscreen(FullscreenChange::Entered)
        );
    }

    #[test]
    fn window_leaving_fullscreen_clears_holder() {
        let now = Instant::now();
        let capability = FullscreenCapability::new();
        let mut player: Player<SimulatedMedia> =
            Player::new(PlayerSettings::default(), capability.clone(), now);
        player.handle(Event::FullscreenButtonPressed, now);

        let effect = player.handle(Event::WindowModeChanged { fullscreen: false }, now);
        assert_eq!(effect, Effect::None);
        assert!(!player.presentation().is_fullscreen);
        assert_eq!(
            player.handle(Event::FullscreenButtonPressed, now),
            Effect::Fullscreen(FullscreenChange::Entered)
        );
    }

    #[test]
    fn playback_toggle_is_ignored_mid_drag() {
        let now = Instant::now();
        let mut player = mounted(125.0, now);
        player.handle(
            Event::Timeline(scrub::Message::Pressed {
                x: 40.0,
                bounds: BOUNDS,
            }),
            now,
        );
        // An odd number of toggles would leave playback running
        for key in [Key::Space, Key::Character('k'), Key::Space] {
            player.handle(
                Event::Key {
                    key,
                    focus: Focus::None,
                },
                now,
            );
            assert!(player.playback().is_paused());
        }

        player.handle(
            Event::Timeline(scrub::Message::Released {
                x: 200.0,
                bounds: BOUNDS,
                inside: true,
            }),
            now,
        );
        assert!(player.playback().is_paused());
        assert_abs_diff_eq!(player.playback().state().current_time, 62.5);
    }

    #[test]
    fn timeline_before_data_loaded_does_not_seek() {
        let now = Instant::now();
        let mut player: Player<SimulatedMedia> =
            Player::new(PlayerSettings::default(), FullscreenCapability::new(), now);
        player.attach(SimulatedMedia::new(125.0));
        drag_to_half(&mut player, now);
        assert_abs_diff_eq!(player.playback().state().current_time, 0.0);
    }
}
