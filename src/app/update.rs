// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Control and pointer messages are translated into player events. The
//! player answers with an effect that may need a window task.

use super::{App, Message};
use crate::config;
use crate::player::{Effect, Event, FullscreenChange};
use crate::ui::controls;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Dispatches one application message.
pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    let now = Instant::now();
    let task = match message {
        Message::Controls(msg) => handle_controls(app, msg, now),
        Message::KeyPressed { window, key, focus } => {
            app.window_id = Some(window);
            dispatch(app, Event::Key { key, focus }, now)
        }
        Message::PointerMoved => dispatch(app, Event::PointerMovedOverPlayer, now),
        Message::PointerLeft => dispatch(app, Event::PointerLeftPlayer, now),
        Message::SurfacePressed => dispatch(app, Event::ClickableAreaPressed, now),
        Message::Poll(at) => dispatch(app, Event::Poll, at),
        Message::MediaTick(at) => handle_media_tick(app, at),
        Message::WindowOpened(id) => {
            app.window_id = Some(id);
            Task::none()
        }
        Message::WindowResized(id) => {
            app.window_id = Some(id);
            window::mode(id).map(Message::WindowModeChanged)
        }
        Message::WindowModeChanged(mode) => dispatch(
            app,
            Event::WindowModeChanged {
                fullscreen: mode == window::Mode::Fullscreen,
            },
            now,
        ),
        Message::WindowCloseRequested(id) => handle_close_request(app, id),
    };

    // A stale baseline would make the clock jump after a pause
    let is_playing = app
        .player
        .as_ref()
        .is_some_and(|player| player.playback().is_playing());
    if !is_playing {
        app.last_media_tick = None;
    }

    task
}

fn handle_controls(app: &mut App, message: controls::Message, now: Instant) -> Task<Message> {
    let event = match message {
        controls::Message::TogglePlayback => Event::PlayButtonPressed,
        controls::Message::ToggleMute => Event::MuteButtonPressed,
        controls::Message::SetVolume(value) => Event::VolumeSlider(value),
        controls::Message::Skip(delta) => Event::SkipButtonPressed(delta),
        controls::Message::ToggleFullscreen => Event::FullscreenButtonPressed,
        controls::Message::Timeline(msg) => {
            let task = dispatch(app, Event::Timeline(msg), now);
            warm_previews(app);
            return task;
        }
    };
    dispatch(app, event, now)
}

/// Forwards an event to the player and applies the resulting effect.
fn dispatch(app: &mut App, event: Event, now: Instant) -> Task<Message> {
    let Some(player) = app.player.as_mut() else {
        return Task::none();
    };

    match player.handle(event, now) {
        Effect::None => Task::none(),
        Effect::Fullscreen(change) => set_window_mode(app.window_id, change),
    }
}

fn set_window_mode(window_id: Option<window::Id>, change: FullscreenChange) -> Task<Message> {
    let Some(window_id) = window_id else {
        tracing::debug!(?change, "no window yet, fullscreen change not applied");
        return Task::none();
    };

    let mode = match change {
        FullscreenChange::Entered => window::Mode::Fullscreen,
        FullscreenChange::Exited => window::Mode::Windowed,
    };
    window::set_mode(window_id, mode)
}

/// Loads the thumbnails the controls are about to show.
fn warm_previews(app: &mut App) {
    let Some(player) = app.player.as_ref() else {
        return;
    };

    let scrub = player.scrub();
    let paths: Vec<PathBuf> = scrub
        .hover_preview()
        .into_iter()
        .chain(scrub.drag_thumbnail())
        .map(|preview| preview.path.clone())
        .collect();

    for path in paths {
        app.previews.warm(&path);
    }
}

/// Advances the simulated clock by the time elapsed since the last tick.
fn handle_media_tick(app: &mut App, at: Instant) -> Task<Message> {
    let elapsed = app
        .last_media_tick
        .map(|last| at.saturating_duration_since(last))
        .unwrap_or_default();
    app.last_media_tick = Some(at);

    let Some(player) = app.player.as_mut() else {
        return Task::none();
    };
    let advanced = player.media_mut().and_then(|media| media.advance(elapsed));
    match advanced {
        Some(event) => dispatch(app, Event::Media(event), at),
        None => Task::none(),
    }
}

/// Saves the audio settings, unmounts the player and closes the window.
fn handle_close_request(app: &mut App, id: window::Id) -> Task<Message> {
    if let Some(player) = app.player.take() {
        let volume = player.volume();
        app.config.audio.volume = Some(volume.volume().value());
        app.config.audio.muted = Some(volume.is_muted());

        if let Err(error) = config::save_with_override(&app.config, app.config_dir.clone()) {
            tracing::warn!(%error, "{}", app.i18n.tr("notification-config-save-error"));
        }
    }

    window::close(id)
}
