// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are declared from the current state: when the player is
//! gone, its timers are simply no longer requested and Iced tears them down.

use super::Message;
use crate::config::{MEDIA_TICK_INTERVAL_MS, VISIBILITY_POLL_INTERVAL_MS};
use crate::ui::keys;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes keyboard and window events.
///
/// Keyboard events are forwarded even when captured so that the player can
/// tell which keys a widget already consumed.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { .. }) => {
            Some(Message::WindowOpened(window_id))
        }
        event::Event::Window(window::Event::Resized(_)) => {
            Some(Message::WindowResized(window_id))
        }
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed {
                window: window_id,
                key: keys::translate(&key),
                focus: keys::focus_for(status),
            })
        }
        _ => None,
    })
}

/// Shared idle/badge poll, active while a player is mounted.
pub fn create_poll_subscription(has_player: bool) -> Subscription<Message> {
    if has_player {
        time::every(Duration::from_millis(VISIBILITY_POLL_INTERVAL_MS)).map(Message::Poll)
    } else {
        Subscription::none()
    }
}

/// Drives the simulated media clock while it plays.
pub fn create_media_subscription(is_playing: bool) -> Subscription<Message> {
    if is_playing {
        time::every(Duration::from_millis(MEDIA_TICK_INTERVAL_MS)).map(Message::MediaTick)
    } else {
        Subscription::none()
    }
}
