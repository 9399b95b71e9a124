// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing.
//!
//! | Key            | Action              |
//! |----------------|---------------------|
//! | Space / K      | Toggle playback     |
//! | F              | Toggle fullscreen   |
//! | M              | Toggle mute         |
//! | → / L          | Seek +5 s / +15 s   |
//! | ← / J          | Seek -5 s / -15 s   |
//! | ↑ / ↓          | Volume ±0.1         |
//! | Escape         | Leave fullscreen    |
//!
//! Nothing is routed while a text input has focus. When another widget
//! already consumed the press, only the arrow keys are dropped.

use crate::config::{LONG_SKIP_SECS, SHORT_SKIP_SECS};

/// Host-independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    /// A printable key, compared case-insensitively.
    Character(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Tab,
    F12,
    Escape,
    Other,
}

impl Key {
    /// Builds a character key from typed text, ignoring case.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(' '), None) => Key::Space,
            (Some(c), None) => Key::Character(c.to_ascii_lowercase()),
            _ => Key::Other,
        }
    }
}

/// What currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    TextInput,
    Button,
    /// A widget such as the volume slider captured the press.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    TogglePlayback,
    ToggleFullscreen,
    ExitFullscreen,
    ToggleMute,
    SeekBy(f64),
    VolumeUp,
    VolumeDown,
}

/// Routing result for one key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDispatch {
    pub action: Option<Action>,
    /// Whether the host's default handling of the key should be suppressed.
    pub suppress_default: bool,
}

impl KeyDispatch {
    const IGNORED: Self = Self {
        action: None,
        suppress_default: false,
    };
}

/// Maps a key press to a player action.
#[must_use]
pub fn route_key(key: Key, focus: Focus) -> KeyDispatch {
    if focus == Focus::TextInput {
        return KeyDispatch::IGNORED;
    }

    let action = match key {
        // A focused button activates itself on space
        Key::Space if focus == Focus::Button => None,
        // Arrows already moved the widget that captured them
        Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown
            if focus == Focus::Other =>
        {
            None
        }
        Key::Space | Key::Character('k') => Some(Action::TogglePlayback),
        Key::Character('f') => Some(Action::ToggleFullscreen),
        Key::Character('m') => Some(Action::ToggleMute),
        Key::ArrowRight => Some(Action::SeekBy(SHORT_SKIP_SECS)),
        Key::Character('l') => Some(Action::SeekBy(LONG_SKIP_SECS)),
        Key::ArrowLeft => Some(Action::SeekBy(-SHORT_SKIP_SECS)),
        Key::Character('j') => Some(Action::SeekBy(-LONG_SKIP_SECS)),
        Key::ArrowUp => Some(Action::VolumeUp),
        Key::ArrowDown => Some(Action::VolumeDown),
        Key::Escape => Some(Action::ExitFullscreen),
        Key::Tab | Key::F12 | Key::Character(_) | Key::Other => None,
    };

    KeyDispatch {
        suppress_default: action.is_some(),
        action,
    }
}
