// SPDX-License-Identifier: MPL-2.0
//! Translation of Iced keyboard input into player keys.

use crate::player::{Focus, Key};
use iced::event;
use iced::keyboard::{self, key::Named};

/// Maps an Iced key onto the player's key set.
#[must_use]
pub fn translate(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::ArrowUp) => Key::ArrowUp,
        keyboard::Key::Named(Named::ArrowDown) => Key::ArrowDown,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        keyboard::Key::Named(Named::F12) => Key::F12,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(text) => Key::from_text(text.as_str()),
        _ => Key::Other,
    }
}

/// Focus implied by the event status.
///
/// The window hosts no text field, so a captured press comes from a widget
/// like the volume slider that handled the key itself.
#[must_use]
pub fn focus_for(status: event::Status) -> Focus {
    match status {
        event::Status::Captured => Focus::Other,
        event::Status::Ignored => Focus::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{route_key, Action};

    #[test]
    fn named_keys_are_translated() {
        assert_eq!(translate(&keyboard::Key::Named(Named::Space)), Key::Space);
        assert_eq!(
            translate(&keyboard::Key::Named(Named::ArrowUp)),
            Key::ArrowUp
        );
        assert_eq!(translate(&keyboard::Key::Named(Named::F12)), Key::F12);
        assert_eq!(
            translate(&keyboard::Key::Named(Named::Escape)),
            Key::Escape
        );
        assert_eq!(translate(&keyboard::Key::Named(Named::Enter)), Key::Other);
    }

    #[test]
    fn characters_ignore_case() {
        let key = keyboard::Key::Character("F".into());
        assert_eq!(translate(&key), Key::Character('f'));
    }

    #[test]
    fn captured_press_keeps_letter_shortcuts() {
        let focus = focus_for(event::Status::Captured);
        assert_eq!(focus, Focus::Other);
        assert_eq!(
            route_key(translate(&keyboard::Key::Character("m".into())), focus).action,
            Some(Action::ToggleMute)
        );
        assert_eq!(
            route_key(translate(&keyboard::Key::Named(Named::ArrowUp)), focus).action,
            None
        );
        assert_eq!(focus_for(event::Status::Ignored), Focus::None);
    }
}
