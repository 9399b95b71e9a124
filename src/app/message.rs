// SPDX-License-Identifier: MPL-2.0
//! Application messages and startup flags.

use crate::player::{Focus, Key};
use crate::ui::controls;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// A key press, already translated, with the window it came from.
    KeyPressed {
        window: window::Id,
        key: Key,
        focus: Focus,
    },
    /// Pointer moved anywhere over the player.
    PointerMoved,
    /// Pointer left the player.
    PointerLeft,
    /// Primary press on the video surface.
    SurfacePressed,
    /// Idle and skip-badge poll.
    Poll(Instant),
    /// Clock tick for the simulated media.
    MediaTick(Instant),
    WindowOpened(window::Id),
    /// The window was resized, possibly by entering or leaving fullscreen.
    WindowResized(window::Id),
    /// Mode the window reported after a resize.
    WindowModeChanged(window::Mode),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCRUBLINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Length of the simulated media, in seconds.
    pub duration_secs: Option<f64>,
    /// Folder holding `preview<N>.jpg`; overrides `[player] preview_folder`.
    pub preview_dir: Option<PathBuf>,
}
