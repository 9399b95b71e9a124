// SPDX-License-Identifier: MPL-2.0
//! Application root: one window hosting one player.
//!
//! The `App` struct wires the player core to Iced. It loads settings and
//! translations at boot, mounts a player driven by the simulated media
//! clock, and writes the audio settings back when the window closes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_SIMULATED_DURATION_SECS, DEFAULT_VOLUME};
use crate::i18n::I18n;
use crate::player::{
    Event, FullscreenCapability, IdleTimeout, Player, PlayerSettings, SimulatedMedia, Volume,
    VolumeState,
};
use crate::ui::preview_cache::PreviewCache;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit config directory, `None` for the default resolution order.
    config_dir: Option<PathBuf>,
    player: Option<Player<SimulatedMedia>>,
    fullscreen: FullscreenCapability,
    previews: PreviewCache,
    window_id: Option<window::Id>,
    last_media_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_player", &self.player.is_some())
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Builds the window settings.
///
/// Closing is handled by the app so that settings can be saved first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Player settings derived from the config file and CLI flags.
///
/// A CLI preview directory wins over `[player] preview_folder`.
fn player_settings(
    config: &Config,
    preview_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> PlayerSettings {
    let configured = config
        .player
        .preview_folder
        .clone()
        .map(|folder| paths::resolve_config_relative(folder, config_dir));

    PlayerSettings {
        idle_timeout: IdleTimeout::from(config.player.idle_timeout_secs),
        volume: VolumeState::new(
            Volume::new(config.audio.volume.unwrap_or(DEFAULT_VOLUME)),
            config.audio.muted.unwrap_or(false),
        ),
        preview_folder: preview_dir.or(configured),
    }
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let now = Instant::now();
        let fullscreen = FullscreenCapability::new();
        let mut player = Player::new(
            player_settings(&config, flags.preview_dir, config_dir.clone()),
            fullscreen.clone(),
            now,
        );

        let length = flags
            .duration_secs
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(DEFAULT_SIMULATED_DURATION_SECS);
        player.attach(SimulatedMedia::new(length));
        if let Some(loaded) = player.media_mut().map(SimulatedMedia::load) {
            player.handle(Event::Media(loaded), now);
        }
        tracing::info!(length, "player mounted");

        let app = Self {
            i18n,
            config,
            config_dir,
            player: Some(player),
            fullscreen,
            previews: PreviewCache::default(),
            window_id: None,
            last_media_tick: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_playing = self
            .player
            .as_ref()
            .is_some_and(|player| player.playback().is_playing());

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_poll_subscription(self.player.is_some()),
            subscription::create_media_subscription(is_playing),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self.view_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Focus, Key, MediaElement};
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::controls;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.to_string_lossy().into_owned()),
            duration_secs: Some(125.0),
            preview_dir: Some(PathBuf::from("previews")),
        };
        App::new(flags).0
    }

    fn player(app: &App) -> &Player<SimulatedMedia> {
        app.player.as_ref().expect("player mounted")
    }

    #[test]
    fn boot_mounts_loaded_player_with_config_volume() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.audio.volume = Some(0.3);
        config.audio.muted = Some(true);
        config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

        let app = app_in(dir.path());
        let player = player(&app);
        assert_eq!(player.playback().duration(), Some(125.0));
        assert!(player.volume().is_muted());
        assert_abs_diff_eq!(player.volume().volume().value(), 0.3);
        assert_abs_diff_eq!(player.media().map_or(1.0, |m| m.volume()), 0.0);
    }

    #[test]
    fn key_press_records_window_and_toggles_playback() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        let window = window::Id::unique();

        let _ = app.update(Message::KeyPressed {
            window,
            key: Key::Space,
            focus: Focus::None,
        });

        assert_eq!(app.window_id, Some(window));
        assert!(player(&app).playback().is_playing());
    }

    #[test]
    fn media_tick_advances_clock() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        let start = Instant::now();

        let _ = app.update(Message::Controls(controls::Message::TogglePlayback));
        let _ = app.update(Message::MediaTick(start));
        let _ = app.update(Message::MediaTick(start + std::time::Duration::from_secs(2)));

        assert_abs_diff_eq!(player(&app).playback().state().current_time, 2.0);
    }

    #[test]
    fn close_request_persists_audio_settings() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());

        let _ = app.update(Message::Controls(controls::Message::SetVolume(0.4)));
        let _ = app.update(Message::Controls(controls::Message::ToggleMute));
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.audio.muted, Some(true));
        assert_abs_diff_eq!(saved.audio.volume.unwrap_or_default(), 0.4);
        assert!(app.player.is_none());
    }

    #[test]
    fn player_settings_prefer_cli_preview_dir() {
        let mut config = Config::default();
        config.player.preview_folder = Some(PathBuf::from("from-config"));
        config.player.idle_timeout_secs = Some(3000);

        let config_dir = PathBuf::from("/etc/scrubline");

        let settings = player_settings(
            &config,
            Some(PathBuf::from("from-cli")),
            Some(config_dir.clone()),
        );
        assert_eq!(settings.preview_folder, Some(PathBuf::from("from-cli")));
        assert_eq!(settings.idle_timeout.value(), 30);

        let settings = player_settings(&config, None, Some(config_dir.clone()));
        assert_eq!(settings.preview_folder, Some(config_dir.join("from-config")));
    }
}
