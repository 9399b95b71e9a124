// SPDX-License-Identifier: MPL-2.0
//! `scrubline` is a video control surface built with the Iced GUI framework.
//!
//! The [`player`] module holds the toolkit-independent state: playback,
//! timeline scrubbing with preview thumbnails, volume, idle auto-hide and
//! keyboard routing. The [`ui`] and [`app`] modules render it with Iced and
//! drive it from a simulated media clock.

#![doc(html_root_url = "https://docs.rs/scrubline/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
