// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the player.
//!
//! The widgets here only read a [`crate::player::Presentation`] and emit
//! messages; all decisions stay in [`crate::player`].
//!
//! - [`controls`] - Control bar, hover preview, drag thumbnail, skip badge
//! - [`timeline`] - Canvas scrubber that keeps tracking during a drag
//! - [`keys`] - Keyboard and focus translation
//! - [`preview_cache`] - LRU of loaded preview image handles
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing and sizing constants

pub mod controls;
pub mod design_tokens;
pub mod keys;
pub mod preview_cache;
pub mod styles;
pub mod timeline;
