// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the player overlay.

pub mod button;
pub mod container;

pub use button::overlay as button_overlay;
