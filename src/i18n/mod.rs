// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the player controls.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The active locale comes from the `--lang` argument, then
//! the `[general] language` setting, then the OS locale, falling back to
//! `en-US`. Missing messages fall back to `en-US` as well.

pub mod fluent;

pub use fluent::I18n;
