// SPDX-License-Identifier: MPL-2.0
//! Container styles for the overlay, badges and preview frames.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn overlay_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Dark surface standing in for the video picture.
pub fn video_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Bar holding the timeline and the buttons.
pub fn controls_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill-shaped skip badge.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_background())),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Framed preview thumbnail.
pub fn preview_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
