// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the player widgets.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay alpha levels
//! - **Spacing**: 4px-based spacing scale
//! - **Sizing**: control and preview dimensions
//! - **Typography**: font sizes
//! - **Radius**: corner radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Timeline
    pub const TIMELINE_HEIGHT: f32 = 20.0;
    pub const TIMELINE_TRACK: f32 = 4.0;
    pub const SCRUBBER_THUMB: f32 = 12.0;
    pub const PREVIEW_MARKER: f32 = 2.0;

    // Volume slider, collapsed and revealed by the volume keys
    pub const VOLUME_SLIDER: f32 = 80.0;
    pub const VOLUME_SLIDER_ACTIVE: f32 = 140.0;

    // Preview thumbnails (16:9)
    pub const HOVER_PREVIEW_WIDTH: f32 = 160.0;
    pub const HOVER_PREVIEW_HEIGHT: f32 = 90.0;
    pub const DRAG_THUMBNAIL_WIDTH: f32 = 480.0;
    pub const DRAG_THUMBNAIL_HEIGHT: f32 = 270.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(sizing::SCRUBBER_THUMB > sizing::TIMELINE_TRACK);
    assert!(sizing::TIMELINE_HEIGHT >= sizing::SCRUBBER_THUMB);
    assert!(sizing::VOLUME_SLIDER_ACTIVE > sizing::VOLUME_SLIDER);
    assert!(sizing::DRAG_THUMBNAIL_WIDTH > sizing::HOVER_PREVIEW_WIDTH);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
