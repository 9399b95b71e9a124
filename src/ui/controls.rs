// SPDX-License-Identifier: MPL-2.0
//! Control bar: timeline, preview and playback buttons.
//!
//! Layout, from top to bottom:
//! - Hover preview thumbnail, positioned over the pointed time
//! - Timeline scrubber
//! - Play/pause, skip back/forward, volume, time label, fullscreen

use crate::config::{SHORT_SKIP_SECS, VOLUME_STEP};
use crate::i18n::I18n;
use crate::player::{scrub, Badge, Preview, Presentation, SkipSide, VolumeIcon};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::preview_cache::PreviewCache;
use crate::ui::styles;
use crate::ui::timeline::Timeline;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, image, row, slider, text, tooltip, Container, Space, Text,
};
use iced::{Element, Length};

/// Resolution of the position → layout-portion mapping for previews.
const PREVIEW_PORTIONS: f64 = 1_000.0;

/// Messages emitted by the control bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    TogglePlayback,
    ToggleMute,
    SetVolume(f32),
    Skip(f64),
    ToggleFullscreen,
    Timeline(scrub::Message),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
}

fn glyph<'a>(symbol: &'a str) -> Text<'a> {
    text(symbol).size(typography::TITLE_MD)
}

fn control_button<'a>(
    content: Text<'a>,
    on_press: Message,
    tip: String,
    highlighted: bool,
) -> Element<'a, Message> {
    let base = button(content)
        .on_press(on_press)
        .padding(spacing::XXS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let base: Element<'a, Message> = if highlighted {
        base.style(styles::button::selected).into()
    } else {
        base.style(styles::button_overlay(
            opacity::TRANSPARENT,
            opacity::OVERLAY_SUBTLE,
        ))
        .into()
    };

    tooltip(base, Text::new(tip), tooltip::Position::Top)
        .gap(4)
        .into()
}

fn volume_glyph(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => "🔇",
        VolumeIcon::Low => "🔉",
        VolumeIcon::High => "🔊",
    }
}

/// Renders the control bar.
pub fn view<'a>(ctx: ViewContext<'a>, state: &Presentation<'_>) -> Element<'a, Message> {
    let play_pause = if state.is_playing {
        control_button(
            glyph("⏸"),
            Message::TogglePlayback,
            ctx.i18n.tr("player-pause"),
            false,
        )
    } else {
        control_button(
            glyph("▶"),
            Message::TogglePlayback,
            ctx.i18n.tr("player-play"),
            false,
        )
    };

    let skip_back = control_button(
        glyph("⏪"),
        Message::Skip(-SHORT_SKIP_SECS),
        ctx.i18n.tr("player-skip-back"),
        false,
    );
    let skip_forward = control_button(
        glyph("⏩"),
        Message::Skip(SHORT_SKIP_SECS),
        ctx.i18n.tr("player-skip-forward"),
        false,
    );

    let mute_tip = if state.is_muted {
        ctx.i18n.tr("player-unmute")
    } else {
        ctx.i18n.tr("player-mute")
    };
    let mute = control_button(
        glyph(volume_glyph(state.volume_icon)),
        Message::ToggleMute,
        mute_tip,
        state.is_muted,
    );

    // The volume keys reveal a wider slider until the controls hide
    let slider_width = if state.volume_active {
        sizing::VOLUME_SLIDER_ACTIVE
    } else {
        sizing::VOLUME_SLIDER
    };
    let volume_slider = slider(0.0..=1.0, state.volume.value(), Message::SetVolume)
        .step(VOLUME_STEP / 10.0)
        .width(Length::Fixed(slider_width));
    let volume_slider = tooltip(
        volume_slider,
        Text::new(ctx.i18n.tr("player-volume")),
        tooltip::Position::Top,
    )
    .gap(4);

    let time_label = text(state.readout.label()).size(typography::BODY);

    let fullscreen = if state.is_fullscreen {
        control_button(
            glyph("🗗"),
            Message::ToggleFullscreen,
            ctx.i18n.tr("player-fullscreen-exit"),
            false,
        )
    } else {
        control_button(
            glyph("⛶"),
            Message::ToggleFullscreen,
            ctx.i18n.tr("player-fullscreen-enter"),
            false,
        )
    };

    let buttons = row![
        play_pause,
        skip_back,
        skip_forward,
        mute,
        volume_slider,
        time_label,
        Space::new().width(Length::Fill),
        fullscreen,
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center);

    let timeline = Timeline {
        progress: state.progress,
        preview_position: state.preview_position,
        dragging: state.is_scrubbing,
    }
    .view()
    .map(Message::Timeline);

    let mut bar = column![].spacing(spacing::XXS);
    if let Some(preview) = state.hover_preview {
        bar = bar.push(hover_preview(ctx.previews, preview));
    }
    bar = bar.push(timeline).push(buttons);

    container(bar)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::controls_bar)
        .into()
}

/// Small thumbnail placed above the pointed position.
fn hover_preview<'a>(previews: &PreviewCache, preview: &Preview) -> Element<'a, Message> {
    let thumbnail = preview_frame(
        previews,
        preview,
        sizing::HOVER_PREVIEW_WIDTH,
        sizing::HOVER_PREVIEW_HEIGHT,
    );

    let before = (preview.fraction.clamp(0.0, 1.0) * PREVIEW_PORTIONS).round() as u16;
    let after = (PREVIEW_PORTIONS as u16).saturating_sub(before);

    row![
        Space::new().width(Length::FillPortion(before.max(1))),
        thumbnail,
        Space::new().width(Length::FillPortion(after.max(1))),
    ]
    .into()
}

/// Large thumbnail shown over the video while dragging.
pub fn drag_thumbnail<'a, M: 'a>(previews: &PreviewCache, preview: &Preview) -> Element<'a, M> {
    preview_frame(
        previews,
        preview,
        sizing::DRAG_THUMBNAIL_WIDTH,
        sizing::DRAG_THUMBNAIL_HEIGHT,
    )
}

fn preview_frame<'a, M: 'a>(
    previews: &PreviewCache,
    preview: &Preview,
    width: f32,
    height: f32,
) -> Element<'a, M> {
    let content: Element<'a, M> = match previews.peek(&preview.path) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(format!("#{}", preview.index))
            .size(typography::CAPTION)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .padding(spacing::XXS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::preview_frame)
        .into()
}

/// "N Seconds" badge on the side of the skip.
pub fn skip_badge<'a, M: 'a>(i18n: &I18n, badge: Badge) -> Element<'a, M> {
    let label = Container::new(
        text(i18n.tr_with_seconds("skip-badge", badge.seconds)).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::badge);

    let align = match badge.side {
        SkipSide::Left => Horizontal::Left,
        SkipSide::Right => Horizontal::Right,
    };

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}
