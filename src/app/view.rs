// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a single column: the video surface on top and, while
//! visible, the control bar underneath. The whole column listens for
//! pointer movement so activity over the controls also keeps them shown.

use super::{App, Message};
use crate::i18n::I18n;
use crate::player::{Player, Presentation, SimulatedMedia};
use crate::ui::controls;
use crate::ui::preview_cache::PreviewCache;
use crate::ui::styles;
use iced::widget::{column, mouse_area, Container, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub player: Option<&'a Player<SimulatedMedia>>,
    pub previews: &'a PreviewCache,
}

impl App {
    pub(super) fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            i18n: &self.i18n,
            player: self.player.as_ref(),
            previews: &self.previews,
        }
    }
}

/// Renders the player, or an empty surface once it has been unmounted.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(player) = ctx.player else {
        return Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::video_surface)
            .into();
    };

    let presentation = player.presentation();
    let surface = mouse_area(view_surface(&ctx, &presentation)).on_press(Message::SurfacePressed);

    let mut content = column![surface];
    if presentation.controls_visible {
        let controls = controls::view(
            controls::ViewContext {
                i18n: ctx.i18n,
                previews: ctx.previews,
            },
            &presentation,
        )
        .map(Message::Controls);
        content = content.push(controls);
    }

    mouse_area(content.width(Length::Fill).height(Length::Fill))
        .on_move(|_| Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .into()
}

/// Video area with the drag thumbnail and the skip badge layered on top.
fn view_surface<'a>(ctx: &ViewContext<'a>, presentation: &Presentation<'_>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match presentation.drag_thumbnail {
        Some(preview) => controls::drag_thumbnail(ctx.previews, preview),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(picture)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );
    if let Some(badge) = presentation.skip_badge {
        layers = layers.push(controls::skip_badge(ctx.i18n, badge));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::video_surface)
        .into()
}
