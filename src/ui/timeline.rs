// SPDX-License-Identifier: MPL-2.0
//! Timeline scrubber drawn on a canvas.
//!
//! The canvas sees every window event, which is what lets a drag keep
//! tracking once the pointer leaves the bar.

use crate::player::scrub::{Message, TimelineBounds};
use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

fn timeline_bounds(bounds: Rectangle) -> TimelineBounds {
    TimelineBounds::new(bounds.x, bounds.width)
}

/// What the timeline shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    /// Fill fraction (0.0–1.0), `None` until the duration is known.
    pub progress: Option<f64>,
    /// Preview marker fraction; 0.0 when neutral.
    pub preview_position: f64,
    pub dragging: bool,
}

/// Canvas-local pointer tracking.
#[derive(Debug, Default)]
pub struct State {
    inside: bool,
}

impl Timeline {
    pub fn view<'a>(self) -> Element<'a, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TIMELINE_HEIGHT))
            .into()
    }

    /// Translates a window event into a scrub message.
    ///
    /// The flag tells whether the event should be captured.
    fn translate(
        &self,
        state: &mut State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<(Message, bool)> {
        let timeline = timeline_bounds(bounds);

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let inside = cursor.is_over(bounds);
                let was_inside = std::mem::replace(&mut state.inside, inside);

                if inside || self.dragging {
                    return Some((
                        Message::Moved {
                            x: position.x,
                            bounds: timeline,
                            inside,
                        },
                        false,
                    ));
                }
                if was_inside {
                    return Some((Message::Left, false));
                }
                None
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => std::mem::take(&mut state.inside)
                .then_some((Message::Left, false)),
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_over(bounds).map(|position| {
                    (
                        Message::Pressed {
                            x: position.x,
                            bounds: timeline,
                        },
                        true,
                    )
                })
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                // Outside the window the position is unknown; the last
                // tracked fraction is committed instead
                let x = cursor.position().map_or(f32::NAN, |p| p.x);
                Some((
                    Message::Released {
                        x,
                        bounds: timeline,
                        inside: cursor.is_over(bounds),
                    },
                    true,
                ))
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for Timeline {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let (message, capture) = self.translate(state, event, bounds, cursor)?;
        let action = Action::publish(message);
        Some(if capture { action.and_capture() } else { action })
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let center_y = bounds.height / 2.0;
        let track_top = center_y - sizing::TIMELINE_TRACK / 2.0;

        frame.fill_rectangle(
            Point::new(0.0, track_top),
            Size::new(width, sizing::TIMELINE_TRACK),
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
        );

        if self.preview_position > 0.0 {
            let x = (self.preview_position as f32 * width).clamp(0.0, width);
            frame.fill_rectangle(
                Point::new(x - sizing::PREVIEW_MARKER / 2.0, 0.0),
                Size::new(sizing::PREVIEW_MARKER, bounds.height),
                palette::GRAY_400,
            );
        }

        if let Some(progress) = self.progress {
            let filled = (progress as f32 * width).clamp(0.0, width);
            frame.fill_rectangle(
                Point::new(0.0, track_top),
                Size::new(filled, sizing::TIMELINE_TRACK),
                palette::PRIMARY_500,
            );

            if self.dragging || cursor.is_over(bounds) {
                let thumb = Path::circle(Point::new(filled, center_y), sizing::SCRUBBER_THUMB / 2.0);
                frame.fill(&thumb, palette::PRIMARY_400);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
