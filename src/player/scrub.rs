// SPDX-License-Identifier: MPL-2.0
//! Scrub and preview state machine for the timeline.
//!
//! ```text
//!            enter / move inside            press
//!   Idle ─────────────────────────▶ Hovering ─────▶ Dragging
//!    ▲  ◀──────────── leave ───────────┘  ▲            │
//!    │                                    │ release    │ move (anywhere)
//!    └──────────── release outside ───────┴── inside ──┘
//! ```
//!
//! Moves and releases are fed from the whole window while dragging, so a
//! fast drag that leaves the timeline is not lost. The engine never touches
//! playback itself: it returns an [`Effect`] that the owner applies.

use super::preview::{Preview, PreviewSource};

/// Horizontal extent of the timeline in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineBounds {
    pub left: f32,
    pub width: f32,
}

impl TimelineBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the timeline under `x`, clamped to 0.0–1.0.
    ///
    /// `None` for a zero-width timeline or a non-finite coordinate.
    #[must_use]
    pub fn fraction_at(&self, x: f32) -> Option<f64> {
        if !(self.width > 0.0) || !x.is_finite() {
            return None;
        }
        let offset = (x - self.left).max(0.0).min(self.width);
        Some(f64::from(offset) / f64::from(self.width))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubPhase {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

/// Transient scrub bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrubState {
    pub is_scrubbing: bool,
    pub was_paused_before_scrub: bool,
    pub hover_fraction: f64,
}

/// Pointer input relevant to the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer moved. `inside` tells whether it is over the timeline.
    Moved {
        x: f32,
        bounds: TimelineBounds,
        inside: bool,
    },
    /// Pointer left the timeline.
    Left,
    /// Primary button pressed over the timeline.
    Pressed { x: f32, bounds: TimelineBounds },
    /// Primary button released anywhere in the window.
    Released {
        x: f32,
        bounds: TimelineBounds,
        inside: bool,
    },
}

/// Playback facts the engine needs for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    pub duration: Option<f64>,
    pub paused: bool,
}

/// What the owner must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Only presentation changed.
    PreviewChanged,
    /// A drag started: pause playback now.
    BeginScrub,
    /// A drag ended: seek to `fraction`, then resume playback if `resume`.
    CommitSeek { fraction: f64, resume: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ScrubEngine {
    phase: ScrubPhase,
    state: ScrubState,
    source: Option<PreviewSource>,
    hover_preview: Option<Preview>,
    drag_thumbnail: Option<Preview>,
    drag_progress: Option<f64>,
    preview_position: f64,
}

impl ScrubEngine {
    /// Creates an engine. Without a preview source only positions are tracked.
    #[must_use]
    pub fn new(source: Option<PreviewSource>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> ScrubPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> ScrubState {
        self.state
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.state.is_scrubbing
    }

    /// Small preview shown above the timeline at the pointer.
    #[must_use]
    pub fn hover_preview(&self) -> Option<&Preview> {
        self.hover_preview.as_ref()
    }

    /// Large thumbnail shown over the video while dragging.
    #[must_use]
    pub fn drag_thumbnail(&self) -> Option<&Preview> {
        self.drag_thumbnail.as_ref()
    }

    /// Live progress fill while dragging, not yet committed to the media.
    #[must_use]
    pub fn drag_progress(&self) -> Option<f64> {
        self.drag_progress
    }

    /// Position of the preview marker along the timeline (0.0–1.0).
    #[must_use]
    pub fn preview_position(&self) -> f64 {
        self.preview_position
    }

    pub fn handle(&mut self, msg: Message, ctx: Context) -> Effect {
        match msg {
            Message::Moved { x, bounds, inside } => {
                if self.phase == ScrubPhase::Dragging {
                    return match bounds.fraction_at(x) {
                        Some(fraction) => {
                            self.track(fraction, ctx.duration);
                            Effect::PreviewChanged
                        }
                        None => Effect::None,
                    };
                }

                if !inside {
                    return self.leave();
                }

                match bounds.fraction_at(x) {
                    Some(fraction) => {
                        self.phase = ScrubPhase::Hovering;
                        self.track(fraction, ctx.duration);
                        Effect::PreviewChanged
                    }
                    None => Effect::None,
                }
            }
            Message::Left => {
                if self.phase == ScrubPhase::Dragging {
                    Effect::None
                } else {
                    self.leave()
                }
            }
            Message::Pressed { x, bounds } => {
                if self.phase == ScrubPhase::Dragging {
                    return Effect::None;
                }
                let Some(fraction) = bounds.fraction_at(x) else {
                    return Effect::None;
                };

                self.phase = ScrubPhase::Dragging;
                self.state.was_paused_before_scrub = ctx.paused;
                self.state.is_scrubbing = true;
                self.track(fraction, ctx.duration);
                tracing::debug!(fraction, was_paused = ctx.paused, "scrub started");
                Effect::BeginScrub
            }
            Message::Released { x, bounds, inside } => {
                if self.phase != ScrubPhase::Dragging {
                    return Effect::None;
                }

                let fraction = bounds
                    .fraction_at(x)
                    .unwrap_or(self.state.hover_fraction);
                self.state.hover_fraction = fraction;
                self.state.is_scrubbing = false;
                self.drag_thumbnail = None;
                self.drag_progress = None;

                if inside {
                    self.phase = ScrubPhase::Hovering;
                } else {
                    self.leave();
                }

                let resume = !self.state.was_paused_before_scrub;
                tracing::debug!(fraction, resume, "scrub committed");
                Effect::CommitSeek { fraction, resume }
            }
        }
    }

    /// Neutralizes the preview marker, e.g. when the controls hide.
    pub fn reset_preview_indicator(&mut self) {
        if self.phase == ScrubPhase::Dragging {
            return;
        }
        self.preview_position = 0.0;
        self.hover_preview = None;
    }

    fn track(&mut self, fraction: f64, duration: Option<f64>) {
        self.state.hover_fraction = fraction;
        self.preview_position = fraction;

        let preview = self
            .source
            .as_ref()
            .and_then(|source| source.preview_at(fraction, duration));

        if self.phase == ScrubPhase::Dragging {
            self.drag_thumbnail.clone_from(&preview);
            self.drag_progress = Some(fraction);
        }
        self.hover_preview = preview;
    }

    fn leave(&mut self) -> Effect {
        if self.phase == ScrubPhase::Idle && self.hover_preview.is_none() {
            return Effect::None;
        }
        self.phase = ScrubPhase::Idle;
        self.hover_preview = None;
        self.preview_position = 0.0;
        Effect::PreviewChanged
    }
}
