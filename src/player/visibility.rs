// SPDX-License-Identifier: MPL-2.0
//! Auto-hide of the control overlay.
//!
//! Activity timestamps are recorded as input arrives; a periodic poll hides
//! the controls once the player has been idle past the threshold. The
//! pointer resting on the timeline keeps the controls up indefinitely.
//! Timestamps are passed in so that the poll can be driven in tests.

use super::idle_timeout::IdleTimeout;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct State {
    idle_timeout: IdleTimeout,
    last_activity: Option<Instant>,
    controls_visible: bool,
    pointer_over_timeline: bool,
    volume_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Qualifying input: pointer motion over the player, keyboard toggle,
    /// control interaction or a skip.
    Activity,
    /// Volume keys were used; the volume control is shown expanded.
    VolumeActivity,
    PointerEnteredTimeline,
    PointerLeftTimeline,
    /// The pointer left the whole player.
    PointerLeftPlayer,
    /// Periodic idle check.
    Poll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Shown,
    Hidden,
}

impl State {
    /// Starts visible, as if the player had just been interacted with.
    #[must_use]
    pub fn new(idle_timeout: IdleTimeout, now: Instant) -> Self {
        Self {
            idle_timeout,
            last_activity: Some(now),
            controls_visible: true,
            pointer_over_timeline: false,
            volume_active: false,
        }
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn volume_active(&self) -> bool {
        self.volume_active
    }

    #[must_use]
    pub fn pointer_over_timeline(&self) -> bool {
        self.pointer_over_timeline
    }

    #[must_use]
    pub fn idle_timeout(&self) -> IdleTimeout {
        self.idle_timeout
    }

    #[must_use]
    pub fn last_activity(&self) -> Option<Instant> {
        self.last_activity
    }

    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Activity => self.mark_active(now),
            Message::VolumeActivity => {
                self.volume_active = true;
                self.mark_active(now)
            }
            Message::PointerEnteredTimeline => {
                self.pointer_over_timeline = true;
                self.mark_active(now)
            }
            Message::PointerLeftTimeline => {
                self.pointer_over_timeline = false;
                Effect::None
            }
            Message::PointerLeftPlayer => {
                self.pointer_over_timeline = false;
                self.last_activity = None;
                self.hide()
            }
            Message::Poll => {
                if !self.controls_visible || self.pointer_over_timeline {
                    return Effect::None;
                }
                let idle = self
                    .last_activity
                    .is_none_or(|t| self.idle_timeout.is_exceeded_by(now.saturating_duration_since(t)));
                if idle {
                    self.hide()
                } else {
                    Effect::None
                }
            }
        }
    }

    fn mark_active(&mut self, now: Instant) -> Effect {
        self.last_activity = Some(now);
        if self.controls_visible {
            Effect::None
        } else {
            self.controls_visible = true;
            tracing::trace!("controls shown");
            Effect::Shown
        }
    }

    fn hide(&mut self) -> Effect {
        self.volume_active = false;
        if !self.controls_visible {
            return Effect::None;
        }
        self.controls_visible = false;
        tracing::trace!("controls hidden");
        Effect::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state(start: Instant) -> State {
        State::new(IdleTimeout::new(3), start)
    }

    #[test]
    fn poll_hides_only_after_threshold() {
        let start = Instant::now();
        let mut state = state(start);

        assert_eq!(state.handle(Message::Poll, start + Duration::from_secs(2)), Effect::None);
        assert_eq!(state.handle(Message::Poll, start + Duration::from_secs(3)), Effect::None);
        assert_eq!(
            state.handle(Message::Poll, start + Duration::from_millis(3500)),
            Effect::Hidden
        );
        assert!(!state.controls_visible());
    }

    #[test]
    fn pointer_over_timeline_keeps_controls_visible() {
        let start = Instant::now();
        let mut state = state(start);
        state.handle(Message::PointerEnteredTimeline, start);

        assert_eq!(
            state.handle(Message::Poll, start + Duration::from_secs(60)),
            Effect::None
        );
        assert!(state.controls_visible());

        state.handle(Message::PointerLeftTimeline, start + Duration::from_secs(60));
        assert_eq!(
            state.handle(Message::Poll, start + Duration::from_secs(61)),
            Effect::Hidden
        );
    }

    #[test]
    fn activity_reveals_hidden_controls() {
        let start = Instant::now();
        let mut state = state(start);
        state.handle(Message::Poll, start + Duration::from_secs(4));
        assert!(!state.controls_visible());

        let later = start + Duration::from_secs(5);
        assert_eq!(state.handle(Message::Activity, later), Effect::Shown);
        assert_eq!(state.last_activity(), Some(later));
        assert_eq!(state.handle(Message::Activity, later), Effect::None);
    }

    #[test]
    fn leaving_player_hides_immediately() {
        let start = Instant::now();
        let mut state = state(start);
        assert_eq!(state.handle(Message::PointerLeftPlayer, start), Effect::Hidden);
        assert!(!state.pointer_over_timeline());
    }

    #[test]
    fn volume_activity_clears_on_hide() {
        let start = Instant::now();
        let mut state = state(start);
        state.handle(Message::VolumeActivity, start);
        assert!(state.volume_active());

        state.handle(Message::Poll, start + Duration::from_secs(4));
        assert!(!state.volume_active());
    }
}
