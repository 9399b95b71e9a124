// SPDX-License-Identifier: MPL-2.0
//! Inactivity threshold after which the controls hide.

use crate::config::{DEFAULT_IDLE_TIMEOUT_SECS, MAX_IDLE_TIMEOUT_SECS, MIN_IDLE_TIMEOUT_SECS};
use std::time::Duration;

/// Idle threshold in whole seconds, always within 1–30.
///
/// # Example
///
/// ```
/// use scrubline::player::IdleTimeout;
///
/// assert_eq!(IdleTimeout::default().value(), 3);
/// assert_eq!(IdleTimeout::new(3000).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u32);

impl IdleTimeout {
    /// Creates a threshold, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_IDLE_TIMEOUT_SECS, MAX_IDLE_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// True once `idle` strictly exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, idle: Duration) -> bool {
        idle > self.as_duration()
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(DEFAULT_IDLE_TIMEOUT_SECS)
    }
}

impl From<Option<u32>> for IdleTimeout {
    fn from(secs: Option<u32>) -> Self {
        secs.map_or_else(Self::default, Self::new)
    }
}
