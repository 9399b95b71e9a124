// SPDX-License-Identifier: MPL-2.0
//! Process-wide fullscreen target.
//!
//! At most one player holds fullscreen at a time. Every player gets a clone
//! of the same [`FullscreenCapability`]; a player that is dropped while
//! holding the target releases it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one mounted player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u64);

impl PlayerId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenChange {
    Entered,
    Exited,
}

/// Shared handle on the single fullscreen target.
#[derive(Debug, Clone, Default)]
pub struct FullscreenCapability {
    holder: Rc<Cell<Option<PlayerId>>>,
}

impl FullscreenCapability {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Player currently holding fullscreen, if any.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.holder.get()
    }

    #[must_use]
    pub fn is_fullscreen(&self, id: PlayerId) -> bool {
        self.holder.get() == Some(id)
    }

    /// Requests fullscreen for `id` when free, otherwise exits it.
    pub fn toggle(&self, id: PlayerId) -> FullscreenChange {
        if self.holder.get().is_none() {
            self.holder.set(Some(id));
            tracing::debug!(?id, "fullscreen entered");
            FullscreenChange::Entered
        } else {
            self.holder.set(None);
            tracing::debug!(?id, "fullscreen exited");
            FullscreenChange::Exited
        }
    }

    /// Exits fullscreen only when `id` holds it.
    pub fn exit(&self, id: PlayerId) -> Option<FullscreenChange> {
        if !self.is_fullscreen(id) {
            return None;
        }
        self.holder.set(None);
        tracing::debug!(?id, "fullscreen exited");
        Some(FullscreenChange::Exited)
    }

    /// Frees the target if `id` holds it. Returns true when it did.
    pub fn release(&self, id: PlayerId) -> bool {
        self.exit(id).is_some()
    }

    /// Aligns the holder with the mode the window actually reports.
    ///
    /// The window manager can leave fullscreen without going through
    /// [`toggle`](Self::toggle), so the holder is re-synced whenever the
    /// window of `id` changes mode. A target held by another player is kept.
    pub fn sync(&self, id: PlayerId, fullscreen: bool) {
        match (fullscreen, self.holder.get()) {
            (true, None) => {
                self.holder.set(Some(id));
                tracing::debug!(?id, "fullscreen adopted from window");
            }
            (false, Some(holder)) if holder == id => {
                self.holder.set(None);
                tracing::debug!(?id, "fullscreen left by window");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_enters_then_exits() {
        let capability = FullscreenCapability::new();
        let id = PlayerId::next();

        assert_eq!(capability.toggle(id), FullscreenChange::Entered);
        assert!(capability.is_fullscreen(id));
        assert_eq!(capability.toggle(id), FullscreenChange::Exited);
        assert_eq!(capability.current(), None);
    }

    #[test]
    fn target_is_shared_between_clones() {
        let first = FullscreenCapability::new();
        let second = first.clone();
        let a = PlayerId::next();
        let b = PlayerId::next();

        first.toggle(a);
        assert!(second.is_fullscreen(a));

        // Someone already holds the target, so the second player exits it
        assert_eq!(second.toggle(b), FullscreenChange::Exited);
        assert_eq!(first.current(), None);
    }

    #[test]
    fn release_only_frees_own_target() {
        let capability = FullscreenCapability::new();
        let a = PlayerId::next();
        let b = PlayerId::next();
        capability.toggle(a);

        assert!(!capability.release(b));
        assert!(capability.is_fullscreen(a));
        assert!(capability.release(a));
        assert_eq!(capability.current(), None);
    }

    #[test]
    fn exit_is_a_no_op_unless_holding() {
        let capability = FullscreenCapability::new();
        let a = PlayerId::next();
        let b = PlayerId::next();

        assert_eq!(capability.exit(a), None);
        capability.toggle(a);
        assert_eq!(capability.exit(b), None);
        assert_eq!(capability.exit(a), Some(FullscreenChange::Exited));
        assert_eq!(capability.toggle(a), FullscreenChange::Entered);
    }

    #[test]
    fn sync_follows_window_mode() {
        let capability = FullscreenCapability::new();
        let a = PlayerId::next();
        let b = PlayerId::next();
        capability.toggle(a);

        // Window manager dropped fullscreen behind our back
        capability.sync(a, false);
        assert_eq!(capability.current(), None);
        assert_eq!(capability.toggle(a), FullscreenChange::Entered);

        // Another player's window cannot steal or clear the target
        capability.sync(b, true);
        assert!(capability.is_fullscreen(a));
        capability.sync(b, false);
        assert!(capability.is_fullscreen(a));

        capability.release(a);
        capability.sync(b, true);
        assert!(capability.is_fullscreen(b));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(PlayerId::next(), PlayerId::next());
    }
}
