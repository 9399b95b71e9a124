// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of preview image handles.
//!
//! Hovering back and forth over the timeline revisits the same few
//! `preview<N>.jpg` files. Reusing the handle lets the renderer reuse the
//! decoded texture instead of loading the file again.

use crate::config::PREVIEW_CACHE_CAPACITY;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub struct PreviewCache {
    handles: LruCache<PathBuf, image::Handle>,
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("len", &self.handles.len())
            .field("cap", &self.handles.cap())
            .finish()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(PREVIEW_CACHE_CAPACITY)
    }
}

impl PreviewCache {
    /// Creates a cache holding at most `capacity` handles (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            handles: LruCache::new(capacity),
        }
    }

    /// Makes sure a handle exists for `path` and marks it most recently used.
    pub fn warm(&mut self, path: &Path) {
        if self.handles.get(path).is_none() {
            self.handles
                .put(path.to_path_buf(), image::Handle::from_path(path));
        }
    }

    /// Handle for `path` if it was warmed, without touching recency.
    #[must_use]
    pub fn peek(&self, path: &Path) -> Option<&image::Handle> {
        self.handles.peek(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warming_twice_reuses_the_handle() {
        let mut cache = PreviewCache::new(4);
        let path = Path::new("previews/preview1.jpg");

        cache.warm(path);
        let first = cache.peek(path).cloned();
        cache.warm(path);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek(path).map(image::Handle::id), first.map(|h| h.id()));
    }

    #[test]
    fn least_recently_used_handle_is_evicted() {
        let mut cache = PreviewCache::new(2);
        let a = Path::new("preview1.jpg");
        let b = Path::new("preview2.jpg");
        let c = Path::new("preview3.jpg");

        cache.warm(a);
        cache.warm(b);
        cache.warm(a);
        cache.warm(c);

        assert!(cache.peek(a).is_some());
        assert!(cache.peek(b).is_none());
        assert!(cache.peek(c).is_some());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut cache = PreviewCache::new(0);
        cache.warm(Path::new("preview1.jpg"));
        assert_eq!(cache.len(), 1);
    }
}
