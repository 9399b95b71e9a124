// SPDX-License-Identifier: MPL-2.0
//! Preview thumbnail naming.
//!
//! Previews are pre-rendered, one image per fixed interval of the media,
//! named `preview1.jpg`, `preview2.jpg`, ... inside a folder. There is no
//! `preview0`: index selection bottoms out at 1.

use crate::config::{PREVIEW_FILE_EXTENSION, PREVIEW_FILE_PREFIX, PREVIEW_INTERVAL_SECS};
use std::path::{Path, PathBuf};

/// Location and cadence of the preview images.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSource {
    folder: PathBuf,
    interval_secs: f64,
}

impl PreviewSource {
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            interval_secs: PREVIEW_INTERVAL_SECS,
        }
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Image index for a timeline fraction, or `None` while the duration is unknown.
    #[must_use]
    pub fn index_for(&self, fraction: f64, duration: Option<f64>) -> Option<u32> {
        let duration = duration.filter(|d| d.is_finite() && *d >= 0.0)?;
        let slot = (fraction.clamp(0.0, 1.0) * duration / self.interval_secs).floor();
        Some((slot as u32).max(1))
    }

    /// Path of the image with the given index.
    #[must_use]
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.folder.join(format!(
            "{PREVIEW_FILE_PREFIX}{index}.{PREVIEW_FILE_EXTENSION}"
        ))
    }

    /// Resolves the preview shown at `fraction`.
    #[must_use]
    pub fn preview_at(&self, fraction: f64, duration: Option<f64>) -> Option<Preview> {
        let index = self.index_for(fraction, duration)?;
        Some(Preview {
            index,
            path: self.path_for(index),
            fraction,
        })
    }
}

/// A preview image positioned on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub index: u32,
    pub path: PathBuf,
    /// Horizontal position along the timeline (0.0–1.0).
    pub fraction: f64,
}
