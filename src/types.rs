//! Shared gallery types.
//!
//! These are produced once per page by the [`dataset`](crate::dataset) loader
//! and consumed read-only by the renderer and the lightbox.

use serde::{Deserialize, Serialize};

/// One image of a gallery.
///
/// `thumb` has already been resolved: when the payload did not name a
/// thumbnail it holds the full-resolution URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub full: String,
    pub thumb: String,
    #[serde(default)]
    pub alt: String,
}

impl GalleryItem {
    pub fn new(full: impl Into<String>, alt: impl Into<String>) -> Self {
        let full = full.into();
        Self {
            thumb: full.clone(),
            full,
            alt: alt.into(),
        }
    }

    /// Builder-style override of the thumbnail URL.
    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = thumb.into();
        self
    }
}

/// A titled, ordered list of renderable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryDataset {
    pub title: String,
    pub items: Vec<GalleryItem>,
}

impl GalleryDataset {
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
