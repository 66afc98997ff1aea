//! Gallery data loader.
//!
//! A gallery page embeds its data inline as JSON:
//!
//! ```json
//! {
//!   "title": "Weddings",
//!   "items": [
//!     { "full": "img/01.jpg", "thumb": "img/thumbs/01.jpg", "alt": "First dance" },
//!     { "src": "img/02.jpg" }
//!   ]
//! }
//! ```
//!
//! ## Leniency
//!
//! The payload is hand-edited in page templates, so everything except
//! syntactically broken JSON is tolerated:
//!
//! - `full` falls back to `src`; `thumb` falls back to the resolved full URL.
//! - Empty strings count as missing.
//! - Items with no usable URL, or that are not objects, are dropped and their
//!   positions reported in [`LoadedDataset::dropped`].
//! - A missing or non-array `items` yields an empty gallery.
//! - A missing, empty or non-string `title` falls back to the configured
//!   default title.
//! - An empty payload is treated as `{}`.
//!
//! Broken JSON is a [`DataError`]. Callers on the page path log it and
//! disable the gallery (see [`load_or_disable`]); nothing propagates further.

use crate::types::{GalleryDataset, GalleryItem};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("invalid gallery JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDataset {
    pub dataset: GalleryDataset,
    /// Zero-based positions in the payload's `items` array that were dropped.
    pub dropped: Vec<usize>,
}

/// Parse an embedded gallery payload.
pub fn load_dataset(payload: &str, default_title: &str) -> Result<LoadedDataset, DataError> {
    let payload = payload.trim();
    let value: Value = if payload.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(payload)?
    };

    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(default_title)
        .to_string();

    let mut items = Vec::new();
    let mut dropped = Vec::new();
    let raw_items = value
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (pos, raw) in raw_items.iter().enumerate() {
        match parse_item(raw) {
            Some(item) => items.push(item),
            None => dropped.push(pos),
        }
    }

    Ok(LoadedDataset {
        dataset: GalleryDataset { title, items },
        dropped,
    })
}

/// Load a payload for the page, logging and returning `None` when it is broken.
pub fn load_or_disable(payload: &str, default_title: &str) -> Option<GalleryDataset> {
    match load_dataset(payload, default_title) {
        Ok(loaded) => {
            if !loaded.dropped.is_empty() {
                log::warn!(
                    "dropped {} gallery item(s) without a usable URL at {:?}",
                    loaded.dropped.len(),
                    loaded.dropped
                );
            }
            Some(loaded.dataset)
        }
        Err(e) => {
            log::error!("gallery disabled: {e}");
            None
        }
    }
}

fn parse_item(raw: &Value) -> Option<GalleryItem> {
    let field = |key: &str| {
        raw.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    let full = field("full").or_else(|| field("src"))?;
    let thumb = field("thumb").unwrap_or(full);
    let alt = field("alt").unwrap_or_default();

    Some(GalleryItem {
        full: full.to_string(),
        thumb: thumb.to_string(),
        alt: alt.to_string(),
    })
}
