//! Grid renderer.
//!
//! Turns a [`GalleryDataset`] into one clickable entry per item and produces
//! the markup the host page inserts into the grid container.
//!
//! ## DOM contract
//!
//! Each entry renders as
//!
//! ```html
//! <a class="gallery-item" href="FULL" data-full="FULL" data-index="0"
//!    data-title="TITLE" data-alt="ALT">
//!   <img src="THUMB" alt="ALT" loading="lazy" decoding="async">
//! </a>
//! ```
//!
//! The `href` keeps the grid usable as plain links if scripting is off.
//!
//! The overlay shell ([`lightbox_markup`]) has a single pair of arrows inside
//! the media area; the close button is the first focus target when it opens.
//!
//! ## Thumbnail fallback
//!
//! A thumbnail that fails to load is swapped for the full-resolution image
//! exactly once. A second failure leaves the element alone.

use crate::config::LabelsConfig;
use crate::lightbox::Slide;
use crate::types::GalleryDataset;
use maud::{Markup, html};

/// Which source an entry's `<img>` currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbSource {
    Thumbnail,
    /// Swapped to the full image after a load failure.
    FullFallback,
}

/// One rendered grid element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEntry {
    pub index: usize,
    pub full: String,
    pub thumb: String,
    pub title: String,
    pub alt: String,
    source: ThumbSource,
}

impl GridEntry {
    /// URL the `<img>` should currently display.
    pub fn current_src(&self) -> &str {
        match self.source {
            ThumbSource::Thumbnail => &self.thumb,
            ThumbSource::FullFallback => &self.full,
        }
    }

    pub fn source(&self) -> ThumbSource {
        self.source
    }

    /// Handle a thumbnail load error.
    ///
    /// Returns the replacement URL the first time, `None` afterwards.
    pub fn thumbnail_failed(&mut self) -> Option<&str> {
        match self.source {
            ThumbSource::Thumbnail => {
                log::warn!("thumbnail {} failed, falling back to {}", self.thumb, self.full);
                self.source = ThumbSource::FullFallback;
                Some(&self.full)
            }
            ThumbSource::FullFallback => None,
        }
    }

    pub fn slide(&self) -> Slide {
        Slide {
            full: self.full.clone(),
            title: self.title.clone(),
            alt: self.alt.clone(),
        }
    }
}

/// The rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub title: String,
    pub entries: Vec<GridEntry>,
}

impl Grid {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for every "item count" display on the page.
    pub fn count_label(&self) -> String {
        self.entries.len().to_string()
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut GridEntry> {
        self.entries.get_mut(index)
    }

    pub fn slides(&self) -> Vec<Slide> {
        self.entries.iter().map(GridEntry::slide).collect()
    }
}

pub fn render_grid(dataset: &GalleryDataset) -> Grid {
    let entries = dataset
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| GridEntry {
            index,
            full: item.full.clone(),
            thumb: item.thumb.clone(),
            title: dataset.title.clone(),
            alt: item.alt.clone(),
            source: ThumbSource::Thumbnail,
        })
        .collect();

    Grid {
        title: dataset.title.clone(),
        entries,
    }
}

/// Markup for the grid container's children.
pub fn grid_markup(grid: &Grid) -> Markup {
    html! {
        @for entry in &grid.entries {
            a.gallery-item
                href=(entry.full)
                data-full=(entry.full)
                data-index=(entry.index)
                data-title=(entry.title)
                data-alt=(entry.alt)
            {
                img src=(entry.current_src()) alt=(entry.alt) loading="lazy" decoding="async";
            }
        }
    }
}

/// Markup for the overlay, appended once to the page body.
pub fn lightbox_markup(labels: &LabelsConfig, default_title: &str) -> Markup {
    html! {
        div.gallery-modal hidden role="dialog" aria-modal="true" aria-label=(labels.dialog) tabindex="-1" {
            div.gallery-lb role="document" {
                div.gallery-lb-top {
                    div.gallery-lb-meta {
                        div.gallery-lb-title { (default_title) }
                        div.gallery-lb-counter aria-live="polite" { "1 / 1" }
                    }
                    button.gallery-lb-close type="button" aria-label=(labels.close) { "✕" }
                }
                div.gallery-lb-media {
                    button.gallery-lb-arrow.gallery-lb-prev type="button" aria-label=(labels.previous) { "‹" }
                    img.gallery-lb-img src="" alt="";
                    button.gallery-lb-arrow.gallery-lb-next type="button" aria-label=(labels.next) { "›" }
                }
                div.gallery-lb-bottom {
                    div.gallery-lb-caption data-caption {}
                }
            }
        }
    }
}
