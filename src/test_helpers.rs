//! Shared test utilities for the gallery-lightbox test suite.
//!
//! Provides a recording [`Surface`] and sample data so lightbox, router and
//! gallery tests can assert on exactly what the overlay asked the page to do.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut lb = Lightbox::new(RecordingSurface::new(), NoMenu, LightboxSettings::default());
//! lb.set_slides(slides(3));
//! lb.open_at(-1);
//!
//! assert_eq!(lb.surface().preloads(), vec!["img/2.jpg", "img/1.jpg"]);
//! ```

use std::collections::HashSet;
use std::time::Duration;

use crate::lightbox::Slide;
use crate::surface::{CloseToken, ElementId, FocusTarget, ImageRequest, SlideView, Surface};
use crate::types::{GalleryDataset, GalleryItem};

// =========================================================================
// Sample data
// =========================================================================

/// `n` slides titled "Gallery", with `img/{k}.jpg` and alt `Image {k}` (1-based).
pub fn slides(n: usize) -> Vec<Slide> {
    (1..=n)
        .map(|k| Slide {
            full: format!("img/{k}.jpg"),
            title: "Gallery".to_string(),
            alt: format!("Image {k}"),
        })
        .collect()
}

/// The three-item `a.jpg` / `b.jpg` / `c.jpg` gallery.
pub fn abc_dataset() -> GalleryDataset {
    GalleryDataset {
        title: "Gallery".to_string(),
        items: vec![
            GalleryItem::new("a.jpg", "A"),
            GalleryItem::new("b.jpg", "B"),
            GalleryItem::new("c.jpg", "C"),
        ],
    }
}

/// The same gallery as an embedded JSON payload.
pub const ABC_PAYLOAD: &str = r#"{
    "items": [
        {"full": "a.jpg", "alt": "A"},
        {"full": "b.jpg", "alt": "B"},
        {"full": "c.jpg", "alt": "C"}
    ]
}"#;

// =========================================================================
// Recording surface
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Focus(FocusTarget),
    ScrollLock(bool),
    SetVisible(bool),
    OpenClass(bool),
    ShowSlide {
        title: String,
        caption: String,
        counter: String,
    },
    Loading(bool),
    Portrait(bool),
    LoadImage(ImageRequest),
    Preload(String),
    RequestFrame,
    ScheduleClose(Duration, CloseToken),
}

/// Surface that records every call and mirrors the resulting page state.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<RecordedOp>,
    /// What `active_element` reports.
    pub active: Option<ElementId>,
    /// Elements `is_attached` reports as still in the document.
    pub attached: HashSet<ElementId>,
    pub visible: bool,
    pub scroll_locked: bool,
    pub open_class: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled_closes(&self) -> Vec<(Duration, CloseToken)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RecordedOp::ScheduleClose(delay, token) => Some((*delay, *token)),
                _ => None,
            })
            .collect()
    }

    pub fn image_requests(&self) -> Vec<ImageRequest> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RecordedOp::LoadImage(req) => Some(req.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn preloads(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RecordedOp::Preload(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.attached.contains(&element)
    }

    fn focus(&mut self, target: FocusTarget) {
        self.ops.push(RecordedOp::Focus(target));
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
        self.ops.push(RecordedOp::ScrollLock(locked));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.ops.push(RecordedOp::SetVisible(visible));
    }

    fn set_open_class(&mut self, open: bool) {
        self.open_class = open;
        self.ops.push(RecordedOp::OpenClass(open));
    }

    fn show_slide(&mut self, view: &SlideView<'_>) {
        self.ops.push(RecordedOp::ShowSlide {
            title: view.title.to_string(),
            caption: view.caption.to_string(),
            counter: view.counter(),
        });
    }

    fn set_loading(&mut self, loading: bool) {
        self.ops.push(RecordedOp::Loading(loading));
    }

    fn set_portrait(&mut self, portrait: bool) {
        self.ops.push(RecordedOp::Portrait(portrait));
    }

    fn load_image(&mut self, request: ImageRequest) {
        self.ops.push(RecordedOp::LoadImage(request));
    }

    fn preload(&mut self, url: &str) {
        self.ops.push(RecordedOp::Preload(url.to_string()));
    }

    fn request_frame(&mut self) {
        self.ops.push(RecordedOp::RequestFrame);
    }

    fn schedule_close(&mut self, delay: Duration, token: CloseToken) {
        self.ops.push(RecordedOp::ScheduleClose(delay, token));
    }
}
