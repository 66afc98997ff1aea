//! Host capabilities the lightbox drives.
//!
//! The overlay never touches a document directly. Everything it needs from the
//! page goes through two traits:
//!
//! - [`Surface`]: the overlay's own markup plus the few page-wide facilities it
//!   coordinates with (focus, scroll lock, timers, image loading).
//! - [`MenuProbe`]: a read-only query answered by whichever component owns the
//!   mobile navigation menu.
//!
//! Asynchronous completions (image loads, the close timer) come back into the
//! lightbox tagged with the token they were issued with, so late callbacks for
//! superseded requests can be recognised and dropped.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Opaque handle to a focusable page element, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Identifies one full-image load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoadToken(u64);

impl LoadToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Identifies one scheduled close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CloseToken(u64);

impl CloseToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Where focus should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The overlay's close button.
    CloseButton,
    /// An element captured earlier via [`Surface::active_element`].
    Element(ElementId),
}

/// Text content of the overlay for the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub title: &'a str,
    /// Caption line; the alt text, possibly empty.
    pub caption: &'a str,
    pub alt: &'a str,
    /// 1-based position.
    pub position: usize,
    pub total: usize,
}

impl SlideView<'_> {
    /// Position indicator, e.g. `3 / 12`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// A request to load the full-resolution image into the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub url: String,
    pub token: LoadToken,
}

/// The page as seen by the lightbox.
pub trait Surface {
    /// Element that currently has keyboard focus, if any.
    fn active_element(&self) -> Option<ElementId>;

    /// Whether `element` is still part of the document.
    fn is_attached(&self, element: ElementId) -> bool;

    fn focus(&mut self, target: FocusTarget);

    /// Add or remove the page-wide "no scroll" marker.
    fn set_scroll_lock(&mut self, locked: bool);

    /// Show or hide the overlay root (the `hidden` state).
    fn set_visible(&mut self, visible: bool);

    /// Toggle the class that drives the fade transition.
    fn set_open_class(&mut self, open: bool);

    /// Write title, caption, alt text and position indicator.
    fn show_slide(&mut self, view: &SlideView<'_>);

    fn set_loading(&mut self, loading: bool);

    fn set_portrait(&mut self, portrait: bool);

    /// Start loading the overlay image. The host reports back through
    /// `Lightbox::image_loaded` / `Lightbox::image_failed` with the same token.
    fn load_image(&mut self, request: ImageRequest);

    /// Best-effort background fetch; failures are never reported.
    fn preload(&mut self, url: &str);

    /// Ask for `Lightbox::on_frame` on the next animation frame.
    fn request_frame(&mut self);

    /// Ask for `Lightbox::finish_close` after `delay`.
    fn schedule_close(&mut self, delay: Duration, token: CloseToken);
}

/// Reports whether the mobile navigation menu is open.
pub trait MenuProbe {
    fn is_menu_open(&self) -> bool;
}

/// For pages without a mobile menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMenu;

impl MenuProbe for NoMenu {
    fn is_menu_open(&self) -> bool {
        false
    }
}

/// A plain shared flag, for hosts that track the menu state themselves.
impl MenuProbe for Cell<bool> {
    fn is_menu_open(&self) -> bool {
        self.get()
    }
}

impl<T: MenuProbe + ?Sized> MenuProbe for Rc<T> {
    fn is_menu_open(&self) -> bool {
        (**self).is_menu_open()
    }
}
