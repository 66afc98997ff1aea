//! The lightbox overlay: one image at a time, with wraparound navigation.
//!
//! # States
//!
//! ```text
//!            open_at                on_frame              close
//! Closed ───────────────▶ Opening ───────────▶ Open ───────────▶ Closing
//!   ▲                        ▲                                     │
//!   │                        └────────────── open_at ──────────────┤
//!   └──────────────────────────── finish_close ────────────────────┘
//! ```
//!
//! - **Opening** means the overlay is visible and waiting for the next
//!   animation frame to start its fade-in.
//! - **Closing** means the fade-out has started; the overlay is hidden when the
//!   close timer fires. Calling [`Lightbox::close`] again meanwhile is a no-op.
//!
//! # Asynchronous completions
//!
//! Image loads and the close timer are started through the [`Surface`] and
//! reported back with the token they were issued with. Only the most recent
//! token of each kind is honoured, so a slow image that was navigated away
//! from never overwrites the current one, and a close timer that was overtaken
//! by a re-open never hides the overlay.
//!
//! # Empty galleries
//!
//! With no slides every operation is a no-op.

use crate::config::LightboxConfig;
use crate::surface::{
    CloseToken, ElementId, FocusTarget, ImageRequest, LoadToken, MenuProbe, SlideView, Surface,
};
use std::time::Duration;

/// Normalize any integer index into `[0, len)`.
///
/// Returns `None` for an empty gallery, so callers never divide by zero.
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|&n| n > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// What the overlay shows for one grid item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub full: String,
    pub title: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Timing and preloading behaviour, taken from [`LightboxConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxSettings {
    pub close_delay: Duration,
    pub preload_neighbors: bool,
}

impl From<&LightboxConfig> for LightboxSettings {
    fn from(config: &LightboxConfig) -> Self {
        Self {
            close_delay: config.close_delay(),
            preload_neighbors: config.preload_neighbors,
        }
    }
}

impl Default for LightboxSettings {
    fn default() -> Self {
        Self::from(&LightboxConfig::default())
    }
}

/// The overlay state machine, driving a host [`Surface`].
pub struct Lightbox<S, M> {
    surface: S,
    menu: M,
    settings: LightboxSettings,
    slides: Vec<Slide>,
    phase: Phase,
    index: usize,
    last_focus: Option<ElementId>,
    load_token: LoadToken,
    close_token: CloseToken,
    loading: bool,
    portrait: bool,
}

impl<S: Surface, M: MenuProbe> Lightbox<S, M> {
    pub fn new(surface: S, menu: M, settings: LightboxSettings) -> Self {
        Self {
            surface,
            menu,
            settings,
            slides: Vec::new(),
            phase: Phase::Closed,
            index: 0,
            last_focus: None,
            load_token: LoadToken::default(),
            close_token: CloseToken::default(),
            loading: false,
            portrait: false,
        }
    }

    /// Replace the slide list. The current index is clamped back to the start.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.index = 0;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the overlay is on screen and accepting navigation input.
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    pub fn is_closing(&self) -> bool {
        self.phase == Phase::Closing
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_portrait(&self) -> bool {
        self.portrait
    }

    pub fn last_focus(&self) -> Option<ElementId> {
        self.last_focus
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Show the slide at `index`, wrapping out-of-range values.
    ///
    /// Returns the resolved index, or `None` when there is nothing to show.
    pub fn open_at(&mut self, index: i64) -> Option<usize> {
        let Some(i) = wrap_index(index, self.slides.len()) else {
            log::debug!("open_at({index}) ignored: gallery is empty");
            return None;
        };

        if self.phase == Phase::Closed {
            self.last_focus = self.surface.active_element();
        }

        self.index = i;
        let total = self.slides.len();
        let slide = &self.slides[i];
        self.surface.show_slide(&SlideView {
            title: &slide.title,
            caption: &slide.alt,
            alt: &slide.alt,
            position: i + 1,
            total,
        });

        self.loading = true;
        self.surface.set_loading(true);
        self.load_token = self.load_token.next();
        self.surface.load_image(ImageRequest {
            url: slide.full.clone(),
            token: self.load_token,
        });

        if self.settings.preload_neighbors {
            self.preload_neighbors(i);
        }

        if matches!(self.phase, Phase::Closed | Phase::Closing) {
            // A pending close timer must not hide the re-opened overlay.
            self.close_token = self.close_token.next();
            self.phase = Phase::Opening;
            self.surface.set_visible(true);
            self.surface.set_scroll_lock(true);
            self.surface.request_frame();
        }

        Some(i)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.open_at(self.index as i64 + 1)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.open_at(self.index as i64 - 1)
    }

    /// Animation-frame callback: completes Opening → Open.
    pub fn on_frame(&mut self) -> bool {
        if self.phase != Phase::Opening {
            return false;
        }
        self.phase = Phase::Open;
        self.surface.set_open_class(true);
        self.surface.focus(FocusTarget::CloseButton);
        true
    }

    /// Start the exit transition. Returns `false` if there was nothing to close.
    pub fn close(&mut self) -> bool {
        if !self.is_shown() {
            log::debug!("close ignored in {:?}", self.phase);
            return false;
        }

        self.phase = Phase::Closing;
        self.surface.set_open_class(false);

        // The mobile menu holds its own claim on the scroll lock.
        if !self.menu.is_menu_open() {
            self.surface.set_scroll_lock(false);
        }

        self.close_token = self.close_token.next();
        self.surface
            .schedule_close(self.settings.close_delay, self.close_token);
        true
    }

    /// Close-timer callback: hides the overlay and restores focus.
    pub fn finish_close(&mut self, token: CloseToken) -> bool {
        if self.phase != Phase::Closing || token != self.close_token {
            log::debug!("stale close timer discarded");
            return false;
        }

        self.surface.set_visible(false);
        self.phase = Phase::Closed;

        if let Some(element) = self.last_focus.take() {
            if self.surface.is_attached(element) {
                self.surface.focus(FocusTarget::Element(element));
            }
        }
        true
    }

    /// Image-load callback. Stale tokens are discarded.
    pub fn image_loaded(&mut self, token: LoadToken, width: u32, height: u32) -> bool {
        if token != self.load_token {
            log::debug!("stale image load discarded");
            return false;
        }
        self.loading = false;
        self.surface.set_loading(false);
        self.portrait = height > width;
        self.surface.set_portrait(self.portrait);
        true
    }

    /// Image-error callback. The loading flag stays set for that attempt and
    /// the previous portrait flag is kept.
    pub fn image_failed(&mut self, token: LoadToken) {
        if token == self.load_token {
            if let Some(slide) = self.current_slide() {
                log::warn!("failed to load gallery image {}", slide.full);
            }
        }
    }

    fn preload_neighbors(&mut self, i: usize) {
        let len = self.slides.len();
        if len < 2 {
            return;
        }
        let prev = (i + len - 1) % len;
        let next = (i + 1) % len;
        self.surface.preload(&self.slides[prev].full);
        if next != prev {
            self.surface.preload(&self.slides[next].full);
        }
    }
}
