//! Page-level entry point tying loader, renderer, lightbox and router together.
//!
//! A host creates one [`Gallery`] per page and calls [`Gallery::init`] once the
//! gallery markup and payload are present. Calling it again is a no-op, even
//! after a failed first attempt.

use crate::config::GalleryConfig;
use crate::dataset;
use crate::input::{InputEvent, InputRouter, Routed};
use crate::lightbox::{Lightbox, LightboxSettings};
use crate::render::{self, Grid};
use crate::surface::{CloseToken, LoadToken, MenuProbe, Surface};
use maud::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    /// Grid rendered and input bound.
    Ready { count: usize },
    /// The payload was valid but contained no usable items.
    Empty,
    /// The payload was malformed; the gallery stays inert.
    Disabled,
    AlreadyInitialized,
}

pub struct Gallery<S, M> {
    config: GalleryConfig,
    initialized: bool,
    grid: Grid,
    lightbox: Lightbox<S, M>,
    router: InputRouter,
}

impl<S: Surface, M: MenuProbe> Gallery<S, M> {
    pub fn new(config: GalleryConfig, surface: S, menu: M) -> Self {
        let settings = LightboxSettings::from(&config.lightbox);
        let router = InputRouter::new(config.gestures.swipe_threshold_px);
        Self {
            config,
            initialized: false,
            grid: Grid::default(),
            lightbox: Lightbox::new(surface, menu, settings),
            router,
        }
    }

    pub fn init(&mut self, payload: &str) -> InitStatus {
        if self.initialized {
            return InitStatus::AlreadyInitialized;
        }
        self.initialized = true;

        let Some(dataset) = dataset::load_or_disable(payload, &self.config.default_title) else {
            return InitStatus::Disabled;
        };

        self.grid = render::render_grid(&dataset);
        if self.grid.is_empty() {
            log::info!("gallery '{}' has no items", self.grid.title);
            return InitStatus::Empty;
        }

        self.lightbox.set_slides(self.grid.slides());
        self.router.bind();
        log::debug!(
            "gallery '{}' ready with {} items",
            self.grid.title,
            self.grid.len()
        );
        InitStatus::Ready {
            count: self.grid.len(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Markup for the grid container.
    pub fn grid_markup(&self) -> Markup {
        render::grid_markup(&self.grid)
    }

    /// Markup for the overlay shell.
    pub fn lightbox_markup(&self) -> Markup {
        render::lightbox_markup(&self.config.labels, &self.config.default_title)
    }

    pub fn lightbox(&self) -> &Lightbox<S, M> {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox<S, M> {
        &mut self.lightbox
    }

    /// Route a page event. Nothing happens before a successful `init`.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Routed> {
        self.router.dispatch(&mut self.lightbox, event)
    }

    /// A grid thumbnail failed to load. Returns the replacement source, once.
    pub fn thumbnail_failed(&mut self, index: usize) -> Option<String> {
        self.grid
            .entry_mut(index)?
            .thumbnail_failed()
            .map(str::to_string)
    }

    pub fn image_loaded(&mut self, token: LoadToken, width: u32, height: u32) -> bool {
        self.lightbox.image_loaded(token, width, height)
    }

    pub fn image_failed(&mut self, token: LoadToken) {
        self.lightbox.image_failed(token);
    }

    pub fn frame(&mut self) -> bool {
        self.lightbox.on_frame()
    }

    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        self.lightbox.finish_close(token)
    }
}
