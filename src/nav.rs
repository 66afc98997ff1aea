//! Site navigation: active-link highlighting and the mobile menu.
//!
//! ## Active links
//!
//! Only top-level links are highlighted. Paths ending in `/` are compared as
//! their `index.html`, and every page under a configured section prefix
//! highlights the section's landing page instead of itself:
//!
//! ```text
//! /galleries/weddings.html  →  /galleries/galleries.html
//! /about/                   →  /about/index.html
//! ```
//!
//! ## Mobile menu
//!
//! The menu remembers what the visitor last asked for. Crossing to a desktop
//! width forces it closed without forgetting that intent; coming back to a
//! mobile width restores it. While open the menu holds the page scroll lock,
//! which is why the lightbox asks it before releasing that lock (see
//! [`MenuProbe`]).
//!
//! ## Footer year
//!
//! The footer's `#year` element shows the current calendar year in local
//! time; see [`footer_year`].

use crate::config::{NavConfig, SectionRule};
use chrono::{Datelike, Local};
use crate::surface::MenuProbe;
use std::cell::RefCell;

/// Append `index.html` to directory paths.
pub fn normalize_path(path: &str) -> String {
    if path.ends_with('/') {
        format!("{path}index.html")
    } else {
        path.to_string()
    }
}

/// Path portion of an `href`, which may be absolute, root-relative or carry
/// a query or fragment.
pub fn href_path(href: &str) -> String {
    let without_scheme = match href.find("://") {
        Some(pos) => {
            let rest = &href[pos + 3..];
            rest.find('/').map(|slash| &rest[slash..]).unwrap_or("/")
        }
        None => href,
    };
    let end = without_scheme
        .find(['?', '#'])
        .unwrap_or(without_scheme.len());
    let path = &without_scheme[..end];
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// The normalized path whose nav link should be active for `current`.
pub fn active_target(current: &str, sections: &[SectionRule]) -> String {
    let current = normalize_path(current);
    sections
        .iter()
        .find(|rule| current.starts_with(&rule.prefix))
        .map(|rule| normalize_path(&rule.target))
        .unwrap_or(current)
}

/// One flag per link in `hrefs`: whether it is the active top-level link.
pub fn mark_active(current: &str, hrefs: &[&str], sections: &[SectionRule]) -> Vec<bool> {
    let target = active_target(current, sections);
    hrefs
        .iter()
        .map(|href| normalize_path(&href_path(href)) == target)
        .collect()
}

/// What the host should apply to the page after a menu operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChange {
    pub open: bool,
    pub scroll_locked: bool,
    /// The hamburger button's active styling.
    pub button_active: bool,
}

#[derive(Debug, Clone)]
pub struct MobileMenu {
    open: bool,
    wanted_open: bool,
    breakpoint_px: u32,
    viewport_width: u32,
}

impl MobileMenu {
    pub fn new(config: &NavConfig, viewport_width: u32) -> Self {
        Self {
            open: false,
            wanted_open: false,
            breakpoint_px: config.breakpoint_px,
            viewport_width,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.breakpoint_px
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> MenuChange {
        let open = !self.open;
        self.render(open, true)
    }

    /// A link inside the menu was followed.
    pub fn link_clicked(&mut self) -> MenuChange {
        self.render(false, true)
    }

    pub fn escape(&mut self) -> MenuChange {
        self.render(false, true)
    }

    /// Viewport width changed (breakpoint crossing, rotation).
    pub fn sync(&mut self, viewport_width: u32) -> MenuChange {
        self.viewport_width = viewport_width;
        if self.is_mobile() {
            self.render(self.wanted_open, false)
        } else {
            self.render(false, false)
        }
    }

    fn render(&mut self, open: bool, remember: bool) -> MenuChange {
        if remember {
            self.wanted_open = open;
        }
        self.open = open;
        MenuChange {
            open,
            scroll_locked: open,
            button_active: open,
        }
    }
}

/// Element id the footer year is written into.
pub const FOOTER_YEAR_ID: &str = "year";

/// Text for the footer's year element.
pub fn footer_year(date: &impl Datelike) -> String {
    date.year().to_string()
}

pub fn footer_year_now() -> String {
    footer_year(&Local::now())
}

impl MenuProbe for RefCell<MobileMenu> {
    fn is_menu_open(&self) -> bool {
        // Mid-update means the menu is being toggled; keep the lock.
        self.try_borrow().map(|menu| menu.is_open()).unwrap_or(true)
    }
}
