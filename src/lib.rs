//! # Gallery Lightbox
//!
//! Gallery grid and lightbox behaviour for static brochure sites. A page embeds
//! its images as inline JSON; this crate turns that into a thumbnail grid and
//! drives a full-screen overlay that shows one image at a time.
//!
//! # Architecture
//!
//! ```text
//! payload JSON ──▶ dataset ──▶ render ──▶ Grid ──┐
//!                                                ▼
//! page events ──▶ input::InputRouter ──▶ lightbox::Lightbox ──▶ Surface (host page)
//!                                                ▲
//!                             nav::MobileMenu ───┘ (MenuProbe)
//! ```
//!
//! The lightbox owns the only interesting state. It never touches a document
//! directly: everything it does to the page goes through the [`Surface`] trait,
//! and asynchronous completions (image loads, the close timer) come back tagged
//! with tokens so stale ones can be dropped. That keeps the whole state machine
//! testable with a recording surface.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dataset`] | Parses the embedded payload, dropping unusable items |
//! | [`render`] | Grid entries, thumbnail fallback, grid and overlay markup (Maud) |
//! | [`lightbox`] | The overlay state machine: wraparound, preloading, focus, scroll lock |
//! | [`input`] | Click, key and swipe routing onto lightbox operations |
//! | [`gallery`] | Idempotent page entry point wiring the above together |
//! | [`surface`] | Host capability traits (`Surface`, `MenuProbe`) and tokens |
//! | [`nav`] | Active nav links and the mobile menu |
//! | [`fragment`] | Header/footer fragment slots |
//! | [`contact`] | Contact form validation and `mailto:` building |
//! | [`site`] | Finds embedded payloads in a built site |
//! | [`config`] | `gallery.toml` loading, merging and validation |
//! | [`types`] | `GalleryItem`, `GalleryDataset` |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Model
//!
//! The gallery is decoration: nothing in it may break the page.
//!
//! - A malformed payload disables the gallery and is logged.
//! - A failed thumbnail is swapped for the full image, once.
//! - A failed full image leaves the overlay in its loading state.
//! - Every operation on an empty gallery is a no-op.

pub mod config;
pub mod contact;
pub mod dataset;
pub mod fragment;
pub mod gallery;
pub mod input;
pub mod lightbox;
pub mod nav;
pub mod output;
pub mod render;
pub mod site;
pub mod surface;
pub mod types;

pub use gallery::{Gallery, InitStatus};
pub use lightbox::{Lightbox, Phase};
pub use surface::{MenuProbe, Surface};

#[cfg(test)]
pub(crate) mod test_helpers;
