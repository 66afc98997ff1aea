//! Shared header/footer fragments.
//!
//! Pages carry empty slots (`#header-slot`) that are filled from a static HTML
//! fragment. A failed fetch empties the slot so the page stays usable without
//! the header; nothing is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("fragment fetch failed: {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("fragment fetch failed: {0}")]
    Transport(String),
}

/// Fetches a static fragment by URL.
pub trait FragmentSource {
    fn fetch(&self, url: &str) -> Result<String, FragmentError>;
}

/// A page region whose content is replaced by a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSlot {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentOutcome {
    Loaded,
    Cleared,
}

pub fn load_fragment(
    slot: &mut FragmentSlot,
    source: &impl FragmentSource,
    url: &str,
) -> FragmentOutcome {
    match source.fetch(url) {
        Ok(html) => {
            slot.content = html;
            FragmentOutcome::Loaded
        }
        Err(e) => {
            log::error!("{e}");
            slot.content.clear();
            FragmentOutcome::Cleared
        }
    }
}
