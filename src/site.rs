//! Discovery of gallery payloads embedded in a built site.
//!
//! Gallery pages carry their data in
//! `<script type="application/json" id="gallery-data">…</script>`. This module
//! walks a site directory, finds every HTML page with such a block and loads
//! it, so broken payloads can be caught before deploying.

use crate::dataset::{self, DataError, LoadedDataset};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Element id of the embedded payload.
pub const PAYLOAD_ID: &str = "gallery-data";

/// A page that embeds a gallery payload.
#[derive(Debug)]
pub struct PagePayload {
    /// Path relative to the site root.
    pub path: PathBuf,
    pub result: Result<LoadedDataset, DataError>,
}

/// Text content of the first `<script>` element with `id="gallery-data"`.
///
/// Tags are tokenized with a lenient `quick_xml` reader: tag and attribute
/// names match case-insensitively, values may be quoted or bare, and a `>`
/// inside a quoted value does not end the tag. Script bodies are raw text,
/// so each one is skipped up to its `</script` and tokenizing restarts there.
pub fn extract_payload(html: &str) -> Option<&str> {
    let mut offset = 0;
    'restart: while offset < html.len() {
        while !html.is_char_boundary(offset) {
            offset += 1;
        }
        let mut reader = Reader::from_str(&html[offset..]);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        loop {
            match reader.read_event() {
                Ok(Event::Start(tag)) if tag.name().as_ref().eq_ignore_ascii_case(b"script") => {
                    let body_start = offset + usize::try_from(reader.buffer_position()).ok()?;
                    let body_len = find_ignore_ascii_case(&html[body_start..], "</script")?;
                    if has_payload_id(&tag) {
                        return Some(&html[body_start..body_start + body_len]);
                    }
                    offset = body_start + body_len + "</script".len();
                    continue 'restart;
                }
                Ok(Event::Eof) => return None,
                Ok(_) => {}
                Err(e) => {
                    // Not well-formed as XML. Resume where the reader stopped, or after
                    // the next `>` if it made no progress.
                    let pos = usize::try_from(reader.buffer_position()).ok()?;
                    log::trace!("skipping unparsable markup at byte {}: {e}", offset + pos);
                    offset = if pos > 0 {
                        offset + pos
                    } else {
                        let gt = html.as_bytes()[offset..].iter().position(|&b| b == b'>')?;
                        offset + gt + 1
                    };
                    continue 'restart;
                }
            }
        }
    }
    None
}

fn has_payload_id(tag: &BytesStart<'_>) -> bool {
    tag.html_attributes().flatten().any(|attr| {
        attr.key.as_ref().eq_ignore_ascii_case(b"id") && &*attr.value == PAYLOAD_ID.as_bytes()
    })
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

/// Load every embedded gallery payload under `root`, in path order.
pub fn scan_site(root: &Path, default_title: &str) -> Result<Vec<PagePayload>, SiteError> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }
        let html = std::fs::read_to_string(entry.path())?;
        let Some(payload) = extract_payload(&html) else {
            continue;
        };
        let path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        log::debug!("found gallery payload in {}", path.display());
        pages.push(PagePayload {
            path,
            result: dataset::load_dataset(payload, default_title),
        });
    }
    Ok(pages)
}
