//! CLI output formatting.
//!
//! Output is information-first: each gallery leads with its positional index,
//! title and item count, with the page it came from as an indented `Source:`
//! line.
//!
//! ```text
//! Galleries
//! 001 Weddings (12 photos)
//!     Source: galleries/weddings.html
//!     Dropped: items 4, 9 (no usable URL)
//! 002 (invalid)
//!     Source: galleries/broken.html
//!     Error: invalid gallery JSON: key must be a string at line 1 column 2
//!
//! 2 galleries, 1 invalid
//! ```
//!
//! Each `format_*` function returns `Vec<String>` for testability; the
//! `print_*` wrappers write to stdout.

use crate::render::Grid;
use crate::site::PagePayload;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format the result of `gallery-lightbox check`.
pub fn format_check_output(pages: &[PagePayload]) -> Vec<String> {
    let mut lines = vec!["Galleries".to_string()];

    if pages.is_empty() {
        lines.push("    (no gallery pages found)".to_string());
    }

    for (i, page) in pages.iter().enumerate() {
        let index = format_index(i + 1);
        match &page.result {
            Ok(loaded) => {
                lines.push(format!(
                    "{} {} ({})",
                    index,
                    loaded.dataset.title,
                    plural(loaded.dataset.len(), "photo", "photos")
                ));
                lines.push(format!("    Source: {}", page.path.display()));
                if !loaded.dropped.is_empty() {
                    // Positions shown 1-based to match what people count in the payload.
                    let positions: Vec<String> =
                        loaded.dropped.iter().map(|p| (p + 1).to_string()).collect();
                    let label = if positions.len() == 1 { "item" } else { "items" };
                    lines.push(format!(
                        "    Dropped: {} {} (no usable URL)",
                        label,
                        positions.join(", ")
                    ));
                }
            }
            Err(e) => {
                lines.push(format!("{} (invalid)", index));
                lines.push(format!("    Source: {}", page.path.display()));
                lines.push(format!("    Error: {}", e));
            }
        }
    }

    let invalid = invalid_count(pages);
    lines.push(String::new());
    if invalid == 0 {
        lines.push(plural(pages.len(), "gallery", "galleries"));
    } else {
        lines.push(format!(
            "{}, {} invalid",
            plural(pages.len(), "gallery", "galleries"),
            invalid
        ));
    }
    lines
}

pub fn print_check_output(pages: &[PagePayload]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}

pub fn invalid_count(pages: &[PagePayload]) -> usize {
    pages.iter().filter(|p| p.result.is_err()).count()
}

/// One-line summary of a rendered grid, printed by `gallery-lightbox render`.
pub fn format_render_summary(grid: &Grid) -> String {
    format!(
        "<!-- {}: {} -->",
        grid.title,
        plural(grid.len(), "item", "items")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_dataset;
    use crate::render::render_grid;
    use crate::test_helpers::abc_dataset;
    use std::path::PathBuf;

    fn page(path: &str, payload: &str) -> PagePayload {
        PagePayload {
            path: PathBuf::from(path),
            result: load_dataset(payload, "Gallery"),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn check_output_lists_valid_galleries() {
        let pages = vec![page(
            "galleries/weddings.html",
            r#"{"title":"Weddings","items":[{"full":"a.jpg"},{"full":"b.jpg"}]}"#,
        )];
        let lines = format_check_output(&pages);
        assert_eq!(
            lines,
            vec![
                "Galleries",
                "001 Weddings (2 photos)",
                "    Source: galleries/weddings.html",
                "",
                "1 gallery",
            ]
        );
    }

    #[test]
    fn check_output_reports_dropped_items() {
        let pages = vec![page(
            "g.html",
            r#"{"items":[{"alt":"x"},{"full":"a.jpg"},{"thumb":"t.jpg"}]}"#,
        )];
        let lines = format_check_output(&pages);
        assert_eq!(lines[1], "001 Gallery (1 photo)");
        assert_eq!(lines[3], "    Dropped: items 1, 3 (no usable URL)");
    }

    #[test]
    fn check_output_reports_invalid_payloads() {
        let pages = vec![page("a.html", "{}"), page("b.html", "{oops")];
        let lines = format_check_output(&pages);
        assert!(lines.contains(&"002 (invalid)".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("    Error: invalid gallery JSON")));
        assert_eq!(lines.last().unwrap(), "2 galleries, 1 invalid");
        assert_eq!(invalid_count(&pages), 1);
    }

    #[test]
    fn check_output_with_no_pages() {
        let lines = format_check_output(&[]);
        assert_eq!(lines[1], "    (no gallery pages found)");
        assert_eq!(lines.last().unwrap(), "0 galleries");
    }

    #[test]
    fn render_summary_counts_items() {
        let grid = render_grid(&abc_dataset());
        assert_eq!(format_render_summary(&grid), "<!-- Gallery: 3 items -->");
    }
}
