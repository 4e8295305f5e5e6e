//! Console language detection from the navigation marker.
use isg_logging::isg_warn;

use crate::{Language, Page};

/// Class of the `<div>` holding the current console language name.
pub const LANGUAGE_MARKER_CLASS: &str = "eingestelle_sprache";

/// Determines the language a page is rendered in.
///
/// Falls back to English when the marker is missing or empty. Unknown names
/// pass through as [`Language::Unknown`] and fail later label lookups.
pub fn detect_language(page: &Page) -> Language {
    let first = match page.language_markers.first() {
        Some(text) if !text.is_empty() => text,
        _ => {
            isg_warn!("No language marker found, defaulting to English");
            return Language::English;
        }
    };

    if page.language_markers.len() > 1 {
        isg_warn!(
            "Found {} language markers, using the first one: {:?}",
            page.language_markers.len(),
            page.language_markers
        );
    }

    Language::from_marker(first)
}
