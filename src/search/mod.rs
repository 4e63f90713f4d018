//! Search functionality.
//!
//! Provides parameter search over a [`Document`] with:
//! - Case-insensitive substring matching on param keys
//! - Wraparound navigation between matches
//! - Browse/edit modes driven by keyboard events

mod navigator;

pub use navigator::{Activation, SearchMode, SearchNavigator};

use crate::document::Document;

/// Indices of param lines whose key contains `query`, ignoring case, in
/// document order. An empty query matches every param.
pub fn find_matches(document: &Document, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    document
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let key = line.key()?;
            key.to_lowercase().contains(&needle).then_some(index)
        })
        .collect()
}

/// Byte ranges of every case-insensitive occurrence of `query` in `text`,
/// for highlighting.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<std::ops::Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; skip highlighting then.
    if haystack.len() != text.len() {
        return Vec::new();
    }
    haystack
        .match_indices(&needle)
        .map(|(start, found)| start..start + found.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::parse("[net]\nPort = 1\n# port = 2\nhost = x\nreport_port = 3\nplain")
    }

    #[test]
    fn test_matches_are_case_insensitive() {
        let doc = doc();
        assert_eq!(find_matches(&doc, "PORT"), vec![1, 4]);
        assert_eq!(find_matches(&doc, "port"), find_matches(&doc, "PORT"));
    }

    #[test]
    fn test_empty_query_matches_all_params() {
        assert_eq!(find_matches(&doc(), ""), vec![1, 3, 4]);
    }

    #[test]
    fn test_comments_and_sections_never_match() {
        assert_eq!(find_matches(&doc(), "net"), Vec::<usize>::new());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(find_matches(&doc(), "zzz").is_empty());
    }

    #[test]
    fn test_highlight_ranges() {
        assert_eq!(highlight_ranges("report_Port", "port"), vec![2..6, 7..11]);
        assert!(highlight_ranges("port", "").is_empty());
    }
}
