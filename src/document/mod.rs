//! Line model for TOML-style parameter files.
//!
//! This module handles:
//! - Classifying each line as a section, comment, param or passthrough
//! - Serializing back to text byte-for-byte for untouched lines
//! - Editing individual param values in place

mod parser;
mod types;

pub use parser::{parse, parse_line};
pub use types::{Document, Line};

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# robot config\n\n[net]\nhost = 127.0.0.1 # default\n  port=8080\nverbose = true\n\n[limits]\nmax_speed = 1.5\nnot a param\n";

    #[test]
    fn test_serialize_unmodified_document_is_identical() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.serialize(), SAMPLE);
    }

    #[test]
    fn test_parse_classifies_every_line() {
        let doc = Document::parse(SAMPLE);
        let kinds: Vec<&str> = doc
            .lines()
            .iter()
            .map(|line| match line {
                Line::Section { .. } => "section",
                Line::Comment { .. } => "comment",
                Line::Param { .. } => "param",
                Line::Other { .. } => "other",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "comment", "other", "section", "param", "param", "param", "other", "section",
                "param", "other", "other"
            ]
        );
        assert_eq!(doc.param_count(), 4);
    }

    #[test]
    fn test_basic_edit_scenario() {
        let mut doc = Document::parse("[net]\nhost = 127.0.0.1 # default\n");
        assert!(doc.set_param_value(1, "0.0.0.0"));
        assert_eq!(doc.serialize(), "[net]\nhost = 0.0.0.0 # default\n");
    }

    #[test]
    fn test_edit_regenerates_raw_with_indent() {
        let mut doc = Document::parse("  port=8080");
        doc.set_param_value(0, "9090");
        assert_eq!(doc.serialize(), "  port = 9090");
        assert_eq!(doc.lines()[0].value(), Some("9090"));
    }

    #[test]
    fn test_edit_changes_only_target_line() {
        let original = Document::parse(SAMPLE);
        let mut edited = original.clone();
        edited.set_param_value(8, "3.0");

        for (index, (before, after)) in original.lines().iter().zip(edited.lines()).enumerate() {
            if index == 8 {
                assert_eq!(after.raw(), "max_speed = 3.0");
            } else {
                assert_eq!(before, after, "line {index} should be untouched");
            }
        }
    }

    #[test]
    fn test_edit_out_of_range_is_noop() {
        let mut doc = Document::parse(SAMPLE);
        let before = doc.clone();
        assert!(!doc.set_param_value(999, "x"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_edit_non_param_is_noop() {
        let mut doc = Document::parse(SAMPLE);
        let before = doc.clone();
        assert!(!doc.set_param_value(0, "x"));
        assert!(!doc.set_param_value(2, "x"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_toggle_bool_flips_and_restores() {
        let mut doc = Document::parse("verbose = true # loud");
        assert_eq!(doc.toggle_bool(0), Some(false));
        assert_eq!(doc.serialize(), "verbose = false # loud");
        assert_eq!(doc.toggle_bool(0), Some(true));
        assert_eq!(doc.serialize(), "verbose = true # loud");
    }

    #[test]
    fn test_toggle_non_bool_is_noop() {
        let mut doc = Document::parse("rate = 10");
        assert_eq!(doc.toggle_bool(0), None);
        assert_eq!(doc.serialize(), "rate = 10");
    }

    #[test]
    fn test_duplicate_keys_are_distinct_lines() {
        let mut doc = Document::parse("a = 1\na = 2");
        doc.set_param_value(1, "3");
        assert_eq!(doc.serialize(), "a = 1\na = 3");
    }
}
