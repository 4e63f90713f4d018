//! Line classification.
//!
//! Each line is tested, in order, as a comment, a section header and a
//! `key = value` assignment. Anything left over is kept verbatim, so parsing
//! is total.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Document, Line};

// indent, key (no `=` or `#`), value up to the first `#`, optional comment.
static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([^=#]+)=\s*([^#]*?)(\s*(#.*)?)$").expect("param pattern is valid")
});

/// Parse a whole file. Splitting on `\n` keeps the empty line after a
/// terminal newline, so serializing restores it.
pub fn parse(text: &str) -> Document {
    Document::from_lines(text.split('\n').map(parse_line).collect())
}

/// Classify a single line.
pub fn parse_line(line: &str) -> Line {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return Line::Comment {
            raw: line.to_string(),
        };
    }
    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return Line::Section {
            raw: line.to_string(),
            name: inner.trim().to_string(),
        };
    }
    if let Some(caps) = PARAM_RE.captures(line) {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        return Line::Param {
            raw: line.to_string(),
            indent: group(1).to_string(),
            key: group(2).trim().to_string(),
            value: group(3).trim().to_string(),
            comment: caps.get(5).map(|m| m.as_str().trim().to_string()),
        };
    }
    Line::Other {
        raw: line.to_string(),
    }
}
