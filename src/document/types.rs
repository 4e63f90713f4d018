//! Core document types.

/// One line of a parameter file.
///
/// Every variant keeps the exact text it was parsed from in `raw`. Only
/// [`Line::Param`] ever rewrites it, and only when its value is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `[name]` header
    Section { raw: String, name: String },
    /// Line whose trimmed form starts with `#`
    Comment { raw: String },
    /// `key = value  # comment` assignment
    Param {
        raw: String,
        indent: String,
        key: String,
        value: String,
        comment: Option<String>,
    },
    /// Anything else, kept verbatim
    Other { raw: String },
}

impl Line {
    /// The text this line serializes to.
    pub fn raw(&self) -> &str {
        match self {
            Self::Section { raw, .. }
            | Self::Comment { raw }
            | Self::Param { raw, .. }
            | Self::Other { raw } => raw,
        }
    }

    pub const fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }

    /// Key of a param line, `None` for every other kind.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Param { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Value of a param line, `None` for every other kind.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Param { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Boolean reading of a param value. Only the literals `true` and
    /// `false` count.
    pub fn bool_value(&self) -> Option<bool> {
        match self.value()? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// Rebuild the text of a param line from its parts.
pub(super) fn render_param(indent: &str, key: &str, value: &str, comment: Option<&str>) -> String {
    match comment {
        Some(comment) => format!("{indent}{key} = {value} {comment}"),
        None => format!("{indent}{key} = {value}"),
    }
}

/// An ordered parameter file.
///
/// Line indices are the only identity a param has: duplicate keys are
/// distinct lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Create an empty document.
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Parse text into a document. Never fails.
    pub fn parse(text: &str) -> Self {
        super::parser::parse(text)
    }

    pub(super) const fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_at(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of editable param lines.
    pub fn param_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_param()).count()
    }

    /// Join every line's text with `\n`.
    pub fn serialize(&self) -> String {
        self.lines
            .iter()
            .map(Line::raw)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the value of the param at `index` and regenerate its text.
    ///
    /// Out-of-range indices and non-param lines are ignored. Returns whether
    /// the line was changed.
    pub fn set_param_value(&mut self, index: usize, new_value: impl Into<String>) -> bool {
        let Some(Line::Param {
            raw,
            indent,
            key,
            value,
            comment,
        }) = self.lines.get_mut(index)
        else {
            return false;
        };
        *value = new_value.into();
        *raw = render_param(indent, key, value, comment.as_deref());
        true
    }

    /// Flip a `true`/`false` param. Returns the new value, or `None` when the
    /// line is not a boolean param.
    pub fn toggle_bool(&mut self, index: usize) -> Option<bool> {
        let next = !self.line_at(index)?.bool_value()?;
        self.set_param_value(index, if next { "true" } else { "false" });
        Some(next)
    }
}
