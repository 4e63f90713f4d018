use crate::document::Document;

use super::find_matches;

/// Whether the user is moving through matches or typing into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Browsing,
    Editing,
}

/// What the view should do after [`SearchNavigator::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Move input focus to the value of the param at this line index.
    FocusValue(usize),
    /// A boolean param was flipped in place; focus stays on the query.
    Toggled { index: usize, value: bool },
}

/// Incremental search state over the params of a document.
///
/// The match list is recomputed whenever the query or the document
/// changes. While browsing, that also puts the cursor back on the first
/// match; while editing, the cursor is left where it is so the field being
/// typed into stays selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchNavigator {
    query: String,
    matches: Vec<usize>,
    cursor: usize,
    mode: SearchMode,
}

impl SearchNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Line index of the current match, if the cursor points at one.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// One-based cursor position and match total, for `3/7` style counters.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current()
            .map(|_| (self.cursor + 1, self.matches.len()))
    }

    pub fn is_match(&self, index: usize) -> bool {
        self.matches.contains(&index)
    }

    pub fn set_query(&mut self, document: &Document, query: impl Into<String>) {
        self.query = query.into();
        self.refresh(document);
    }

    /// Recompute matches after the document changed.
    pub fn refresh(&mut self, document: &Document) {
        self.matches = find_matches(document, &self.query);
        if self.mode == SearchMode::Browsing {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.matches.len().saturating_sub(1));
        }
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: isize) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor % len;
        self.cursor = if direction < 0 {
            (cursor + len - 1) % len
        } else {
            (cursor + 1) % len
        };
    }

    /// Enter editing on the current match.
    ///
    /// Boolean params are flipped immediately instead of taking focus.
    pub fn activate(&mut self, document: &mut Document) -> Option<Activation> {
        let index = self.current()?;
        let line = document.line_at(index)?;
        if !line.is_param() {
            return None;
        }
        self.mode = SearchMode::Editing;
        if let Some(value) = document.toggle_bool(index) {
            self.refresh(document);
            return Some(Activation::Toggled { index, value });
        }
        Some(Activation::FocusValue(index))
    }

    /// The value input lost focus.
    pub const fn deactivate(&mut self) {
        self.mode = SearchMode::Browsing;
    }
}
