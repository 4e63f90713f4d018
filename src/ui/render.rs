use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, Model};
use crate::document::Line as DocLine;
use crate::search::highlight_ranges;

use super::{DOCUMENT_LEFT_PADDING, status, style};

/// Separator drawn between a key and its value.
const ASSIGN: &str = " = ";

/// Line indices listed in the document pane. Passthrough lines stay in the
/// document but are not shown.
pub fn document_rows(model: &Model) -> Vec<usize> {
    model
        .document
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| !matches!(line, DocLine::Other { .. }))
        .map(|(index, _)| index)
        .collect()
}

pub(super) fn cols(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let status_active = model.active_status().is_some();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(u16::from(status_active)),
        Constraint::Length(1),
    ])
    .split(area);

    status::render_address_bar(model, frame, chunks[0]);
    status::render_search_bar(model, frame, chunks[1]);
    render_document(model, frame, chunks[2]);
    if status_active {
        status::render_sync_status_bar(model, frame, chunks[3]);
    }
    status::render_hint_bar(model, frame, chunks[4]);
}

/// First visible row so that `target` sits near the middle of the pane.
fn scroll_offset(rows: &[usize], target: Option<usize>, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let row = target
        .and_then(|index| rows.iter().position(|&r| r == index))
        .unwrap_or(0);
    row.saturating_sub(height / 2)
        .min(rows.len().saturating_sub(height))
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let rows = document_rows(model);
    let height = area.height as usize;
    let offset = scroll_offset(&rows, model.scroll_target(), height);
    let key_width = model
        .document
        .lines()
        .iter()
        .filter_map(DocLine::key)
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    let content: Vec<Line> = rows
        .iter()
        .skip(offset)
        .take(height)
        .filter_map(|&index| {
            let line = model.document.line_at(index)?;
            Some(render_line(model, index, line, key_width))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::NONE)
        .padding(Padding::left(DOCUMENT_LEFT_PADDING));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if let Focus::Param(index) = model.focus
        && let Some(row) = rows.iter().position(|&r| r == index)
        && (offset..offset + height).contains(&row)
    {
        let value_width = model
            .document
            .line_at(index)
            .and_then(DocLine::value)
            .map_or(0, UnicodeWidthStr::width);
        let x = value_cursor_x(area.x, key_width, value_width);
        let y = area.y.saturating_add(cols(row - offset));
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), y));
    }
}

/// Column just past the value of a param row, saturating for very long lines.
fn value_cursor_x(left: u16, key_width: usize, value_width: usize) -> u16 {
    left.saturating_add(DOCUMENT_LEFT_PADDING)
        .saturating_add(cols(key_width + ASSIGN.len() + value_width))
}

fn render_line(model: &Model, index: usize, line: &DocLine, key_width: usize) -> Line<'static> {
    match line {
        DocLine::Section { name, .. } => Line::styled(format!("[{name}]"), style::section_style()),
        DocLine::Comment { raw } => Line::styled(raw.trim().to_string(), style::comment_style()),
        DocLine::Param { key, value, .. } => {
            let mut spans = key_spans(key, model.navigator.query());
            let padding = key_width.saturating_sub(key.width());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::raw(ASSIGN));
            spans.push(value_span(model, index, line, value));
            let row = Line::from(spans);
            if model.navigator.current() == Some(index) {
                row.style(style::current_row_style())
            } else {
                row
            }
        }
        DocLine::Other { raw } => Line::raw(raw.clone()),
    }
}

fn value_span(model: &Model, index: usize, line: &DocLine, value: &str) -> Span<'static> {
    if let Some(checked) = line.bool_value() {
        let mark = if checked { "[x]" } else { "[ ]" };
        return Span::styled(mark, style::value_style(model.navigator.is_match(index)));
    }
    if model.focus == Focus::Param(index) {
        return Span::styled(value.to_string(), style::focused_input_style());
    }
    Span::styled(value.to_string(), style::value_style(model.navigator.is_match(index)))
}

/// Split `key` into plain and highlighted spans around query occurrences.
fn key_spans(key: &str, query: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for range in highlight_ranges(key, query) {
        let (Some(before), Some(hit)) = (key.get(last..range.start), key.get(range.clone())) else {
            return vec![Span::styled(key.to_string(), style::key_style())];
        };
        if !before.is_empty() {
            spans.push(Span::styled(before.to_string(), style::key_style()));
        }
        spans.push(Span::styled(hit.to_string(), style::highlight_style()));
        last = range.end;
    }
    if let Some(rest) = key.get(last..)
        && !rest.is_empty()
    {
        spans.push(Span::styled(rest.to_string(), style::key_style()));
    }
    spans
}
