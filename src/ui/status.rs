use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, Model, SyncStatus};
use crate::search::SearchMode;

use super::render::cols;
use super::style;

const ADDRESS_LABEL: &str = " server: ";
const SEARCH_LABEL: &str = " search: ";

pub fn render_address_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus == Focus::Address;
    let input_style = if focused {
        style::focused_input_style()
    } else {
        Style::default().fg(Color::White)
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::raw(ADDRESS_LABEL),
        Span::styled(model.server_address.clone(), input_style),
    ]))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
    if focused {
        let x = area.x + cols(ADDRESS_LABEL.len() + model.server_address.width());
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

pub fn render_search_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let query = model.navigator.query();
    let match_info = if query.is_empty() {
        String::new()
    } else if let Some((current, total)) = model.navigator.position() {
        format!("  [{current}/{total}]")
    } else {
        "  [no results]".to_string()
    };
    let mode = match model.navigator.mode() {
        SearchMode::Browsing => "",
        SearchMode::Editing => "  (editing)",
    };
    let text = format!("{SEARCH_LABEL}{query}{match_info}{mode}  Up/Down: move  Enter: edit");
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
    if model.focus == Focus::Search {
        let x = area.x + cols(SEARCH_LABEL.len() + query.width());
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

pub fn render_sync_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, status)) = model.active_status() else {
        return;
    };
    let style = match status {
        SyncStatus::Success => Style::default().bg(Color::Green).fg(Color::Black),
        SyncStatus::Failure => Style::default().bg(Color::Red).fg(Color::White),
        SyncStatus::Idle => Style::default(),
    };
    frame.render_widget(Paragraph::new(format!(" {message}")).style(style), area);
}

pub fn render_hint_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let mut activity = Vec::new();
    if model.pending_fetches > 0 {
        activity.push("reading...");
    }
    if model.pending_saves > 0 {
        activity.push("saving...");
    }
    let text = format!(
        " {} params  {}  ^F search  ^R read  ^S save  ^D server  ^Q quit",
        model.document.param_count(),
        activity.join(" "),
    );
    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}
