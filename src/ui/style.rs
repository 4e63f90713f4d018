use ratatui::style::{Color, Modifier, Style};

pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn comment_style() -> Style {
    Style::default()
        .fg(Color::Indexed(244))
        .add_modifier(Modifier::ITALIC)
}

pub fn key_style() -> Style {
    Style::default()
}

pub fn value_style(matched: bool) -> Style {
    if matched {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Background for the row under the match cursor.
pub fn current_row_style() -> Style {
    Style::default().bg(Color::Indexed(236))
}

/// Query occurrences inside keys.
pub fn highlight_style() -> Style {
    Style::default().bg(Color::Yellow).fg(Color::Black)
}

pub fn focused_input_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
}
