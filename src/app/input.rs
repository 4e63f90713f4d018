use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::model::Focus;
use crate::app::{App, Message, Model};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('f') => Some(Message::FocusSearch),
                KeyCode::Char('r') => Some(Message::FetchRequested),
                KeyCode::Char('s') => Some(Message::SaveRequested),
                KeyCode::Char('d') => Some(Message::FocusAddress),
                KeyCode::Char('q' | 'c') => Some(Message::Quit),
                _ => None,
            };
        }

        match model.focus {
            Focus::Search => Self::handle_search_key(key, model),
            Focus::Param(index) => Self::handle_value_key(key, model, index),
            Focus::Address => match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Message::FocusSearch),
                _ => edited_text(key, &model.server_address).map(Message::AddressChanged),
            },
        }
    }

    fn handle_search_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::NavigatePrevious),
            KeyCode::Down => Some(Message::NavigateNext),
            KeyCode::Enter => Some(Message::ActivateCurrent),
            KeyCode::Esc if !model.navigator.query().is_empty() => {
                Some(Message::QueryChanged(String::new()))
            }
            _ => edited_text(key, model.navigator.query()).map(Message::QueryChanged),
        }
    }

    fn handle_value_key(key: KeyEvent, model: &Model, index: usize) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Message::FocusSearch),
            _ => {
                let current = model.document.line_at(index)?.value()?;
                edited_text(key, current).map(|value| Message::ValueChanged(index, value))
            }
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Apply a typing key to `text`. `None` for keys that do not edit.
fn edited_text(key: KeyEvent, text: &str) -> Option<String> {
    match key.code {
        KeyCode::Backspace => {
            let mut next = text.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut next = text.to_string();
            next.push(c);
            Some(next)
        }
        _ => None,
    }
}
