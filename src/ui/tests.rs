use super::*;
use crate::app::{Message, Model, update};
use crate::document::Document;
use crate::remote::SyncError;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const SAMPLE: &str = "# robot\n[net]\nhost = 127.0.0.1 # default\nport = 8080\n\n[debug]\nverbose = true\n";

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 12);
    Terminal::new(backend).unwrap()
}

fn create_test_model() -> Model {
    Model::new("robot:8000").with_document(Document::parse(SAMPLE))
}

fn screen_text(model: &Model) -> String {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_shows_sections_comments_and_params() {
    let content = screen_text(&create_test_model());
    assert!(content.contains("server: robot:8000"));
    assert!(content.contains("# robot"));
    assert!(content.contains("[net]"));
    assert!(content.contains("host    = 127.0.0.1"));
    assert!(content.contains("verbose = [x]"));
}

#[test]
fn test_render_hides_passthrough_lines() {
    let model = create_test_model();
    let rows = document_rows(&model);
    assert_eq!(rows, vec![0, 1, 2, 3, 5, 6]);
}

#[test]
fn test_search_bar_shows_match_counter() {
    let model = update(create_test_model(), Message::QueryChanged("o".to_string()));
    let model = update(model, Message::NavigateNext);
    let content = screen_text(&model);
    assert!(content.contains("search: o  [2/3]"), "got:\n{content}");
}

#[test]
fn test_search_bar_reports_no_results() {
    let model = update(create_test_model(), Message::QueryChanged("zzz".to_string()));
    let content = screen_text(&model);
    assert!(content.contains("[no results]"));
}

#[test]
fn test_failure_status_is_rendered() {
    let model = update(
        create_test_model(),
        Message::SaveCompleted(Err(SyncError::Rejected {
            status: 500,
            reason: "Internal Server Error".to_string(),
        })),
    );
    let content = screen_text(&model);
    assert!(content.contains("Save failed: HTTP 500 Internal Server Error"));
}

#[test]
fn test_unchecked_boolean_after_toggle() {
    let model = update(create_test_model(), Message::QueryChanged("verbose".to_string()));
    let model = update(model, Message::ActivateCurrent);
    let content = screen_text(&model);
    assert!(content.contains("verbose = [ ]"));
    assert!(content.contains("(editing)"));
}
