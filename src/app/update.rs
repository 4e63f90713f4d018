use crate::app::Model;
use crate::app::model::{Focus, SyncStatus};
use crate::document::Document;
use crate::remote::SyncError;
use crate::search::Activation;

/// All possible events and actions in the application.
///
/// These represent user input, remote completions, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Search
    /// Replace the search query
    QueryChanged(String),
    /// Move to the next match (wraps)
    NavigateNext,
    /// Move to the previous match (wraps)
    NavigatePrevious,
    /// Edit the current match, or flip it if boolean
    ActivateCurrent,
    /// The value input lost focus
    DeactivateEditing,

    // Editing
    /// New value typed into the param at a line index
    ValueChanged(usize, String),

    // Focus
    /// Focus the search input
    FocusSearch,
    /// Focus the server address input
    FocusAddress,
    /// New server address typed
    AddressChanged(String),

    // Remote
    /// Read the file from the server
    FetchRequested,
    /// Write the file to the server
    SaveRequested,
    /// A read finished
    FetchCompleted(Result<Document, SyncError>),
    /// A save finished
    SaveCompleted(Result<(), SyncError>),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. Network calls for
/// `FetchRequested`/`SaveRequested` are started by the side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::QueryChanged(query) => {
            model.navigator.set_query(&model.document, query);
        }
        Message::NavigateNext => model.navigator.next(),
        Message::NavigatePrevious => model.navigator.previous(),
        Message::ActivateCurrent => match model.navigator.activate(&mut model.document) {
            Some(Activation::FocusValue(index)) => {
                model.focus = Focus::Param(index);
            }
            Some(Activation::Toggled { .. }) => {
                // Editing mode stays on until a value input loses focus.
                model.focus = Focus::Search;
            }
            None => {}
        },
        Message::DeactivateEditing => {
            model.navigator.deactivate();
        }
        Message::ValueChanged(index, value) => {
            if model.document.set_param_value(index, value) {
                model.navigator.refresh(&model.document);
            }
        }
        Message::FocusSearch => model.set_focus(Focus::Search),
        Message::FocusAddress => model.set_focus(Focus::Address),
        Message::AddressChanged(address) => {
            model.server_address = address;
        }
        Message::FetchRequested => {
            model.pending_fetches += 1;
        }
        Message::SaveRequested => {
            model.pending_saves += 1;
        }
        Message::FetchCompleted(result) => {
            model.pending_fetches = model.pending_fetches.saturating_sub(1);
            match result {
                Ok(document) => {
                    let params = document.param_count();
                    model.replace_document(document);
                    model.show_status(SyncStatus::Success, format!("Read OK ({params} params)"));
                }
                Err(err) => {
                    model.show_status(SyncStatus::Failure, format!("Read failed: {err}"));
                }
            }
        }
        Message::SaveCompleted(result) => {
            model.pending_saves = model.pending_saves.saturating_sub(1);
            match result {
                Ok(()) => model.show_status(SyncStatus::Success, "Saved"),
                Err(err) => model.show_status(SyncStatus::Failure, format!("Save failed: {err}")),
            }
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
