use crate::app::{App, Message, Model};
use crate::remote::{SyncEvent, SyncWorker};

impl App {
    /// Start the network work behind a message. `update` has already run.
    pub(super) fn handle_message_side_effects(
        model: &Model,
        worker: &SyncWorker,
        msg: &Message,
    ) {
        match msg {
            Message::FetchRequested => {
                let client = model.remote_client();
                tracing::info!(url = %client.read_url(), "read requested");
                worker.fetch(client);
            }
            Message::SaveRequested => {
                let client = model.remote_client();
                tracing::info!(
                    url = %client.save_url(),
                    lines = model.document.line_count(),
                    "save requested"
                );
                worker.save(client, model.document.clone());
            }
            _ => {}
        }
    }
}

/// Turn a finished remote call into the message that applies it.
pub(super) fn completion_message(event: SyncEvent) -> Message {
    match event {
        SyncEvent::Fetched(result) => Message::FetchCompleted(result),
        SyncEvent::Saved(result) => Message::SaveCompleted(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::remote::SyncError;

    #[test]
    fn test_completion_message_maps_events() {
        let doc = Document::parse("a = 1");
        assert_eq!(
            completion_message(SyncEvent::Fetched(Ok(doc.clone()))),
            Message::FetchCompleted(Ok(doc))
        );
        let err = SyncError::Transport("refused".to_string());
        assert_eq!(
            completion_message(SyncEvent::Saved(Err(err.clone()))),
            Message::SaveCompleted(Err(err))
        );
    }
}
