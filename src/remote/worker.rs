//! Background execution of remote calls.
//!
//! Each request runs on its own short-lived thread and reports back over a
//! channel that the event loop drains. Overlapping requests are not
//! serialized: completions are delivered in arrival order. Dropping the
//! worker drops the receiver, so results of requests still in flight are
//! discarded.
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::document::Document;

use super::{RemoteClient, SyncError};

/// A finished remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Fetched(Result<Document, SyncError>),
    Saved(Result<(), SyncError>),
}

pub struct SyncWorker {
    tx: Sender<SyncEvent>,
    rx: Receiver<SyncEvent>,
}

impl SyncWorker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start a fetch in the background.
    pub fn fetch(&self, client: RemoteClient) -> JoinHandle<()> {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(SyncEvent::Fetched(client.fetch()));
        })
    }

    /// Start a save of `document` in the background. The document is a
    /// snapshot; later edits do not affect the request.
    pub fn save(&self, client: RemoteClient, document: Document) -> JoinHandle<()> {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(SyncEvent::Saved(client.save(&document)));
        })
    }

    /// Next completed call, if any.
    pub fn try_next(&self) -> Option<SyncEvent> {
        self.rx.try_recv().ok()
    }
}

impl Default for SyncWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SyncWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncWorker").finish_non_exhaustive()
    }
}
