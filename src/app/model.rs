use std::time::{Duration, Instant};

use crate::config::DEFAULT_STATUS_MS;
use crate::document::Document;
use crate::remote::{DEFAULT_SERVER, Endpoints, RemoteClient};
use crate::search::SearchNavigator;

/// Outcome shown after a read or save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Success,
    Failure,
}

#[derive(Debug, Clone)]
struct StatusNotice {
    status: SyncStatus,
    message: String,
    expires_at: Instant,
}

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Address,
    /// Value input of the param at this line index
    Param(usize),
}

/// The complete editing session.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Server `host:port` the file is read from and saved to
    pub server_address: String,
    /// Endpoint paths on that server
    pub endpoints: Endpoints,
    /// Request timeout for reads and saves
    pub request_timeout: Duration,
    /// The parameter file being edited
    pub document: Document,
    /// Search query, matches and browse/edit mode
    pub navigator: SearchNavigator,
    /// Input currently receiving keys
    pub focus: Focus,
    status: Option<StatusNotice>,
    /// How long a status stays visible
    pub status_duration: Duration,
    /// Number of reads started but not yet completed
    pub pending_fetches: usize,
    /// Number of saves started but not yet completed
    pub pending_saves: usize,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a session with no document loaded.
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into(),
            ..Self::default()
        }
    }

    /// Create a session around an already parsed document.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.replace_document(document);
        self
    }

    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub const fn with_status_duration(mut self, duration: Duration) -> Self {
        self.status_duration = duration;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Client for the current server address.
    pub fn remote_client(&self) -> RemoteClient {
        RemoteClient::new(self.server_address.clone(), self.endpoints.clone())
            .with_timeout(self.request_timeout)
    }

    /// Swap in a freshly fetched document. Never merged with the old one.
    pub(super) fn replace_document(&mut self, document: Document) {
        self.document = document;
        if matches!(self.focus, Focus::Param(_)) {
            self.set_focus(Focus::Search);
        }
        self.navigator.refresh(&self.document);
    }

    /// Move input focus. Leaving a value input ends editing.
    pub(super) fn set_focus(&mut self, focus: Focus) {
        if matches!(self.focus, Focus::Param(_)) && self.focus != focus {
            self.navigator.deactivate();
        }
        self.focus = focus;
    }

    /// Line index the view should keep on screen.
    pub fn scroll_target(&self) -> Option<usize> {
        match self.focus {
            Focus::Param(index) => Some(index),
            Focus::Search | Focus::Address => self.navigator.current(),
        }
    }

    /// Replace the current status; the previous one's deadline goes with it.
    pub(super) fn show_status(&mut self, status: SyncStatus, message: impl Into<String>) {
        self.status = Some(StatusNotice {
            status,
            message: message.into(),
            expires_at: Instant::now() + self.status_duration,
        });
    }

    pub(super) fn expire_status(&mut self, now: Instant) -> bool {
        if self
            .status
            .as_ref()
            .is_some_and(|notice| notice.expires_at <= now)
        {
            self.status = None;
            return true;
        }
        false
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.status
            .as_ref()
            .map_or(SyncStatus::Idle, |notice| notice.status)
    }

    pub fn active_status(&self) -> Option<(&str, SyncStatus)> {
        self.status
            .as_ref()
            .map(|notice| (notice.message.as_str(), notice.status))
    }

    pub(super) fn status_deadline(&self) -> Option<Instant> {
        self.status.as_ref().map(|notice| notice.expires_at)
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self {
            server_address: DEFAULT_SERVER.to_string(),
            endpoints: Endpoints::default(),
            request_timeout: crate::remote::DEFAULT_TIMEOUT,
            document: Document::empty(),
            navigator: SearchNavigator::new(),
            focus: Focus::Search,
            status: None,
            status_duration: Duration::from_millis(DEFAULT_STATUS_MS),
            pending_fetches: 0,
            pending_saves: 0,
            should_quit: false,
        }
    }
}
