//! Editing session and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, SyncStatus};
pub use update::{Message, update};

use std::time::Duration;

use crate::config::DEFAULT_STATUS_MS;
use crate::remote::{DEFAULT_SERVER, DEFAULT_TIMEOUT, Endpoints};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    server_address: String,
    endpoints: Endpoints,
    status_duration: Duration,
    request_timeout: Duration,
    fetch_on_start: bool,
}

impl App {
    /// Create a new application talking to `server_address` (`host:port`).
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into(),
            endpoints: Endpoints::default(),
            status_duration: Duration::from_millis(DEFAULT_STATUS_MS),
            request_timeout: DEFAULT_TIMEOUT,
            fetch_on_start: false,
        }
    }

    /// Override the read and save endpoint paths.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set how long read/save status messages stay visible.
    pub const fn with_status_duration(mut self, duration: Duration) -> Self {
        self.status_duration = duration;
        self
    }

    /// Set the timeout for each remote request.
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read the remote file as soon as the session starts.
    pub const fn with_fetch_on_start(mut self, enabled: bool) -> Self {
        self.fetch_on_start = enabled;
        self
    }

    fn initial_model(&self) -> Model {
        Model::new(self.server_address.clone())
            .with_endpoints(self.endpoints.clone())
            .with_status_duration(self.status_duration)
            .with_request_timeout(self.request_timeout)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}
