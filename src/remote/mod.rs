//! Remote read and save of the whole parameter file.
//!
//! The server exposes two plain-HTTP endpoints:
//! - `GET {base}/edit-param-raw` returns the file as text
//! - `POST {base}/edit-param/post` takes `new-data=<urlencoded text>`
//!
//! Every call moves the full document. There is no retry; a failure leaves
//! the caller's document alone.

mod worker;

pub use worker::{SyncEvent, SyncWorker};

use std::time::Duration;

use crate::document::Document;

pub const DEFAULT_SERVER: &str = "localhost:8000";
pub const DEFAULT_READ_PATH: &str = "/edit-param-raw";
pub const DEFAULT_SAVE_PATH: &str = "/edit-param/post";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Form field carrying the serialized document on save.
const SAVE_FIELD: &str = "new-data";

/// Why a fetch or save did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Connection, DNS, timeout or body read failure.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {reason}")]
    Rejected { status: u16, reason: String },
}

/// Paths of the read and save endpoints, relative to the server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub read_path: String,
    pub save_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            read_path: DEFAULT_READ_PATH.to_string(),
            save_path: DEFAULT_SAVE_PATH.to_string(),
        }
    }
}

/// Client bound to one server address.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    base: String,
    endpoints: Endpoints,
    timeout: Duration,
}

impl RemoteClient {
    /// `base` is a `host:port` string; an explicit `http://` or `https://`
    /// prefix is kept as given.
    pub fn new(base: impl Into<String>, endpoints: Endpoints) -> Self {
        Self {
            base: base.into(),
            endpoints,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn read_url(&self) -> String {
        endpoint_url(&self.base, &self.endpoints.read_path)
    }

    pub fn save_url(&self) -> String {
        endpoint_url(&self.base, &self.endpoints.save_path)
    }

    fn http(&self) -> Result<reqwest::blocking::Client, SyncError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SyncError::Transport(format!("HTTP client setup failed: {e}")))
    }

    /// Download and parse the remote file.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Transport`] when the request cannot be completed
    /// and [`SyncError::Rejected`] for a non-2xx status.
    pub fn fetch(&self) -> Result<Document, SyncError> {
        let url = self.read_url();
        tracing::debug!(%url, "fetching parameter file");
        let response = self
            .http()?
            .get(&url)
            .send()
            .map_err(|e| transport_error("read", &url, &e))?;
        check_status(&url, response.status())?;
        let text = response
            .text()
            .map_err(|e| transport_error("read body", &url, &e))?;
        tracing::debug!(%url, bytes = text.len(), "fetched parameter file");
        Ok(Document::parse(&text))
    }

    /// Upload the serialized document.
    ///
    /// # Errors
    ///
    /// Same as [`RemoteClient::fetch`].
    pub fn save(&self, document: &Document) -> Result<(), SyncError> {
        let url = self.save_url();
        let text = document.serialize();
        tracing::debug!(%url, bytes = text.len(), "saving parameter file");
        let response = self
            .http()?
            .post(&url)
            .form(&[(SAVE_FIELD, text.as_str())])
            .send()
            .map_err(|e| transport_error("save", &url, &e))?;
        check_status(&url, response.status())?;
        tracing::debug!(%url, "saved parameter file");
        Ok(())
    }
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<(), SyncError> {
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(%url, %status, "server rejected request");
    Err(SyncError::Rejected {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

fn transport_error(action: &str, url: &str, err: &reqwest::Error) -> SyncError {
    tracing::warn!(%url, error = %err, "{action} failed");
    SyncError::Transport(format!("{action} {url} failed: {err}"))
}

/// Join a server address and an endpoint path into a URL.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();
    let separator = if path.starts_with('/') { "" } else { "/" };
    if base.starts_with("http://") || base.starts_with("https://") {
        format!("{base}{separator}{path}")
    } else {
        format!("http://{base}{separator}{path}")
    }
}
