// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. remote::RemoteClient)
    clippy::module_name_repetitions
)]

//! # Paramedit
//!
//! A terminal editor for a remote robot's parameter file.
//!
//! Paramedit reads an INI/TOML-like file over HTTP, lets you search and edit
//! its values, and posts it back:
//! - Lossless line model: untouched lines serialize byte-for-byte
//! - Case-insensitive key search with wraparound navigation
//! - One-key toggling of `true`/`false` values
//! - Transient read/save status
//!
//! ## Architecture
//!
//! Paramedit uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Line parsing, editing and serialization
//! - [`search`]: Key search and the match navigator
//! - [`remote`]: HTTP read/save of the file
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved defaults and flag merging

pub mod app;
pub mod config;
pub mod document;
pub mod remote;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Document, Line};
    pub use crate::remote::{RemoteClient, SyncError};
    pub use crate::search::SearchNavigator;
}
