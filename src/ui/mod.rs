//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: Layout of the whole screen
//! - `status`: Address, search and status bars
//! - `style`: Colors for line kinds and highlights

mod render;
mod status;
mod style;

pub use render::{document_rows, render};

pub const DOCUMENT_LEFT_PADDING: u16 = 2;

#[cfg(test)]
mod tests;
