//! Core domain for Ozilly: the data model, feedback classification, prompt
//! construction, response parsing and the on-disk suggestion history.
//!
//! Nothing in this crate talks to the network. The HTTP clients and the web
//! surface live in the `ozilly` crate and are built on top of these pieces.

pub mod history;
pub mod models;
pub mod parser;
pub mod placeholder;
pub mod prompt;
pub mod sentiment;

pub use history::{HistoryError, HistoryStore};
pub use models::*;
pub use sentiment::{classify, Sentiment};
