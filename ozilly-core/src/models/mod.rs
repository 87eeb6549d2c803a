//! Domain models for Ozilly.
//!
//! # Core Concepts
//!
//! ## Permanent Entities
//!
//! - [`HistoryEntry`]: One generated suggestion, appended to the history file
//!   and never modified afterwards.
//!
//! ## Ephemeral Entities
//!
//! These live only for the duration of a user session and are never written
//! to disk:
//!
//! - [`SessionState`]: The idea, name and logo idea from the last successful
//!   generation in a session.
//! - [`Suggestion`]: The two fields parsed out of a single model reply.

mod history;
mod session;
mod suggestion;

pub use history::*;
pub use session::*;
pub use suggestion::*;
