use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for [`HistoryEntry::timestamp`]: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A suggestion that was produced for an idea.
///
/// The history file is a flat JSON array of these, in the order they were
/// generated. Entries are never updated or removed, and the same idea or
/// name may appear any number of times. The field names are part of the
/// file format and must stay as they are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// When the entry was written, formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// The idea text exactly as the user entered it.
    pub idea: String,
    pub startup_name: String,
    /// May be empty when the model returned a name without a logo idea.
    pub logo_idea: String,
}

impl HistoryEntry {
    pub fn new(
        idea: impl Into<String>,
        startup_name: impl Into<String>,
        logo_idea: impl Into<String>,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            idea: idea.into(),
            startup_name: startup_name.into(),
            logo_idea: logo_idea.into(),
        }
    }

    /// Whether this entry belongs to `idea`, ignoring case.
    pub fn matches_idea(&self, idea: &str) -> bool {
        self.idea.to_lowercase() == idea.to_lowercase()
    }
}
