//! The suggestion history file.
//!
//! History is a single JSON array on disk. Every append reads the whole file,
//! pushes one entry and writes the whole file back. There is no locking: two
//! processes appending at the same time can lose one of the writes.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::models::HistoryEntry;

/// Default location of the history file, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "prompts_and_results.json";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("history file is not a valid entry list: {0}")]
    Json(#[from] serde_json::Error),
}

impl HistoryError {
    /// True when the history file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry in append order.
    ///
    /// A missing file is reported as an error; use
    /// [`HistoryError::is_not_found`] to tell it apart from a broken one.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Append one entry stamped with the current local time.
    ///
    /// A missing file starts a new history. A file that exists but cannot be
    /// read or parsed is an error and is left untouched.
    pub fn append(
        &self,
        idea: &str,
        startup_name: &str,
        logo_idea: &str,
    ) -> Result<HistoryEntry, HistoryError> {
        let mut history = match self.entries() {
            Ok(history) => history,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e),
        };

        let entry = HistoryEntry::new(idea, startup_name, logo_idea, Local::now());
        history.push(entry.clone());
        self.write_all(&history)?;

        tracing::debug!(
            "Appended '{}' for idea '{}' ({} entries)",
            entry.startup_name,
            entry.idea,
            history.len()
        );
        Ok(entry)
    }

    /// Names previously suggested for `idea` (case-insensitive exact match),
    /// oldest first. Any failure to read the file yields an empty list.
    pub fn names_for(&self, idea: &str) -> Vec<String> {
        match self.entries() {
            Ok(history) => history
                .into_iter()
                .filter(|entry| entry.matches_idea(idea))
                .map(|entry| entry.startup_name)
                .collect(),
            Err(e) => {
                tracing::debug!("No prior names for '{}': {}", idea, e);
                Vec::new()
            }
        }
    }

    /// At most `limit` of the newest entries, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, HistoryError> {
        let history = self.entries()?;
        let skip = history.len().saturating_sub(limit);
        Ok(history.into_iter().skip(skip).rev().collect())
    }

    fn write_all(&self, history: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        history.serialize(&mut ser)?;
        std::fs::write(&self.path, buf)?;
        Ok(())
    }
}
