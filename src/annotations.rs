//! Locally stored annotations that accompany the statistics in a report.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// A single operator note attached to a target identifier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnnotationEntry {
    /// Moment the note refers to.
    pub datetime: DateTime<Utc>,
    /// Free-form note text, rendered verbatim.
    pub text: String,
}

/// Queryable collection of annotations keyed by target identifier.
///
/// Lookup failure and "no annotations" are deliberately indistinguishable.
/// Both yield an empty list, and an empty list simply produces a report
/// without an annotation section.
pub trait AnnotationStore {
    /// Returns the annotations recorded for a target, oldest first.
    fn annotations_for(&self, target: &str) -> Vec<AnnotationEntry>;
}

/// File-backed store reading a JSON object of `target -> [entries]`.
///
/// The file is re-read on every lookup, so edits show up in the next report
/// without restarting anything.  Target keys match case-insensitively.
#[derive(Clone, Debug)]
pub struct JsonAnnotationStore {
    path: PathBuf,
}

impl JsonAnnotationStore {
    /// Creates a store backed by the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Option<HashMap<String, Vec<AnnotationEntry>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("annotation store {} unreadable: {err}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(err) => {
                debug!("annotation store {} undecodable: {err}", self.path.display());
                None
            }
        }
    }
}

impl AnnotationStore for JsonAnnotationStore {
    fn annotations_for(&self, target: &str) -> Vec<AnnotationEntry> {
        let Some(entries) = self.load() else {
            return Vec::new();
        };
        entries
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(target))
            .map(|(_, list)| list)
            .unwrap_or_default()
    }
}

/// In-memory store used by tests and embedders without an annotation file.
#[derive(Clone, Debug, Default)]
pub struct MemoryAnnotationStore {
    entries: HashMap<String, Vec<AnnotationEntry>>,
}

impl MemoryAnnotationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the annotations for a target, replacing any previous list.
    pub fn insert(&mut self, target: impl Into<String>, entries: Vec<AnnotationEntry>) {
        self.entries.insert(target.into(), entries);
    }
}

impl AnnotationStore for MemoryAnnotationStore {
    fn annotations_for(&self, target: &str) -> Vec<AnnotationEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(target))
            .map(|(_, list)| list.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationEntry, AnnotationStore, JsonAnnotationStore, MemoryAnnotationStore};
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::io::Write;

    fn entry(text: &str) -> AnnotationEntry {
        AnnotationEntry {
            datetime: Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap(),
            text: text.to_string(),
        }
    }

    #[test]
    fn memory_store_matches_case_insensitively() {
        let mut store = MemoryAnnotationStore::new();
        store.insert("Germany", vec![entry("Borders reopened")]);

        assert_eq!(store.annotations_for("germany").len(), 1);
        assert_eq!(store.annotations_for("GERMANY").len(), 1);
        assert!(store.annotations_for("france").is_empty());
    }

    #[test]
    fn json_store_reads_entries_written_through_serde() {
        let mut by_target = HashMap::new();
        by_target.insert("all".to_string(), vec![entry("Global note")]);

        let file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(file.as_file(), &by_target).unwrap();

        let store = JsonAnnotationStore::new(file.path());
        let entries = store.annotations_for("all");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Global note");
        assert_eq!(
            entries[0].datetime,
            Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn missing_file_yields_no_entries() {
        let store = JsonAnnotationStore::new("/nonexistent/annotations.json");
        assert!(store.annotations_for("all").is_empty());
    }

    #[test]
    fn malformed_json_yields_no_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let store = JsonAnnotationStore::new(file.path());
        assert!(store.annotations_for("all").is_empty());
    }
}
