//! JSON-file backed history store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::engine::{AnalysisResult, SentimentLabel};
use crate::error::{PlumeError, Result};

/// Maximum number of entries kept; older entries are dropped on save.
pub const HISTORY_CAPACITY: usize = 30;

/// Number of characters shown by [`SavedAnalysis::preview`].
pub const PREVIEW_CHARS: usize = 120;

/// Headline figures of a saved analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub word_count: usize,
    pub score: u8,
    pub sentiment: SentimentLabel,
}

impl From<&AnalysisResult> for AnalysisSummary {
    fn from(result: &AnalysisResult) -> Self {
        AnalysisSummary {
            word_count: result.word_count,
            score: result.engagement.score,
            sentiment: result.sentiment.label,
        }
    }
}

/// One saved analysis. The full result is not stored; re-analyzing `text`
/// reproduces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysis {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<AnalysisSummary>,
    pub created_at: DateTime<Utc>,
}

impl SavedAnalysis {
    /// The first [`PREVIEW_CHARS`] characters of the text, with `…` appended
    /// when it was cut.
    pub fn preview(&self) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}…")
        } else {
            head
        }
    }
}

/// Newest-first list of saved analyses, optionally persisted to a JSON file.
#[derive(Debug)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    entries: RwLock<Vec<SavedAnalysis>>,
}

impl HistoryStore {
    /// Create a store that lives only in memory.
    pub fn in_memory() -> Self {
        HistoryStore {
            path: None,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Open the store persisted at `path`.
    ///
    /// A missing file is an empty history. A file that cannot be read or
    /// parsed is logged and treated as empty; it is overwritten on the next
    /// change.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match File::open(&path) {
            Ok(file) => match serde_json::from_reader::<_, Vec<SavedAnalysis>>(BufReader::new(file))
            {
                Ok(mut entries) => {
                    entries.truncate(HISTORY_CAPACITY);
                    entries
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable history file");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open history file");
                Vec::new()
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "opened history");

        Ok(HistoryStore {
            path: Some(path),
            entries: RwLock::new(entries),
        })
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Save an analysis as the newest entry.
    pub fn save(&self, text: &str, result: &AnalysisResult) -> Result<SavedAnalysis> {
        let entry = SavedAnalysis {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            summary: Some(AnalysisSummary::from(result)),
            created_at: Utc::now(),
        };

        let mut entries = self.entries.write();
        let mut next = Vec::with_capacity(HISTORY_CAPACITY);
        next.push(entry.clone());
        next.extend(entries.iter().take(HISTORY_CAPACITY - 1).cloned());

        // Memory only changes once the file has been written.
        self.persist(&next)?;
        *entries = next;

        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> Vec<SavedAnalysis> {
        self.entries.read().clone()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<SavedAnalysis> {
        self.entries.read().iter().find(|e| e.id == id).cloned()
    }

    /// Delete an entry by id. Returns whether an entry was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut entries = self.entries.write();
        let next: Vec<SavedAnalysis> = entries.iter().filter(|e| e.id != id).cloned().collect();
        if next.len() == entries.len() {
            return Ok(false);
        }
        self.persist(&next)?;
        *entries = next;
        Ok(true)
    }

    /// Remove every entry.
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write();
        self.persist(&[])?;
        entries.clear();
        Ok(())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn persist(&self, entries: &[SavedAnalysis]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path).map_err(|e| {
            PlumeError::history(format!("cannot write {}: {e}", path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    fn result_for(text: &str) -> AnalysisResult {
        engine::analyze(text).unwrap()
    }

    #[test]
    fn test_save_newest_first() {
        let store = HistoryStore::in_memory();
        let first = store.save("first post", &result_for("first post")).unwrap();
        let second = store.save("second post", &result_for("second post")).unwrap();

        let entries = store.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_capacity() {
        let store = HistoryStore::in_memory();
        let result = result_for("same");
        let mut last_id = String::new();
        for i in 0..(HISTORY_CAPACITY + 5) {
            last_id = store.save(&format!("post {i}"), &result).unwrap().id;
        }

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.list()[0].id, last_id);
        assert_eq!(store.list()[HISTORY_CAPACITY - 1].text, "post 5");
    }

    #[test]
    fn test_summary() {
        let store = HistoryStore::in_memory();
        let result = result_for("What a great day!");
        let saved = store.save("What a great day!", &result).unwrap();

        let summary = saved.summary.unwrap();
        assert_eq!(summary.word_count, 4);
        assert_eq!(summary.score, result.engagement.score);
        assert_eq!(summary.sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_delete_and_clear() {
        let store = HistoryStore::in_memory();
        let saved = store.save("keep me", &result_for("keep me")).unwrap();
        store.save("and me", &result_for("and me")).unwrap();

        assert!(store.delete(&saved.id).unwrap());
        assert!(!store.delete(&saved.id).unwrap());
        assert!(store.get(&saved.id).is_none());
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_preview() {
        let short = SavedAnalysis {
            id: "1".to_string(),
            text: "short".to_string(),
            summary: None,
            created_at: Utc::now(),
        };
        assert_eq!(short.preview(), "short");

        let long = SavedAnalysis {
            text: "é".repeat(PREVIEW_CHARS + 1),
            ..short
        };
        let preview = long.preview();
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn test_failed_write_leaves_entries_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let store = HistoryStore::open(blocker.join("history.json")).unwrap();
        assert!(store.is_empty());

        assert!(store.save("hello world", &result_for("hello world")).is_err());
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let store = HistoryStore::in_memory();
        let saved = store.save("Hi there", &result_for("Hi there")).unwrap();
        let json = serde_json::to_value(&saved).unwrap();

        assert!(json["createdAt"].is_string());
        assert_eq!(json["summary"]["wordCount"], 2);
        assert_eq!(json["summary"]["sentiment"], "neutral");
    }
}
