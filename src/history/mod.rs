//! History of saved analyses.
//!
//! A keyed list of past analyses, newest first, capped at
//! [`HISTORY_CAPACITY`] entries. The store sits beside the engine and only
//! consumes [`AnalysisResult`](crate::engine::AnalysisResult) values; the
//! engine never reads from it.
//!
//! # Examples
//!
//! ```
//! use plume::engine;
//! use plume::history::HistoryStore;
//!
//! let store = HistoryStore::in_memory();
//! let text = "Shipping day!";
//! let result = engine::analyze(text).unwrap();
//!
//! let saved = store.save(text, &result).unwrap();
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.get(&saved.id).unwrap().text, text);
//! ```

pub mod store;

pub use store::{AnalysisSummary, HISTORY_CAPACITY, HistoryStore, PREVIEW_CHARS, SavedAnalysis};
