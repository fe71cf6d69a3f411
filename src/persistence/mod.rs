//! High score persistence
//!
//! The session only needs two calls: read the best score at start, write it
//! back when beaten. Backends:
//! - `MemoryStore`: in-process, for tests and hosts without storage
//! - `JsonFileStore`: JSON file in the home directory (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//!
//! Storage failures never reach gameplay: a score that cannot be read is 0,
//! a score that cannot be written is logged and dropped.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reads and writes the best-ever score
pub trait HighScoreStore {
    /// Stored high score, 0 if absent or unreadable
    fn load_high_score(&self) -> i32;

    /// Replace the stored high score
    fn save_high_score(&mut self, score: i32);
}

/// Errors from a storage backend
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Backend not reachable (no window, storage disabled)
    Unavailable(&'static str),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failed: {err}"),
            Self::Json(err) => write!(f, "stored data is not valid JSON: {err}"),
            Self::Unavailable(what) => write!(f, "storage unavailable: {what}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: i32,
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: Option<i32>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a high score
    pub fn with_high_score(score: i32) -> Self {
        Self {
            high_score: Some(score),
            saves: 0,
        }
    }

    /// Raw stored value (None if never written)
    pub fn stored(&self) -> Option<i32> {
        self.high_score
    }

    /// Number of writes so far
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> i32 {
        self.high_score.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: i32) {
        self.high_score = Some(score);
        self.saves += 1;
    }
}
