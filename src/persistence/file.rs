//! JSON file backend for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HighScoreRecord, HighScoreStore, PersistError};

/// File name used under the home directory
const FILE_NAME: &str = ".water_catch_highscore.json";

/// High score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.water_catch_highscore.json`, or the working directory if HOME is unset
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record. A missing file is not an error.
    pub fn try_load(&self) -> Result<Option<HighScoreRecord>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Write via a temp file so a crash never leaves a half-written record
    pub fn try_save(&self, record: &HighScoreRecord) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> i32 {
        match self.try_load() {
            Ok(Some(record)) => {
                log::info!("Loaded high score {} from {}", record.high_score, self.path.display());
                record.high_score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(err) => {
                log::warn!("Ignoring unreadable high score at {}: {}", self.path.display(), err);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: i32) {
        match self.try_save(&HighScoreRecord { high_score: score }) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(err) => log::warn!("Failed to save high score to {}: {}", self.path.display(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("water_catch_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut store = JsonFileStore::new(&path);
        store.save_high_score(40);
        assert_eq!(store.load_high_score(), 40);
        assert_eq!(JsonFileStore::new(&path).load_high_score(), 40);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.try_load(), Err(PersistError::Json(_))));
        assert_eq!(store.load_high_score(), 0);
        let _ = fs::remove_file(path);
    }
}
