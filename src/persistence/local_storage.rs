//! Browser LocalStorage backend (wasm32 only)

use super::{HighScoreStore, PersistError};

/// High score kept under a single LocalStorage key as a bare integer
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "highScore";

    pub fn new() -> Self {
        Self
    }

    pub fn try_load(&self) -> Result<Option<i32>, PersistError> {
        let storage = crate::platform::local_storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(value)) => Ok(Some(serde_json::from_str(value.trim())?)),
            Ok(None) => Ok(None),
            Err(_) => Err(PersistError::Unavailable("LocalStorage read rejected")),
        }
    }

    pub fn try_save(&self, score: i32) -> Result<(), PersistError> {
        let storage = crate::platform::local_storage()?;
        storage
            .set_item(Self::STORAGE_KEY, &serde_json::to_string(&score)?)
            .map_err(|_| PersistError::Unavailable("LocalStorage write rejected"))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> i32 {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Ok(None) => 0,
            Err(err) => {
                log::warn!("Ignoring stored high score: {}", err);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: i32) {
        match self.try_save(score) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(err) => log::warn!("Failed to save high score: {}", err),
        }
    }
}
