//! Game configuration
//!
//! Persisted separately from the high score. Gameplay constants (speeds,
//! thresholds, tick rates) are fixed in `consts`; only session-shape options
//! live here.

use serde::{Deserialize, Serialize};

use crate::Surface;
use crate::persistence::PersistError;
use crate::consts::SESSION_SECONDS;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Timed sessions end when the countdown hits zero; untimed sessions end
    /// only on a score threshold
    pub timed: bool,
    /// Countdown length for timed sessions
    pub session_seconds: u32,
    /// Spawner seed (None = fresh entropy each session)
    pub seed: Option<u64>,
    /// Play area for hosts that don't supply a viewport
    pub surface: Surface,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timed: true,
            session_seconds: SESSION_SECONDS,
            seed: None,
            surface: Surface::default(),
        }
    }
}

impl GameConfig {
    /// Untimed configuration (score thresholds only)
    pub fn untimed() -> Self {
        Self {
            timed: false,
            ..Self::default()
        }
    }

    /// Starting value of the countdown, None when untimed
    pub fn session_length(&self) -> Option<u32> {
        self.timed.then_some(self.session_seconds)
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Keep a loaded config, or fall back to defaults and log why
    fn loaded_or_default(source: &str, loaded: Result<Option<Self>, PersistError>) -> Self {
        match loaded {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", source);
                config
            }
            Ok(None) => {
                log::info!("No config in {}, using defaults", source);
                Self::default()
            }
            Err(err) => {
                log::warn!("Using default config ({}: {})", source, err);
                Self::default()
            }
        }
    }

    /// Read a JSON file; a missing file is `Ok(None)`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn try_load_from(path: &std::path::Path) -> Result<Option<Self>, PersistError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(Some(Self::from_json(&json)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        Self::loaded_or_default(&path.display().to_string(), Self::try_load_from(path))
    }

    /// Native: defaults (use `load_from` for a file)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "water_catch_settings";

    /// Read the stored config; an absent key is `Ok(None)`
    #[cfg(target_arch = "wasm32")]
    pub fn try_load() -> Result<Option<Self>, PersistError> {
        let json = crate::platform::local_storage()?
            .get_item(Self::STORAGE_KEY)
            .map_err(|_| PersistError::Unavailable("LocalStorage read rejected"))?;
        json.map(|json| Self::from_json(&json))
            .transpose()
            .map_err(PersistError::from)
    }

    /// Load config from LocalStorage, falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::loaded_or_default("LocalStorage", Self::try_load())
    }
}
