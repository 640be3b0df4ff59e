//! High score persistence
//!
//! The best score is the only state that outlives a session. Backends:
//! - `MemoryStore`: in-process, for tests and embedding
//! - `JsonFileStore`: a small JSON document on disk (native only)
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only)

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key-value boundary for the persisted high score
pub trait HighScoreStore {
    /// Stored high score; 0 when nothing has been stored yet
    fn load_high_score(&self) -> Result<u64>;

    fn save_high_score(&mut self, score: u64) -> Result<()>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u64) -> Self {
        Self { value: Some(score) }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> Result<u64> {
        Ok(self.value.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u64) -> Result<()> {
        self.value = Some(score);
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Record {
    high_score: u64,
}

/// JSON file store; a missing file reads as 0
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> Result<u64> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => {
                let record: Record = serde_json::from_str(&json)?;
                Ok(record.high_score)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn save_high_score(&mut self, score: u64) -> Result<()> {
        let json = serde_json::to_string(&Record { high_score: score })?;
        // Write-then-rename so a crash never leaves a truncated file
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        log::debug!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// Browser LocalStorage store
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "highScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> Result<u64> {
        let stored = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|v| v.trim().parse::<u64>().ok());
        Ok(stored.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u64) -> Result<()> {
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(Self::STORAGE_KEY, &score.to_string())
                .is_err()
            {
                log::warn!("LocalStorage rejected high score write");
            }
        }
        Ok(())
    }
}
