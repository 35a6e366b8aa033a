use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Persistence for the one scalar that outlives a play session.
pub trait ScoreStore {
    fn best(&self) -> Result<u64>;
    fn record(&mut self, best: u64) -> Result;
}

#[derive(Serialize, Deserialize)]
struct HighScore {
    best: u64,
}

/// High score kept in a small json file. The file is absent until the
/// first record, which reads back as a best of 0.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonScoreStore {
    fn best(&self) -> Result<u64> {
        if !self.path.exists() {
            return Ok(0);
        }
        let text = fs::read_to_string(&self.path)?;
        let stored: HighScore = serde_json::from_str(&text)?;
        Ok(stored.best)
    }

    fn record(&mut self, best: u64) -> Result {
        let text = serde_json::to_string_pretty(&HighScore { best })?;
        fs::write(&self.path, text)?;
        info!(best, path = %self.path.display(), "high score saved");
        Ok(())
    }
}

/// Keeps the high score for the current process only. Useful for tests
/// and for hosts without a writable data directory.
#[derive(Default)]
pub struct MemoryScoreStore {
    best: u64,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best(&self) -> Result<u64> {
        Ok(self.best)
    }

    fn record(&mut self, best: u64) -> Result {
        self.best = best;
        Ok(())
    }
}
