//! Best-score persistence.
//!
//! The on-disk format is a plain-text file holding one decimal integer,
//! compatible with the score file the original game wrote. Reads never fail
//! loudly: a missing, empty, or unparsable file is simply "no prior score".

use std::fs;
use std::path::PathBuf;

use tracing::warn;

/// Persistence collaborator for the best score across sessions.
pub trait ScoreStore {
    /// Read the stored best score, defaulting to 0 when nothing usable is
    /// stored.
    fn load(&mut self) -> u64;

    /// Overwrite the stored best score. Failures are logged, never
    /// propagated; losing a high score must not block quitting.
    fn save(&mut self, value: u64);
}

/// File-backed store: one decimal integer in plain text.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn save(&mut self, value: u64) {
        if let Err(err) = fs::write(&self.path, value.to_string()) {
            warn!(path = %self.path.display(), %err, "failed to persist best score");
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: u64,
    saves: u32,
}

impl MemoryScoreStore {
    pub fn with_value(value: u64) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u64 {
        self.value
    }

    fn save(&mut self, value: u64) {
        self.value = value;
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load(), 0);
        store.save(120);
        assert_eq!(store.load(), 120);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let mut store = FileScoreStore::new("/nonexistent/dir/highest_score.txt");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn write_failure_does_not_panic() {
        let mut store = FileScoreStore::new("/nonexistent/dir/highest_score.txt");
        store.save(50);
    }
}
