//! Score store - the persisted high score.
//!
//! The engine calls through this trait rather than touching the filesystem,
//! so tests run against an in-memory store. The on-disk format is one small
//! JSON record under a fixed file name; a missing or unreadable file reads
//! as zero, and the stored value only ever advances.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the persisted record, under the user's home directory
pub const SCORE_FILE_NAME: &str = ".tui-snake-score.json";

/// Read/write capability for the single persisted scalar
pub trait ScoreStore {
    /// The stored high score; absent or unreadable storage reads as 0
    fn load(&self) -> u32;

    /// Persist a new high score
    fn save(&mut self, score: u32) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    high_score: u32,
}

/// JSON-file-backed store
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `$HOME`, falling back to the working directory
    pub fn at_default_path() -> Self {
        let dir = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(SCORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<ScoreRecord>(&text).ok())
            .map(|record| record.high_score)
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        let text = serde_json::to_string(&ScoreRecord { high_score: score })?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
}

impl MemoryScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.high_score = score;
        Ok(())
    }
}
