use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::ScoreStore;

/// Default high-score file, relative to the working directory
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// File-backed score store: a single non-negative integer stored as text.
///
/// A missing, unreadable or unparseable file reads as 0.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or_else(|_| {
                debug!(path = %self.path.display(), "high-score file is not a number, treating as 0");
                0
            }),
            Err(err) => {
                debug!(path = %self.path.display(), %err, "high-score file unreadable, treating as 0");
                0
            }
        }
    }

    fn save(&mut self, candidate: u32) {
        if candidate <= self.load() {
            return;
        }

        if let Err(err) = fs::write(&self.path, candidate.to_string()) {
            warn!(path = %self.path.display(), %err, "failed to write high score");
        }
    }
}
