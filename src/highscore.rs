//! High score keeping for endless games
//!
//! A score keeper holds a single best score. Updating it with a candidate
//! stores `max(current, candidate)`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the best endless score
pub trait ScoreKeeper {
    fn high_score(&self) -> u32;

    /// Record a candidate score; the stored value becomes `max(current, candidate)`
    fn update_high_score(&mut self, candidate: u32);
}

/// In-memory keeper, for tests and throwaway sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryScoreKeeper {
    best: u32,
}

impl MemoryScoreKeeper {
    #[must_use]
    pub const fn new(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreKeeper for MemoryScoreKeeper {
    fn high_score(&self) -> u32 {
        self.best
    }

    fn update_high_score(&mut self, candidate: u32) {
        self.best = self.best.max(candidate);
    }
}

/// Keeper persisted as a decimal number in a text file
///
/// A missing or unreadable file counts as a high score of 0. Write failures are
/// logged and otherwise ignored so that a read-only disk never interrupts a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreKeeper {
    path: PathBuf,
    best: u32,
}

impl FileScoreKeeper {
    /// Open (or lazily create) the score file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_score(&path).unwrap_or(0);
        debug!(path = %path.display(), best, "loaded high score");
        Self { path, best }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.best.to_string())
    }
}

impl ScoreKeeper for FileScoreKeeper {
    fn high_score(&self) -> u32 {
        self.best
    }

    fn update_high_score(&mut self, candidate: u32) {
        if candidate <= self.best {
            return;
        }
        self.best = candidate;
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to save high score");
        }
    }
}

fn read_score(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}
