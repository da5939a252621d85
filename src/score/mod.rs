//! High-score persistence
//!
//! The engine never talks to the filesystem directly; it is handed a
//! [`ScoreStore`] and calls `load` once per session and `save` whenever a
//! candidate beats the stored value. Failures are absorbed here and logged,
//! never surfaced to the player.

pub mod file;
pub mod memory;

pub use file::FileScoreStore;
pub use memory::MemoryScoreStore;

/// Persistence contract for the single high-score integer.
pub trait ScoreStore {
    /// The persisted high score, or 0 if none exists or the store is
    /// unreadable
    fn load(&self) -> u32;

    /// Persist `candidate` only if it strictly exceeds the stored value.
    /// A failed write is non-fatal; in-memory score tracking continues.
    fn save(&mut self, candidate: u32);
}
