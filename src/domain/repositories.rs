//! Repository Pattern Abstractions
//!
//! The session controller talks to round storage only through [`HistoryRepository`],
//! so the CSV file backend and the in-memory backend are interchangeable.
//!
//! # Constraints
//!
//! Implementations assume a single process. Sharing one backing file between
//! processes is unsupported and its behaviour is undefined.

use crate::domain::errors::{GameError, PersistenceError};
use crate::domain::game::RoundRecord;
use crate::domain::stats::GameStats;

/// Append-only store of completed rounds
pub trait HistoryRepository: Send {
    /// All rounds in chronological order; empty if nothing was ever stored.
    fn load(&self) -> Result<Vec<RoundRecord>, PersistenceError>;

    /// Durably add one round. Earlier rounds must survive a crash during the call.
    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError>;

    /// Tallies over the stored rounds.
    fn stats(&self) -> Result<GameStats, GameError> {
        let history = self.load()?;
        GameStats::from_history(&history)
    }

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}
