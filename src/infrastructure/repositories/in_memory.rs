//! In-Memory Repository Implementation
//!
//! Backs [`HistoryRepository`] with a `Vec`. Data is lost on restart, which makes it
//! suitable for tests and throwaway sessions only.
//!
//! Clones share the same storage, so a test can keep a handle and inspect what the
//! session persisted.

use crate::domain::errors::PersistenceError;
use crate::domain::game::RoundRecord;
use crate::domain::repositories::HistoryRepository;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct InMemoryHistoryRepository {
    rounds: Arc<Mutex<Vec<RoundRecord>>>,
    fail_writes: bool,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(rounds: Vec<RoundRecord>) -> Self {
        Self {
            rounds: Arc::new(Mutex::new(rounds)),
            fail_writes: false,
        }
    }

    /// A store whose appends always fail, for exercising the partial-failure path.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rounds.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> Result<Vec<RoundRecord>, PersistenceError> {
        self.rounds
            .lock()
            .map(|rounds| rounds.clone())
            .map_err(|e| PersistenceError::ReadFailed {
                path: self.describe(),
                reason: e.to_string(),
            })
    }

    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::WriteFailed {
                path: self.describe(),
                reason: "writes disabled".to_string(),
            });
        }
        let mut rounds = self.rounds.lock().map_err(|e| PersistenceError::WriteFailed {
            path: self.describe(),
            reason: e.to_string(),
        })?;
        rounds.push(record.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
