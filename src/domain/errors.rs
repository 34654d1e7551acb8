use thiserror::Error;

/// Errors surfaced to the player through the engine API
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move '{input}': choose rock, paper or scissors")]
    InvalidMove { input: String },

    #[error("No games have been played yet")]
    NoData,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors raised while building classifier inputs from move history
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Insufficient history: need {needed} preceding moves, have {available}")]
    InsufficientHistory { needed: usize, available: usize },

    #[error("Round index {index} is past the end of a history of {len} moves")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to the durable history file and model blob
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Corrupt data in {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Errors raised by a move classifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictorError {
    #[error("Model is not trained")]
    Untrained,

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Model fit failed: {reason}")]
    FitFailed { reason: String },

    #[error("Inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error(transparent)]
    Features(#[from] FeatureError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_formatting() {
        let err = GameError::InvalidMove {
            input: "lizard".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lizard"));
        assert!(msg.contains("rock, paper or scissors"));
    }

    #[test]
    fn test_persistence_error_is_transparent() {
        let err: GameError = PersistenceError::WriteFailed {
            path: "data/history.csv".to_string(),
            reason: "disk full".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to write data/history.csv: disk full");
    }

    #[test]
    fn test_insufficient_history_formatting() {
        let err = FeatureError::InsufficientHistory {
            needed: 3,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("need 3"));
        assert!(msg.contains("have 1"));
    }
}
