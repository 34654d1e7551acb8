//! Session controller.
//!
//! A round runs AWAIT_INPUT → RECORD → DECIDE → RESOLVE → PERSIST. The session owns
//! the in-memory history and the opponent model; the presentation layer holds the
//! session and calls [`GameSession::play_round`] once per player input.
//!
//! Persistence failures never undo a round: the result is returned with the
//! failure attached in [`RoundResult::warnings`].

use crate::application::ml::{OpponentModel, Prediction, PredictionSource, PredictorState};
use crate::domain::errors::{GameError, PredictorError};
use crate::domain::game::{Move, Outcome, RoundRecord, counter, player_moves};
use crate::domain::ml::MIN_TRAINING_ROUNDS;
use crate::domain::repositories::HistoryRepository;
use crate::domain::stats::GameStats;
use tracing::{debug, error, info, warn};

/// Everything the presentation layer needs to render one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub player_move: Move,
    pub engine_move: Move,
    pub outcome: Outcome,
    pub prediction: Prediction,
    pub message: String,
    /// Persistence failures hit while completing the round.
    pub warnings: Vec<String>,
}

impl RoundResult {
    pub fn source(&self) -> PredictionSource {
        self.prediction.source
    }
}

pub struct GameSession {
    repository: Box<dyn HistoryRepository>,
    history: Vec<RoundRecord>,
    model: OpponentModel,
}

impl GameSession {
    /// Load the stored history and the saved model. Neither failure aborts startup:
    /// an unreadable history starts empty, an unreadable model starts untrained.
    pub fn start(repository: Box<dyn HistoryRepository>, mut model: OpponentModel) -> Self {
        let history = match repository.load() {
            Ok(history) => history,
            Err(e) => {
                error!(
                    "Failed to load history from {}, starting empty: {}",
                    repository.describe(),
                    e
                );
                Vec::new()
            }
        };
        let state = model.restore();

        info!(
            "Session ready: {} rounds from {}, model {:?}",
            history.len(),
            repository.describe(),
            state
        );

        Self {
            repository,
            history,
            model,
        }
    }

    pub fn play_round(&mut self, input: &str) -> Result<RoundResult, GameError> {
        let player_move: Move = input.parse()?;

        // The pending move is not part of `completed`; it never feeds its own prediction.
        let completed = player_moves(&self.history);
        let mut warnings = Vec::new();

        let prediction = if completed.len() + 1 >= MIN_TRAINING_ROUNDS {
            self.retrain(&completed, &mut warnings);
            self.model.predict(&completed)
        } else {
            self.model.random()
        };
        let engine_move = counter(prediction.predicted);

        let record = RoundRecord::new(player_move, engine_move);
        let outcome = record.outcome;

        if let Err(e) = self.repository.append(&record) {
            error!("Failed to persist round: {}", e);
            warnings.push(e.to_string());
        }
        self.history.push(record);

        debug!(
            "Round {}: player {} vs engine {} ({:?}) -> {}",
            self.history.len(),
            player_move,
            engine_move,
            prediction.source,
            outcome
        );

        Ok(RoundResult {
            player_move,
            engine_move,
            outcome,
            prediction,
            message: format!("Engine chose: {}\n{}", engine_move, outcome.message()),
            warnings,
        })
    }

    fn retrain(&mut self, completed: &[Move], warnings: &mut Vec<String>) {
        match self.model.train(completed) {
            Ok(_) => {}
            Err(PredictorError::Persistence(e)) => {
                error!("Failed to save model: {}", e);
                warnings.push(e.to_string());
            }
            Err(e) => warn!("Retrain failed, keeping previous model: {}", e),
        }
    }

    pub fn get_statistics(&self) -> Result<GameStats, GameError> {
        GameStats::from_history(&self.history)
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn predictor_state(&self) -> PredictorState {
        self.model.state()
    }
}
