//! History-level predictor: owns a [`MovePredictor`] and decides when it can be trusted.
//!
//! Untrained or short-history cases fall back to a uniformly random move instead of
//! failing, so the engine can always answer.

use super::predictor::MovePredictor;
use crate::domain::errors::PredictorError;
use crate::domain::game::Move;
use crate::domain::ml::{MIN_TRAINING_ROUNDS, build_training_set, latest_features};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorState {
    Untrained,
    Trained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
    /// Not enough rounds for a single training pair.
    Skipped,
    Trained { samples: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Model,
    RandomFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub predicted: Move,
    pub source: PredictionSource,
}

pub struct OpponentModel {
    predictor: Box<dyn MovePredictor>,
    rng: StdRng,
}

impl OpponentModel {
    pub fn new(predictor: Box<dyn MovePredictor>) -> Self {
        Self::with_rng(predictor, StdRng::from_os_rng())
    }

    pub fn with_rng(predictor: Box<dyn MovePredictor>, rng: StdRng) -> Self {
        Self { predictor, rng }
    }

    pub fn state(&self) -> PredictorState {
        if self.predictor.is_trained() {
            PredictorState::Trained
        } else {
            PredictorState::Untrained
        }
    }

    /// Restore the persisted model. A missing, unreadable or corrupt model leaves the
    /// predictor untrained; startup carries on either way.
    pub fn restore(&mut self) -> PredictorState {
        match self.predictor.load() {
            Ok(true) => info!(
                "Restored {} {}",
                self.predictor.name(),
                self.predictor.version()
            ),
            Ok(false) => info!("No saved model found, starting untrained"),
            Err(e) => {
                error!("Failed to load saved model, starting untrained: {}", e);
                self.predictor.reset();
            }
        }
        self.state()
    }

    /// Full refit from `moves`, the player moves of every completed round.
    ///
    /// The round being decided counts toward [`MIN_TRAINING_ROUNDS`], so `moves` needs
    /// one less. After a successful fit the model is trained even if saving it fails;
    /// the save failure is returned for the caller to surface.
    pub fn train(&mut self, moves: &[Move]) -> Result<TrainOutcome, PredictorError> {
        if moves.len() + 1 < MIN_TRAINING_ROUNDS {
            return Ok(TrainOutcome::Skipped);
        }

        let training_set = build_training_set(moves);
        if training_set.is_empty() {
            return Ok(TrainOutcome::Skipped);
        }

        self.predictor.train(&training_set)?;
        info!("Retrained model on {} samples", training_set.len());

        self.predictor.save()?;
        Ok(TrainOutcome::Trained {
            samples: training_set.len(),
        })
    }

    /// Predict the move that follows `moves`.
    pub fn predict(&mut self, moves: &[Move]) -> Prediction {
        if !self.predictor.is_trained() {
            return self.random();
        }

        let features = match latest_features(moves) {
            Ok(features) => features,
            Err(e) => {
                debug!("{}, playing randomly", e);
                return self.random();
            }
        };

        match self.predictor.predict(&features) {
            Ok(predicted) => Prediction {
                predicted,
                source: PredictionSource::Model,
            },
            Err(e) => {
                warn!("Model inference failed, playing randomly: {}", e);
                self.random()
            }
        }
    }

    /// Uniform draw, used whenever the model cannot be consulted.
    pub fn random(&mut self) -> Prediction {
        Prediction {
            predicted: Move::random(&mut self.rng),
            source: PredictionSource::RandomFallback,
        }
    }

    pub fn predictor(&self) -> &dyn MovePredictor {
        self.predictor.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::smartcore_predictor::{ForestSettings, SmartCorePredictor};
    use crate::domain::errors::PersistenceError;
    use crate::domain::ml::{FeatureVector, TrainingSet};
    use crate::infrastructure::persistence::test_support::unique_temp_dir;
    use Move::{Paper, Rock, Scissors};
    use std::fs;

    /// Always predicts the first label it was trained on; save behaviour is configurable.
    struct StubPredictor {
        label: Option<Move>,
        fail_save: bool,
    }

    impl MovePredictor for StubPredictor {
        fn train(&mut self, training_set: &TrainingSet) -> Result<(), PredictorError> {
            self.label = Move::from_ordinal(training_set.labels[0] as usize);
            Ok(())
        }

        fn predict(&self, _features: &FeatureVector) -> Result<Move, PredictorError> {
            self.label.ok_or(PredictorError::Untrained)
        }

        fn is_trained(&self) -> bool {
            self.label.is_some()
        }

        fn reset(&mut self) {
            self.label = None;
        }

        fn save(&self) -> Result<(), PersistenceError> {
            if self.fail_save {
                Err(PersistenceError::WriteFailed {
                    path: "stub".to_string(),
                    reason: "read-only".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn load(&mut self) -> Result<bool, PersistenceError> {
            Ok(false)
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    fn stub(fail_save: bool) -> OpponentModel {
        OpponentModel::with_rng(
            Box::new(StubPredictor {
                label: None,
                fail_save,
            }),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn test_untrained_predicts_randomly() {
        let mut model = stub(false);
        let prediction = model.predict(&[Rock, Paper, Scissors, Rock]);
        assert_eq!(prediction.source, PredictionSource::RandomFallback);
        assert!(Move::ALL.contains(&prediction.predicted));
    }

    #[test]
    fn test_short_history_skips_training() {
        let mut model = stub(false);
        assert_eq!(model.train(&[Rock, Paper, Scissors]).unwrap(), TrainOutcome::Skipped);
        assert_eq!(model.state(), PredictorState::Untrained);
    }

    #[test]
    fn test_trains_once_a_pair_exists() {
        let mut model = stub(false);
        let outcome = model.train(&[Rock, Paper, Scissors, Paper]).unwrap();
        assert_eq!(outcome, TrainOutcome::Trained { samples: 1 });
        assert_eq!(model.state(), PredictorState::Trained);

        let prediction = model.predict(&[Rock, Paper, Scissors, Paper]);
        assert_eq!(prediction.source, PredictionSource::Model);
        assert_eq!(prediction.predicted, Paper);
    }

    #[test]
    fn test_trained_but_short_history_falls_back() {
        let mut model = stub(false);
        model.train(&[Rock, Paper, Scissors, Paper]).unwrap();
        let prediction = model.predict(&[Rock, Paper]);
        assert_eq!(prediction.source, PredictionSource::RandomFallback);
    }

    #[test]
    fn test_save_failure_keeps_model_trained() {
        let mut model = stub(true);
        let err = model.train(&[Rock, Paper, Scissors, Paper]).unwrap_err();
        assert!(matches!(err, PredictorError::Persistence(_)));
        assert_eq!(model.state(), PredictorState::Trained);
    }

    #[test]
    fn test_restore_corrupt_model_resets() {
        let dir = unique_temp_dir("opponent_corrupt");
        let path = dir.join("model.json");
        fs::write(&path, "{ truncated").unwrap();

        let predictor = SmartCorePredictor::new(path, ForestSettings::default());
        let mut model = OpponentModel::with_rng(Box::new(predictor), StdRng::seed_from_u64(3));
        assert_eq!(model.restore(), PredictorState::Untrained);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_restore_saved_model() {
        let dir = unique_temp_dir("opponent_restore");
        let path = dir.join("model.json");
        let settings = ForestSettings {
            n_trees: 5,
            ..ForestSettings::default()
        };

        let mut first = OpponentModel::with_rng(
            Box::new(SmartCorePredictor::new(path.clone(), settings.clone())),
            StdRng::seed_from_u64(3),
        );
        first.train(&[Rock, Rock, Paper, Rock, Rock, Paper]).unwrap();
        assert!(path.exists());

        let mut second = OpponentModel::with_rng(
            Box::new(SmartCorePredictor::new(path, settings)),
            StdRng::seed_from_u64(4),
        );
        assert_eq!(second.restore(), PredictorState::Trained);
        fs::remove_dir_all(dir).ok();
    }
}
