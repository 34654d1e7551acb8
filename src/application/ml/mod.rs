pub mod opponent_model;
pub mod predictor;
pub mod smartcore_predictor;

pub use opponent_model::{OpponentModel, Prediction, PredictionSource, PredictorState, TrainOutcome};
pub use predictor::MovePredictor;
pub use smartcore_predictor::{ForestSettings, SmartCorePredictor};
