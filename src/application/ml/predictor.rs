use crate::domain::errors::{PersistenceError, PredictorError};
use crate::domain::game::Move;
use crate::domain::ml::{FeatureVector, TrainingSet};

/// Interface for move classifiers
pub trait MovePredictor: Send {
    /// Full refit on `training_set`, replacing any previous model.
    fn train(&mut self, training_set: &TrainingSet) -> Result<(), PredictorError>;

    /// Most likely next move for one feature window.
    fn predict(&self, features: &FeatureVector) -> Result<Move, PredictorError>;

    fn is_trained(&self) -> bool;

    /// Drop the fitted model and go back to the untrained state.
    fn reset(&mut self);

    /// Persist the fitted model.
    fn save(&self) -> Result<(), PersistenceError>;

    /// Restore a persisted model. `Ok(false)` when nothing was persisted.
    fn load(&mut self) -> Result<bool, PersistenceError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
