use super::predictor::MovePredictor;
use crate::domain::errors::{PersistenceError, PredictorError};
use crate::domain::game::Move;
use crate::domain::ml::feature_registry::decode_label;
use crate::domain::ml::{FeatureVector, TrainingSet};
use crate::infrastructure::persistence::write_atomic;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

type Forest = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// smartcore refuses to fit a tree on a single class; such a set is stored as a constant.
#[derive(Serialize, Deserialize)]
enum FittedModel {
    Constant { label: i32 },
    Forest(Forest),
}

/// Random forest hyper-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestSettings {
    pub n_trees: u16,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub seed: u64,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            seed: 0,
        }
    }
}

impl ForestSettings {
    fn parameters(&self) -> RandomForestClassifierParameters {
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(self.n_trees.into())
            .with_min_samples_split(self.min_samples_split)
            .with_seed(self.seed);
        match self.max_depth {
            Some(depth) => params.with_max_depth(depth),
            None => params,
        }
    }
}

/// Random forest classifier persisted as serde JSON at `model_path`.
pub struct SmartCorePredictor {
    model: Option<FittedModel>,
    model_path: PathBuf,
    settings: ForestSettings,
}

impl SmartCorePredictor {
    pub fn new(model_path: PathBuf, settings: ForestSettings) -> Self {
        Self {
            model: None,
            model_path,
            settings,
        }
    }

    fn path_str(&self) -> String {
        self.model_path.display().to_string()
    }
}

impl MovePredictor for SmartCorePredictor {
    fn train(&mut self, training_set: &TrainingSet) -> Result<(), PredictorError> {
        if training_set.is_empty() {
            return Err(PredictorError::EmptyTrainingSet);
        }

        let first = training_set.labels[0];
        if training_set.labels.iter().all(|&label| label == first) {
            debug!("Single-class training set, predicting label {}", first);
            self.model = Some(FittedModel::Constant { label: first });
            return Ok(());
        }

        let x = DenseMatrix::from_2d_vec(&training_set.features).map_err(|e| {
            PredictorError::FitFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;
        let forest = Forest::fit(&x, &training_set.labels, self.settings.parameters())
            .map_err(|e| PredictorError::FitFailed {
                reason: e.to_string(),
            })?;

        debug!(
            "Fitted {} trees on {} samples",
            self.settings.n_trees,
            training_set.len()
        );
        self.model = Some(FittedModel::Forest(forest));
        Ok(())
    }

    fn predict(&self, features: &FeatureVector) -> Result<Move, PredictorError> {
        let forest = match self.model.as_ref().ok_or(PredictorError::Untrained)? {
            FittedModel::Constant { label } => {
                return decode_label(*label).ok_or_else(|| PredictorError::InferenceFailed {
                    reason: format!("Unknown label {}", label),
                });
            }
            FittedModel::Forest(forest) => forest,
        };

        let input = DenseMatrix::from_2d_vec(&vec![features.to_vec()]).map_err(|e| {
            PredictorError::InferenceFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;
        let predictions = forest
            .predict(&input)
            .map_err(|e| PredictorError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let label = predictions
            .first()
            .copied()
            .ok_or_else(|| PredictorError::InferenceFailed {
                reason: "No prediction returned".to_string(),
            })?;
        decode_label(label).ok_or_else(|| PredictorError::InferenceFailed {
            reason: format!("Unknown label {}", label),
        })
    }

    fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    fn reset(&mut self) {
        self.model = None;
    }

    fn save(&self) -> Result<(), PersistenceError> {
        let Some(model) = &self.model else {
            return Ok(());
        };

        let content = serde_json::to_vec(model).map_err(|e| PersistenceError::WriteFailed {
            path: self.path_str(),
            reason: e.to_string(),
        })?;
        write_atomic(&self.model_path, &content)?;

        debug!("Saved model to {:?}", self.model_path);
        Ok(())
    }

    fn load(&mut self) -> Result<bool, PersistenceError> {
        if !self.model_path.exists() {
            return Ok(false);
        }

        let buffer = fs::read(&self.model_path).map_err(|e| PersistenceError::ReadFailed {
            path: self.path_str(),
            reason: e.to_string(),
        })?;
        let model: FittedModel =
            serde_json::from_slice(&buffer).map_err(|e| PersistenceError::Corrupt {
                path: self.path_str(),
                reason: e.to_string(),
            })?;

        info!("Successfully loaded model from {:?}", self.model_path);
        self.model = Some(model);
        Ok(true)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest Classifier"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
