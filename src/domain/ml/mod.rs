pub mod feature_registry;

pub use feature_registry::{
    FEATURE_NAMES, FeatureVector, MIN_TRAINING_ROUNDS, TrainingSet, WINDOW_SIZE,
    build_features, build_training_set, latest_features,
};
