use crate::domain::errors::FeatureError;
use crate::domain::game::Move;

/// Number of preceding player moves fed to the classifier.
pub const WINDOW_SIZE: usize = 3;

/// Rounds required, counting the round being decided, before the model is consulted.
/// Three moves of context, one label, and the pending round.
pub const MIN_TRAINING_ROUNDS: usize = 5;

/// Ordered list of feature names.
/// Any change here is a breaking change for persisted models.
pub const FEATURE_NAMES: &[&str] = &["move_t_minus_3", "move_t_minus_2", "move_t_minus_1"];

pub type FeatureVector = [f64; WINDOW_SIZE];

/// Feature rows and their labels, row `i` labelled by `labels[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<i32>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn encode(m: Move) -> f64 {
    m.ordinal() as f64
}

pub fn encode_label(m: Move) -> i32 {
    m.ordinal() as i32
}

pub fn decode_label(label: i32) -> Option<Move> {
    usize::try_from(label).ok().and_then(Move::from_ordinal)
}

/// Features for predicting the move at `index`: the moves at `index-3..index`, oldest first.
/// `index == moves.len()` addresses the next, not yet played, move.
pub fn build_features(moves: &[Move], index: usize) -> Result<FeatureVector, FeatureError> {
    if index > moves.len() {
        return Err(FeatureError::IndexOutOfRange {
            index,
            len: moves.len(),
        });
    }
    if index < WINDOW_SIZE {
        return Err(FeatureError::InsufficientHistory {
            needed: WINDOW_SIZE,
            available: index,
        });
    }

    let window = &moves[index - WINDOW_SIZE..index];
    Ok([encode(window[0]), encode(window[1]), encode(window[2])])
}

/// Features for the move following the whole history.
pub fn latest_features(moves: &[Move]) -> Result<FeatureVector, FeatureError> {
    build_features(moves, moves.len())
}

/// One pair per `i` in `2..=len-2`: moves `i-2..=i` as features, move `i+1` as label.
pub fn build_training_set(moves: &[Move]) -> TrainingSet {
    let mut set = TrainingSet::default();
    for index in WINDOW_SIZE..moves.len() {
        if let Ok(features) = build_features(moves, index) {
            set.features.push(features.to_vec());
            set.labels.push(encode_label(moves[index]));
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Paper, Rock, Scissors};

    #[test]
    fn test_build_features_uses_preceding_window() {
        let moves = [Rock, Paper, Scissors, Rock];
        assert_eq!(build_features(&moves, 3).unwrap(), [0.0, 1.0, 2.0]);
        assert_eq!(build_features(&moves, 4).unwrap(), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_build_features_requires_three_moves() {
        let moves = [Rock, Paper];
        assert_eq!(
            latest_features(&moves),
            Err(FeatureError::InsufficientHistory {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_build_features_rejects_index_past_end() {
        let moves = [Rock, Paper, Scissors];
        assert_eq!(
            build_features(&moves, 5),
            Err(FeatureError::IndexOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn test_training_set_size() {
        assert!(build_training_set(&[Rock, Paper, Scissors]).is_empty());

        let moves = [Rock, Paper, Scissors, Rock, Paper];
        let set = build_training_set(&moves);
        assert_eq!(set.len(), moves.len() - 3);
        assert_eq!(set.features[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(set.labels[0], 0);
        assert_eq!(set.features[1], vec![1.0, 2.0, 0.0]);
        assert_eq!(set.labels[1], 1);
    }

    #[test]
    fn test_label_codec() {
        for m in Move::ALL {
            assert_eq!(decode_label(encode_label(m)), Some(m));
        }
        assert_eq!(decode_label(-1), None);
        assert_eq!(FEATURE_NAMES.len(), WINDOW_SIZE);
    }
}
