//! Game rules: moves, the counter-move selector and the outcome judge.

pub mod moves;
pub mod outcome;
pub mod round;

pub use moves::{Move, counter};
pub use outcome::{Outcome, judge};
pub use round::{RoundRecord, player_moves};
