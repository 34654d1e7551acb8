use crate::domain::errors::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hand shape. The ordinal (`Rock = 0`, `Paper = 1`, `Scissors = 2`) is only
/// used as the classifier encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn ordinal(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The move this one defeats: rock > scissors > paper > rock.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that strictly defeats `self`.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Uniform draw over the three moves.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "pierre" => Ok(Move::Rock),
            "paper" | "papier" => Ok(Move::Paper),
            "scissors" | "ciseaux" => Ok(Move::Scissors),
            _ => Err(GameError::InvalidMove {
                input: s.to_string(),
            }),
        }
    }
}

/// Counter-move selector: the move that beats the predicted one.
pub fn counter(predicted: Move) -> Move {
    predicted.counter()
}
