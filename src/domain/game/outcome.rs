use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWin,
    EngineWin,
    Draw,
}

impl Outcome {
    /// Line shown to the player after a round.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win!",
            Outcome::EngineWin => "Engine wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::PlayerWin => "player_win",
            Outcome::EngineWin => "engine_win",
            Outcome::Draw => "draw",
        };
        f.write_str(label)
    }
}

/// Outcome judge.
pub fn judge(player: Move, engine: Move) -> Outcome {
    if player == engine {
        Outcome::Draw
    } else if engine.beats() == player {
        Outcome::EngineWin
    } else {
        Outcome::PlayerWin
    }
}
