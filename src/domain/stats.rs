use crate::domain::errors::GameError;
use crate::domain::game::{Outcome, RoundRecord};
use std::fmt;

/// Win/loss/draw tallies over a history.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    pub total: usize,
    pub player_wins: usize,
    pub engine_wins: usize,
    pub draws: usize,
    pub player_win_pct: f64,
    pub engine_win_pct: f64,
    pub draw_pct: f64,
}

impl GameStats {
    /// Fails with `NoData` on an empty history, so percentages are always defined.
    pub fn from_history(history: &[RoundRecord]) -> Result<Self, GameError> {
        if history.is_empty() {
            return Err(GameError::NoData);
        }

        let count = |outcome: Outcome| history.iter().filter(|r| r.outcome == outcome).count();
        let total = history.len();
        let player_wins = count(Outcome::PlayerWin);
        let engine_wins = count(Outcome::EngineWin);
        let draws = count(Outcome::Draw);
        let pct = |n: usize| n as f64 / total as f64 * 100.0;

        Ok(Self {
            total,
            player_wins,
            engine_wins,
            draws,
            player_win_pct: pct(player_wins),
            engine_win_pct: pct(engine_wins),
            draw_pct: pct(draws),
        })
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game statistics:")?;
        writeln!(f, "  Total games:  {}", self.total)?;
        writeln!(
            f,
            "  Your wins:    {} ({:.1}%)",
            self.player_wins, self.player_win_pct
        )?;
        writeln!(
            f,
            "  Engine wins:  {} ({:.1}%)",
            self.engine_wins, self.engine_win_pct
        )?;
        write!(f, "  Draws:        {} ({:.1}%)", self.draws, self.draw_pct)
    }
}
