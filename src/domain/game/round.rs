use super::moves::Move;
use super::outcome::{Outcome, judge};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the history file.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed round. Field order matches the history file columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    #[serde(rename = "date", with = "date_format")]
    pub timestamp: NaiveDateTime,
    pub player_move: Move,
    pub engine_move: Move,
    pub outcome: Outcome,
}

impl RoundRecord {
    /// Builds a record stamped with the current local time, judging the outcome.
    pub fn new(player_move: Move, engine_move: Move) -> Self {
        Self::at(now(), player_move, engine_move)
    }

    pub fn at(timestamp: NaiveDateTime, player_move: Move, engine_move: Move) -> Self {
        Self {
            timestamp,
            player_move,
            engine_move,
            outcome: judge(player_move, engine_move),
        }
    }
}

// Whole seconds only; the file format carries no sub-second precision.
fn now() -> NaiveDateTime {
    let local = Local::now().naive_local();
    local.with_nanosecond(0).unwrap_or(local)
}

mod date_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Player moves of a history, oldest first.
pub fn player_moves(history: &[RoundRecord]) -> Vec<Move> {
    history.iter().map(|r| r.player_move).collect()
}
