//! CSV-backed round history.
//!
//! Columns: `date,player_move,engine_move,outcome`, header included.
//! Every append rewrites the whole file through [`write_atomic`](super::write_atomic),
//! so a crash mid-write leaves the previous file intact.

use super::write_atomic;
use crate::domain::errors::PersistenceError;
use crate::domain::game::RoundRecord;
use crate::domain::repositories::HistoryRepository;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct CsvHistoryRepository {
    file_path: PathBuf,
}

impl CsvHistoryRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn path_str(&self) -> String {
        self.file_path.display().to_string()
    }

    fn encode(&self, history: &[RoundRecord]) -> Result<Vec<u8>, PersistenceError> {
        let encode_failed = |reason: String| PersistenceError::WriteFailed {
            path: self.path_str(),
            reason,
        };

        let mut wtr = csv::Writer::from_writer(Vec::new());
        for record in history {
            wtr.serialize(record)
                .map_err(|e| encode_failed(e.to_string()))?;
        }
        wtr.into_inner().map_err(|e| encode_failed(e.to_string()))
    }
}

impl HistoryRepository for CsvHistoryRepository {
    fn load(&self) -> Result<Vec<RoundRecord>, PersistenceError> {
        if !self.file_path.exists() {
            debug!("No history file at {:?}, starting empty", self.file_path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.file_path).map_err(|e| PersistenceError::ReadFailed {
            path: self.path_str(),
            reason: e.to_string(),
        })?;
        let mut rdr = csv::Reader::from_reader(BufReader::new(file));

        let mut history = Vec::new();
        for (row, result) in rdr.deserialize::<RoundRecord>().enumerate() {
            let record = result.map_err(|e| PersistenceError::Corrupt {
                path: self.path_str(),
                reason: format!("row {}: {}", row + 1, e),
            })?;
            history.push(record);
        }

        info!("Loaded {} rounds from {:?}", history.len(), self.file_path);
        Ok(history)
    }

    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError> {
        let mut history = self.load()?;
        history.push(record.clone());

        let content = self.encode(&history)?;
        write_atomic(&self.file_path, &content)?;

        debug!(
            "Persisted round {} ({} vs {}) to {:?}",
            history.len(),
            record.player_move,
            record.engine_move,
            self.file_path
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GameError;
    use crate::domain::game::{Move, Outcome};
    use crate::infrastructure::persistence::test_support::unique_temp_dir;
    use chrono::NaiveDateTime;
    use std::fs;

    fn stamp(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = unique_temp_dir("csv_missing");
        let repo = CsvHistoryRepository::new(dir.join("history.csv"));
        assert!(repo.load().unwrap().is_empty());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_append_writes_header_and_rows() {
        let dir = unique_temp_dir("csv_append");
        let path = dir.join("history.csv");
        let mut repo = CsvHistoryRepository::new(&path);

        repo.append(&RoundRecord::at(stamp("2024-03-01 10:00:00"), Move::Rock, Move::Paper))
            .unwrap();
        repo.append(&RoundRecord::at(stamp("2024-03-01 10:00:05"), Move::Scissors, Move::Paper))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,player_move,engine_move,outcome");
        assert_eq!(lines[1], "2024-03-01 10:00:00,rock,paper,engine_win");
        assert_eq!(lines[2], "2024-03-01 10:00:05,scissors,paper,player_win");

        let history = repo.load().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].outcome, Outcome::PlayerWin);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_reload_from_new_instance() {
        let dir = unique_temp_dir("csv_reload");
        let path = dir.join("history.csv");
        let record = RoundRecord::at(stamp("2024-03-01 10:00:00"), Move::Paper, Move::Paper);
        CsvHistoryRepository::new(&path).append(&record).unwrap();

        let reopened = CsvHistoryRepository::new(&path);
        assert_eq!(reopened.load().unwrap(), vec![record]);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_row_is_reported() {
        let dir = unique_temp_dir("csv_corrupt");
        let path = dir.join("history.csv");
        fs::write(
            &path,
            "date,player_move,engine_move,outcome\n2024-03-01 10:00:00,lizard,rock,draw\n",
        )
        .unwrap();

        let err = CsvHistoryRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Corrupt { .. }));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_stats_on_empty_store() {
        let dir = unique_temp_dir("csv_stats");
        let repo = CsvHistoryRepository::new(dir.join("history.csv"));
        assert_eq!(repo.stats(), Err(GameError::NoData));
        fs::remove_dir_all(dir).ok();
    }
}
