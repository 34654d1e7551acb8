//! Roshambo
//!
//! An adaptive rock-paper-scissors opponent. The engine records every round and
//! retrains a random forest on the player's past moves. It then plays the move
//! that beats the predicted next one.
//!
//! ```rust,no_run
//! use roshambo::application::ml::{ForestSettings, OpponentModel, SmartCorePredictor};
//! use roshambo::application::session::GameSession;
//! use roshambo::infrastructure::CsvHistoryRepository;
//!
//! let predictor = SmartCorePredictor::new("data/model.json".into(), ForestSettings::default());
//! let mut session = GameSession::start(
//!     Box::new(CsvHistoryRepository::new("data/history.csv")),
//!     OpponentModel::new(Box::new(predictor)),
//! );
//! match session.play_round("rock") {
//!     Ok(result) => println!("{}", result.message),
//!     Err(e) => println!("{}", e),
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
