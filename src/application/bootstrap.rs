use crate::application::ml::{OpponentModel, SmartCorePredictor};
use crate::application::session::GameSession;
use crate::config::Config;
use crate::infrastructure::persistence::CsvHistoryRepository;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub struct SessionBootstrap;

impl SessionBootstrap {
    /// File-backed session: CSV history plus a random forest persisted next to it.
    pub fn init(config: &Config) -> GameSession {
        info!(
            "Initializing session (history: {:?}, model: {:?})",
            config.storage.history_file, config.storage.model_file
        );

        let predictor = SmartCorePredictor::new(
            config.storage.model_file.clone(),
            config.model.forest.clone(),
        );
        let model = match config.model.rng_seed {
            Some(seed) => OpponentModel::with_rng(Box::new(predictor), StdRng::seed_from_u64(seed)),
            None => OpponentModel::new(Box::new(predictor)),
        };
        let repository = CsvHistoryRepository::new(config.storage.history_file.clone());

        GameSession::start(Box::new(repository), model)
    }
}
