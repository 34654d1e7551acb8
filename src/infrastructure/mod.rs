pub mod persistence;
pub mod repositories;

pub use persistence::CsvHistoryRepository;
pub use repositories::InMemoryHistoryRepository;
