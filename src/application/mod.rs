pub mod bootstrap;

// Move classifiers and the history-level opponent model
pub mod ml;

// Round orchestration
pub mod session;
