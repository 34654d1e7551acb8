// Game rules: moves, outcomes, round records
pub mod game;

// Feature construction for the move classifier
pub mod ml;

// Repository traits
pub mod repositories;

// Win/loss tallies
pub mod stats;

// Domain-specific error types
pub mod errors;
