//! Offline trainer: rebuilds the persisted model from a history CSV.
//!
//! Reports hold-out accuracy on the most recent 20% of training pairs, then saves a
//! model fitted on every pair so the interactive engine picks it up on next start.

use anyhow::{Context, Result};
use clap::Parser;
use roshambo::application::ml::{ForestSettings, MovePredictor, SmartCorePredictor};
use roshambo::config::Config;
use roshambo::domain::game::{Move, player_moves};
use roshambo::domain::ml::{FeatureVector, TrainingSet, build_training_set};
use roshambo::domain::repositories::HistoryRepository;
use roshambo::infrastructure::CsvHistoryRepository;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the round history CSV (overrides HISTORY_FILE)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to output model file (overrides MODEL_FILE)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of trees in the random forest (overrides FOREST_N_TREES)
    #[arg(long)]
    n_trees: Option<u16>,

    /// Maximum depth of trees (overrides FOREST_MAX_DEPTH)
    #[arg(long)]
    max_depth: Option<u16>,

    /// Disable train/test split (skip the hold-out evaluation).
    #[arg(long)]
    no_split: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env()?;
    let input = args.input.unwrap_or(config.storage.history_file);
    let output = args.output.unwrap_or(config.storage.model_file);
    let mut forest = config.model.forest;
    if let Some(n_trees) = args.n_trees {
        forest.n_trees = n_trees;
    }
    if args.max_depth.is_some() {
        forest.max_depth = args.max_depth;
    }

    let history = CsvHistoryRepository::new(&input)
        .load()
        .with_context(|| format!("Failed to load history from {:?}", input))?;
    let training_set = build_training_set(&player_moves(&history));

    if training_set.is_empty() {
        warn!(
            "Only {} rounds in {:?}; nothing to train on.",
            history.len(),
            input
        );
        return Ok(());
    }

    print_label_distribution(&training_set);

    if !args.no_split {
        evaluate_holdout(&training_set, &forest)?;
    }

    info!(
        "Training Random Forest (Trees: {}, Depth: {:?}) on {} samples...",
        forest.n_trees,
        forest.max_depth,
        training_set.len()
    );
    let mut predictor = SmartCorePredictor::new(output.clone(), forest);
    predictor.train(&training_set)?;
    predictor.save()?;

    info!("Done. Model saved to {:?}", output);
    Ok(())
}

fn print_label_distribution(set: &TrainingSet) {
    let n = set.len();
    println!("\nLabel Distribution (next move):");
    println!("  Total:    {}", n);
    for m in Move::ALL {
        let count = set
            .labels
            .iter()
            .filter(|&&label| label == m.ordinal() as i32)
            .count();
        println!(
            "  {:<9} {} ({:.1}%)",
            format!("{}:", m),
            count,
            count as f64 / n as f64 * 100.0
        );
    }
    println!();
}

/// Fits on the oldest 80% of pairs and scores the rest.
fn evaluate_holdout(set: &TrainingSet, forest: &ForestSettings) -> Result<()> {
    let split = (set.len() as f64 * 0.8).floor() as usize;
    if split == 0 || split == set.len() {
        info!("Too few samples ({}) for a hold-out split, skipping evaluation.", set.len());
        return Ok(());
    }

    let train = TrainingSet {
        features: set.features[..split].to_vec(),
        labels: set.labels[..split].to_vec(),
    };
    let mut predictor = SmartCorePredictor::new(PathBuf::new(), forest.clone());
    predictor.train(&train)?;

    let mut correct = 0;
    let test_len = set.len() - split;
    for (features, &label) in set.features[split..].iter().zip(&set.labels[split..]) {
        let window: FeatureVector = features.as_slice().try_into()?;
        if predictor.predict(&window)?.ordinal() as i32 == label {
            correct += 1;
        }
    }

    // A correct guess means the counter-move wins the round.
    println!(
        "OOS Test (n={}): accuracy={:.1}% (random baseline 33.3%)",
        test_len,
        correct as f64 / test_len as f64 * 100.0
    );
    Ok(())
}
