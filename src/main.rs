//! Roshambo - interactive rock-paper-scissors against an adaptive engine
//!
//! # Usage
//! ```sh
//! cargo run -- --history data/history.csv
//! ```
//!
//! Type a move (`rock`, `paper`, `scissors`), `s` for statistics,
//! `q` to quit.

use clap::Parser;
use roshambo::application::bootstrap::SessionBootstrap;
use roshambo::application::session::GameSession;
use roshambo::config::Config;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the round history CSV (overrides HISTORY_FILE)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Path to the persisted model (overrides MODEL_FILE)
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Logs go to stderr so the game dialogue on stdout stays readable
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let mut config = Config::from_env()?;
    if let Some(history) = args.history {
        config.storage.history_file = history;
    }
    if let Some(model) = args.model {
        config.storage.model_file = model;
    }

    info!("Roshambo {} starting...", env!("CARGO_PKG_VERSION"));
    let mut session = SessionBootstrap::init(&config);

    println!("Welcome to Rock-Paper-Scissors!");
    println!("Enter 'q' to quit");
    println!("Enter 's' to see statistics");

    run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    info!("Session closed after {} rounds.", session.history().len());
    Ok(())
}

fn run(session: &mut GameSession, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "\nYour move (rock/paper/scissors): ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let choice = line?.trim().to_lowercase();

        match choice.as_str() {
            "q" => break,
            "s" => match session.get_statistics() {
                Ok(stats) => writeln!(out, "{}", stats)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            _ => match session.play_round(&choice) {
                Ok(result) => {
                    writeln!(out, "{}", result.message)?;
                    for warning in &result.warnings {
                        writeln!(out, "Warning: {}", warning)?;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
        }
    }
    Ok(())
}
