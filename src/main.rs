use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::Bar;
use engine::{Crossover, CrossoverEngine};
use host::{BuiltinMaProvider, PositionReader, SimulatedHost};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Crossline strategy runner.
fn main() {
    // Initialize structured logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Replay(args) => {
            if let Err(e) = handle_replay(args) {
                eprintln!("Error during replay: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A generic moving-average crossover strategy engine.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded bar series through the strategy against a simulated host.
    Replay(ReplayArgs),
}

#[derive(Parser)]
struct ReplayArgs {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Path to a JSON file holding the bar series to replay.
    #[arg(long)]
    bars: PathBuf,
}

// ==============================================================================
// Replay Command Logic
// ==============================================================================

/// Drives one closed-bar evaluation cycle per recorded bar and prints a
/// summary of every order submission the engine made.
fn handle_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let config = configuration::load_from(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;

    let file = File::open(&args.bars)
        .with_context(|| format!("opening bar file {}", args.bars.display()))?;
    let bars: Vec<Bar> = serde_json::from_reader(file)
        .with_context(|| format!("decoding bar file {}", args.bars.display()))?;

    tracing::info!(
        symbol = %config.instrument.symbol,
        family = %config.strategy.ma_family,
        bars = bars.len(),
        "starting replay"
    );

    let engine = CrossoverEngine::new(config.strategy.clone(), config.instrument.tick_size)?;
    let provider = BuiltinMaProvider;
    let mut sim = SimulatedHost::new();

    let mut table = Table::new();
    table.set_header(vec![
        "Bar", "Crossover", "Flattened", "Side", "Qty", "Result",
    ]);

    let mut submissions = 0usize;
    for bar_count in 1..=bars.len() {
        let visible = &bars[..bar_count];
        let report = engine.on_bar_update(visible, true, &provider, &mut sim);

        if let Some(result) = report.submission {
            let request = &sim.submissions()[submissions];
            submissions += 1;
            table.add_row(vec![
                visible[bar_count - 1].index.to_string(),
                match report.crossover {
                    Crossover::Up => "UP".to_string(),
                    Crossover::Down => "DOWN".to_string(),
                    Crossover::None => "-".to_string(),
                },
                report.flattened.to_string(),
                request.side.to_string(),
                request.quantity.to_string(),
                result.to_string(),
            ]);
        }
    }

    println!("{table}");
    println!(
        "{} submissions over {} bars; final position: {}",
        submissions,
        bars.len(),
        sim.position().quantity
    );

    Ok(())
}
