//! Tally CLI - exact dice odds
//!
//! Usage:
//!     tally odds 10 3d6
//!     tally distribution 2d6 d8
//!     tally summary STR=3d6:14 DEX=3d6:9 SIZ=2d6+6:15

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally::dice::{Characteristic, DiceSpec, EngineLimits, OddsEngine};

mod commands;

/// Tally: exact odds for sums of dice
///
/// Builds the generating function of the pool and reads probabilities off
/// its coefficients, with no sampling involved.
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum number of individual dice in a pool
    #[arg(long, global = true, env = "TALLY_MAX_DICE", default_value_t = EngineLimits::default().max_dice)]
    max_dice: u32,

    /// Maximum reachable sum of a pool
    #[arg(long, global = true, env = "TALLY_MAX_DEGREE", default_value_t = EngineLimits::default().max_degree)]
    max_degree: u32,

    /// Number of dice from which products are computed in parallel
    #[arg(long, global = true, default_value_t = EngineLimits::default().parallel_threshold)]
    parallel_threshold: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chance of the pool's sum reaching a target
    Odds {
        /// Target sum
        #[arg(allow_negative_numbers = true)]
        target: i64,

        /// Dice formulas forming the pool, e.g. 3d6 d8 2d10+1
        #[arg(required = true)]
        formulas: Vec<DiceSpec>,
    },

    /// Full distribution of the pool's sum
    Distribution {
        /// Dice formulas forming the pool
        #[arg(required = true)]
        formulas: Vec<DiceSpec>,
    },

    /// Summarize a rolled sheet given as NAME=FORMULA:ROLL entries
    Summary {
        /// Rolled characteristics, e.g. STR=3d6:14
        #[arg(required = true)]
        characteristics: Vec<Characteristic>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = OddsEngine::new(
        EngineLimits::default()
            .with_max_dice(cli.max_dice)
            .with_max_degree(cli.max_degree)
            .with_parallel_threshold(cli.parallel_threshold),
    );
    tracing::debug!(limits = ?engine.limits(), "engine configured");

    match cli.command {
        Commands::Odds { target, formulas } => commands::odds(&engine, target, &formulas),
        Commands::Distribution { formulas } => commands::distribution(&engine, &formulas),
        Commands::Summary { characteristics } => commands::summary(&engine, &characteristics),
    }
}
