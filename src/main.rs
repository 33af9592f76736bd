//! Command line roller.
//!
//! ```text
//! roll "4d6kh3, 1d20+5"
//! roll "10d6!" --successes ">=5" --seed 7
//! ```

use anyhow::Result;
use clap::Parser;
use dice_notation::{
    Limits, RandomSource, Roller, RngSource, DEFAULT_EXPLOSIONS_PER_DIE, MAX_DICE,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Roll tabletop dice notation
#[derive(Parser)]
#[command(name = "roll")]
#[command(version)]
struct Cli {
    /// Comma separated dice expressions, e.g. "4d6r<2!>5kh3+5, 1d20"
    notation: String,

    /// Count the dice meeting this condition instead of summing them, e.g. ">=5"
    #[arg(short, long)]
    successes: Option<String>,

    /// Seed the random generator for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Most dice a single expression may roll
    #[arg(long, default_value_t = MAX_DICE)]
    max_dice: u32,

    /// Explosions per die when the notation sets no limit
    #[arg(long, default_value_t = DEFAULT_EXPLOSIONS_PER_DIE)]
    default_explosions: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = Limits {
        max_dice: cli.max_dice,
        default_explosions: cli.default_explosions,
    };

    match cli.seed {
        Some(seed) => run(&cli, RngSource::new(StdRng::seed_from_u64(seed)), limits),
        None => run(&cli, RngSource::new(rand::thread_rng()), limits),
    }
}

fn run(cli: &Cli, source: impl RandomSource, limits: Limits) -> Result<()> {
    let mut roller = Roller::with_source(source).with_limits(limits);

    match &cli.successes {
        Some(condition) => {
            for outcome in roller.count_successes(&cli.notation, condition)? {
                println!("{outcome}");
            }
        }
        None => {
            for outcome in roller.roll(&cli.notation)? {
                println!("{outcome}");
            }
        }
    }

    Ok(())
}
