//! link-rank CLI
//!
//! Ranks the HTML pages of a directory by PageRank, once by sampling a random
//! surfer and once by fixed-point iteration.

use anyhow::{Context, Result};
use clap::Parser;
use link_rank::{
    config::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLE_COUNT},
    crawl, iterate, report, sample, Config,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "link-rank")]
#[command(
    author,
    version,
    about = "Rank interlinked HTML pages by PageRank"
)]
struct Cli {
    /// Directory holding the *.html pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, env = "LINK_RANK_DAMPING", default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Number of random-walk steps taken by the sampling estimator
    #[arg(long, env = "LINK_RANK_SAMPLES", default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Seed for the sampling estimator; random when omitted
    #[arg(long, env = "LINK_RANK_SEED")]
    seed: Option<u64>,

    /// Rounds after which the iterative estimator gives up
    #[arg(long, env = "LINK_RANK_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Config {
        damping: cli.damping,
        sample_count: cli.samples,
        seed: cli.seed,
        max_iterations: cli.max_iterations,
    };
    config.validate()?;

    let graph = crawl(&cli.corpus)
        .with_context(|| format!("failed to load corpus {}", cli.corpus.display()))?;
    let sampled = sample(&graph, &config)?;
    let iterated = iterate(&graph, &config)?;

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), config.sample_count, &sampled, &iterated)?;
    Ok(())
}
