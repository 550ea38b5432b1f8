mod traits;
pub use self::traits::*;

pub mod iterated;
pub mod sampled;
pub mod transition;
pub use self::transition::{transition, TransitionModel};

use crate::*;

/// Estimates PageRank by a random walk of `config.sample_count` steps.
pub fn sample(graph: &LinkGraph, config: &Config) -> Result<Ranks> {
    let res = sampled::SampledPageRank::new(graph, config)?.calc()?;
    tracing::debug!(ranks = ?res.debug(graph), "sampled page rank");
    Ok(res.page_rank().clone())
}

/// Computes PageRank by fixed-point iteration.
pub fn iterate(graph: &LinkGraph, config: &Config) -> Result<Ranks> {
    let res = iterated::IteratedPageRank::new(graph, config)?.calc()?;
    tracing::debug!(ranks = ?res.debug(graph), "iterated page rank");
    Ok(res.page_rank().clone())
}
