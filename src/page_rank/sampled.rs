use super::*;
use crate::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::{cell::RefCell, collections::HashMap};

/// PageRank estimated from the visit frequencies of a random surfer.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    graph: &'a LinkGraph,
    sample_count: usize,
    // indexed by position in `graph.vertices()`
    transitions: Vec<CumulativeWeights>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub visits: HashMap<String, usize, ahash::RandomState>,
}

impl<'a> SampledPageRank<'a, SmallRng> {
    /// Seeds from `config.seed`, or from the OS when it is unset.
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(g, config, rng)
    }
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn with_rng(g: &'a LinkGraph, config: &Config, rng: R) -> crate::Result<Self> {
        config.validate()?;
        let model = TransitionModel::new(g, config.damping)?;
        let transitions = g
            .vertices()
            .iter()
            .map(|v| {
                CumulativeWeights::new(model.distribution(*v).into_iter().map(|(_, p)| p))
            })
            .collect();
        Ok(Self {
            graph: g,
            sample_count: config.sample_count,
            transitions,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let vertices = self.graph.vertices();
        let mut rng = self.rng.borrow_mut();
        let mut counts = vec![0usize; vertices.len()];
        let mut cur = rng.random_range(0..vertices.len());
        for _ in 0..self.sample_count {
            counts[cur] += 1;
            cur = self.transitions[cur].sample(&mut *rng);
        }

        let total = self.sample_count as f64;
        let mut page_rank = Ranks::with_hasher(ahash::RandomState::new());
        let mut visits = HashMap::with_hasher(ahash::RandomState::new());
        for (v, count) in vertices.iter().zip(counts) {
            let page = self.graph.name(*v).to_string();
            page_rank.insert(page.clone(), count as f64 / total);
            visits.insert(page, count);
        }
        tracing::info!(samples = self.sample_count, "sampling finished");
        Ok(Self::Result { page_rank, visits })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    graph: &'a LinkGraph,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for page in self.graph.pages() {
            let p = self.result.page_rank.get(page).unwrap();
            let c = self.result.visits.get(page).unwrap();
            writeln!(f, "{page}: {p:?}, {c}")?;
        }
        Ok(())
    }
}

/// Discrete distribution sampled by binary search over running totals.
#[derive(Debug, Clone)]
struct CumulativeWeights {
    totals: Vec<f64>,
}

impl CumulativeWeights {
    fn new(weights: impl Iterator<Item = f64>) -> Self {
        let mut acc = 0.0;
        let totals: Vec<_> = weights
            .map(|w| {
                acc += w;
                acc
            })
            .collect();
        assert!(!totals.is_empty());
        Self { totals }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let total = *self.totals.last().unwrap();
        let x = rng.random::<f64>() * total;
        // zero-weight entries repeat the previous total and are never picked
        let i = self.totals.partition_point(|t| *t <= x);
        i.min(self.totals.len() - 1)
    }
}
