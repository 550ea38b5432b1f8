use super::*;
use crate::*;
use algograph::graph::VertexId;
use std::collections::HashMap;

/// Largest per-page change between two rounds that counts as converged.
pub const TOLERANCE: f64 = 0.001;

/// PageRank as the fixed point of
/// `rank(p) = (1 - d) / n + d * sum(rank(q) / outdegree(q))` over the pages
/// `q` linking to `p`.
///
/// Pages without links are treated as linking to every page, themselves
/// included. That expansion lives in this estimator's own reverse index; the
/// shared [`LinkGraph`] is left untouched.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    max_iterations: usize,
    incoming: HashMap<VertexId, Vec<VertexId>, ahash::RandomState>,
    out_degrees: HashMap<VertexId, f64, ahash::RandomState>,
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub delta: Ranks,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        config.validate()?;
        let vertices = g.vertices();
        let mut incoming: HashMap<_, Vec<_>, ahash::RandomState> = vertices
            .iter()
            .map(|v| (*v, Vec::new()))
            .collect();
        let mut out_degrees = HashMap::with_hasher(ahash::RandomState::new());
        for u in vertices.iter().copied() {
            let links: Vec<_> = g.out_links(u).collect();
            let links = if links.is_empty() {
                vertices.to_vec()
            } else {
                links
            };
            out_degrees.insert(u, links.len() as f64);
            for v in links {
                incoming.get_mut(&v).unwrap().push(u);
            }
        }
        Ok(Self {
            graph: g,
            damping: config.damping,
            max_iterations: config.max_iterations,
            incoming,
            out_degrees,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let vertices = self.graph.vertices();
        let damping = self.damping;
        let n = vertices.len() as f64;
        let mut p: HashMap<_, _, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        for round in 1..=self.max_iterations {
            r.clear();
            for v in vertices.iter() {
                let mut x = (1.0 - damping) / n;
                for u in self.incoming.get(v).unwrap().iter() {
                    let from = p.get(u).unwrap();
                    let degree = self.out_degrees.get(u).unwrap();
                    x += damping * from / degree;
                }
                r.insert(*v, x);
            }

            delta.clear();
            for v in vertices.iter() {
                let a = r.get(v).unwrap();
                let b = p.get(v).unwrap();
                delta.insert(*v, a - b);
            }
            tracing::debug!(round, l1 = norm_1(&delta), "page rank round");

            std::mem::swap(&mut p, &mut r);
            if delta.values().all(|d| d.abs() <= TOLERANCE) {
                tracing::info!(iterations = round, "iteration converged");
                return Ok(Self::Result {
                    page_rank: self.by_name(&p),
                    delta: self.by_name(&delta),
                    iterations: round,
                });
            }
        }
        Err(Error::NonConvergence {
            iterations: self.max_iterations,
        })
    }
}

impl IteratedPageRank<'_> {
    fn by_name(&self, xs: &HashMap<VertexId, f64, ahash::RandomState>) -> Ranks {
        xs.iter()
            .map(|(v, x)| (self.graph.name(*v).to_string(), *x))
            .collect()
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
            let d = self.result.delta.get(page).unwrap();
            writeln!(f, "{page}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
