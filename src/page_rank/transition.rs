use crate::*;
use algograph::graph::VertexId;
use std::collections::HashSet;

/// Where the random surfer goes next from a given page.
///
/// From a page with `k` links, each linked page gets `damping / k` on top of
/// the `(1 - damping) / n` every page receives. A page without links sends
/// the surfer to any page, itself included, with probability `1 / n`.
pub struct TransitionModel<'a> {
    graph: &'a LinkGraph,
    damping: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(graph: &'a LinkGraph, damping: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&damping) {
            return Err(Error::InvalidConfig(format!(
                "damping={damping} is outside [0, 1]"
            )));
        }
        Ok(Self { graph, damping })
    }

    /// Next-page distribution of `page`, keyed by page name.
    pub fn transition(&self, page: &str) -> Result<Ranks> {
        let v = self.graph.require(page)?;
        Ok(self
            .distribution(v)
            .into_iter()
            .map(|(u, p)| (self.graph.name(u).to_string(), p))
            .collect())
    }

    /// Dense next-vertex distribution of `v`, in page-name order.
    pub(crate) fn distribution(&self, v: VertexId) -> Vec<(VertexId, f64)> {
        let n = self.graph.page_count() as f64;
        let links: HashSet<_, ahash::RandomState> = self.graph.out_links(v).collect();
        let vertices = self.graph.vertices().iter().copied();
        if links.is_empty() {
            return vertices.map(|u| (u, 1.0 / n)).collect();
        }
        let jump = (1.0 - self.damping) / n;
        let follow = self.damping / links.len() as f64;
        vertices
            .map(|u| {
                if links.contains(&u) {
                    (u, follow + jump)
                } else {
                    (u, jump)
                }
            })
            .collect()
    }
}

/// Next-page distribution of the random surfer standing on `page`.
pub fn transition(graph: &LinkGraph, page: &str, damping: f64) -> Result<Ranks> {
    TransitionModel::new(graph, damping)?.transition(page)
}
