//! Directed link graph between the pages of a corpus.

use crate::{Error, Result};
use algograph::graph::{directed::TreeBackedGraph, GrowableGraph, QueryableGraph, VertexId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Page name to the raw link targets found in it, as yielded by the loader.
pub type Corpus = BTreeMap<String, BTreeSet<String>>;

/// Immutable link graph.
///
/// Every link target is itself a page of the graph and no page links to
/// itself. Pages without outbound links are kept with an empty link set;
/// how to treat them is up to the consumer.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: TreeBackedGraph,
    names: HashMap<VertexId, String, ahash::RandomState>,
    ids: HashMap<String, VertexId, ahash::RandomState>,
    // vertices sorted by page name
    order: Vec<VertexId>,
}

impl LinkGraph {
    /// Builds a graph from `(page, targets)` pairs.
    ///
    /// Targets naming no page of the input and self-links are dropped.
    /// Fails with [`Error::EmptyCorpus`] if there are no pages at all.
    pub fn new<I, S, L, T>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut corpus = Corpus::new();
        for (page, targets) in docs {
            corpus
                .entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        Self::from_corpus(&corpus)
    }

    pub fn from_corpus(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let mut graph = TreeBackedGraph::new();
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        let mut order = Vec::with_capacity(corpus.len());
        for page in corpus.keys() {
            let v = graph.add_vertex();
            names.insert(v, page.clone());
            ids.insert(page.clone(), v);
            order.push(v);
        }
        for (page, targets) in corpus.iter() {
            let u = *ids.get(page).unwrap();
            for target in targets.iter() {
                if target == page {
                    continue;
                }
                if let Some(v) = ids.get(target) {
                    graph.add_edge(u, *v);
                }
            }
        }
        tracing::debug!(
            pages = graph.vertex_size(),
            links = graph.edge_size(),
            "built link graph"
        );
        Ok(Self {
            graph,
            names,
            ids,
            order,
        })
    }

    pub fn page_count(&self) -> usize {
        self.order.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.ids.contains_key(page)
    }

    /// Page names in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|v| self.name(*v))
    }

    /// Outbound links of `page`, sorted by name.
    pub fn links(&self, page: &str) -> Result<Vec<&str>> {
        let v = self.require(page)?;
        let mut links: Vec<_> = self.out_links(v).map(|u| self.name(u)).collect();
        links.sort_unstable();
        Ok(links)
    }

    pub(crate) fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    pub(crate) fn vertex(&self, page: &str) -> Option<VertexId> {
        self.ids.get(page).copied()
    }

    pub(crate) fn require(&self, page: &str) -> Result<VertexId> {
        self.vertex(page)
            .ok_or_else(|| Error::UnknownPage(page.to_string()))
    }

    pub(crate) fn name(&self, v: VertexId) -> &str {
        self.names.get(&v).unwrap()
    }

    pub(crate) fn out_links(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&v).map(|e| e.sink)
    }
}
