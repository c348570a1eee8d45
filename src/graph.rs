//! Graph boundary used by the path search
//!
//! The search only needs two things from a graph: a membership test and a
//! way to walk a node's outgoing edges. [`AttrGraph`] is a small adjacency
//! list implementing both, callers with their own representation implement
//! [`Graph`] directly.
use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

use rustc_hash::FxHashMap;
use tracing::trace;

/// Attribute name used for edge weights unless configured otherwise
pub const DEFAULT_WEIGHT_KEY: &str = "weight";

/// Named numeric attributes attached to an edge
pub trait EdgeAttrs {
    fn attr(&self, key: &str) -> Option<f64>;
}

impl<S: BuildHasher> EdgeAttrs for HashMap<String, f64, S> {
    fn attr(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

impl EdgeAttrs for BTreeMap<String, f64> {
    fn attr(&self, key: &str) -> Option<f64> {
        self.get(key).copied()
    }
}

/// Unattributed edge, every lookup misses
impl EdgeAttrs for () {
    fn attr(&self, _key: &str) -> Option<f64> {
        None
    }
}

/// Read-only adjacency access
pub trait Graph {
    type Node: Clone + Eq + Hash + Debug;
    type Edge: EdgeAttrs;

    fn contains(&self, node: &Self::Node) -> bool;

    /// Call `f` with `(neighbor, edge)` for every edge leaving `node`, in a
    /// stable order. Stops early when `f` breaks. Unknown nodes have no
    /// edges.
    fn visit_edges<F>(&self, node: &Self::Node, f: F)
    where
        F: FnMut(&Self::Node, &Self::Edge) -> ControlFlow<()>;
}

impl<G: Graph> Graph for &G {
    type Node = G::Node;
    type Edge = G::Edge;

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }

    fn visit_edges<F>(&self, node: &Self::Node, f: F)
    where
        F: FnMut(&Self::Node, &Self::Edge) -> ControlFlow<()>,
    {
        (**self).visit_edges(node, f)
    }
}

pub type Attrs = FxHashMap<String, f64>;

/// Adjacency-list graph with named numeric edge attributes
///
/// Undirected graphs store each edge in both directions. Parallel edges are
/// kept as-is.
#[derive(Debug, Clone)]
pub struct AttrGraph<N> {
    directed: bool,
    index: FxHashMap<N, usize>,
    nodes: Vec<N>,
    adj: Vec<Vec<(usize, Attrs)>>,
    edge_count: usize,
}

impl<N: Clone + Eq + Hash + Debug> AttrGraph<N> {
    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            index: FxHashMap::default(),
            nodes: vec![],
            adj: vec![],
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert `node` if missing, returns its slot
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.adj.push(vec![]);
        idx
    }

    /// Add an edge carrying `attrs`, inserting missing endpoints
    pub fn add_edge<I, K>(&mut self, from: N, to: N, attrs: I)
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let attrs: Attrs =
            attrs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        trace!(?from, ?to, ?attrs, "add edge");
        let u = self.add_node(from);
        let v = self.add_node(to);
        if !self.directed && u != v {
            self.adj[v].push((u, attrs.clone()));
        }
        self.adj[u].push((v, attrs));
        self.edge_count += 1;
    }

    /// Add an edge with [`DEFAULT_WEIGHT_KEY`] set to `weight`
    pub fn add_weighted_edge(&mut self, from: N, to: N, weight: f64) {
        self.add_edge(from, to, [(DEFAULT_WEIGHT_KEY, weight)]);
    }

    /// Add an edge without attributes
    pub fn add_plain_edge(&mut self, from: N, to: N) {
        self.add_edge(from, to, std::iter::empty::<(String, f64)>());
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn degree(&self, node: &N) -> usize {
        self.index.get(node).map_or(0, |&idx| self.adj[idx].len())
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph for AttrGraph<N> {
    type Node = N;
    type Edge = Attrs;

    fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn visit_edges<F>(&self, node: &N, mut f: F)
    where
        F: FnMut(&N, &Attrs) -> ControlFlow<()>,
    {
        let Some(&idx) = self.index.get(node) else {
            return;
        };
        for (to, attrs) in &self.adj[idx] {
            if f(&self.nodes[*to], attrs).is_break() {
                break;
            }
        }
    }
}
