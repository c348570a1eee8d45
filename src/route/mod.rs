//! Shortest path computation using Dijkstra's algorithm
use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    common::{RouteError, RouteResult},
    graph::{EdgeAttrs, Graph, DEFAULT_WEIGHT_KEY},
};

mod dijkstra;

fn default_weight_key() -> String {
    DEFAULT_WEIGHT_KEY.to_owned()
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchOptions {
    /// Edge attribute used as distance, edges without it weigh 1
    #[serde(default = "default_weight_key")]
    pub weight_key: String,
    /// Nodes farther than this from the start are not explored
    #[serde(default)]
    pub cutoff: Option<f64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { weight_key: default_weight_key(), cutoff: None }
    }
}

impl SearchOptions {
    pub fn with_weight_key<S: Into<String>>(mut self, key: S) -> Self {
        self.weight_key = key.into();
        self
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
}

/// Minimum-weight path, start and end inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<N> {
    pub nodes: Vec<N>,
    pub weight: f64,
}

impl<N> Route<N> {
    /// Consecutive `(from, to)` pairs along the route
    pub fn hops(&self) -> impl Iterator<Item = (&N, &N)> {
        self.nodes.iter().tuple_windows()
    }

    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }
}

/// Read-only shortest path queries over a borrowed graph.
///
/// Holds no search state between calls.
///
/// Edge weights must be non-negative. A negative or NaN weight on an edge the
/// search evaluates fails with [`RouteError::NegativeWeight`], edges the
/// search never reaches are not inspected, so a negative weight beyond the
/// settled region leaves the returned route undefined.
#[derive(Debug, Clone)]
pub struct PathFinder<'g, G: Graph> {
    graph: &'g G,
    options: SearchOptions,
}

impl<'g, G: Graph> PathFinder<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_options(graph, SearchOptions::default())
    }

    pub const fn with_options(graph: &'g G, options: SearchOptions) -> Self {
        Self { graph, options }
    }

    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    fn check_node(&self, node: &G::Node) -> RouteResult<()> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(RouteError::not_found(node))
        }
    }

    fn attr_weight<'k>(
        key: &'k str,
    ) -> impl Fn(&G::Node, &G::Node, &G::Edge) -> Option<f64> + 'k {
        move |_: &G::Node, _: &G::Node, edge: &G::Edge| {
            Some(edge.attr(key).unwrap_or(1.0))
        }
    }

    /// Minimum-weight path from `start` to `end` using the configured
    /// weight attribute. Requires non-negative weights, see [`PathFinder`].
    pub fn find_path(
        &self,
        start: &G::Node,
        end: &G::Node,
    ) -> RouteResult<Route<G::Node>> {
        self.find_path_by(
            start,
            end,
            Self::attr_weight(&self.options.weight_key),
        )
    }

    /// Like [`Self::find_path`], with edge costs computed by `weight`.
    /// Edges for which `weight` returns `None` are ignored. Costs must be
    /// non-negative, see [`PathFinder`].
    pub fn find_path_by<W>(
        &self,
        start: &G::Node,
        end: &G::Node,
        weight: W,
    ) -> RouteResult<Route<G::Node>>
    where
        W: FnMut(&G::Node, &G::Node, &G::Edge) -> Option<f64>,
    {
        self.check_node(start)?;
        self.check_node(end)?;
        debug!("Computing route from {start:?} to {end:?}");
        let tree = self.search(start, Some(end), weight)?;
        let route = tree
            .route_to(end)
            .ok_or_else(|| RouteError::no_path(start, end))?;
        debug!(
            "Found route with {} hop(s), total weight {}",
            route.hop_count(),
            route.weight
        );
        Ok(route)
    }

    /// Total weight of the shortest path from `start` to `end`
    pub fn path_length(
        &self,
        start: &G::Node,
        end: &G::Node,
    ) -> RouteResult<f64> {
        self.find_path(start, end).map(|route| route.weight)
    }

    /// Shortest distance from `start` to every node reachable from it
    pub fn distances_from(
        &self,
        start: &G::Node,
    ) -> RouteResult<FxHashMap<G::Node, f64>> {
        self.check_node(start)?;
        let tree = self.search(
            start,
            None,
            Self::attr_weight(&self.options.weight_key),
        )?;
        Ok(tree.into_distances())
    }
}

/// Minimum-weight path between `start` and `end`, weighted by the edge
/// attribute `weight_key` (missing attributes count as 1).
///
/// Weights must be non-negative. Negative weights are only reported when the
/// search evaluates the offending edge, otherwise the result is undefined.
pub fn find_path<G: Graph>(
    graph: &G,
    start: &G::Node,
    end: &G::Node,
    weight_key: &str,
) -> RouteResult<Route<G::Node>> {
    let options = SearchOptions::default().with_weight_key(weight_key);
    PathFinder::with_options(graph, options).find_path(start, end)
}
