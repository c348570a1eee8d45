use std::{cmp::Reverse, fmt::Display, hash::Hash, ops::ControlFlow, time::Instant};

use human_repr::{HumanCount, HumanDuration, HumanThroughput};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    common::{MinFHeap, RouteError, RouteResult},
    graph::Graph,
    route::{PathFinder, Route},
};

/// Settled distances and predecessor links of one search
///
/// Nodes are interned on first discovery, all per-node state is indexed by
/// that slot.
pub(crate) struct SearchTree<N> {
    index: FxHashMap<N, usize>,
    nodes: Vec<N>,
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    settled: Vec<bool>,
}

impl<N: Clone + Eq + Hash> SearchTree<N> {
    fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            nodes: vec![],
            dist: vec![],
            prev: vec![],
            settled: vec![],
        }
    }

    fn intern(&mut self, node: &N) -> usize {
        if let Some(&id) = self.index.get(node) {
            return id;
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node.clone());
        self.dist.push(f64::INFINITY);
        self.prev.push(None);
        self.settled.push(false);
        id
    }

    /// Walk predecessor links back from `goal`, `None` if it was never settled
    pub(crate) fn route_to(&self, goal: &N) -> Option<Route<N>> {
        let &goal = self.index.get(goal)?;
        if !self.settled[goal] {
            return None;
        }
        let mut ids = vec![goal];
        let mut curr = goal;
        while let Some(p) = self.prev[curr] {
            ids.push(p);
            curr = p;
        }
        ids.reverse();
        Some(Route {
            nodes: ids.into_iter().map(|id| self.nodes[id].clone()).collect(),
            weight: self.dist[goal],
        })
    }

    pub(crate) fn into_distances(self) -> FxHashMap<N, f64> {
        let Self { nodes, dist, settled, .. } = self;
        nodes
            .into_iter()
            .zip(dist)
            .zip(settled)
            .filter_map(|((node, d), done)| done.then_some((node, d)))
            .collect()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    settled: usize,
    relaxed: usize,
    queue_peak: usize,
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { settled, relaxed, queue_peak } = self;
        write!(
            f,
            "Settled: {} | Relaxed: {} | Queue peak: {}",
            settled.human_count_bare(),
            relaxed.human_count_bare(),
            queue_peak.human_count_bare()
        )
    }
}

impl<G: Graph> PathFinder<'_, G> {
    /// Dijkstra search from `start`, stops early once `goal` is settled.
    ///
    /// `weight` returns the cost of an edge or `None` to skip it. Negative
    /// and NaN costs abort the search.
    pub(crate) fn search<W>(
        &self,
        start: &G::Node,
        goal: Option<&G::Node>,
        mut weight: W,
    ) -> RouteResult<SearchTree<G::Node>>
    where
        W: FnMut(&G::Node, &G::Node, &G::Edge) -> Option<f64>,
    {
        let t_start = Instant::now();
        let cutoff = self.options.cutoff;
        let mut tree = SearchTree::new();
        let mut queue: MinFHeap<(Reverse<u64>, usize)> = MinFHeap::new();
        let mut stats = SearchStats::default();
        let mut seq = 0u64;
        let mut failure = None;

        let goal_id = goal.map(|g| tree.intern(g));
        let start_id = tree.intern(start);
        tree.dist[start_id] = 0.0;
        queue.push(0.0, (Reverse(seq), start_id));

        while let Some((d, (_, id))) = queue.pop() {
            if tree.settled[id] {
                continue;
            }
            tree.settled[id] = true;
            stats.settled += 1;
            trace!(node = ?tree.nodes[id], dist = d, "settled");
            if goal_id == Some(id) {
                break;
            }
            let current = tree.nodes[id].clone();
            self.graph.visit_edges(&current, |nb, edge| {
                let Some(w) = weight(&current, nb, edge) else {
                    return ControlFlow::Continue(());
                };
                if w.is_nan() || w < 0.0 {
                    failure = Some(RouteError::negative_weight(&current, nb, w));
                    return ControlFlow::Break(());
                }
                stats.relaxed += 1;
                let nd = d + w;
                if cutoff.is_some_and(|c| nd > c) {
                    return ControlFlow::Continue(());
                }
                let nb_id = tree.intern(nb);
                if !tree.settled[nb_id] && nd < tree.dist[nb_id] {
                    tree.dist[nb_id] = nd;
                    tree.prev[nb_id] = Some(id);
                    seq += 1;
                    queue.push(nd, (Reverse(seq), nb_id));
                    stats.queue_peak = stats.queue_peak.max(queue.len());
                }
                ControlFlow::Continue(())
            });
            if let Some(err) = failure.take() {
                return Err(err);
            }
        }

        let elapsed = t_start.elapsed();
        let rate = (stats.settled as f64) / elapsed.as_secs_f64().max(1e-9);
        debug!(
            "{stats} | Took {:.2}, {:.2}",
            elapsed.human_duration(),
            rate.human_throughput(" nodes")
        );
        Ok(tree)
    }
}
