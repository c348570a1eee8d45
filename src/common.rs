//! # Common utility types
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    ops::Deref,
};

use thiserror::Error;

/// Path search error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("node {0} not found in graph")]
    NodeNotFound(String),

    #[error("no path from {from} to {to}")]
    NoPathExists { from: String, to: String },

    #[error("invalid edge weight {weight} on {from} -> {to}, weights must be non-negative")]
    NegativeWeight { from: String, to: String, weight: f64 },
}

impl RouteError {
    pub(crate) fn not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Self::NodeNotFound(format!("{node:?}"))
    }

    pub(crate) fn no_path<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        Self::NoPathExists { from: format!("{from:?}"), to: format!("{to:?}") }
    }

    pub(crate) fn negative_weight<N: std::fmt::Debug>(
        from: &N,
        to: &N,
        weight: f64,
    ) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;

/// f64 compare wrapper, NaN sorts last
pub fn fcmp(a: f64, b: f64) -> Ordering {
    match (a, b) {
        (x, y) if x.is_nan() && y.is_nan() => Ordering::Equal,
        (x, _) if x.is_nan() => Ordering::Greater,
        (_, y) if y.is_nan() => Ordering::Less,
        (..) => a.partial_cmp(&b).unwrap_or_else(|| unreachable!()),
    }
}

/// f64 wrapper type implementing `Eq` and `Ord`
#[derive(Debug, Copy, Clone)]
pub struct F64(pub f64);

impl PartialEq for F64 {
    fn eq(&self, other: &Self) -> bool {
        fcmp(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for F64 {}

impl PartialOrd for F64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64 {
    fn cmp(&self, other: &Self) -> Ordering {
        fcmp(self.0, other.0)
    }
}

/// Min-heap priority queue using f64 as priority
///
/// Items with equal priority pop largest-first according to `T`'s ordering,
/// wrap sequence numbers in [`Reverse`] for FIFO tie-breaking.
pub struct MinFHeap<T: Ord>(BinaryHeap<(Reverse<F64>, T)>);

impl<T: Ord> MinFHeap<T> {
    /// Create new, empty priority queue
    pub const fn new() -> Self {
        Self(BinaryHeap::new())
    }

    /// push value `item` with priority `w` into queue
    pub fn push(&mut self, w: f64, item: T) {
        self.0.push((Reverse(F64(w)), item));
    }

    /// Remove and return smallest item and priority
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.0.pop().map(|(Reverse(F64(w)), item)| (w, item))
    }
}

impl<T: Ord> Deref for MinFHeap<T> {
    type Target = BinaryHeap<(Reverse<F64>, T)>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn heap_pops_smallest_first() {
        let mut heap = MinFHeap::new();
        for (w, item) in [(3.0, 'c'), (1.0, 'a'), (2.0, 'b')] {
            heap.push(w, item);
        }
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Some((1.0, 'a')));
        assert_eq!(heap.pop(), Some((2.0, 'b')));
        assert_eq!(heap.pop(), Some((3.0, 'c')));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn heap_ties_are_fifo_with_reverse_seq() {
        let mut heap = MinFHeap::new();
        for (seq, name) in ["x", "y", "z"].into_iter().enumerate() {
            heap.push(1.0, (Reverse(seq), name));
        }
        let order: Vec<_> =
            std::iter::from_fn(|| heap.pop().map(|(_, (_, n))| n)).collect();
        assert_eq!(order, ["x", "y", "z"]);
    }

    #[test]
    fn nan_sorts_last() {
        let mut v = vec![F64(f64::NAN), F64(2.0), F64(-1.0)];
        v.sort();
        assert_eq!(v[0].0, -1.0);
        assert_eq!(v[1].0, 2.0);
        assert!(v[2].0.is_nan());
    }

    #[test]
    fn errors_render_node_names() {
        let err = RouteError::no_path(&"A", &"E");
        assert_eq!(err.to_string(), r#"no path from "A" to "E""#);
        let err = RouteError::not_found(&7u32);
        assert_eq!(err.to_string(), "node 7 not found in graph");
    }
}
