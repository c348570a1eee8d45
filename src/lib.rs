#![cfg_attr(
    not(test),
    deny(clippy::unwrap_in_result, clippy::unwrap_used, clippy::expect_used)
)]
#![allow(clippy::cast_precision_loss)]
#![warn(
    rust_2018_idioms,
    rust_2021_compatibility,
    arithmetic_overflow,
    nonstandard_style,
    clippy::disallowed_types,
    clippy::nursery,
    // clippy::pedantic
)]
//! Weighted shortest paths with Dijkstra's algorithm.
//!
//! ```
//! use waypath::{find_path, AttrGraph, DEFAULT_WEIGHT_KEY};
//!
//! let mut g = AttrGraph::undirected();
//! g.add_weighted_edge("A", "B", 1.0);
//! g.add_weighted_edge("B", "D", 5.0);
//! g.add_weighted_edge("A", "C", 2.0);
//! g.add_weighted_edge("C", "D", 2.0);
//! let route = find_path(&g, &"A", &"D", DEFAULT_WEIGHT_KEY)?;
//! assert_eq!(route.nodes, ["A", "C", "D"]);
//! assert_eq!(route.weight, 4.0);
//! # Ok::<(), waypath::RouteError>(())
//! ```

pub mod common;
pub mod graph;
pub mod logging;
pub mod route;

pub use common::{RouteError, RouteResult};
pub use graph::{AttrGraph, Attrs, EdgeAttrs, Graph, DEFAULT_WEIGHT_KEY};
pub use route::{find_path, PathFinder, Route, SearchOptions};
