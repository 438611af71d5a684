//! The node contract consumed by the search engines.
//!
//! Anything that can name its nodes, say whether they are walkable, list
//! their neighbours and measure the distance between two of them can be
//! searched. Square grids, hex grids and general graphs are all usable
//! interchangeably. Per-run scratch state (`g`, `h`, connections) is never
//! stored on the graph; see [`crate::search::search_engines::SearchSpace`].

use std::fmt::Debug;
use std::hash::Hash;

pub trait Graph {
    /// Identity of a node. Two equal values denote the same node.
    type Node: Copy + Eq + Hash + Debug;

    /// Whether `node` belongs to this graph.
    fn contains(&self, node: Self::Node) -> bool;

    /// Non-walkable nodes are never expanded into.
    fn is_walkable(&self, node: Self::Node) -> bool;

    /// Append the neighbours of `node` into `buf`. The caller clears `buf`
    /// before calling. The order of neighbours decides how ties are broken.
    fn neighbours(&self, node: Self::Node, buf: &mut Vec<Self::Node>);

    /// Distance between two nodes. Must be non-negative. A* only returns
    /// optimal paths if this never overestimates the true remaining cost.
    fn distance(&self, from: Self::Node, to: Self::Node) -> f64;

    /// Total number of nodes, used to bound path reconstruction.
    fn node_count(&self) -> usize;
}
