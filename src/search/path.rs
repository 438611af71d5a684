//! A path is the sequence of nodes a search found between its start and its
//! target. This module provides the [`Path`] struct, which represents a path.

use crate::graph::Graph;
use itertools::Itertools;
use std::ops::Deref;

/// Nodes are stored target-first and exclude the start node, so the last
/// element is the node adjacent to the start. Use
/// [`Path::into_start_to_target`] for walking order.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
}

impl<N: Copy> Path<N> {
    /// Build a path from target-first `nodes`, pricing each hop with the
    /// graph's distance function (the hop out of `start` included).
    pub fn new<G>(graph: &G, start: N, nodes: Vec<N>) -> Self
    where
        G: Graph<Node = N>,
    {
        let cost = nodes
            .iter()
            .copied()
            .chain(std::iter::once(start))
            .tuple_windows()
            .map(|(to, from)| graph.distance(from, to))
            .sum();
        Self { nodes, cost }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The nodes from the one after the start up to and including the target.
    pub fn into_start_to_target(self) -> Vec<N> {
        let mut nodes = self.nodes;
        nodes.reverse();
        nodes
    }
}

impl<N> Deref for Path<N> {
    type Target = [N];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}
