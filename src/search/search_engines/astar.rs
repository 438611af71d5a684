//! This module implements the A* search algorithm.

use crate::{
    graph::Graph,
    search::search_engines::{Relaxation, SearchNodeStatus, SearchSpace, SearchStrategy},
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, fmt::Debug, hash::Hash};

/// Ordered by `f`, then `h`, then insertion order.
type Priority = Reverse<(OrderedFloat<f64>, OrderedFloat<f64>, usize)>;

/// A* search. Nodes enter the processed set when they are expanded, and a
/// processed node is never expanded again.
#[derive(Debug)]
pub struct AStar<N: Hash + Eq> {
    frontier: PriorityQueue<N, Priority>,
    insertions: usize,
}

impl<N: Hash + Eq> AStar<N> {
    pub fn new() -> Self {
        Self {
            frontier: PriorityQueue::new(),
            insertions: 0,
        }
    }

    fn push(&mut self, node: N, f: f64, h: f64) {
        self.frontier
            .push(node, Reverse((OrderedFloat(f), OrderedFloat(h), self.insertions)));
        self.insertions += 1;
    }
}

impl<N: Hash + Eq> Default for AStar<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SearchStrategy<N> for AStar<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn name(&self) -> &'static str {
        "astar"
    }

    fn initialise<G>(&mut self, graph: &G, space: &mut SearchSpace<N>, start: N, target: N)
    where
        G: Graph<Node = N>,
    {
        self.frontier.clear();
        self.insertions = 0;
        let h = graph.distance(start, target);
        let node = space.get_node_mut(start);
        node.set_g(0.);
        node.set_h(h);
        node.open();
        self.push(start, h, h);
    }

    fn select_next(&mut self, _space: &SearchSpace<N>) -> Option<N> {
        self.frontier.pop().map(|(node, _)| node)
    }

    fn relax<G>(
        &mut self,
        graph: &G,
        space: &mut SearchSpace<N>,
        current: N,
        neighbour: N,
        target: N,
    ) -> Relaxation
    where
        G: Graph<Node = N>,
    {
        if space.is_processed(neighbour) {
            return Relaxation::Unchanged;
        }
        let candidate = space.g(current) + graph.distance(current, neighbour);
        let node = space.get_node_mut(neighbour);
        let in_frontier = node.get_status() == SearchNodeStatus::Open;
        if in_frontier && candidate >= node.get_g() {
            return Relaxation::Unchanged;
        }

        node.set_g(candidate);
        node.set_connection(current);
        if in_frontier {
            let f = OrderedFloat(node.get_f());
            self.frontier
                .change_priority_by(&neighbour, |priority| priority.0 .0 = f);
            Relaxation::Updated
        } else {
            let h = graph.distance(neighbour, target);
            node.set_h(h);
            node.open();
            self.push(neighbour, candidate + h, h);
            Relaxation::Inserted
        }
    }
}
