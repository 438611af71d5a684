//! This module implements the greedy best-first search algorithm.

use crate::{
    graph::Graph,
    search::search_engines::{Relaxation, SearchSpace, SearchStrategy},
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, fmt::Debug, hash::Hash};

/// Ordered by `h`, then insertion order.
type Priority = Reverse<(OrderedFloat<f64>, usize)>;

/// Greedy best-first search. Only the estimate to the target orders the
/// frontier; accumulated cost is ignored. Nodes join the processed set when
/// they are discovered.
#[derive(Debug)]
pub struct GreedyBestFirst<N: Hash + Eq> {
    frontier: PriorityQueue<N, Priority>,
    insertions: usize,
}

impl<N: Hash + Eq> GreedyBestFirst<N> {
    pub fn new() -> Self {
        Self {
            frontier: PriorityQueue::new(),
            insertions: 0,
        }
    }

    fn push(&mut self, node: N, h: f64) {
        self.frontier
            .push(node, Reverse((OrderedFloat(h), self.insertions)));
        self.insertions += 1;
    }
}

impl<N: Hash + Eq> Default for GreedyBestFirst<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SearchStrategy<N> for GreedyBestFirst<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn name(&self) -> &'static str {
        "gbfs"
    }

    fn initialise<G>(&mut self, graph: &G, space: &mut SearchSpace<N>, start: N, target: N)
    where
        G: Graph<Node = N>,
    {
        self.frontier.clear();
        self.insertions = 0;
        let h = graph.distance(start, target);
        let node = space.get_node_mut(start);
        node.set_h(h);
        node.open();
        node.mark_processed();
        self.push(start, h);
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
        let h = graph.distance(neighbour, target);
        let node = space.get_node_mut(neighbour);
        node.set_h(h);
        node.set_connection(current);
        node.open();
        node.mark_processed();
        self.push(neighbour, h);
        Relaxation::Inserted
    }
}
