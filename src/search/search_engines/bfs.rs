//! Breadth first search

use crate::{
    graph::Graph,
    search::search_engines::{Relaxation, SearchSpace, SearchStrategy},
};
use std::{collections::VecDeque, fmt::Debug, hash::Hash};

/// Breadth-first search. Unlike the other strategies, a node joins the
/// processed set as soon as it is discovered rather than when it is
/// expanded, so it is only ever queued once.
#[derive(Debug)]
pub struct BreadthFirst<N> {
    frontier: VecDeque<N>,
}

impl<N> BreadthFirst<N> {
    pub fn new() -> Self {
        Self {
            frontier: VecDeque::new(),
        }
    }
}

impl<N> Default for BreadthFirst<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SearchStrategy<N> for BreadthFirst<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn initialise<G>(&mut self, _graph: &G, space: &mut SearchSpace<N>, start: N, _target: N)
    where
        G: Graph<Node = N>,
    {
        self.frontier.clear();
        let node = space.get_node_mut(start);
        node.open();
        node.mark_processed();
        self.frontier.push_back(start);
    }

    fn select_next(&mut self, _space: &SearchSpace<N>) -> Option<N> {
        self.frontier.pop_front()
    }

    fn relax<G>(
        &mut self,
        _graph: &G,
        space: &mut SearchSpace<N>,
        current: N,
        neighbour: N,
        _target: N,
    ) -> Relaxation
    where
        G: Graph<Node = N>,
    {
        if space.is_processed(neighbour) {
            return Relaxation::Unchanged;
        }
        let node = space.get_node_mut(neighbour);
        node.set_connection(current);
        node.open();
        node.mark_processed();
        self.frontier.push_back(neighbour);
        Relaxation::Inserted
    }
}
