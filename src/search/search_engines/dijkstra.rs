//! This module implements Dijkstra's algorithm.

use crate::{
    graph::Graph,
    search::search_engines::{Relaxation, SearchNodeStatus, SearchSpace, SearchStrategy},
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, fmt::Debug, hash::Hash};

/// Ordered by `g`, then insertion order.
type Priority = Reverse<(OrderedFloat<f64>, usize)>;

/// Dijkstra's algorithm. Nodes join the processed set when they are
/// discovered; a discovered node is put back into the frontier if a cheaper
/// route turns up before it is expanded, never after.
#[derive(Debug)]
pub struct Dijkstra<N: Hash + Eq> {
    frontier: PriorityQueue<N, Priority>,
    insertions: usize,
}

impl<N: Hash + Eq> Dijkstra<N> {
    pub fn new() -> Self {
        Self {
            frontier: PriorityQueue::new(),
            insertions: 0,
        }
    }

    /// Pushing a node that is already queued replaces its priority.
    fn push(&mut self, node: N, g: f64) {
        self.frontier
            .push(node, Reverse((OrderedFloat(g), self.insertions)));
        self.insertions += 1;
    }
}

impl<N: Hash + Eq> Default for Dijkstra<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SearchStrategy<N> for Dijkstra<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn initialise<G>(&mut self, _graph: &G, space: &mut SearchSpace<N>, start: N, _target: N)
    where
        G: Graph<Node = N>,
    {
        self.frontier.clear();
        self.insertions = 0;
        let node = space.get_node_mut(start);
        node.set_g(0.);
        node.open();
        node.mark_processed();
        self.push(start, 0.);
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
        _target: N,
    ) -> Relaxation
    where
        G: Graph<Node = N>,
    {
        let candidate = space.g(current) + graph.distance(current, neighbour);
        let node = space.get_node_mut(neighbour);
        let discovered = node.is_processed();
        if discovered
            && (node.get_status() == SearchNodeStatus::Closed || candidate >= node.get_g())
        {
            return Relaxation::Unchanged;
        }

        node.set_g(candidate);
        node.set_connection(current);
        node.open();
        node.mark_processed();
        self.push(neighbour, candidate);
        if discovered {
            Relaxation::Reinserted
        } else {
            Relaxation::Inserted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::{Cell, Connectivity, DistanceMetric, GridMap},
        search::{dijkstra, SearchResult},
        test_utils::*,
    };

    #[test]
    fn reinserts_only_before_expansion() {
        let map = GridMap::open(3, 3).with_metric(DistanceMetric::Manhattan);
        let mut strategy = Dijkstra::new();
        let mut space = SearchSpace::new();
        let (start, target) = (Cell::new(0, 0), Cell::new(2, 2));
        strategy.initialise(&map, &mut space, start, target);
        assert_eq!(strategy.select_next(&space), Some(start));
        space.get_node_mut(start).close();

        let mid = Cell::new(1, 1);
        space.get_node_mut(Cell::new(1, 0)).set_g(5.);
        assert_eq!(
            strategy.relax(&map, &mut space, Cell::new(1, 0), mid, target),
            Relaxation::Inserted
        );
        assert_eq!(space.g(mid), 6.);
        assert_eq!(
            strategy.relax(&map, &mut space, start, mid, target),
            Relaxation::Reinserted
        );
        assert_eq!(space.g(mid), 2.);
        assert_eq!(space.get_node(mid).unwrap().get_connection(), Some(start));
        // Queued once, at its improved cost.
        assert_eq!(strategy.select_next(&space), Some(mid));
        assert_eq!(strategy.select_next(&space), None);

        // No cheaper route back to the start exists.
        assert_eq!(
            strategy.relax(&map, &mut space, mid, start, target),
            Relaxation::Unchanged
        );
    }

    #[test]
    fn expanded_node_is_never_reopened() {
        let map = GridMap::open(3, 3).with_metric(DistanceMetric::Manhattan);
        let mut strategy = Dijkstra::new();
        let mut space = SearchSpace::new();
        let (start, target) = (Cell::new(0, 0), Cell::new(2, 2));
        strategy.initialise(&map, &mut space, start, target);
        assert_eq!(strategy.select_next(&space), Some(start));
        space.get_node_mut(start).close();

        // Expanded at a cost that a later route through the start would beat.
        let mid = Cell::new(1, 0);
        let node = space.get_node_mut(mid);
        node.set_g(10.);
        node.open();
        node.mark_processed();
        node.close();

        assert_eq!(
            strategy.relax(&map, &mut space, start, mid, target),
            Relaxation::Unchanged
        );
        assert_eq!(space.g(mid), 10.);
        assert_eq!(space.get_node(mid).unwrap().get_connection(), None);
        assert_eq!(
            space.get_node(mid).unwrap().get_status(),
            SearchNodeStatus::Closed
        );
        assert_eq!(strategy.select_next(&space), None);
    }

    #[test]
    fn selects_smallest_g() {
        let map = GridMap::open(5, 5).with_metric(DistanceMetric::Manhattan);
        let mut strategy = Dijkstra::new();
        let mut space = SearchSpace::new();
        strategy.initialise(&map, &mut space, Cell::new(0, 0), Cell::new(4, 4));
        strategy.frontier.clear();
        strategy.push(Cell::new(3, 3), 6.);
        strategy.push(Cell::new(1, 1), 2.);
        strategy.push(Cell::new(2, 0), 2.);
        assert_eq!(strategy.select_next(&space), Some(Cell::new(1, 1)));
        assert_eq!(strategy.select_next(&space), Some(Cell::new(2, 0)));
        assert_eq!(strategy.select_next(&space), Some(Cell::new(3, 3)));
    }

    #[test]
    fn optimal_on_weighted_diagonals() {
        let map: GridMap = WALL_MAP.parse().unwrap();
        let map = map.with_connectivity(Connectivity::Eight);
        let (start, target) = (map.start().unwrap(), map.target().unwrap());
        let SearchResult::Success(path) = dijkstra(&map, start, target).unwrap() else {
            panic!("expected a path");
        };
        assert_eq!(path.cost(), shortest_cost(&map, start, target).unwrap());
        assert_valid_path(&map, start, target, &path);
    }
}
