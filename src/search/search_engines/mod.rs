mod astar;
mod bfs;
mod dijkstra;
mod gbfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dijkstra::Dijkstra;
pub use gbfs::GreedyBestFirst;
pub use search_engine::{Relaxation, SearchEngine, SearchEngineName, SearchResult, SearchStrategy};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;

use crate::{graph::Graph, search::SearchError};

/// Find a path from `start` to `target` with A*.
pub fn astar<G: Graph>(
    graph: &G,
    start: G::Node,
    target: G::Node,
) -> Result<SearchResult<G::Node>, SearchError> {
    SearchEngine::new(AStar::new()).search(graph, start, target)
}

/// Find a path from `start` to `target` with breadth-first search.
pub fn breadth_first<G: Graph>(
    graph: &G,
    start: G::Node,
    target: G::Node,
) -> Result<SearchResult<G::Node>, SearchError> {
    SearchEngine::new(BreadthFirst::new()).search(graph, start, target)
}

/// Find a path from `start` to `target` with Dijkstra's algorithm.
pub fn dijkstra<G: Graph>(
    graph: &G,
    start: G::Node,
    target: G::Node,
) -> Result<SearchResult<G::Node>, SearchError> {
    SearchEngine::new(Dijkstra::new()).search(graph, start, target)
}

/// Find a path from `start` to `target` with greedy best-first search.
pub fn greedy_best_first<G: Graph>(
    graph: &G,
    start: G::Node,
    target: G::Node,
) -> Result<SearchResult<G::Node>, SearchError> {
    SearchEngine::new(GreedyBestFirst::new()).search(graph, start, target)
}
