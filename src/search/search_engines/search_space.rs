use crate::search::{search_engines::SearchNode, SearchError};
use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};
use tracing::trace;

/// Side table holding the scratch state of every node touched by one search
/// run. A fresh table is built for each run, so repeated or concurrent
/// searches over the same graph never see each other's state.
#[derive(Debug)]
pub struct SearchSpace<N> {
    nodes: HashMap<N, SearchNode<N>>,
}

impl<N> SearchSpace<N>
where
    N: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub fn get_node(&self, node: N) -> Option<&SearchNode<N>> {
        self.nodes.get(&node)
    }

    /// The scratch state of `node`, created on first access.
    pub fn get_node_mut(&mut self, node: N) -> &mut SearchNode<N> {
        self.nodes.entry(node).or_default()
    }

    /// Best known cost to `node`, infinite if it has not been reached.
    pub fn g(&self, node: N) -> f64 {
        self.get_node(node).map_or(f64::INFINITY, SearchNode::get_g)
    }

    pub fn h(&self, node: N) -> f64 {
        self.get_node(node).map_or(f64::INFINITY, SearchNode::get_h)
    }

    pub fn is_processed(&self, node: N) -> bool {
        self.get_node(node).map_or(false, SearchNode::is_processed)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the connections back from `target` to `start`. The result is in
    /// target-first order and excludes `start`.
    ///
    /// A well-formed run never produces a connection cycle, so revisiting a
    /// node, finding a node without a connection, or taking more than
    /// `max_depth` steps all mean the scratch state is corrupt. These are
    /// reported as errors naming the offending node.
    pub fn extract_path(
        &self,
        start: N,
        target: N,
        max_depth: usize,
    ) -> Result<Vec<N>, SearchError> {
        let mut path = vec![];
        let mut visited = HashSet::new();
        let mut current = target;
        while current != start {
            if path.len() >= max_depth {
                return Err(SearchError::ReconstructionTooDeep {
                    node: format!("{current:?}"),
                    limit: max_depth,
                });
            }
            if !visited.insert(current) {
                return Err(SearchError::ConnectionCycle {
                    node: format!("{current:?}"),
                });
            }
            path.push(current);
            current = self
                .get_node(current)
                .and_then(SearchNode::get_connection)
                .ok_or_else(|| SearchError::MissingConnection {
                    node: format!("{current:?}"),
                })?;
        }
        trace!(path_length = path.len(), "extracted path");
        Ok(path)
    }
}

impl<N> Default for SearchSpace<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(links: &[(u32, u32)]) -> SearchSpace<u32> {
        let mut space = SearchSpace::new();
        for &(node, connection) in links {
            space.get_node_mut(node).set_connection(connection);
        }
        space
    }

    #[test]
    fn extract_path_follows_connections() {
        let space = chain(&[(3, 2), (2, 1), (1, 0)]);
        assert_eq!(space.extract_path(0, 3, 10), Ok(vec![3, 2, 1]));
    }

    #[test]
    fn extract_path_start_is_target() {
        let space: SearchSpace<u32> = SearchSpace::new();
        assert_eq!(space.extract_path(5, 5, 0), Ok(vec![]));
    }

    #[test]
    fn extract_path_detects_cycle() {
        let space = chain(&[(3, 2), (2, 1), (1, 2)]);
        assert_eq!(
            space.extract_path(0, 3, 100),
            Err(SearchError::ConnectionCycle {
                node: "2".to_string()
            })
        );
    }

    #[test]
    fn extract_path_respects_depth_limit() {
        let space = chain(&[(3, 2), (2, 1), (1, 0)]);
        assert_eq!(
            space.extract_path(0, 3, 2),
            Err(SearchError::ReconstructionTooDeep {
                node: "1".to_string(),
                limit: 2
            })
        );
        // Exactly the path length is enough.
        assert!(space.extract_path(0, 3, 3).is_ok());
    }

    #[test]
    fn extract_path_missing_connection() {
        let space = chain(&[(3, 2)]);
        assert_eq!(
            space.extract_path(0, 3, 10),
            Err(SearchError::MissingConnection {
                node: "2".to_string()
            })
        );
    }

    #[test]
    fn untouched_nodes_have_infinite_cost() {
        let mut space = SearchSpace::new();
        space.get_node_mut(1u32).set_g(4.);
        assert_eq!(space.g(1), 4.);
        assert_eq!(space.g(2), f64::INFINITY);
        assert!(!space.is_processed(2));
        assert_eq!(space.len(), 1);
    }
}
