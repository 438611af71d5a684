use thiserror::Error;

/// Failures that abort a search. An unreachable target is not one of them;
/// that is reported as [`crate::search::SearchResult::NoPath`].
///
/// Nodes are recorded by their `Debug` rendering so the error does not need
/// to be generic over the graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("node {node} is not part of the graph")]
    UnknownNode { node: String },
    #[error("connection chain revisits node {node}")]
    ConnectionCycle { node: String },
    #[error("path reconstruction passed {limit} steps at node {node}")]
    ReconstructionTooDeep { node: String, limit: usize },
    #[error("node {node} on the path has no connection")]
    MissingConnection { node: String },
}

impl SearchError {
    pub(crate) fn unknown_node(node: impl std::fmt::Debug) -> Self {
        Self::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}
