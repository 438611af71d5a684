//! Path search over any [`crate::graph::Graph`].
//!
//! Four interchangeable strategies share one search loop
//! ([`SearchEngine`]) and differ only in how they order the frontier and
//! relax neighbours:
//!
//! | Strategy | Frontier order | Processed when |
//! |---|---|---|
//! | [`AStar`] | `g + h`, then `h` | expanded |
//! | [`BreadthFirst`] | discovery order | discovered |
//! | [`Dijkstra`] | `g` | discovered |
//! | [`GreedyBestFirst`] | `h` | discovered |
//!
//! Scratch state for a run lives in a [`SearchSpace`] built for that run.

mod error;
mod observer;
mod path;
pub mod search_engines;
mod verbosity;

pub use error::SearchError;
pub use observer::{EventLog, NoObserver, SearchEvent, SearchObserver};
pub use path::Path;
pub use search_engines::{
    astar, breadth_first, dijkstra, greedy_best_first, AStar, BreadthFirst, Dijkstra,
    GreedyBestFirst, SearchEngine, SearchEngineName, SearchResult, SearchSpace,
    SearchStatistics, SearchStrategy,
};
pub use verbosity::Verbosity;
