use crate::{
    graph::Graph,
    search::{
        search_engines::{
            AStar, BreadthFirst, Dijkstra, GreedyBestFirst, SearchSpace, SearchStatistics,
        },
        NoObserver, Path, SearchError, SearchEvent, SearchObserver,
    },
};
use serde::{Deserialize, Serialize};
use std::iter;
use strum_macros::{EnumIs, EnumIter};
use tracing::{debug, error, info, trace};

#[derive(Debug, Clone, PartialEq, EnumIs)]
pub enum SearchResult<N> {
    /// The search reached the target
    Success(Path<N>),
    /// The frontier ran out before the target was reached
    NoPath,
}

/// What a relaxation did to a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Nothing changed
    Unchanged,
    /// The neighbour entered the frontier for the first time
    Inserted,
    /// The neighbour was already in the frontier and got a cheaper route
    Updated,
    /// The neighbour had been discovered before, got a cheaper route and was
    /// put back into the frontier
    Reinserted,
}

/// The policy part of a search: how the frontier is ordered and how
/// neighbours are relaxed. The loop that drives a strategy lives in
/// [`SearchEngine`].
pub trait SearchStrategy<N> {
    fn name(&self) -> &'static str;

    /// Reset the frontier and seed it with `start`.
    fn initialise<G>(&mut self, graph: &G, space: &mut SearchSpace<N>, start: N, target: N)
    where
        G: Graph<Node = N>;

    /// Remove and return the next node to expand.
    fn select_next(&mut self, space: &SearchSpace<N>) -> Option<N>;

    /// Consider reaching the walkable `neighbour` through `current`.
    fn relax<G>(
        &mut self,
        graph: &G,
        space: &mut SearchSpace<N>,
        current: N,
        neighbour: N,
        target: N,
    ) -> Relaxation
    where
        G: Graph<Node = N>;
}

/// Drives a [`SearchStrategy`] from a start node until the target is
/// selected or the frontier is exhausted.
#[derive(Debug)]
pub struct SearchEngine<S> {
    strategy: S,
    max_reconstruction_depth: Option<usize>,
    statistics: Option<SearchStatistics>,
}

impl<S> SearchEngine<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_reconstruction_depth: None,
            statistics: None,
        }
    }

    /// Override the bound on path reconstruction. By default it is the
    /// number of nodes in the graph.
    pub fn with_max_reconstruction_depth(mut self, depth: Option<usize>) -> Self {
        self.max_reconstruction_depth = depth;
        self
    }

    /// Statistics of the last run, if any.
    pub fn statistics(&self) -> Option<&SearchStatistics> {
        self.statistics.as_ref()
    }

    pub fn search<G>(
        &mut self,
        graph: &G,
        start: G::Node,
        target: G::Node,
    ) -> Result<SearchResult<G::Node>, SearchError>
    where
        G: Graph,
        S: SearchStrategy<G::Node>,
    {
        self.search_with_observer(graph, start, target, NoObserver)
    }

    pub fn search_with_observer<G, O>(
        &mut self,
        graph: &G,
        start: G::Node,
        target: G::Node,
        mut observer: O,
    ) -> Result<SearchResult<G::Node>, SearchError>
    where
        G: Graph,
        S: SearchStrategy<G::Node>,
        O: SearchObserver<G::Node>,
    {
        for node in [start, target] {
            if !graph.contains(node) {
                return Err(SearchError::unknown_node(node));
            }
        }

        info!(engine = self.strategy.name(), ?start, ?target);
        let mut statistics = SearchStatistics::new();
        let mut space = SearchSpace::new();
        let mut neighbours = Vec::new();

        self.strategy.initialise(graph, &mut space, start, target);
        statistics.increment_generated_nodes();
        observer.notify(SearchEvent::AddedToFrontier(start));

        let result = loop {
            let Some(current) = self.strategy.select_next(&space) else {
                break Ok(SearchResult::NoPath);
            };
            let node = space.get_node_mut(current);
            node.close();
            node.mark_processed();
            statistics.increment_expanded_nodes();
            observer.notify(SearchEvent::Finalised(current));
            trace!(node = ?current, g = space.g(current), h = space.h(current), "expanding");

            if current == target {
                let max_depth = self
                    .max_reconstruction_depth
                    .unwrap_or_else(|| graph.node_count());
                break space.extract_path(start, target, max_depth).map(|nodes| {
                    for &node in nodes.iter().chain(iter::once(&start)) {
                        observer.notify(SearchEvent::OnFinalPath(node));
                    }
                    SearchResult::Success(Path::new(graph, start, nodes))
                });
            }

            neighbours.clear();
            graph.neighbours(current, &mut neighbours);
            for &neighbour in &neighbours {
                if !graph.is_walkable(neighbour) {
                    continue;
                }
                match self
                    .strategy
                    .relax(graph, &mut space, current, neighbour, target)
                {
                    Relaxation::Unchanged => {}
                    Relaxation::Inserted => {
                        statistics.increment_generated_nodes();
                        observer.notify(SearchEvent::AddedToFrontier(neighbour));
                    }
                    Relaxation::Updated => statistics.increment_improved_nodes(),
                    Relaxation::Reinserted => {
                        statistics.increment_improved_nodes();
                        statistics.increment_generated_nodes();
                        observer.notify(SearchEvent::AddedToFrontier(neighbour));
                    }
                }
            }
        };

        statistics.finalise_search();
        debug!(touched_nodes = space.len());
        match &result {
            Ok(SearchResult::Success(path)) => {
                info!(path_length = path.len(), path_cost = path.cost(), "path found")
            }
            Ok(SearchResult::NoPath) => info!("no path found"),
            Err(e) => error!("search aborted: {}", e),
        }
        self.statistics = Some(statistics);
        result
    }
}

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "astar", help = "A* search, ordered by g + h then h.")]
    #[serde(rename = "astar")]
    #[default]
    AStar,
    #[clap(name = "bfs", help = "Breadth-first search, fewest edges.")]
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[clap(help = "Dijkstra's algorithm, ordered by g.")]
    Dijkstra,
    #[clap(name = "gbfs", help = "Greedy best-first search, ordered by h.")]
    #[serde(rename = "gbfs")]
    GreedyBestFirst,
}

impl SearchEngineName {
    pub fn search<G, O>(
        &self,
        graph: &G,
        start: G::Node,
        target: G::Node,
        max_reconstruction_depth: Option<usize>,
        observer: O,
    ) -> Result<SearchResult<G::Node>, SearchError>
    where
        G: Graph,
        O: SearchObserver<G::Node>,
    {
        match self {
            SearchEngineName::AStar => SearchEngine::new(AStar::new())
                .with_max_reconstruction_depth(max_reconstruction_depth)
                .search_with_observer(graph, start, target, observer),
            SearchEngineName::BreadthFirst => SearchEngine::new(BreadthFirst::new())
                .with_max_reconstruction_depth(max_reconstruction_depth)
                .search_with_observer(graph, start, target, observer),
            SearchEngineName::Dijkstra => SearchEngine::new(Dijkstra::new())
                .with_max_reconstruction_depth(max_reconstruction_depth)
                .search_with_observer(graph, start, target, observer),
            SearchEngineName::GreedyBestFirst => SearchEngine::new(GreedyBestFirst::new())
                .with_max_reconstruction_depth(max_reconstruction_depth)
                .search_with_observer(graph, start, target, observer),
        }
    }
}
