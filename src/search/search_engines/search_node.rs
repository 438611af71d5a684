#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet in the frontier
    New,
    /// Node is in the frontier
    Open,
    /// Node has been selected from the frontier and expanded
    Closed,
}

/// Scratch state the engine keeps for one node during one run.
#[derive(Debug, Clone)]
pub struct SearchNode<N> {
    /// Status of the node within the frontier
    status: SearchNodeStatus,
    /// Whether the node is in the processed set. A* adds nodes when they are
    /// expanded, the other strategies add them as soon as they are
    /// discovered, so this is tracked apart from `status`.
    processed: bool,
    /// G-value of the node, i.e. the best known cost from the start. Search
    /// algorithms that ignore accumulated cost leave this at infinity.
    g: f64,
    /// H-value of the node, i.e. the estimated cost to the target. Search
    /// algorithms that do not use a heuristic leave this at infinity.
    h: f64,
    /// Predecessor on the best known route to this node
    connection: Option<N>,
}

impl<N: Copy> SearchNode<N> {
    pub fn new() -> Self {
        Self {
            status: SearchNodeStatus::New,
            processed: false,
            g: f64::INFINITY,
            h: f64::INFINITY,
            connection: None,
        }
    }

    pub fn open(&mut self) {
        self.status = SearchNodeStatus::Open;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn mark_processed(&mut self) {
        self.processed = true;
    }

    pub fn set_g(&mut self, g: f64) {
        self.g = g;
    }

    pub fn set_h(&mut self, h: f64) {
        self.h = h;
    }

    pub fn set_connection(&mut self, connection: N) {
        self.connection = Some(connection);
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn get_g(&self) -> f64 {
        self.g
    }

    pub fn get_h(&self) -> f64 {
        self.h
    }

    pub fn get_f(&self) -> f64 {
        self.g + self.h
    }

    pub fn get_connection(&self) -> Option<N> {
        self.connection
    }
}

impl<N: Copy> Default for SearchNode<N> {
    fn default() -> Self {
        Self::new()
    }
}
