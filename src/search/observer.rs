//! Progress notifications for visualising a search as it runs. Observers are
//! a side channel only: a search returns the same result with or without
//! one.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "event", content = "node")]
pub enum SearchEvent<N> {
    /// The node was inserted into the frontier
    AddedToFrontier(N),
    /// The node was selected from the frontier
    Finalised(N),
    /// The node lies on the returned path (the start node included)
    OnFinalPath(N),
}

pub trait SearchObserver<N> {
    fn notify(&mut self, event: SearchEvent<N>);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<N> SearchObserver<N> for NoObserver {
    fn notify(&mut self, _event: SearchEvent<N>) {}
}

/// Observer that records every event in order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct EventLog<N> {
    events: Vec<SearchEvent<N>>,
}

impl<N> EventLog<N> {
    pub fn new() -> Self {
        Self { events: vec![] }
    }

    pub fn events(&self) -> &[SearchEvent<N>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<N> Default for EventLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SearchObserver<N> for EventLog<N> {
    fn notify(&mut self, event: SearchEvent<N>) {
        self.events.push(event);
    }
}

impl<N, O: SearchObserver<N> + ?Sized> SearchObserver<N> for &mut O {
    fn notify(&mut self, event: SearchEvent<N>) {
        (**self).notify(event);
    }
}
