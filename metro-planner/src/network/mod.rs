//! The metro network graph.
//!
//! The graph is an adjacency list keyed by stop identifier. It is assembled
//! once with a [`NetworkBuilder`] and is read-only afterwards: [`TransitGraph`]
//! exposes no mutating methods, so a single instance can be shared between any
//! number of concurrent searches (by reference or behind an `Arc`).

mod builder;
pub mod seed;

use std::collections::HashMap;

use crate::domain::{LineId, Route, Stop, StopId};

pub use builder::{DEFAULT_TRAVEL_MINS, GraphError, NetworkBuilder};

/// A directed, weighted connection to a neighbouring stop on one line.
///
/// The source stop is implied by the adjacency entry the edge is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Stop this edge leads to.
    pub target: StopId,

    /// Line the edge belongs to.
    pub line: LineId,

    /// Travel time along the edge (minutes).
    pub travel_mins: u32,
}

impl Edge {
    /// Create a new edge.
    pub fn new(target: impl Into<StopId>, line: impl Into<LineId>, travel_mins: u32) -> Self {
        Self {
            target: target.into(),
            line: line.into(),
            travel_mins,
        }
    }
}

/// Immutable metro network.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    stops: HashMap<StopId, Stop>,
    routes: Vec<Route>,
    adjacency: HashMap<StopId, Vec<Edge>>,
}

impl TransitGraph {
    pub(crate) fn from_parts(
        stops: HashMap<StopId, Stop>,
        routes: Vec<Route>,
        adjacency: HashMap<StopId, Vec<Edge>>,
    ) -> Self {
        Self {
            stops,
            routes,
            adjacency,
        }
    }

    /// Create a graph directly from an adjacency list.
    ///
    /// Use this when the graph is built elsewhere and doesn't come from
    /// uniform-weight routes. Edge weights and direction are taken as given.
    /// Any stop that appears as an adjacency key or edge target but not in
    /// `stops` is registered with its identifier as its name.
    pub fn from_adjacency<I>(stops: I, adjacency: HashMap<StopId, Vec<Edge>>) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        let mut stops: HashMap<StopId, Stop> =
            stops.into_iter().map(|s| (s.id.clone(), s)).collect();

        let referenced = adjacency.iter().flat_map(|(from, edges)| {
            std::iter::once(from).chain(edges.iter().map(|e| &e.target))
        });
        for id in referenced {
            if !stops.contains_key(id) {
                stops.insert(id.clone(), Stop::new(id.clone(), id.as_str()));
            }
        }

        Self::from_parts(stops, Vec::new(), adjacency)
    }

    /// Returns true if `id` names a stop in this network.
    pub fn has_stop(&self, id: &str) -> bool {
        self.stops.contains_key(id)
    }

    /// Outgoing edges of a stop, in construction order.
    ///
    /// Unknown stops and stops without edges both yield an empty slice.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a stop record.
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }

    /// All stops, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// Routes the graph was built from, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
