//! Construction of the metro network from stops and routes.

use std::collections::HashMap;

use tracing::info;

use super::{Edge, TransitGraph};
use crate::domain::{LineId, Route, Stop, StopId};

/// Travel time between consecutive stops on a route (minutes).
pub const DEFAULT_TRAVEL_MINS: u32 = 5;

/// Error building the metro network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A route passes through a stop that was never added
    #[error("route {line} references unknown stop {stop}")]
    UnknownStop { line: LineId, stop: StopId },
}

/// Builder for a [`TransitGraph`].
///
/// Stops and routes are collected first; edges are derived once, in
/// [`build`](Self::build). Routes are keyed by line identifier, so registering
/// a route whose line is already known replaces the earlier definition rather
/// than duplicating its edges.
///
/// # Example
///
/// ```
/// use metro_planner::domain::{Route, Stop};
/// use metro_planner::network::NetworkBuilder;
///
/// let graph = NetworkBuilder::new()
///     .add_stop(Stop::new("S1", "Station A"))
///     .add_stop(Stop::new("S2", "Station B"))
///     .register_route(Route::new("R1", "Red Line", ["S1", "S2"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.neighbors("S1").len(), 1);
/// assert_eq!(graph.neighbors("S2").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    stops: HashMap<StopId, Stop>,
    routes: Vec<Route>,
    travel_mins: u32,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            stops: HashMap::new(),
            routes: Vec::new(),
            travel_mins: DEFAULT_TRAVEL_MINS,
        }
    }
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the travel time used for every edge derived from a route.
    pub fn with_travel_mins(mut self, travel_mins: u32) -> Self {
        self.travel_mins = travel_mins;
        self
    }

    /// Add a stop, replacing any stop with the same identifier.
    pub fn add_stop(mut self, stop: Stop) -> Self {
        self.stops.insert(stop.id.clone(), stop);
        self
    }

    /// Register a route.
    ///
    /// A route with an already-registered line identifier replaces the old
    /// one in its original position.
    pub fn register_route(mut self, route: Route) -> Self {
        match self.routes.iter_mut().find(|r| r.id == route.id) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
        self
    }

    /// Freeze the network, deriving a pair of edges (one per direction) for
    /// every consecutive stop pair on every route.
    pub fn build(self) -> Result<TransitGraph, GraphError> {
        let mut adjacency: HashMap<StopId, Vec<Edge>> = HashMap::new();

        for route in &self.routes {
            if let Some(stop) = route.stops.iter().find(|s| !self.stops.contains_key(*s)) {
                return Err(GraphError::UnknownStop {
                    line: route.id.clone(),
                    stop: stop.clone(),
                });
            }

            for (from, to) in route.segments() {
                adjacency.entry(from.clone()).or_default().push(Edge {
                    target: to.clone(),
                    line: route.id.clone(),
                    travel_mins: self.travel_mins,
                });
                adjacency.entry(to.clone()).or_default().push(Edge {
                    target: from.clone(),
                    line: route.id.clone(),
                    travel_mins: self.travel_mins,
                });
            }
        }

        let graph = TransitGraph::from_parts(self.stops, self.routes, adjacency);
        info!(
            stops = graph.stop_count(),
            routes = graph.route_count(),
            edges = graph.edge_count(),
            "Metro graph initialised"
        );

        Ok(graph)
    }
}
