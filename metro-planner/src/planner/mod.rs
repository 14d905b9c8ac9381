//! Path planner using a transfer-aware Dijkstra search.
//!
//! This module answers: "what is the cheapest way from this stop to that
//! one?", where cost is travel time plus a fixed penalty for every change of
//! line. The penalty steers which path is chosen; the reported time is always
//! the real travel time.

mod config;
mod result;
mod search;


pub use config::{SearchConfig, TRANSFER_PENALTY_MINS};
pub use result::PathResult;
pub use search::{Itinerary, PathError, Planner, find_shortest_path};
