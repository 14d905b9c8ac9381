//! Built-in demonstration network.
//!
//! Five stations on two lines, meeting at an interchange:
//!
//! ```text
//!   S1 ── S2 ── S3 ── S4     R1 (Red Line)
//!               │
//!               S5           R2 (Blue Line)
//! ```

use super::{GraphError, NetworkBuilder, TransitGraph};
use crate::domain::{Route, Stop};

/// Build the demonstration network, with 5 minutes between adjacent stops.
pub fn demo_network() -> Result<TransitGraph, GraphError> {
    NetworkBuilder::new()
        .add_stop(Stop::new("S1", "Station A"))
        .add_stop(Stop::new("S2", "Station B"))
        .add_stop(Stop::new("S3", "Station C (Interchange)"))
        .add_stop(Stop::new("S4", "Station D"))
        .add_stop(Stop::new("S5", "Station E"))
        .register_route(Route::new("R1", "Red Line", ["S1", "S2", "S3", "S4"]))
        .register_route(Route::new("R2", "Blue Line", ["S5", "S3"]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_network_shape() {
        let graph = demo_network().unwrap();

        assert_eq!(graph.stop_count(), 5);
        assert_eq!(graph.route_count(), 2);
        // 3 segments on R1 plus 1 on R2, two edges each
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn interchange_is_served_by_both_lines() {
        let graph = demo_network().unwrap();

        let mut lines: Vec<_> = graph
            .neighbors("S3")
            .iter()
            .map(|e| e.line.as_str())
            .collect();
        lines.dedup();
        assert_eq!(lines, vec!["R1", "R2"]);
    }
}
