//! Flat, serializable search outcome for callers.

use serde::Serialize;

use crate::domain::StopId;

use super::search::{Itinerary, PathError};

/// The outcome of one search as a single record.
///
/// Exactly one of a path or an error is meaningful. On failure the time and
/// transfer count are zero; the path is empty for rejected inputs and absent
/// when the stops exist but aren't connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Stops visited, origin first
    pub path: Option<Vec<StopId>>,

    /// Real travel time in minutes (transfer penalties excluded)
    pub total_time_mins: u64,

    /// Number of line changes
    pub transfers: u32,

    /// Error message, if no path was found
    pub error: Option<String>,
}

impl PathResult {
    /// Returns true if a path was found.
    pub fn is_found(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Itinerary> for PathResult {
    fn from(itinerary: Itinerary) -> Self {
        Self {
            path: Some(itinerary.path().to_vec()),
            total_time_mins: itinerary.total_time_mins(),
            transfers: itinerary.transfers(),
            error: None,
        }
    }
}

impl From<PathError> for PathResult {
    fn from(err: PathError) -> Self {
        let path = match err {
            PathError::Unreachable { .. } => None,
            PathError::DegenerateInput | PathError::UnknownStation { .. } => Some(Vec::new()),
        };
        Self {
            path,
            total_time_mins: 0,
            transfers: 0,
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<Itinerary, PathError>> for PathResult {
    fn from(outcome: Result<Itinerary, PathError>) -> Self {
        match outcome {
            Ok(itinerary) => itinerary.into(),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::seed::demo_network;
    use crate::planner::find_shortest_path;

    #[test]
    fn found_path_serializes_camel_case() {
        let graph = demo_network().unwrap();
        let result = PathResult::from(find_shortest_path(&graph, "S1", "S5"));

        assert!(result.is_found());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": ["S1", "S2", "S3", "S5"],
                "totalTimeMins": 15,
                "transfers": 1,
                "error": null,
            })
        );
    }

    #[test]
    fn same_stop_has_empty_path() {
        let result = PathResult::from(PathError::DegenerateInput);

        assert!(!result.is_found());
        assert_eq!(result.path, Some(vec![]));
        assert_eq!(result.total_time_mins, 0);
        assert_eq!(result.transfers, 0);
        assert_eq!(
            result.error.as_deref(),
            Some("source and destination cannot be the same")
        );
    }

    #[test]
    fn unknown_station_has_empty_path() {
        let result = PathResult::from(PathError::UnknownStation {
            station: StopId::new("NOPE"),
        });

        assert_eq!(result.path, Some(vec![]));
        assert_eq!(
            result.error.as_deref(),
            Some("invalid source or destination station: NOPE")
        );
    }

    #[test]
    fn unreachable_has_no_path() {
        let result = PathResult::from(PathError::Unreachable {
            from: StopId::new("A"),
            to: StopId::new("B"),
        });

        assert_eq!(result.path, None);
        assert_eq!(result.total_time_mins, 0);
        assert_eq!(result.transfers, 0);
        assert!(!result.is_found());
    }
}
