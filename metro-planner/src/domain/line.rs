//! Line identifiers and route definitions.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::StopId;

/// Identifier of a metro line (e.g. "R1").
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Create a line identifier.
    pub fn new(id: impl Into<String>) -> Self {
        LineId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        LineId::new(s)
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A line's physical path through the network.
///
/// Routes are only consulted while building the graph: each consecutive pair
/// of stops becomes a pair of edges, one per direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: LineId,

    /// Display attribute (e.g. "Red Line").
    pub color: String,

    /// Stops served, in order.
    pub stops: Vec<StopId>,
}

impl Route {
    /// Create a route from stop identifiers in travel order.
    pub fn new<I, S>(id: impl Into<LineId>, color: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StopId>,
    {
        Self {
            id: id.into(),
            color: color.into(),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Consecutive stop pairs along the route.
    ///
    /// A route with fewer than two stops has no segments.
    pub fn segments(&self) -> impl Iterator<Item = (&StopId, &StopId)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_display_and_debug() {
        let line = LineId::new("R1");
        assert_eq!(line.to_string(), "R1");
        assert_eq!(format!("{:?}", line), "LineId(R1)");
    }

    #[test]
    fn segments_of_four_stop_route() {
        let route = Route::new("R1", "Red Line", ["S1", "S2", "S3", "S4"]);
        let segments: Vec<_> = route
            .segments()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();

        assert_eq!(segments, vec![("S1", "S2"), ("S2", "S3"), ("S3", "S4")]);
    }

    #[test]
    fn single_stop_route_has_no_segments() {
        let route = Route::new("R9", "Grey Line", ["S1"]);
        assert_eq!(route.segments().count(), 0);
    }

    #[test]
    fn empty_route_has_no_segments() {
        let route = Route::new("R9", "Grey Line", Vec::<&str>::new());
        assert_eq!(route.segments().count(), 0);
    }
}
