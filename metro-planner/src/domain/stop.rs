//! Stop identifiers and records.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Identifier of a stop (station) in the metro network.
///
/// Identifiers are opaque strings. No format is enforced: an identifier that
/// doesn't name a registered stop is simply not found by the graph, which
/// includes the empty string.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StopId;
///
/// let s1 = StopId::new("S1");
/// assert_eq!(s1.as_str(), "S1");
/// assert_eq!(s1, StopId::from("S1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Create a stop identifier.
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        StopId::new(s)
    }
}

impl From<String> for StopId {
    fn from(s: String) -> Self {
        StopId(s)
    }
}

impl Borrow<str> for StopId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A stop in the network: an identifier plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: impl Into<StopId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn display() {
        let id = StopId::new("S3");
        assert_eq!(format!("{}", id), "S3");
    }

    #[test]
    fn debug() {
        let id = StopId::new("S3");
        assert_eq!(format!("{:?}", id), "StopId(S3)");
    }

    #[test]
    fn empty_identifier_is_allowed() {
        let id = StopId::new("");
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn equality() {
        assert_eq!(StopId::new("S1"), StopId::from("S1"));
        assert_ne!(StopId::new("S1"), StopId::new("s1"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut names = HashMap::new();
        names.insert(StopId::new("S1"), "Station A");

        assert_eq!(names.get("S1"), Some(&"Station A"));
        assert_eq!(names.get("S2"), None);
    }

    #[test]
    fn hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(StopId::new("S1"));
        assert!(set.contains(&StopId::new("S1")));
        assert!(!set.contains(&StopId::new("S2")));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&StopId::new("S5")).unwrap();
        assert_eq!(json, "\"S5\"");
    }

    #[test]
    fn stop_new() {
        let stop = Stop::new("S3", "Station C (Interchange)");
        assert_eq!(stop.id.as_str(), "S3");
        assert_eq!(stop.name, "Station C (Interchange)");
    }
}
