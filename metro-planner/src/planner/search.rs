//! Transfer-aware shortest path search.
//!
//! Dijkstra's algorithm run over (stop, line held) states rather than stops:
//! whether the next edge costs a transfer depends on the line just ridden, so
//! the same stop may be settled once per arrival line. Stale queue entries are
//! skipped on pop (lazy deletion) instead of being decreased in place.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{LineId, StopId};
use crate::network::{Edge, TransitGraph};

use super::config::SearchConfig;

/// Why no path was returned.
///
/// These are ordinary outcomes of a search, not faults: the planner always
/// completes and reports one of these or an [`Itinerary`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and destination are the same stop
    #[error("source and destination cannot be the same")]
    DegenerateInput,

    /// Source or destination is not in the network
    #[error("invalid source or destination station: {station}")]
    UnknownStation { station: StopId },

    /// Both stops exist but nothing connects them
    #[error("no connecting path exists from {from} to {to}")]
    Unreachable { from: StopId, to: StopId },
}

/// The cheapest path between two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    path: Vec<StopId>,
    lines: Vec<LineId>,
    total_time_mins: u64,
    transfers: u32,
}

impl Itinerary {
    /// Stops visited, origin first. Always at least two stops.
    pub fn path(&self) -> &[StopId] {
        &self.path
    }

    /// Line ridden on each hop: `lines()[i]` takes `path()[i]` to `path()[i + 1]`.
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    /// Real travel time along the path (minutes), excluding transfer penalties.
    pub fn total_time_mins(&self) -> u64 {
        self.total_time_mins
    }

    /// Returns the real travel time as a Duration.
    ///
    /// Saturates at `Duration::MAX` for times too long to represent.
    pub fn total_time(&self) -> Duration {
        i64::try_from(self.total_time_mins)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }

    /// Number of line changes.
    pub fn transfers(&self) -> u32 {
        self.transfers
    }

    /// First stop of the path; a found path always has at least two stops.
    pub fn origin(&self) -> &StopId {
        &self.path[0]
    }

    /// Last stop of the path; a found path always has at least two stops.
    pub fn destination(&self) -> &StopId {
        &self.path[self.path.len() - 1]
    }

    /// Returns true if the whole path is on one line.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.lines.len()
    }
}

/// A partial path ending at `stop`, having arrived on `line`.
#[derive(Debug, Clone)]
struct Label<'g> {
    stop: &'g StopId,

    /// `None` only at the source, before any edge is taken.
    line: Option<&'g LineId>,

    /// Real time plus transfer penalties; the queue priority.
    total_cost: u64,

    real_time: u64,
    transfers: u32,
    path: Vec<&'g StopId>,
    lines: Vec<&'g LineId>,
}

impl<'g> Label<'g> {
    fn start(stop: &'g StopId) -> Self {
        Self {
            stop,
            line: None,
            total_cost: 0,
            real_time: 0,
            transfers: 0,
            path: vec![stop],
            lines: Vec::new(),
        }
    }

    /// Take `edge` from this label's stop.
    ///
    /// A transfer is charged when the edge's line differs from the line of
    /// the edge just taken; earlier lines on the path don't matter.
    fn extend(&self, edge: &'g Edge, penalty_mins: u32) -> Self {
        let changes_line = self.line.is_some_and(|line| *line != edge.line);
        let penalty = if changes_line {
            u64::from(penalty_mins)
        } else {
            0
        };
        let travel = u64::from(edge.travel_mins);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(&edge.target);

        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.extend_from_slice(&self.lines);
        lines.push(&edge.line);

        Self {
            stop: &edge.target,
            line: Some(&edge.line),
            total_cost: self.total_cost + travel + penalty,
            real_time: self.real_time + travel,
            transfers: self.transfers + u32::from(changes_line),
            path,
            lines,
        }
    }

    fn key(&self) -> (&'g StopId, Option<&'g LineId>) {
        (self.stop, self.line)
    }

    fn into_itinerary(self) -> Itinerary {
        Itinerary {
            path: self.path.into_iter().cloned().collect(),
            lines: self.lines.into_iter().cloned().collect(),
            total_time_mins: self.real_time,
            transfers: self.transfers,
        }
    }
}

/// Priority queue entry. Lowest cost pops first; equal costs pop in push order.
struct QueueEntry<'g> {
    cost: u64,
    seq: u64,
    label: Label<'g>,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters reported when a search finishes.
#[derive(Debug, Default)]
struct SearchStats {
    pushed: usize,
    popped: usize,
    stale: usize,
}

/// Path planner over a fixed network.
///
/// Holds only shared references, so many planners (or many calls on one
/// planner) can run against the same graph at once. Every call to
/// [`find`](Self::find) keeps its queue and dominance map to itself.
pub struct Planner<'a> {
    graph: &'a TransitGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a TransitGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find the cheapest path from `source` to `dest`.
    ///
    /// Cost is travel time plus the configured penalty per line change. The
    /// returned itinerary reports real travel time only. When neither stop is
    /// known, the error names the source.
    pub fn find(&self, source: &str, dest: &str) -> Result<Itinerary, PathError> {
        if source == dest {
            return Err(PathError::DegenerateInput);
        }

        let origin = match self.graph.stop(source) {
            Some(stop) => &stop.id,
            None => {
                return Err(PathError::UnknownStation {
                    station: StopId::new(source),
                });
            }
        };
        if !self.graph.has_stop(dest) {
            return Err(PathError::UnknownStation {
                station: StopId::new(dest),
            });
        }

        let penalty = self.config.transfer_penalty_mins;
        let mut stats = SearchStats::default();
        let mut seq = 0u64;
        let mut queue = BinaryHeap::new();
        let mut settled: HashMap<(&StopId, Option<&LineId>), u64> = HashMap::new();

        queue.push(QueueEntry {
            cost: 0,
            seq,
            label: Label::start(origin),
        });
        stats.pushed += 1;

        while let Some(QueueEntry { label, .. }) = queue.pop() {
            stats.popped += 1;

            if label.stop.as_str() == dest {
                debug!(
                    source,
                    dest,
                    cost = label.total_cost,
                    time = label.real_time,
                    transfers = label.transfers,
                    pushed = stats.pushed,
                    popped = stats.popped,
                    stale = stats.stale,
                    "Path found"
                );
                return Ok(label.into_itinerary());
            }

            let key = label.key();
            if settled
                .get(&key)
                .is_some_and(|&best| best <= label.total_cost)
            {
                stats.stale += 1;
                continue;
            }
            settled.insert(key, label.total_cost);

            trace!(
                stop = %label.stop,
                line = ?label.line.map(LineId::as_str),
                cost = label.total_cost,
                "Expanding state"
            );

            for edge in self.graph.neighbors(label.stop.as_str()) {
                let next = label.extend(edge, penalty);
                seq += 1;
                queue.push(QueueEntry {
                    cost: next.total_cost,
                    seq,
                    label: next,
                });
                stats.pushed += 1;
            }
        }

        debug!(
            source,
            dest,
            pushed = stats.pushed,
            popped = stats.popped,
            stale = stats.stale,
            "Search exhausted without reaching destination"
        );

        Err(PathError::Unreachable {
            from: StopId::new(source),
            to: StopId::new(dest),
        })
    }
}

/// Find the cheapest path using the default configuration.
///
/// # Example
///
/// ```
/// use metro_planner::network::seed::demo_network;
/// use metro_planner::planner::find_shortest_path;
///
/// let graph = demo_network().unwrap();
/// let itinerary = find_shortest_path(&graph, "S1", "S5").unwrap();
///
/// assert_eq!(itinerary.total_time_mins(), 15);
/// assert_eq!(itinerary.transfers(), 1);
/// ```
pub fn find_shortest_path(
    graph: &TransitGraph,
    source: &str,
    dest: &str,
) -> Result<Itinerary, PathError> {
    let config = SearchConfig::default();
    Planner::new(graph, &config).find(source, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn itinerary(total_time_mins: u64) -> Itinerary {
        Itinerary {
            path: vec![StopId::new("A"), StopId::new("B")],
            lines: vec![LineId::new("L1")],
            total_time_mins,
            transfers: 0,
        }
    }

    #[test]
    fn total_time_in_minutes() {
        assert_eq!(itinerary(15).total_time(), Duration::minutes(15));
        assert_eq!(itinerary(0).total_time(), Duration::zero());
    }

    #[test]
    fn total_time_saturates_when_too_long() {
        assert_eq!(itinerary(u64::MAX).total_time(), Duration::MAX);
        // Fits in i64 but not in a Duration
        assert_eq!(itinerary(171_798_691_800_000).total_time(), Duration::MAX);
    }

    #[test]
    fn origin_and_destination() {
        let itinerary = itinerary(5);
        assert_eq!(itinerary.origin().as_str(), "A");
        assert_eq!(itinerary.destination().as_str(), "B");
    }
}
