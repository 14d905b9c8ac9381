//! Domain types for the metro path planner.
//!
//! Identifiers are thin newtypes over strings so that stops and lines can't be
//! mixed up. Records here are immutable once the network is built.

mod line;
mod stop;

pub use line::{LineId, Route};
pub use stop::{Stop, StopId};
