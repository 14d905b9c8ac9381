//! Metro path planner.
//!
//! Answers: "what's the best way from this stop to that one?" over a small
//! metro network, where changing lines costs extra on top of travel time.

pub mod domain;
pub mod network;
pub mod planner;
