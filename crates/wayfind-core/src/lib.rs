//! Wayfind Core Library
//!
//! Search strategies over small weighted directed graphs, with a recorded
//! trace of frontier snapshots for each search.

pub mod config;
pub mod demo;
pub mod error;
pub mod format;
pub mod graph;
pub mod journey;
pub mod logging;
pub mod problem;
pub mod search;
