// src/engine/mod.rs

//! Fan-out / fan-in of command runs.
//!
//! - [`orchestrator`] launches every command concurrently and collects the
//!   results over a channel.
//! - [`report`] turns the collected results into the final failure report
//!   and exit code.

pub mod orchestrator;
pub mod report;

pub use orchestrator::Orchestrator;
pub use report::AggregatedReport;
