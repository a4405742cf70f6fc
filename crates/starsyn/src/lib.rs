//! Recruiting dashboard core: the candidate view engine, its collaborators, and the
//! per-program analytics preferences that back the dashboard panels.

pub mod analytics;
pub mod candidates;
pub mod config;
pub mod error;
pub mod telemetry;
