//! # solarboard-core
//!
//! Standings for the World Solar Challenge, built from the public telemetry feed.
//!
//! The pipeline is strictly one-way:
//!
//! 1. [`client::PositionsClient`] fetches the positions snapshot
//! 2. [`rows::build_rows`] filters and rounds it into display rows
//! 3. [`standings::Standings::rank`] orders the rows and computes gaps
//! 4. [`table::render_table`] turns the result into aligned text
//!
//! # Modules
//!
//! - [`config`]: TOML configuration with built-in defaults
//! - [`error`]: Error types and Result alias
//! - [`progress`]: ASCII control-point and stage progress bars
//! - [`route`]: The control-point table

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod progress;
pub mod route;
pub mod rows;
pub mod standings;
pub mod table;
pub mod telemetry;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use client::{DEFAULT_ENDPOINT, PositionsClient};
pub use config::StandingsConfig;
pub use error::{Error, Result};
pub use progress::{control_point_progress, stage_progress};
pub use route::{ControlPoint, ControlPointKind, Route};
pub use rows::{DisplayRow, RowOptions, SpeedReading, build_rows};
pub use standings::Standings;
pub use table::render_table;
pub use telemetry::{PositionsResponse, TelemetryRecord};
