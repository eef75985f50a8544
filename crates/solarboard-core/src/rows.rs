//! Turning telemetry records into display rows.

use std::fmt;

use crate::progress::{DEFAULT_BAR_LENGTH, control_point_progress, stage_progress};
use crate::route::Route;
use crate::telemetry::TelemetryRecord;
use crate::Result;

/// Speeds below this are treated as stopped, in km/h.
pub const DEFAULT_STOPPED_SPEED_KMH: f64 = 5.0;

/// Token shown in place of a stopped team's speed.
pub const DEFAULT_SPEED_PLACEHOLDER: &str = "----";

/// Knobs for [`build_rows`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowOptions {
    /// Width of the stage progress bar.
    pub bar_length: usize,
    /// Speeds strictly below this threshold render as the placeholder.
    pub stopped_speed_kmh: f64,
    /// Placeholder for stopped or unreliable speed readings.
    pub speed_placeholder: String,
    /// Keep only teams in this class (case-insensitive).
    pub class: Option<String>,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH,
            stopped_speed_kmh: DEFAULT_STOPPED_SPEED_KMH,
            speed_placeholder: DEFAULT_SPEED_PLACEHOLDER.to_string(),
            class: None,
        }
    }
}

/// A speed as shown in the table.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeedReading {
    /// Moving, rounded to one decimal.
    Moving(f64),
    /// Too slow to be meaningful; rendered as the placeholder token.
    Stopped(String),
}

impl SpeedReading {
    /// Classify a raw speed against the stopped threshold.
    pub fn from_kmh(speed: f64, options: &RowOptions) -> Self {
        if speed < options.stopped_speed_kmh {
            SpeedReading::Stopped(options.speed_placeholder.clone())
        } else {
            SpeedReading::Moving(round1(speed))
        }
    }
}

impl fmt::Display for SpeedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedReading::Moving(kmh) => write!(f, "{kmh:.1}"),
            SpeedReading::Stopped(placeholder) => f.write_str(placeholder),
        }
    }
}

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// 1-based race position; zero until ranked.
    pub position: usize,
    /// Team number.
    pub teamnum: String,
    /// Short team name.
    pub name: String,
    /// Car name.
    pub car: String,
    /// Competition class.
    pub class: String,
    /// Distance from the start, rounded to one decimal.
    pub distance: f64,
    /// Current speed.
    pub speed: SpeedReading,
    /// Average speed, rounded to one decimal.
    pub avg_speed: f64,
    /// Distance behind the leader; zero until ranked.
    pub gap: f64,
    /// Id of the next control point, blank once past the last one.
    pub next_control: String,
    /// Control-point marker bar.
    pub control_bar: String,
    /// Stage progress bar.
    pub stage_bar: String,
}

/// Round to one decimal place.
///
/// Negative zero is folded into zero so it neither sorts below `0.0` nor
/// prints as `-0.0`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

/// Build display rows for every competing team, in input order.
///
/// Non-competing teams and teams outside the requested class are dropped.
///
/// # Errors
///
/// Propagates [`Error::Data`](crate::Error::Data) from [`stage_progress`].
pub fn build_rows(
    records: &[TelemetryRecord],
    route: &Route,
    options: &RowOptions,
) -> Result<Vec<DisplayRow>> {
    let distances = route.distances();
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        if !record.competing {
            tracing::trace!(teamnum = %record.teamnum, "Skipping non-competing team");
            continue;
        }
        if let Some(class) = &options.class
            && !record.class.eq_ignore_ascii_case(class)
        {
            continue;
        }

        let distance = round1(record.distance);
        rows.push(DisplayRow {
            position: 0,
            teamnum: record.teamnum.clone(),
            name: record.shortname.clone(),
            car: record.car.clone(),
            class: record.class.clone(),
            distance,
            speed: SpeedReading::from_kmh(record.speed, options),
            avg_speed: round1(record.avg_speed),
            gap: 0.0,
            next_control: route
                .next_control_point(distance)
                .map(|cp| cp.id.clone())
                .unwrap_or_default(),
            control_bar: control_point_progress(distance, &distances),
            stage_bar: stage_progress(distance, &distances, options.bar_length)?,
        });
    }

    tracing::debug!(
        records = records.len(),
        rows = rows.len(),
        "Built standings rows"
    );
    Ok(rows)
}

// ============================================================================
// Tests
// ============================================================================
