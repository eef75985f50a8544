//! ASCII progress bars.
//!
//! Two views of the same position:
//!
//! - [`control_point_progress`] marks which control points a team has passed
//! - [`stage_progress`] shows how far through the current stage it is
//!
//! Both take the cumulative control-point distances in route order.

use crate::{Error, Result};

/// Default width of the stage bar, in fill characters.
pub const DEFAULT_BAR_LENGTH: usize = 20;

const START: &str = "[X]";
const PASSED: &str = "===[X]";
const IN_TRANSIT: &str = "=>-[ ]";
const AHEAD: &str = "---[ ]";

/// Marks the team's position inside the stage bar.
pub const STAGE_MARKER: char = '^';

/// Width of one control-point segment after the leading start marker.
pub const SEGMENT_WIDTH: usize = PASSED.len();

/// Width of the leading start marker.
pub const START_WIDTH: usize = START.len();

/// Render which control points a team at `distance` has passed.
///
/// The start is always drawn as passed. Each later control point gets one
/// fixed-width segment: passed once the team has reached it, in transit while
/// the team is past the previous point, not yet reached otherwise. A team
/// sitting exactly on a control point has passed it but has not yet started
/// the next stage.
///
/// ```
/// use solarboard_core::control_point_progress;
///
/// let cps = [0.0, 100.0, 300.0];
/// assert_eq!(control_point_progress(150.0, &cps), "[X]===[X]=>-[ ]");
/// assert_eq!(control_point_progress(0.0, &cps), "[X]---[ ]---[ ]");
/// ```
pub fn control_point_progress(distance: f64, control_points: &[f64]) -> String {
    let segments = control_points.len().saturating_sub(1);
    let mut bar = String::with_capacity(START_WIDTH + segments * SEGMENT_WIDTH);
    bar.push_str(START);

    for pair in control_points.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let segment = if next <= distance {
            PASSED
        } else if prev < distance {
            IN_TRANSIT
        } else {
            AHEAD
        };
        bar.push_str(segment);
    }
    bar
}

/// Render progress through the stage the team at `distance` is on.
///
/// The stage is the last consecutive pair `(prev, next)` with
/// `prev <= distance <= next`, so a team exactly on an interior control point
/// is shown at the start of the following stage. Distances outside the route
/// are clamped to its ends.
///
/// The bar is `|`, `floor(length * fraction)` fill characters, a `^` caret marker,
/// padding up to `length`, then `|`.
///
/// # Errors
///
/// Returns [`Error::Data`] if fewer than two control points are given or if
/// consecutive distances do not strictly increase.
///
/// ```
/// use solarboard_core::stage_progress;
///
/// let bar = stage_progress(50.0, &[0.0, 100.0, 300.0], 20).unwrap();
/// assert_eq!(bar, "|==========^          |");
/// ```
pub fn stage_progress(distance: f64, control_points: &[f64], length: usize) -> Result<String> {
    validate_stages(control_points)?;

    let (first, last) = match control_points {
        [first, .., last] => (*first, *last),
        _ => return Err(Error::data("at least two control points are required")),
    };
    let distance = if distance.is_nan() {
        first
    } else {
        distance.clamp(first, last)
    };

    let (prev, next) = control_points
        .windows(2)
        .filter(|pair| pair[0] <= distance && distance <= pair[1])
        .map(|pair| (pair[0], pair[1]))
        .last()
        .ok_or_else(|| Error::data(format!("no stage contains {distance} km")))?;

    let fraction = (distance - prev) / (next - prev);
    let fill = ((length as f64 * fraction).floor() as usize).min(length);

    let mut bar = String::with_capacity(length + 3);
    bar.push('|');
    bar.push_str(&"=".repeat(fill));
    bar.push(STAGE_MARKER);
    bar.push_str(&" ".repeat(length - fill));
    bar.push('|');
    Ok(bar)
}

fn validate_stages(control_points: &[f64]) -> Result<()> {
    if control_points.len() < 2 {
        return Err(Error::data(format!(
            "at least two control points are required, got {}",
            control_points.len()
        )));
    }
    for (index, pair) in control_points.windows(2).enumerate() {
        if pair[0].is_nan() || pair[1].is_nan() || pair[1] <= pair[0] {
            return Err(Error::data(format!(
                "control points {} ({} km) and {} ({} km) do not form a stage",
                index,
                pair[0],
                index + 1,
                pair[1]
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
