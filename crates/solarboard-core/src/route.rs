//! The control-point table for the race route.
//!
//! A [`Route`] is an immutable, validated sequence of [`ControlPoint`]s ordered
//! by cumulative distance from the start. The built-in table is the
//! Darwin → Adelaide course; a different table can be supplied through
//! configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Role of a control point along the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPointKind {
    /// Start line.
    Start,
    /// Mandatory control stop.
    Control,
    /// End of timed competition.
    End,
    /// Rally point (untimed run-in).
    Rally,
    /// Ceremonial finish.
    Finish,
}

/// A named checkpoint at a fixed cumulative distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Cumulative distance from the start, in kilometres.
    pub distance_km: f64,
    /// Short abbreviation shown above the progress column.
    pub id: String,
    /// Full place name.
    pub name: String,
    /// Role of this point.
    pub kind: ControlPointKind,
}

impl ControlPoint {
    /// Create a control point.
    pub fn new(
        distance_km: f64,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ControlPointKind,
    ) -> Self {
        Self {
            distance_km,
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

const WSC_ROUTE: &[(f64, &str, &str, ControlPointKind)] = &[
    (0.0, "DRW", "Darwin", ControlPointKind::Start),
    (322.0, "KTH", "Katherine", ControlPointKind::Control),
    (588.0, "DLY", "Daly Waters", ControlPointKind::Control),
    (987.0, "TNC", "Tennant Creek", ControlPointKind::Control),
    (1210.0, "BRC", "Barrow Creek", ControlPointKind::Control),
    (1493.0, "ASP", "Alice Springs", ControlPointKind::Control),
    (1766.0, "KUL", "Kulgera", ControlPointKind::Control),
    (2178.0, "CPD", "Coober Pedy", ControlPointKind::Control),
    (2432.0, "GLD", "Glendambo", ControlPointKind::Control),
    (2720.0, "PTA", "Port Augusta", ControlPointKind::Control),
    (2990.0, "AGV", "Angle Vale", ControlPointKind::End),
    (3022.0, "ADL", "Adelaide", ControlPointKind::Finish),
];

/// Validated, ordered control-point table.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<ControlPoint>,
}

impl Route {
    /// Build a route, checking its invariants.
    ///
    /// The route must have at least two points, start at distance 0, and
    /// have strictly increasing distances.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(Error::config("route has no control points"));
        };
        if points.len() < 2 {
            return Err(Error::config(
                "route needs at least two control points to form a stage",
            ));
        }
        if first.distance_km != 0.0 {
            return Err(Error::config(format!(
                "route must start at 0 km, but {} is at {} km",
                first.id, first.distance_km
            )));
        }
        for pair in points.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if !next.distance_km.is_finite() || next.distance_km <= prev.distance_km {
                return Err(Error::config(format!(
                    "control points must be strictly increasing: {} ({} km) follows {} ({} km)",
                    next.id, next.distance_km, prev.id, prev.distance_km
                )));
            }
        }
        Ok(Self { points })
    }

    /// The built-in World Solar Challenge route.
    pub fn world_solar_challenge() -> Self {
        let points = WSC_ROUTE
            .iter()
            .map(|&(distance, id, name, kind)| ControlPoint::new(distance, id, name, kind))
            .collect();
        Self { points }
    }

    /// Control points in route order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Cumulative distances in route order.
    pub fn distances(&self) -> Vec<f64> {
        self.points.iter().map(|cp| cp.distance_km).collect()
    }

    /// Distance of the last control point.
    pub fn total_distance(&self) -> f64 {
        self.points.last().map_or(0.0, |cp| cp.distance_km)
    }

    /// The control point a team at `distance_km` is heading towards, if any.
    pub fn next_control_point(&self, distance_km: f64) -> Option<&ControlPoint> {
        self.points.iter().find(|cp| cp.distance_km > distance_km)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::world_solar_challenge()
    }
}

// ============================================================================
// Tests
// ============================================================================
