//! Serde model of the positions endpoint.
//!
//! The feed is treated leniently. Inside a team record, a missing, `null`, or
//! malformed value never fails the decode:
//!
//! - numbers accept JSON numbers and numeric strings, anything else reads as `0`
//! - strings accept text, numbers and booleans, anything else reads as blank
//! - `competing` accepts booleans, `"true"`/`"false"` and `0`/`1`, anything
//!   else reads as `false`
//!
//! One bad team record therefore never hides the rest of the table. Only a
//! body that is not JSON, or whose `items` is not an array, is an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level response of the positions endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PositionsResponse {
    /// One record per team.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<TelemetryRecord>,
}

/// A single team's telemetry snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TelemetryRecord {
    /// Team number; the feed sends either a number or a string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub teamnum: String,
    /// Short team name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub shortname: String,
    /// Car name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub car: String,
    /// Distance travelled from the start, in kilometres.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance: f64,
    /// Current speed, in km/h.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub speed: f64,
    /// Average speed since the start, in km/h.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_speed: f64,
    /// Competition class (e.g. "Challenger", "Cruiser").
    #[serde(default, deserialize_with = "lenient_string")]
    pub class: String,
    /// Whether the team is still competing.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub competing: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()).unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 1.0),
        _ => false,
    })
}

// ============================================================================
// Tests
// ============================================================================
