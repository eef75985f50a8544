//! Configuration for a standings run.
//!
//! Every key is optional; a missing file section falls back to the built-in
//! defaults, so running without a config file reproduces the stock output.
//!
//! ```toml
//! endpoint = "https://telemetry.worldsolarchallenge.org/wscearth/api/positions"
//! bar_length = 30
//! stopped_speed_kmh = 5.0
//! speed_placeholder = "----"
//!
//! [[control_points]]
//! distance_km = 0.0
//! id = "DRW"
//! name = "Darwin"
//! kind = "start"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_ENDPOINT;
use crate::progress::DEFAULT_BAR_LENGTH;
use crate::route::{ControlPoint, Route};
use crate::rows::{DEFAULT_SPEED_PLACEHOLDER, DEFAULT_STOPPED_SPEED_KMH, RowOptions};
use crate::{Error, Result};

/// Settings for fetching and rendering standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// Positions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Width of the stage progress bar.
    #[serde(default = "default_bar_length")]
    pub bar_length: usize,

    /// Speeds below this are shown as the placeholder, in km/h.
    #[serde(default = "default_stopped_speed")]
    pub stopped_speed_kmh: f64,

    /// Token shown for stopped teams.
    #[serde(default = "default_placeholder")]
    pub speed_placeholder: String,

    /// Replacement route; the built-in route is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<ControlPoint>>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_bar_length() -> usize {
    DEFAULT_BAR_LENGTH
}

fn default_stopped_speed() -> f64 {
    DEFAULT_STOPPED_SPEED_KMH
}

fn default_placeholder() -> String {
    DEFAULT_SPEED_PLACEHOLDER.to_string()
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            bar_length: default_bar_length(),
            stopped_speed_kmh: default_stopped_speed(),
            speed_placeholder: default_placeholder(),
            control_points: None,
        }
    }
}

impl StandingsConfig {
    /// Load configuration from a TOML file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.bar_length == 0 {
            return Err(Error::config("bar_length must be greater than zero"));
        }
        if !self.stopped_speed_kmh.is_finite() || self.stopped_speed_kmh < 0.0 {
            return Err(Error::config(format!(
                "stopped_speed_kmh must be a non-negative number, got {}",
                self.stopped_speed_kmh
            )));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint must not be empty"));
        }
        self.route().map(|_| ())
    }

    /// The route to render against.
    pub fn route(&self) -> Result<Route> {
        match &self.control_points {
            Some(points) => Route::new(points.clone()),
            None => Ok(Route::world_solar_challenge()),
        }
    }

    /// Row-building options derived from this configuration.
    pub fn row_options(&self) -> RowOptions {
        RowOptions {
            bar_length: self.bar_length,
            stopped_speed_kmh: self.stopped_speed_kmh,
            speed_placeholder: self.speed_placeholder.clone(),
            class: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
