//! Error types for solarboard-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while fetching, building, or rendering standings.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The telemetry endpoint answered with a non-success status.
    #[error("Telemetry request to {url} failed with status {status}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Failed to decode telemetry: {0}")]
    Decode(#[from] serde_json::Error),

    /// Control-point data that cannot be rendered.
    #[error("Data error: {message}")]
    Data {
        /// What is wrong with the data
        message: String,
    },

    /// Invalid configuration value or route definition.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error while reading a file.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error in a configuration file.
    #[error("Failed to parse {path}: {source}")]
    Toml {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience `Result` type alias for solarboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new data error.
    pub fn data<S: Into<String>>(message: S) -> Self {
        Error::Data {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns whether this error came from talking to the telemetry endpoint.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status { .. })
    }
}
