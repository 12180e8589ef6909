//! # Scene IO Errors
//!
//! Error types for configuration loading, export and import.

use shell_mesh::MeshError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading configuration or reading/writing scenes.
#[derive(Debug, Error)]
pub enum SceneIoError {
    /// No configuration file at any searched location.
    #[error("Config file not found; tried: {}", join_paths(.tried))]
    ConfigNotFound { tried: Vec<PathBuf> },

    /// A file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Malformed config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A required configuration section is absent.
    #[error("Config section [{0}] is missing")]
    MissingSection(&'static str),

    /// A configuration value is out of range.
    #[error("Invalid config value `{field}`: {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// An output file could not be written.
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A triangle CSV has an unexpected header.
    #[error("Unexpected CSV header `{found}`, expected `{expected}`")]
    BadHeader { found: String, expected: String },

    /// A triangle CSV row could not be parsed.
    #[error("Error parsing row {row}: {message}")]
    MalformedRow { row: u64, message: String },

    /// Geometry generation rejected the configured values.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl SceneIoError {
    /// Creates an invalid config value error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates a malformed row error.
    pub fn row(row: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            message: message.into(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn read_error(path: &Path, source: std::io::Error) -> SceneIoError {
    SceneIoError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Result type alias for scene IO operations.
pub type SceneIoResult<T> = Result<T, SceneIoError>;
