// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("dependency tree introduces a cycle: {from} -> {to}")]
    GraphCycle { from: String, to: String },

    #[error("no published versions available for {coordinate}")]
    NoVersions { coordinate: String },

    #[error("artifact not present in repository: {path}")]
    ArtifactMissing { path: PathBuf },

    #[error("cannot read archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("malformed module descriptor: {0}")]
    Descriptor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;

// Allow `?` on std::io::Error by converting to ScoutError::Io with unknown path.
impl From<std::io::Error> for ScoutError {
    fn from(source: std::io::Error) -> Self {
        ScoutError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl ScoutError {
    /// Attaches a concrete path to a pathless I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ScoutError::Io {
            source,
            path: path.into(),
        }
    }
}
