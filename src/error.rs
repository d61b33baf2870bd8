//! Error type shared by the engine, the decode/serialize adapters and the CLI.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected before any worker is spawned (zero workers, bad arguments,
    /// unsupported channel layout, unavailable backend).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The OS refused to create worker `worker`; no output is written.
    #[error("failed to launch worker {worker}: {source}")]
    WorkerLaunchFailure {
        worker: usize,
        #[source]
        source: io::Error,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(String),
}

impl EngineError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
