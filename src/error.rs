// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("link graph has no pages")]
    EmptyGraph,

    #[error("damping factor must lie strictly between 0 and 1 (got {0})")]
    InvalidDampingFactor(f64),

    #[error("sample count must be at least 1 (got {0})")]
    InvalidSampleCount(usize),

    #[error("tolerance must be a positive finite number (got {0})")]
    InvalidTolerance(f64),

    #[error("iteration did not converge within {iterations} passes")]
    NotConverged { iterations: usize },

    #[error("invalid link graph: {0}")]
    InvalidGraph(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("sampling error: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        RankError::Io {
            source: e.into(),
            path,
        }
    }
}
