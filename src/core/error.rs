use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepsortError {
    #[error("input has {0} lines; tasks and prerequisites come in pairs")]
    OddLineCount(usize),

    #[error("cannot read {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type DepsortResult<T> = Result<T, DepsortError>;
