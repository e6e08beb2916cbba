use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Root is not a readable directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl ConcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConcatError::Io {
            path: path.into(),
            source,
        }
    }
}
