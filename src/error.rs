use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the steering library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot normalize a zero-length vector")]
    ZeroMagnitude,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
