use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid statement document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("invalid settings file: {0}")]
    Settings(String),
}
