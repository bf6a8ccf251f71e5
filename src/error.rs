//! Error types for the catalog structurer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Input could not be read, or was not valid JSON.
    #[error("cannot load {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatCause,
    },

    /// JSON loaded fine but has the wrong top-level shape.
    #[error("schema error: {0}")]
    Schema(String),

    #[error("invalid session field table: {0}")]
    FieldTable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum FormatCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        CatalogError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
