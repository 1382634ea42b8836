use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed service description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("shape `{shape}` referenced by `{referenced_by}` is not defined")]
    UnknownShape { shape: String, referenced_by: String },

    #[error("shape `{shape}` is invalid: {reason}")]
    InvalidShape { shape: String, reason: String },

    #[error("generated {} does not parse: {source}", .file.display())]
    InvalidOutput {
        file: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("rustfmt failed: {0}")]
    Format(String),
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.into(),
            reason: reason.into(),
        }
    }
}
