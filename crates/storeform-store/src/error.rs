use std::path::PathBuf;

use storeform_core::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store file {path} holds a non-object value at the top level")]
    UnexpectedShape { path: PathBuf },

    #[error("failed to encode product list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("store is unavailable: {0}")]
    Unavailable(String),
}

/// Why a submitted draft was not saved.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("please fill all required fields correctly ({0})")]
    Validation(#[from] ValidationErrors),

    #[error("failed to save product: {0}")]
    Store(#[from] StoreError),
}
