//! Error types for rayna_app

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or exporting the catalog
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the component runtime (missing provider, unknown route)
    #[error(transparent)]
    Core(#[from] rayna_core::Error),

    /// Failed to write an exported page
    #[error("failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Whether this is an unknown-route error
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, AppError::Core(rayna_core::Error::RouteNotFound(_)))
    }
}

/// Result type for rayna_app operations
pub type Result<T> = std::result::Result<T, AppError>;
