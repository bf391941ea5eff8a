//! Error types for rayna_core

use thiserror::Error;

/// Errors raised while assembling or driving a component tree
#[derive(Error, Debug)]
pub enum Error {
    /// A hook was called from outside the provider that backs it
    #[error("{hook} must be used within a {provider}")]
    MissingProvider {
        hook: &'static str,
        provider: &'static str,
    },

    /// No page is registered for the requested path
    #[error("no route registered for `{0}`")]
    RouteNotFound(String),

    /// Filesystem error while writing rendered output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for rayna_core operations
pub type Result<T> = std::result::Result<T, Error>;
