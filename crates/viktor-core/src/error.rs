//! Error types for viktor-core.

use std::path::PathBuf;

/// Errors raised while building a [`Catalog`](crate::catalog::Catalog).
///
/// Lookups never fail with an error: a missing identifier is `None`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate formula id in catalog: {0}")]
    DuplicateId(String),
}
