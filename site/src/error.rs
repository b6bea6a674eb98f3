//! Error types for the site library.

use std::path::PathBuf;

/// Failures while writing the static site to disk.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Creating a directory or writing a page failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;
