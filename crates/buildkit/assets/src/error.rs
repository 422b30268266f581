//! Error types for asset compilation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an asset compilation run.
///
/// None of these are recoverable: the run stops at the first one and no
/// promise is made about headers already written.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input asset is missing or unreadable.
    #[error("failed to read asset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input asset is larger than the configured cap.
    #[error("asset {} exceeds the {limit} byte limit", .path.display())]
    TooLarge { path: PathBuf, limit: u64 },

    /// The gzip encoder failed.
    #[error("failed to compress asset {name}: {source}")]
    Compression {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A generated header could not be written.
    #[error("failed to write header {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for asset compilation.
pub type AssetResult<T> = Result<T, AssetError>;
