//! Error types for the mdmirror library
//!
//! Every failure is fatal to the run: nothing here is caught and retried.
//! Malformed frontmatter is deliberately absent from this list, it simply
//! means "no slug".

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// The source root is missing or is not a directory
    #[error("Source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Filesystem operation failed on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Temporary file could not be moved over its destination
    #[error("Failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    /// Slug does not yield a usable filename
    #[error("Invalid slug {slug:?} in {path}: no filename segment")]
    InvalidSlug { path: PathBuf, slug: String },

    /// Two source files map to the same destination in one run
    #[error("Destination collision at {destination}: {first} and {second}")]
    DestinationCollision {
        destination: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Config file could not be parsed
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MirrorError>;

impl MirrorError {
    /// Create a new source not found error
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid slug error
    pub fn invalid_slug(path: impl Into<PathBuf>, slug: impl Into<String>) -> Self {
        Self::InvalidSlug {
            path: path.into(),
            slug: slug.into(),
        }
    }

    /// Create a new destination collision error
    pub fn collision(
        destination: impl Into<PathBuf>,
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
    ) -> Self {
        Self::DestinationCollision {
            destination: destination.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Attach a path to an error raised without one
    ///
    /// The rename rule works on bare filenames, so it reports slugs against
    /// an empty path; the copier fills the source file in afterwards.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::InvalidSlug { slug, .. } => Self::InvalidSlug {
                path: path.into(),
                slug,
            },
            other => other,
        }
    }
}
