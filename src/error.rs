//! Custom error types for alphastrip.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the alphastrip library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an image file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid or supported image.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The PNG header could not be parsed.
    #[error("failed to read PNG header of {path}: {source}")]
    PngHeader {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },

    /// Failed to encode the flattened image.
    #[error("failed to encode image for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to overwrite an image file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target directory does not exist or cannot be resolved.
    #[error("directory {path} cannot be resolved: {source}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target path exists but is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Failed to enumerate the target directory.
    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file-name pattern is not a valid glob.
    #[error("invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be read or decoded.
    Decode,
    /// The output could not be encoded or written.
    Encode,
    /// The run itself could not start (bad directory or pattern).
    Setup,
}

impl Error {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Decode { .. } | Self::PngHeader { .. } => ErrorKind::Decode,
            Self::Encode { .. } | Self::Write { .. } => ErrorKind::Encode,
            Self::DirectoryNotFound { .. }
            | Self::NotADirectory { .. }
            | Self::ReadDir { .. }
            | Self::InvalidPattern { .. } => ErrorKind::Setup,
        }
    }
}

/// Result type alias for alphastrip operations.
pub type Result<T> = std::result::Result<T, Error>;
