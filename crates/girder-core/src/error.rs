//! Unified error handling for Girder Core.
//!
//! Every failure the engine can hit maps to one variant here. Decode and
//! archive errors are raised before anything lands on disk; filesystem
//! errors abort the run and the staging directory is discarded, so a failed
//! run never leaves a partially materialized project behind.

use std::path::PathBuf;

use thiserror::Error;

/// Which framing layer of the embedded blob failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The text-safe (base64) layer.
    Encoding,
    /// The compression (gzip) layer.
    Compression,
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding => f.write_str("encoding"),
            Self::Compression => f.write_str("compression"),
        }
    }
}

/// Root error type for Girder Core operations.
#[derive(Debug, Error)]
pub enum GirderError {
    /// The embedded blob failed one of its two decode framings.
    #[error("template archive decode failed at {stage} stage: {reason}")]
    Decode { stage: DecodeStage, reason: String },

    /// The decoded byte stream is not a well-formed archive.
    #[error("malformed template archive: {reason}")]
    Archive { reason: String },

    /// A required metadata field did not survive validation.
    #[error("invalid project metadata: {field} {reason}")]
    InvalidMetadata {
        field: &'static str,
        reason: String,
    },

    /// The target path already exists; generation never merges into an
    /// existing tree.
    #[error("target path already exists: {path}")]
    TargetExists { path: PathBuf },

    /// A directory creation, file write, or staging promote failed.
    #[error("filesystem operation failed at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GirderError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Convenient result type alias.
pub type GirderResult<T> = Result<T, GirderError>;
