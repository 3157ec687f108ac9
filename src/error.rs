//! Error types and handling infrastructure for blobmap.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types, with `anyhow` reserved for application-level glue in the
//! benchmark driver binary.
//!
//! Every failure mode a caller must react to differently gets its own variant:
//! a model loader treats [`BlobmapError::NotFound`] as "try the next search
//! path", while [`BlobmapError::Unimplemented`] means the build targeted a
//! platform without mapping support and no retry will help.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for blobmap operations.
///
/// Covers every failure mode of the mapping path plus the peripheral asset
/// and configuration surfaces. Variants are never collapsed into a generic
/// failure code; callers match on the kind.
#[derive(Error, Debug)]
pub enum BlobmapError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The caller lacks permission to read the file.
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but holds zero bytes. Rejected outright instead of
    /// handing out a region whose pointer covers nothing.
    #[error("refusing to map empty file: {path}")]
    EmptyFile { path: PathBuf },

    /// Path exists but is not a regular file (directory, socket, ...).
    #[error("path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// The OS refused to create the mapping (address-space exhaustion,
    /// descriptor table exhaustion, platform refusal).
    #[error("memory mapping failed: {path}")]
    MappingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected platform variant carries no mapping implementation.
    /// A build/configuration problem rather than a runtime condition.
    #[error("memory-mapped file access is not implemented on {platform}")]
    Unimplemented { platform: &'static str },

    /// A packaged asset exists but its payload cannot be decoded.
    #[error("asset error: {message}")]
    AssetError { message: String },

    /// Configuration parsing errors.
    #[error("configuration error: {message}")]
    ConfigError { message: String },

    /// Residual I/O failures that carry no more specific classification.
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for blobmap operations.
pub type Result<T> = std::result::Result<T, BlobmapError>;

impl BlobmapError {
    /// Create a MappingFailed error for the given path
    pub fn mapping_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MappingFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an AssetError with a descriptive message
    pub fn asset(message: impl Into<String>) -> Self {
        Self::AssetError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a generic Io error with a descriptive message
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Classify an `io::Error` raised while opening or inspecting `path`.
    ///
    /// NotFound and PermissionDenied keep their identity with the path
    /// attached; everything else falls through to [`BlobmapError::Io`].
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                message: format!("failed to access {}", path.display()),
                source: err,
            },
        }
    }
}
