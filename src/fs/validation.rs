//! Path validation ahead of the open+map sequence.
//!
//! Classifies the failure modes that can be decided from metadata alone, so
//! every platform variant rejects the same inputs with the same error kinds
//! before touching its native mapping primitives.

use crate::error::{BlobmapError, Result};
use std::path::Path;

/// Check that `path` names a non-empty regular file.
///
/// # Error cases
/// - path does not exist → [`BlobmapError::NotFound`]
/// - path is a directory or other non-regular file → [`BlobmapError::NotAFile`]
/// - file holds zero bytes → [`BlobmapError::EmptyFile`]
///
/// Read permission on the file itself is not checked here; the subsequent
/// open call surfaces it as [`BlobmapError::PermissionDenied`].
pub fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| BlobmapError::from_io(path, e))?;

    if !metadata.is_file() {
        return Err(BlobmapError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(BlobmapError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
