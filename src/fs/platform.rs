//! Platform selection for the process-wide host file system.
//!
//! One stateless instance per process, chosen by target at compile time.
//! Nothing here is mutable and nothing re-initializes: callers take the
//! `&'static dyn FileSystem` once and pass it to whatever needs file access.

use crate::error::{BlobmapError, Result};
use crate::fs::{FileSystem, ReadOnlyMemoryRegion};
use std::path::Path;

/// Stand-in variant for targets without mapping support.
///
/// Every request answers [`BlobmapError::Unimplemented`]. Receiving it means
/// the build selected a platform this crate has no mapping logic for — a
/// configuration problem to fix at build time, not a condition to retry.
#[derive(Debug, Default)]
pub struct UnsupportedFileSystem;

impl FileSystem for UnsupportedFileSystem {
    fn new_read_only_memory_region_from_file(
        &self,
        _path: &Path,
    ) -> Result<Box<dyn ReadOnlyMemoryRegion>> {
        Err(BlobmapError::Unimplemented {
            platform: std::env::consts::OS,
        })
    }
}

/// The FileSystem variant for the current target.
///
/// unix → [`PosixFileSystem`](crate::fs::posix::PosixFileSystem),
/// windows → [`WindowsFileSystem`](crate::fs::windows::WindowsFileSystem),
/// anything else → [`UnsupportedFileSystem`].
pub fn host_file_system() -> &'static dyn FileSystem {
    #[cfg(unix)]
    {
        static HOST: crate::fs::posix::PosixFileSystem = crate::fs::posix::PosixFileSystem;
        &HOST
    }

    #[cfg(windows)]
    {
        static HOST: crate::fs::windows::WindowsFileSystem = crate::fs::windows::WindowsFileSystem;
        &HOST
    }

    #[cfg(not(any(unix, windows)))]
    {
        static HOST: UnsupportedFileSystem = UnsupportedFileSystem;
        &HOST
    }
}
