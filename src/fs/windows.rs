//! Windows file system variant.
//!
//! Maps through `CreateFileMappingW` + `MapViewOfFile` (via `memmap2`). The
//! file-mapping object and the view live inside the returned region and are
//! released together when it drops — view first, then the mapping object, so
//! teardown never touches a closed handle.

use crate::error::{BlobmapError, Result};
use crate::fs::region::MappedRegion;
use crate::fs::validation::validate_file_path;
use crate::fs::{FileSystem, ReadOnlyMemoryRegion};
use memmap2::MmapOptions;
use std::fs::File;
use std::path::Path;

/// FileSystem variant for Windows-family targets.
///
/// Stateless; one instance serves any number of threads.
#[derive(Debug, Default)]
pub struct WindowsFileSystem;

impl FileSystem for WindowsFileSystem {
    fn new_read_only_memory_region_from_file(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadOnlyMemoryRegion>> {
        validate_file_path(path)?;

        let file = File::open(path).map_err(|e| BlobmapError::from_io(path, e))?;

        // Creates the file-mapping object and the view in one step; both are
        // owned by the Mmap. The original file handle drops on every path —
        // the mapping keeps its own duplicated handle alive.
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .map_err(|e| BlobmapError::mapping_failed(path, e))?;

        Ok(Box::new(MappedRegion::new(mmap)))
    }
}
