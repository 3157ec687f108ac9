//! POSIX file system variant.
//!
//! Maps through `open(2)` + `mmap(2)`. The file descriptor is dropped as soon
//! as the mapping is established; a POSIX mapping stays valid without it, so
//! a long-lived region costs one mapping and zero descriptors.

use crate::error::{BlobmapError, Result};
use crate::fs::region::MappedRegion;
use crate::fs::validation::validate_file_path;
use crate::fs::{FileSystem, ReadOnlyMemoryRegion};
use log::warn;
use memmap2::MmapOptions;
use std::fs::File;
use std::path::Path;

/// FileSystem variant for POSIX-like targets.
///
/// Stateless; one instance serves any number of threads.
#[derive(Debug, Default)]
pub struct PosixFileSystem;

impl FileSystem for PosixFileSystem {
    fn new_read_only_memory_region_from_file(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadOnlyMemoryRegion>> {
        validate_file_path(path)?;

        let file = File::open(path).map_err(|e| BlobmapError::from_io(path, e))?;

        // A refusal here is the kernel running out of address space or
        // mapping resources, distinct from the open errors above. The
        // descriptor drops on the error path before the error surfaces.
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .map_err(|e| BlobmapError::mapping_failed(path, e))?;

        // Weight blobs are consumed front to back. Advice is best-effort.
        if let Err(e) = mmap.advise(memmap2::Advice::Sequential) {
            warn!("madvise failed for {}: {}", path.display(), e);
        }

        // The mapping no longer needs the descriptor.
        drop(file);

        Ok(Box::new(MappedRegion::new(mmap)))
    }
}
