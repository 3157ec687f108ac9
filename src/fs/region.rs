//! Region variants backing the [`ReadOnlyMemoryRegion`] contract.
//!
//! Two concrete carriers exist: [`MappedRegion`] wraps a live OS mapping,
//! [`HeapRegion`] wraps a plain buffer for sources where zero-copy mapping is
//! unavailable. Both expose the identical byte-slice contract, so a caller
//! holding a `Box<dyn ReadOnlyMemoryRegion>` cannot observe which strategy
//! served it.

use crate::fs::ReadOnlyMemoryRegion;
use log::trace;
use memmap2::Mmap;

/// Region backed by a live virtual-memory mapping.
///
/// Owns the mapping exclusively. Dropping the region unmaps the view and
/// closes any handle the platform still holds for it; `memmap2` releases the
/// Windows view before its file-mapping object, so teardown order is safe on
/// every target. Unmap failures cannot surface from a destructor, so the
/// region counts as released unconditionally.
#[derive(Debug)]
pub struct MappedRegion {
    mmap: Mmap,
}

impl MappedRegion {
    pub(crate) fn new(mmap: Mmap) -> Self {
        Self { mmap }
    }
}

impl ReadOnlyMemoryRegion for MappedRegion {
    fn as_bytes(&self) -> &[u8] {
        &self.mmap[..]
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        trace!("releasing {}-byte mapping", self.mmap.len());
    }
}

/// Region backed by a heap buffer.
///
/// Used when the source cannot be mapped directly — a compressed packaged
/// asset, for instance — but must still satisfy the same `data`/`length`
/// contract.
#[derive(Debug)]
pub struct HeapRegion {
    buf: Vec<u8>,
}

impl HeapRegion {
    /// Wrap an already-loaded buffer. The buffer must be non-empty; producers
    /// enforce that before construction.
    pub fn new(buf: Vec<u8>) -> Self {
        debug_assert!(!buf.is_empty());
        Self { buf }
    }
}

impl ReadOnlyMemoryRegion for HeapRegion {
    fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_heap_region_exposes_buffer() {
        let region = HeapRegion::new(b"weights".to_vec());

        assert_eq!(region.as_bytes(), b"weights");
        assert_eq!(region.length(), 7);
        assert!(!region.data().is_null());
        assert_eq!(region.data(), region.as_bytes().as_ptr());
    }

    #[test]
    fn test_mapped_region_exposes_file_bytes() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"mapped bytes").expect("Failed to write");
        file.flush().expect("Failed to flush");

        let handle = file.reopen().expect("Failed to reopen temp file");
        let mmap = unsafe { Mmap::map(&handle).expect("Failed to map temp file") };
        let region = MappedRegion::new(mmap);

        assert_eq!(region.as_bytes(), b"mapped bytes");
        assert_eq!(region.length(), 12);

        // The raw-pointer accessors agree with the slice view.
        let first = unsafe { *region.data() };
        assert_eq!(first, b'm');
    }

    #[test]
    fn test_regions_are_interchangeable_behind_the_trait() {
        let heap: Box<dyn ReadOnlyMemoryRegion> = Box::new(HeapRegion::new(b"same".to_vec()));

        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"same").expect("Failed to write");
        file.flush().expect("Failed to flush");
        let handle = file.reopen().expect("Failed to reopen temp file");
        let mmap = unsafe { Mmap::map(&handle).expect("Failed to map temp file") };
        let mapped: Box<dyn ReadOnlyMemoryRegion> = Box::new(MappedRegion::new(mmap));

        assert_eq!(heap.as_bytes(), mapped.as_bytes());
        assert_eq!(heap.length(), mapped.length());
    }
}
