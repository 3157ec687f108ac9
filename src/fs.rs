//! File access abstraction with memory mapping.
//!
//! This module defines the two-trait contract at the heart of blobmap — a
//! [`FileSystem`] produces [`ReadOnlyMemoryRegion`]s — and hosts the platform
//! variants that implement it:
//!
//! - [`posix::PosixFileSystem`] maps through `mmap(2)` (unix targets)
//! - [`windows::WindowsFileSystem`] maps through a file-mapping object and
//!   view (windows targets)
//! - [`platform::UnsupportedFileSystem`] answers `Unimplemented` on targets
//!   with no mapping support
//! - [`asset::AssetFileSystem`] serves packaged assets, falling back to a
//!   heap buffer when an entry is stored compressed
//!
//! [`platform::host_file_system`] selects the variant for the current target
//! once; callers pass the reference to whatever needs file access.

use crate::error::Result;
use std::path::Path;

pub mod asset;
pub mod platform;
#[cfg(unix)]
pub mod posix;
pub mod region;
pub mod validation;
#[cfg(windows)]
pub mod windows;

pub use asset::AssetFileSystem;
pub use platform::{host_file_system, UnsupportedFileSystem};
#[cfg(unix)]
pub use posix::PosixFileSystem;
pub use region::{HeapRegion, MappedRegion};
#[cfg(windows)]
pub use windows::WindowsFileSystem;

/// A live read-only view of one file's bytes.
///
/// The region exclusively owns whatever OS resources back the view. Dropping
/// it synchronously tears the mapping down; there is no release method and no
/// way to re-arm a released region — callers request a fresh one instead.
///
/// # Pointer contract
///
/// [`data`](ReadOnlyMemoryRegion::data) is non-null and dereferenceable for
/// exactly [`length`](ReadOnlyMemoryRegion::length) bytes for the whole
/// lifetime of the region object. Any raw pointer derived from it becomes
/// invalid the moment the region drops; this is a documented contract, not a
/// runtime-checked one. Prefer [`as_bytes`](ReadOnlyMemoryRegion::as_bytes),
/// whose borrow ties the bytes to the region's lifetime.
///
/// External modification of the underlying file while a region is alive is
/// platform-dependent (stale data on some targets, faults on others); treat
/// mapped files as immutable.
pub trait ReadOnlyMemoryRegion: Send + Sync + std::fmt::Debug {
    /// The mapped contents as a slice, valid for the region's lifetime.
    fn as_bytes(&self) -> &[u8];

    /// Raw pointer to the first mapped byte.
    fn data(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    /// Byte count of the mapped view.
    fn length(&self) -> usize {
        self.as_bytes().len()
    }
}

/// Capability provider for read-only file access.
///
/// Implementations are stateless (or hold only immutable per-platform
/// defaults such as an asset root) and safe for concurrent use: two threads
/// mapping the same file each receive their own region and their own OS-level
/// mapping. Calls block until the platform open/map sequence completes or
/// definitively fails; nothing is retried internally.
pub trait FileSystem: Send + Sync {
    /// Map the full current contents of the file at `path`, read-only.
    ///
    /// Zero-length files are rejected with
    /// [`EmptyFile`](crate::BlobmapError::EmptyFile) rather than producing a
    /// zero-length region. On any failure every intermediate OS resource
    /// opened during the attempt has already been released — the operation is
    /// all-or-nothing.
    fn new_read_only_memory_region_from_file(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadOnlyMemoryRegion>>;
}
