//! # blobmap - Memory-Mapped Artifact Loading
//!
//! A cross-platform, read-only file access layer for loading large binary
//! artifacts (model weight blobs, serialized parameter files) into memory
//! with minimal copying.
//!
//! ## Features
//!
//! - **One contract, several platforms**: a single [`FileSystem`] trait with
//!   POSIX, Windows, and packaged-asset variants behind it
//! - **Scoped mappings**: every [`ReadOnlyMemoryRegion`] owns its OS mapping
//!   and releases it deterministically on drop
//! - **Distinct failure kinds**: missing file, permission denial, empty file,
//!   mapping refusal, and unimplemented platform are separate error variants
//! - **Transparent asset fallback**: compressed asset-store entries inflate
//!   into a buffer behind the same region contract
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`fs`] - FileSystem/region traits and the platform variants
//! - [`bench`] - Pattern-selected benchmark registry
//! - [`config`] - Runtime configuration knobs
//!
//! ## Usage
//!
//! ```no_run
//! use blobmap::fs::host_file_system;
//! use blobmap::ReadOnlyMemoryRegion;
//! use std::path::Path;
//!
//! # fn main() -> blobmap::Result<()> {
//! let fs = host_file_system();
//! let region = fs.new_read_only_memory_region_from_file(Path::new("weights.bin"))?;
//! let bytes = region.as_bytes(); // valid until `region` drops
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod error;
pub mod fs;

// Peripheral surfaces consumed by the benchmark driver
pub mod bench;
pub mod config;

// Re-export commonly used types for convenience
pub use error::{BlobmapError, Result};

// Public API surface for external usage
pub use fs::{host_file_system, FileSystem, ReadOnlyMemoryRegion};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
