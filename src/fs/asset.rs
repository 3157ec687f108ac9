//! Packaged-asset file system variant.
//!
//! Mobile and embedded builds ship weight blobs inside an asset directory
//! rather than on a raw filesystem path. Entries may be stored raw or
//! compressed: raw entries are memory mapped through the host variant,
//! compressed entries (`<name>.gz`, `<name>.zst`) are inflated into a heap
//! buffer behind the same region contract. Callers cannot observe which
//! strategy served them.

use crate::error::{BlobmapError, Result};
use crate::fs::platform::host_file_system;
use crate::fs::region::HeapRegion;
use crate::fs::{FileSystem, ReadOnlyMemoryRegion};
use flate2::read::GzDecoder;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// FileSystem variant serving a packaged-asset store.
///
/// Holds the asset root and the file system used for raw (mappable) entries.
/// Relative paths resolve against the root; absolute paths pass through
/// unchanged.
pub struct AssetFileSystem {
    root: PathBuf,
    inner: &'static dyn FileSystem,
}

impl AssetFileSystem {
    /// Asset store rooted at `root`, mapping raw entries through the host
    /// file system.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_file_system(root, host_file_system())
    }

    /// Asset store with an explicit file system for raw entries.
    pub fn with_file_system(root: impl Into<PathBuf>, inner: &'static dyn FileSystem) -> Self {
        Self {
            root: root.into(),
            inner,
        }
    }

    /// The directory asset names resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn inflate_gzip(path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path).map_err(|e| BlobmapError::from_io(path, e))?;
        let mut payload = Vec::new();
        GzDecoder::new(file)
            .read_to_end(&mut payload)
            .map_err(|e| BlobmapError::asset(format!("corrupt gzip entry {}: {e}", path.display())))?;
        Ok(payload)
    }

    fn inflate_zstd(path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path).map_err(|e| BlobmapError::from_io(path, e))?;
        zstd::decode_all(file)
            .map_err(|e| BlobmapError::asset(format!("corrupt zstd entry {}: {e}", path.display())))
    }
}

impl FileSystem for AssetFileSystem {
    fn new_read_only_memory_region_from_file(
        &self,
        path: &Path,
    ) -> Result<Box<dyn ReadOnlyMemoryRegion>> {
        let resolved = self.resolve(path);

        // Raw entry: zero-copy mapping with the host variant's guarantees.
        // Non-regular and empty entries get classified by the inner variant.
        if resolved.exists() {
            return self.inner.new_read_only_memory_region_from_file(&resolved);
        }

        // Compressed entries land in a heap buffer behind the same contract.
        let inflaters: [(&str, fn(&Path) -> Result<Vec<u8>>); 2] = [
            ("gz", Self::inflate_gzip),
            ("zst", Self::inflate_zstd),
        ];
        for (ext, inflate) in inflaters {
            let candidate = append_extension(&resolved, ext);
            if !candidate.is_file() {
                continue;
            }
            debug!("inflating asset {}", candidate.display());
            let payload = inflate(&candidate)?;
            if payload.is_empty() {
                return Err(BlobmapError::EmptyFile { path: resolved });
            }
            return Ok(Box::new(HeapRegion::new(payload)));
        }

        Err(BlobmapError::NotFound { path: resolved })
    }
}

impl fmt::Debug for AssetFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetFileSystem")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    fn asset_root() -> TempDir {
        TempDir::new().expect("Failed to create asset root")
    }

    fn write_raw(root: &TempDir, name: &str, content: &[u8]) {
        std::fs::write(root.path().join(name), content).expect("Failed to write asset");
    }

    fn write_gzip(root: &TempDir, name: &str, content: &[u8]) {
        let file = File::create(root.path().join(name)).expect("Failed to create gzip asset");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content).expect("Failed to compress");
        encoder.finish().expect("Failed to finish gzip stream");
    }

    fn write_zstd(root: &TempDir, name: &str, content: &[u8]) {
        let payload = zstd::encode_all(content, 3).expect("Failed to compress");
        std::fs::write(root.path().join(name), payload).expect("Failed to write asset");
    }

    #[test]
    fn test_raw_asset_is_mapped() {
        let root = asset_root();
        write_raw(&root, "encoder.bin", b"raw weights");

        let fs = AssetFileSystem::new(root.path());
        let region = fs
            .new_read_only_memory_region_from_file(Path::new("encoder.bin"))
            .unwrap();

        assert_eq!(region.as_bytes(), b"raw weights");
    }

    #[test]
    fn test_gzip_asset_is_inflated() {
        let root = asset_root();
        write_gzip(&root, "encoder.bin.gz", b"gzip weights");

        let fs = AssetFileSystem::new(root.path());
        let region = fs
            .new_read_only_memory_region_from_file(Path::new("encoder.bin"))
            .unwrap();

        assert_eq!(region.as_bytes(), b"gzip weights");
    }

    #[test]
    fn test_zstd_asset_is_inflated() {
        let root = asset_root();
        write_zstd(&root, "encoder.bin.zst", b"zstd weights");

        let fs = AssetFileSystem::new(root.path());
        let region = fs
            .new_read_only_memory_region_from_file(Path::new("encoder.bin"))
            .unwrap();

        assert_eq!(region.as_bytes(), b"zstd weights");
    }

    #[test]
    fn test_raw_entry_wins_over_compressed_sibling() {
        let root = asset_root();
        write_raw(&root, "encoder.bin", b"raw weights");
        write_gzip(&root, "encoder.bin.gz", b"stale compressed copy");

        let fs = AssetFileSystem::new(root.path());
        let region = fs
            .new_read_only_memory_region_from_file(Path::new("encoder.bin"))
            .unwrap();

        assert_eq!(region.as_bytes(), b"raw weights");
    }

    #[test]
    fn test_strategies_are_indistinguishable() {
        let root = asset_root();
        write_raw(&root, "raw.bin", b"identical payload");
        write_gzip(&root, "packed.bin.gz", b"identical payload");

        let fs = AssetFileSystem::new(root.path());
        let raw = fs
            .new_read_only_memory_region_from_file(Path::new("raw.bin"))
            .unwrap();
        let packed = fs
            .new_read_only_memory_region_from_file(Path::new("packed.bin"))
            .unwrap();

        assert_eq!(raw.as_bytes(), packed.as_bytes());
        assert_eq!(raw.length(), packed.length());
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let root = asset_root();

        let fs = AssetFileSystem::new(root.path());
        let result = fs.new_read_only_memory_region_from_file(Path::new("missing.bin"));

        match result {
            Err(BlobmapError::NotFound { path }) => {
                assert_eq!(path, root.path().join("missing.bin"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_entry_is_not_a_file() {
        let root = asset_root();
        std::fs::create_dir(root.path().join("nested")).expect("Failed to create dir");

        let fs = AssetFileSystem::new(root.path());
        let result = fs.new_read_only_memory_region_from_file(Path::new("nested"));
        assert!(matches!(result, Err(BlobmapError::NotAFile { .. })));
    }

    #[test]
    fn test_empty_compressed_payload_is_rejected() {
        let root = asset_root();
        write_gzip(&root, "empty.bin.gz", b"");

        let fs = AssetFileSystem::new(root.path());
        let result = fs.new_read_only_memory_region_from_file(Path::new("empty.bin"));
        assert!(matches!(result, Err(BlobmapError::EmptyFile { .. })));
    }

    #[test]
    fn test_corrupt_compressed_payload_is_an_asset_error() {
        let root = asset_root();
        write_raw(&root, "broken.bin.gz", b"this is not a gzip stream");

        let fs = AssetFileSystem::new(root.path());
        let result = fs.new_read_only_memory_region_from_file(Path::new("broken.bin"));
        assert!(matches!(result, Err(BlobmapError::AssetError { .. })));
    }

    #[test]
    fn test_absolute_paths_bypass_the_root() {
        let root = asset_root();
        let elsewhere = asset_root();
        std::fs::write(elsewhere.path().join("outside.bin"), b"outside")
            .expect("Failed to write file");

        let fs = AssetFileSystem::new(root.path());
        let region = fs
            .new_read_only_memory_region_from_file(&elsewhere.path().join("outside.bin"))
            .unwrap();
        assert_eq!(region.as_bytes(), b"outside");
    }
}
