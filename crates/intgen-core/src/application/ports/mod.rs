//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `intgen-adapters` crate provides implementations.

use crate::error::IntgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `intgen_adapters::filesystem::LocalFilesystem` (production)
/// - `intgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The generator only ever creates; it never deletes or prunes, so there
///   is no removal operation here
/// - Writes replace existing content silently (last write wins)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> IntgenResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> IntgenResult<()>;

    /// Read a file's content back.
    fn read_file(&self, path: &Path) -> IntgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
