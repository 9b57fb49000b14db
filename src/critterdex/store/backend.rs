use crate::error::Result;
use std::path::Path;

/// Abstract interface for raw database file I/O.
///
/// The backend only moves whole files in and out; parsing and the record
/// rules live in the codec and the roster. Each call opens, reads or writes
/// everything, and closes before returning.
pub trait StorageBackend {
    /// Read the full contents of the database at `path`.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the database at `path` with `contents`.
    /// MUST be atomic so a failed save never leaves a truncated file behind.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Check whether a database exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
