//! Filesystem operations performed by the hooks.

use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem side effects of install and configure.
///
/// Paths are absolute. Errors from the platform are returned unchanged.
pub trait HookFilesystem {
    /// Create a directory and its missing parents. Fails if `path` already exists.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Copy a file byte for byte and apply `mode` to the copy.
    fn copy_file(&self, from: &Path, to: &Path, mode: u32) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content, replacing any existing file, and apply `mode`.
    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), AppError>;
}
