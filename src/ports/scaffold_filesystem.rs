//! Project-level filesystem operations used while scaffolding.

use crate::domain::AppError;

/// Port for the filesystem a scaffold writes into.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ScaffoldFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;
}

impl<T: ScaffoldFilesystem + ?Sized> ScaffoldFilesystem for &T {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        (**self).write_file(path, content)
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }
}
