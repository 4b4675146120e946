//! Test double for `ScaffoldFilesystem`.

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ScaffoldFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MemoryFilesystem {
    files: TestFiles,
}

impl MemoryFilesystem {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }

    /// Make every later write to `path` fail with a permission error.
    pub fn fail_writes_to(&self, path: &str) {
        self.files.failing_writes.lock().unwrap().insert(path.to_string());
    }
}

impl ScaffoldFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.files.failing_writes.lock().unwrap().contains(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }
}
