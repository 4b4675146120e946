//! Filesystem adapter for the scaffold filesystem port.
//!
//! `FilesystemStore` owns the project root path and enforces path-traversal
//! safety for every operation.

mod scaffold_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemStore {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
        }
    }
    normalized
}
