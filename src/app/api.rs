//! API Facade for the application.
//!
//! This module exposes high-level functions that bind the filesystem adapter
//! to command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemStore;
use crate::app::commands::create;

pub use crate::app::commands::create::WebhookOptions;
pub use crate::domain::{AppError, PatchWarning};
pub use crate::ports::ScaffoldReport;

// =============================================================================
// Create Command API
// =============================================================================

/// Scaffold kustomize manifests for a webhook in the current directory.
pub fn create_webhook(options: &WebhookOptions) -> Result<ScaffoldReport, AppError> {
    let store = FilesystemStore::current()?;
    create::create_webhook(&store, options)
}

/// Scaffold kustomize manifests for a webhook in the project at `path`.
pub fn create_webhook_at(
    options: &WebhookOptions,
    path: impl Into<PathBuf>,
) -> Result<ScaffoldReport, AppError> {
    let store = FilesystemStore::new(path.into());
    create::create_webhook(&store, options)
}
