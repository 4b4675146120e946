use std::io;

use thiserror::Error;

/// Library-wide error type for kscaffold operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No PROJECT file found at the project root.
    #[error("No PROJECT file found in current directory")]
    ProjectNotFound,

    /// PROJECT file could not be parsed or serialized.
    #[error("Malformed PROJECT file: {0}")]
    MalformedProject(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Resource identity or options are invalid.
    #[error("Invalid resource {resource}: {reason}")]
    InvalidResource { resource: String, reason: String },

    /// Resource conflicts with an already registered resource.
    #[error("Unable to update resource {resource}: {reason}")]
    ResourceConflict { resource: String, reason: String },

    /// Template missing from the embedded asset tree.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Anchor text not found in a file being patched.
    #[error("Unable to find the code {anchor:?} in {path}")]
    AnchorNotFound { path: String, anchor: String },

    /// Scaffolding was requested before a filesystem was injected.
    #[error("Filesystem must be injected before scaffolding")]
    FilesystemNotInjected,

    /// Registering the resource in the project configuration failed.
    #[error("error updating resource: {0}")]
    ConfigUpdate(#[source] Box<AppError>),

    /// Rendering the builder list failed.
    #[error("error scaffolding kustomize webhook manifests: {0}")]
    ScaffoldExecution(#[source] Box<AppError>),
}
