use crate::domain::{AppError, PatchWarning};

/// A scaffolding step that writes into an injected filesystem.
pub trait Scaffolder<F> {
    /// Supply the filesystem. Must be called before `scaffold`.
    fn inject_fs(&mut self, fs: F);

    /// Run the scaffold.
    fn scaffold(&mut self) -> Result<ScaffoldReport, AppError>;
}

/// Outcome of a successful scaffold run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Output paths of the rendered builders, in render order.
    pub rendered: Vec<String>,
    /// Follow-up patches that could not be applied.
    pub warnings: Vec<PatchWarning>,
}
