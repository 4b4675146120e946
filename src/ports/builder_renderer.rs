use crate::domain::{AppError, Builder, ProjectConfig, Resource};

/// Port that materializes builder descriptors into files.
pub trait BuilderRenderer {
    /// Render and write every builder, in order.
    ///
    /// Stops at the first failure. Files written before the failure are kept.
    fn execute(
        &self,
        config: &ProjectConfig,
        resource: &Resource,
        builders: &[Builder],
    ) -> Result<(), AppError>;
}
