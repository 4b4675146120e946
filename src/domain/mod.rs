pub mod builder;
pub mod error;
pub mod identifiers;
pub mod layout_paths;
pub mod patch;
pub mod project_config;
pub mod resource;

pub use builder::{Builder, IfExistsAction, MarkerInsertion};
pub use error::AppError;
pub use patch::{PatchOp, PatchSpec, PatchWarning};
pub use project_config::ProjectConfig;
pub use resource::{Api, Resource, Webhooks};
