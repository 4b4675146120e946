//! kscaffold: scaffold kustomize webhook overlays into operator projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{WebhookOptions, create_webhook, create_webhook_at};
pub use domain::{AppError, PatchWarning};
pub use ports::ScaffoldReport;
