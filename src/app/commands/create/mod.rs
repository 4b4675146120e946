//! Create command: scaffolding for new webhooks.

mod webhook;

pub use webhook::{WebhookScaffolder, webhook_builders};

use crate::domain::{AppError, ProjectConfig, Resource, Webhooks};
use crate::ports::{ScaffoldFilesystem, ScaffoldReport, Scaffolder};

/// Webhook version recorded in the project configuration.
const WEBHOOK_VERSION: &str = "v1";

/// Options for `create webhook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookOptions {
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Override for the lowercase plural of the kind.
    pub plural: Option<String>,
    pub defaulting: bool,
    pub validation: bool,
    pub conversion: bool,
    /// Import path of a resource defined outside the project.
    pub external_api_path: Option<String>,
    /// Domain of the external resource; defaults to the project domain.
    pub external_api_domain: Option<String>,
    /// Overwrite the webhook kustomization if it exists.
    pub force: bool,
}

impl WebhookOptions {
    fn validate(&self) -> Result<(), AppError> {
        if !self.defaulting && !self.validation && !self.conversion {
            return Err(AppError::Configuration(
                "create webhook requires at least one of --defaulting, \
                 --programmatic-validation and --conversion"
                    .to_string(),
            ));
        }
        if self.external_api_domain.is_some() && self.external_api_path.is_none() {
            return Err(AppError::Configuration(
                "--external-api-domain requires --external-api-path".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the target resource against the project configuration.
    fn resource(&self, config: &ProjectConfig) -> Resource {
        let domain = self.external_api_domain.as_deref().unwrap_or(&config.domain);
        let mut resource = Resource::new(&self.group, domain, &self.version, &self.kind)
            .with_webhooks(Webhooks {
                webhook_version: WEBHOOK_VERSION.to_string(),
                defaulting: self.defaulting,
                validation: self.validation,
                conversion: self.conversion,
            });
        if let Some(plural) = &self.plural {
            resource = resource.with_plural(plural);
        }
        if let Some(path) = &self.external_api_path {
            resource = resource.with_external_path(path);
        }
        resource
    }
}

/// Scaffold the kustomize manifests for a webhook and persist the updated
/// `PROJECT` file.
///
/// The `PROJECT` file is only written when scaffolding succeeds.
pub fn create_webhook(
    fs: &impl ScaffoldFilesystem,
    options: &WebhookOptions,
) -> Result<ScaffoldReport, AppError> {
    options.validate()?;

    let mut config = ProjectConfig::load(fs)?;
    let resource = options.resource(&config);

    let mut scaffolder = WebhookScaffolder::new(&mut config, resource, options.force);
    scaffolder.inject_fs(fs);
    let report = scaffolder.scaffold()?;

    config.save(fs)?;
    Ok(report)
}
