//! Kustomize scaffolding for `create webhook`.
//!
//! Renders the webhook, cert-manager, CRD patch and network-policy overlays,
//! then wires them into the existing kustomizations by uncommenting the
//! anchors left there by earlier scaffolds.

use tracing::{debug, info, warn};

use crate::adapters::template_renderer::TemplateRenderer;
use crate::adapters::text_patcher::FilesystemTextPatcher;
use crate::domain::patch::webhook_patches;
use crate::domain::{AppError, Builder, PatchOp, PatchSpec, PatchWarning, ProjectConfig, Resource};
use crate::ports::{BuilderRenderer, ScaffoldFilesystem, ScaffoldReport, Scaffolder, TextPatcher};

/// Scaffolder for the kustomize manifests of a new webhook.
pub struct WebhookScaffolder<'a, F> {
    config: &'a mut ProjectConfig,
    resource: Resource,
    /// Overwrite the webhook kustomization even if it exists.
    force: bool,
    fs: Option<F>,
}

impl<'a, F: ScaffoldFilesystem> WebhookScaffolder<'a, F> {
    pub fn new(config: &'a mut ProjectConfig, resource: Resource, force: bool) -> Self {
        Self { config, resource, force, fs: None }
    }
}

impl<F: ScaffoldFilesystem> Scaffolder<F> for WebhookScaffolder<'_, F> {
    fn inject_fs(&mut self, fs: F) {
        self.fs = Some(fs);
    }

    fn scaffold(&mut self) -> Result<ScaffoldReport, AppError> {
        let Some(fs) = self.fs.as_ref() else {
            return Err(AppError::FilesystemNotInjected);
        };

        let renderer = TemplateRenderer::new(fs);
        let patcher = FilesystemTextPatcher::new(fs);
        scaffold_webhook(self.config, &self.resource, self.force, &renderer, &patcher)
    }
}

/// Builders for a webhook on `resource`, in render order.
///
/// The CRD kustomization is only rendered for resources owned by the project.
pub fn webhook_builders(resource: &Resource, force: bool) -> Vec<Builder> {
    let mut builders = vec![
        Builder::ManagerWebhookPatch,
        Builder::WebhookKustomization { force },
        Builder::WebhookKustomizeConfig,
        Builder::WebhookService,
        Builder::CertManagerCertificate,
        Builder::CertManagerKustomization,
        Builder::CertManagerKustomizeConfig,
        Builder::EnableWebhookPatch,
        Builder::EnableCaInjectionPatch,
        Builder::NetworkPolicyAllowWebhooks,
    ];

    if !resource.external {
        builders.push(Builder::CrdKustomization);
    }

    builders
}

pub(crate) fn scaffold_webhook(
    config: &mut ProjectConfig,
    resource: &Resource,
    force: bool,
    renderer: &impl BuilderRenderer,
    patcher: &impl TextPatcher,
) -> Result<ScaffoldReport, AppError> {
    info!("Writing kustomize manifests for you to edit...");

    config.update_resource(resource).map_err(|e| AppError::ConfigUpdate(Box::new(e)))?;

    let builders = webhook_builders(resource, force);
    renderer
        .execute(config, resource, &builders)
        .map_err(|e| AppError::ScaffoldExecution(Box::new(e)))?;

    let rendered = builders.iter().map(|builder| builder.path(config, resource)).collect();
    let warnings = webhook_patches().iter().filter_map(|spec| apply_patch(patcher, spec)).collect();

    Ok(ScaffoldReport { rendered, warnings })
}

/// Attempt one patch. A failure is only reported when the file does not
/// already carry the patched text.
fn apply_patch(patcher: &impl TextPatcher, spec: &PatchSpec) -> Option<PatchWarning> {
    let result = match spec.op {
        PatchOp::InsertAfterAnchor { anchor, code } => {
            patcher.insert_code_if_not_exist(spec.path, anchor, code)
        }
        PatchOp::Uncomment { target, marker } => patcher.uncomment_code(spec.path, target, marker),
    };
    let error = result.err()?;

    match patcher.has_file_content_with(spec.path, spec.applied_marker) {
        Ok(true) => {
            debug!("{} already applied in {}", spec.applied_marker, spec.path);
            None
        }
        Ok(false) | Err(_) => {
            let warning = PatchWarning::new(spec);
            warn!(cause = %error, "{}", warning);
            Some(warning)
        }
    }
}
