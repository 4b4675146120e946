//! Builder descriptors: one variant per file the webhook scaffold renders.

use super::layout_paths::{
    CERTMANAGER_DIR, CRD_KUSTOMIZATION, CRD_PATCHES_DIR, DEFAULT_DIR, NETWORK_POLICY_DIR,
    WEBHOOK_DIR, in_dir,
};
use super::{ProjectConfig, Resource};

/// Marker prefix identifying scaffold insertion points in generated files.
pub const MARKER_PREFIX: &str = "+kubebuilder:scaffold:";

/// What the renderer does when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfExistsAction {
    /// Leave the existing file untouched.
    Skip,
    /// Replace the existing file with the rendered template.
    Overwrite,
}

/// A code fragment to insert above a scaffold marker, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerInsertion {
    /// Marker name, without the `+kubebuilder:scaffold:` prefix.
    pub marker: &'static str,
    pub code: String,
}

/// A file to render from an embedded template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    ManagerWebhookPatch,
    WebhookKustomization { force: bool },
    WebhookKustomizeConfig,
    WebhookService,
    CertManagerCertificate,
    CertManagerKustomization,
    CertManagerKustomizeConfig,
    EnableWebhookPatch,
    EnableCaInjectionPatch,
    NetworkPolicyAllowWebhooks,
    CrdKustomization,
}

impl Builder {
    /// Output path relative to the project root.
    pub fn path(&self, config: &ProjectConfig, resource: &Resource) -> String {
        match self {
            Builder::ManagerWebhookPatch => in_dir(DEFAULT_DIR, "manager_webhook_patch.yaml"),
            Builder::WebhookKustomization { .. } => in_dir(WEBHOOK_DIR, "kustomization.yaml"),
            Builder::WebhookKustomizeConfig => in_dir(WEBHOOK_DIR, "kustomizeconfig.yaml"),
            Builder::WebhookService => in_dir(WEBHOOK_DIR, "service.yaml"),
            Builder::CertManagerCertificate => in_dir(CERTMANAGER_DIR, "certificate.yaml"),
            Builder::CertManagerKustomization => in_dir(CERTMANAGER_DIR, "kustomization.yaml"),
            Builder::CertManagerKustomizeConfig => {
                in_dir(CERTMANAGER_DIR, "kustomizeconfig.yaml")
            }
            Builder::EnableWebhookPatch => {
                in_dir(CRD_PATCHES_DIR, &crd_patch_file("webhook_in", config, resource))
            }
            Builder::EnableCaInjectionPatch => {
                in_dir(CRD_PATCHES_DIR, &crd_patch_file("cainjection_in", config, resource))
            }
            Builder::NetworkPolicyAllowWebhooks => {
                in_dir(NETWORK_POLICY_DIR, "allow-webhook-traffic.yaml")
            }
            Builder::CrdKustomization => CRD_KUSTOMIZATION.to_string(),
        }
    }

    /// Embedded template name under `src/assets/templates`.
    pub fn template(&self) -> &'static str {
        match self {
            Builder::ManagerWebhookPatch => "config/default/manager_webhook_patch.yaml.j2",
            Builder::WebhookKustomization { .. } => "config/webhook/kustomization.yaml.j2",
            Builder::WebhookKustomizeConfig => "config/webhook/kustomizeconfig.yaml.j2",
            Builder::WebhookService => "config/webhook/service.yaml.j2",
            Builder::CertManagerCertificate => "config/certmanager/certificate.yaml.j2",
            Builder::CertManagerKustomization => "config/certmanager/kustomization.yaml.j2",
            Builder::CertManagerKustomizeConfig => "config/certmanager/kustomizeconfig.yaml.j2",
            Builder::EnableWebhookPatch => "config/crd/patches/webhook_in.yaml.j2",
            Builder::EnableCaInjectionPatch => "config/crd/patches/cainjection_in.yaml.j2",
            Builder::NetworkPolicyAllowWebhooks => {
                "config/network-policy/allow-webhook-traffic.yaml.j2"
            }
            Builder::CrdKustomization => "config/crd/kustomization.yaml.j2",
        }
    }

    pub fn if_exists(&self) -> IfExistsAction {
        match self {
            Builder::WebhookKustomization { force: true } => IfExistsAction::Overwrite,
            _ => IfExistsAction::Skip,
        }
    }

    /// Fragments inserted above scaffold markers once the file exists.
    pub fn insertions(&self, config: &ProjectConfig, resource: &Resource) -> Vec<MarkerInsertion> {
        match self {
            Builder::CrdKustomization => vec![
                MarkerInsertion {
                    marker: "crdkustomizeresource",
                    code: format!(
                        "- bases/{}_{}.yaml\n",
                        resource.qualified_group(),
                        resource.plural()
                    ),
                },
                MarkerInsertion {
                    marker: "crdkustomizewebhookpatch",
                    code: format!(
                        "#- path: patches/{}\n",
                        crd_patch_file("webhook_in", config, resource)
                    ),
                },
            ],
            _ => Vec::new(),
        }
    }
}

/// CRD patch file name: `<prefix>_<suffix>.yaml`.
fn crd_patch_file(prefix: &str, config: &ProjectConfig, resource: &Resource) -> String {
    format!("{}_{}.yaml", prefix, crd_patch_suffix(config, resource))
}

/// Plural, prefixed with the group in multigroup projects.
fn crd_patch_suffix(config: &ProjectConfig, resource: &Resource) -> String {
    if config.multigroup && !resource.group.is_empty() {
        format!("{}_{}", resource.group, resource.plural())
    } else {
        resource.plural()
    }
}
