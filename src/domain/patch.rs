//! Follow-up text patches that wire a freshly rendered webhook overlay into
//! the existing configuration tree.

use std::fmt;

use super::layout_paths::{CRD_KUSTOMIZATION, DEFAULT_KUSTOMIZATION, NETWORK_POLICY_KUSTOMIZATION};

/// Comment marker stripped when uncommenting YAML lines.
pub const YAML_COMMENT: &str = "#";

const ALLOW_WEBHOOK_TRAFFIC_FRAGMENT: &str = "\n- allow-webhook-traffic.yaml";

/// The edit a patch performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    /// Insert `code` right after the first `anchor`, unless `code` is already present.
    InsertAfterAnchor { anchor: &'static str, code: &'static str },
    /// Strip `marker` from each line of the first occurrence of `target`.
    Uncomment { target: &'static str, marker: &'static str },
}

/// A best-effort edit of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSpec {
    pub path: &'static str,
    pub op: PatchOp,
    /// Text whose presence means the edit is already in place.
    pub applied_marker: &'static str,
}

impl PatchSpec {
    fn uncomment(path: &'static str, target: &'static str, applied_marker: &'static str) -> Self {
        Self { path, op: PatchOp::Uncomment { target, marker: YAML_COMMENT }, applied_marker }
    }

    /// Human-readable target of the edit, used in warnings.
    pub fn target_line(&self) -> String {
        match self.op {
            PatchOp::InsertAfterAnchor { anchor, code } => {
                format!("add the line '{}' after '{}'", code.trim(), anchor)
            }
            PatchOp::Uncomment { target, .. } => {
                format!("find the target '{}' to uncomment", target.replace('\n', "\\n"))
            }
        }
    }
}

/// The patches applied after the webhook overlay has been rendered, in order.
pub fn webhook_patches() -> [PatchSpec; 6] {
    [
        PatchSpec {
            path: NETWORK_POLICY_KUSTOMIZATION,
            op: PatchOp::InsertAfterAnchor {
                anchor: "resources:",
                code: ALLOW_WEBHOOK_TRAFFIC_FRAGMENT,
            },
            applied_marker: "- allow-webhook-traffic.yaml",
        },
        PatchSpec::uncomment(DEFAULT_KUSTOMIZATION, "#- ../webhook", "- ../webhook"),
        PatchSpec::uncomment(DEFAULT_KUSTOMIZATION, "#patches:", "patches:"),
        PatchSpec::uncomment(
            DEFAULT_KUSTOMIZATION,
            "#- path: manager_webhook_patch.yaml",
            "- path: manager_webhook_patch.yaml",
        ),
        PatchSpec::uncomment(
            CRD_KUSTOMIZATION,
            "#- path: patches/webhook",
            "- path: patches/webhook",
        ),
        PatchSpec::uncomment(
            CRD_KUSTOMIZATION,
            "#configurations:\n#- kustomizeconfig.yaml",
            "- kustomizeconfig.yaml",
        ),
    ]
}

/// A patch that could not be applied and was not already in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchWarning {
    pub path: String,
    pub target: String,
}

impl PatchWarning {
    pub fn new(spec: &PatchSpec) -> Self {
        Self { path: spec.path.to_string(), target: spec.target_line() }
    }
}

impl fmt::Display for PatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to {} in the file {}", self.target, self.path)
    }
}
