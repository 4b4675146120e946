//! Conventional project layout paths, relative to the project root.

/// Project configuration file at the project root.
pub const PROJECT_FILE: &str = "PROJECT";

/// `config/default/`
pub const DEFAULT_DIR: &str = "config/default";

/// `config/webhook/`
pub const WEBHOOK_DIR: &str = "config/webhook";

/// `config/certmanager/`
pub const CERTMANAGER_DIR: &str = "config/certmanager";

/// `config/crd/patches/`
pub const CRD_PATCHES_DIR: &str = "config/crd/patches";

/// `config/network-policy/`
pub const NETWORK_POLICY_DIR: &str = "config/network-policy";

/// `config/default/kustomization.yaml`
pub const DEFAULT_KUSTOMIZATION: &str = "config/default/kustomization.yaml";

/// `config/crd/kustomization.yaml`
pub const CRD_KUSTOMIZATION: &str = "config/crd/kustomization.yaml";

/// `config/network-policy/kustomization.yaml`
pub const NETWORK_POLICY_KUSTOMIZATION: &str = "config/network-policy/kustomization.yaml";

/// Join a layout directory and a file name.
pub fn in_dir(dir: &str, file: &str) -> String {
    format!("{}/{}", dir, file)
}
