//! Shared testing utilities for kscaffold integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT: &str = "\
domain: tutorial.kubebuilder.io
layout:
- go.kubebuilder.io/v4
projectName: project
repo: tutorial.kubebuilder.io/project
version: '3'
";

pub const DEFAULT_KUSTOMIZATION: &str = "\
namespace: project-system
namePrefix: project-

resources:
- ../crd
- ../rbac
- ../manager
# [WEBHOOK] To enable webhook, uncomment all the sections with [WEBHOOK] prefix including the one in
# crd/kustomization.yaml
#- ../webhook
# [CERTMANAGER] To enable cert-manager, uncomment all sections with 'CERTMANAGER'.
#- ../certmanager
- metrics_service.yaml

#patches:
# [WEBHOOK] To enable webhook, uncomment all the sections with [WEBHOOK] prefix including the one in
# crd/kustomization.yaml
#- path: manager_webhook_patch.yaml
";

pub const NETWORK_POLICY_KUSTOMIZATION: &str = "\
resources:
- allow-metrics-traffic.yaml
";

/// Testing harness providing an isolated operator project.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment seeded with a `PROJECT` file and the
    /// kustomizations an `init` scaffold leaves behind.
    pub fn with_project() -> Self {
        let ctx = Self::new();
        ctx.write("PROJECT", PROJECT);
        ctx.write("config/default/kustomization.yaml", DEFAULT_KUSTOMIZATION);
        ctx.write("config/network-policy/kustomization.yaml", NETWORK_POLICY_KUSTOMIZATION);
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `kscaffold` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kscaffold").expect("Failed to locate kscaffold binary");
        cmd.current_dir(&self.work_dir).env("RUST_LOG", "info");
        cmd
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    /// Read a project file.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.work_dir.join(rel).is_file()
    }

    /// Standard webhook invocation for the CronJob tutorial resource.
    pub fn create_cronjob_webhook(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "create",
            "webhook",
            "--group",
            "batch",
            "--version",
            "v1",
            "--kind",
            "CronJob",
            "--defaulting",
            "--programmatic-validation",
        ]);
        cmd
    }
}
