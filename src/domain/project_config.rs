use serde::{Deserialize, Serialize};

use super::{AppError, Resource, layout_paths::PROJECT_FILE};
use crate::ports::ScaffoldFilesystem;

/// Project configuration persisted in the `PROJECT` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layout: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multigroup: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repo: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    pub version: String,
}

impl ProjectConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let config: ProjectConfig =
            serde_yaml::from_str(content).map_err(|e| AppError::MalformedProject(e.to_string()))?;
        if config.version.is_empty() {
            return Err(AppError::MalformedProject("missing 'version'".to_string()));
        }
        Ok(config)
    }

    /// Serialize the configuration to YAML text.
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::MalformedProject(e.to_string()))
    }

    /// Load the `PROJECT` file from the project root.
    pub fn load(fs: &impl ScaffoldFilesystem) -> Result<Self, AppError> {
        if !fs.file_exists(PROJECT_FILE) {
            return Err(AppError::ProjectNotFound);
        }
        Self::from_yaml(&fs.read_file(PROJECT_FILE)?)
    }

    /// Write the configuration back to the `PROJECT` file.
    pub fn save(&self, fs: &impl ScaffoldFilesystem) -> Result<(), AppError> {
        fs.write_file(PROJECT_FILE, &self.to_yaml()?)
    }

    /// Project name used in generated labels, falling back to the last
    /// segment of the repository path.
    pub fn name(&self) -> &str {
        if !self.project_name.is_empty() {
            return &self.project_name;
        }
        self.repo.rsplit('/').next().filter(|segment| !segment.is_empty()).unwrap_or("project")
    }

    /// Look up a registered resource by group/version/kind.
    pub fn get_resource(&self, resource: &Resource) -> Option<&Resource> {
        self.resources.iter().find(|existing| existing.is_same_gvk(resource))
    }

    /// Register `resource`, merging it into an existing entry with the same GVK.
    ///
    /// The resource is validated first; nothing changes when validation or the
    /// merge fails.
    pub fn update_resource(&mut self, resource: &Resource) -> Result<(), AppError> {
        resource.validate()?;

        match self.resources.iter_mut().find(|existing| existing.is_same_gvk(resource)) {
            Some(existing) => {
                let mut merged = existing.clone();
                merged.update(resource)?;
                *existing = merged;
            }
            None => self.resources.push(resource.clone()),
        }
        Ok(())
    }
}
