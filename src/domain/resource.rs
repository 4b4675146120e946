use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::identifiers::validation::{
    validate_api_version, validate_dns1123_label, validate_dns1123_subdomain, validate_kind,
};

fn is_false(value: &bool) -> bool {
    !*value
}

/// API generation options recorded for a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub crd_version: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub namespaced: bool,
}

/// Webhook kinds enabled for a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhooks {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub webhook_version: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub defaulting: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub validation: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub conversion: bool,
}

impl Webhooks {
    /// True when no webhook kind is enabled.
    pub fn is_empty(&self) -> bool {
        !self.defaulting && !self.validation && !self.conversion
    }

    /// OR-merge the enabled kinds of `other` into `self`.
    pub fn merge(&mut self, other: &Webhooks) {
        if !other.webhook_version.is_empty() {
            self.webhook_version = other.webhook_version.clone();
        }
        self.defaulting |= other.defaulting;
        self.validation |= other.validation;
        self.conversion |= other.conversion;
    }
}

/// A resource (group/version/kind) tracked by the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Api>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub external: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Webhooks>,
}

impl Resource {
    /// Create a resource owned by the project, without API or webhook data.
    pub fn new(group: &str, domain: &str, version: &str, kind: &str) -> Self {
        Self {
            api: None,
            domain: domain.to_string(),
            external: false,
            group: group.to_string(),
            kind: kind.to_string(),
            path: None,
            plural: None,
            version: version.to_string(),
            webhooks: None,
        }
    }

    /// Mark the resource as defined outside this project, at the given import path.
    pub fn with_external_path(mut self, path: &str) -> Self {
        self.external = true;
        self.path = Some(path.to_string());
        self
    }

    /// Override the derived plural.
    pub fn with_plural(mut self, plural: &str) -> Self {
        self.plural = Some(plural.to_string());
        self
    }

    /// Record the webhook kinds to enable.
    pub fn with_webhooks(mut self, webhooks: Webhooks) -> Self {
        self.webhooks = Some(webhooks);
        self
    }

    /// Lowercase plural name, either the override or derived from the kind.
    pub fn plural(&self) -> String {
        match &self.plural {
            Some(plural) => plural.clone(),
            None => pluralize(&self.kind.to_ascii_lowercase()),
        }
    }

    /// Fully qualified API group (`group.domain`).
    pub fn qualified_group(&self) -> String {
        match (self.group.is_empty(), self.domain.is_empty()) {
            (false, false) => format!("{}.{}", self.group, self.domain),
            (false, true) => self.group.clone(),
            (true, _) => self.domain.clone(),
        }
    }

    /// CRD version used for the conversion review, defaulting to `v1`.
    pub fn crd_version(&self) -> &str {
        match &self.api {
            Some(api) if !api.crd_version.is_empty() => &api.crd_version,
            _ => "v1",
        }
    }

    /// Whether `other` names the same group/version/kind.
    pub fn is_same_gvk(&self, other: &Resource) -> bool {
        self.group == other.group
            && self.domain == other.domain
            && self.version == other.version
            && self.kind == other.kind
    }

    /// Check the resource identity and options.
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidResource {
            resource: self.to_string(),
            reason: reason.to_string(),
        };

        if self.group.is_empty() && self.domain.is_empty() {
            return Err(invalid("either group or domain must be set"));
        }
        if !self.group.is_empty() && !validate_dns1123_subdomain(&self.group) {
            return Err(invalid("group must be a DNS-1123 subdomain"));
        }
        if !self.domain.is_empty() && !validate_dns1123_subdomain(&self.domain) {
            return Err(invalid("domain must be a DNS-1123 subdomain"));
        }
        if !validate_api_version(&self.version) {
            return Err(invalid("version must match v<N>[alpha<N>|beta<N>], e.g. v1 or v1beta1"));
        }
        if !validate_kind(&self.kind) {
            return Err(invalid("kind must be PascalCase alphanumeric, at most 63 characters"));
        }
        if let Some(plural) = &self.plural
            && !validate_dns1123_label(plural)
        {
            return Err(invalid("plural must be a lowercase DNS-1123 label"));
        }
        if self.external && self.path.as_deref().is_none_or(str::is_empty) {
            return Err(invalid("external resources require an import path"));
        }
        Ok(())
    }

    /// Merge `other` into this resource. Both must share the same GVK.
    pub fn update(&mut self, other: &Resource) -> Result<(), AppError> {
        let conflict =
            |reason: String| AppError::ResourceConflict { resource: self.to_string(), reason };

        if !self.is_same_gvk(other) {
            return Err(conflict(format!("non-matching GVK {}", other)));
        }
        if self.plural() != other.plural() {
            return Err(conflict(format!(
                "non-matching plural ({} vs {})",
                self.plural(),
                other.plural()
            )));
        }
        if let (Some(current), Some(incoming)) = (&self.path, &other.path)
            && current != incoming
        {
            return Err(conflict(format!("non-matching path ({} vs {})", current, incoming)));
        }

        if self.path.is_none() {
            self.path = other.path.clone();
        }
        self.external |= other.external;
        if self.api.is_none() {
            self.api = other.api.clone();
        }
        if let Some(incoming) = &other.webhooks {
            self.webhooks.get_or_insert_with(Webhooks::default).merge(incoming);
        }
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.qualified_group(), self.version, self.kind)
    }
}

/// English pluralization of a lowercase noun, covering the regular suffix rules.
pub(crate) fn pluralize(word: &str) -> String {
    const SIBILANT_SUFFIXES: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if SIBILANT_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y')
        && !stem.is_empty()
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{}ies", stem);
    }
    format!("{}s", word)
}
