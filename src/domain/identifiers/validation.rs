/// Maximum length of a DNS-1123 subdomain.
const DNS1123_SUBDOMAIN_MAX_LEN: usize = 253;

/// Maximum length of a DNS-1035 label, which bounds resource kinds.
const KIND_MAX_LEN: usize = 63;

/// Validates a DNS-1123 label.
///
/// Checks:
/// - Non-empty, at most 63 characters
/// - Lowercase alphanumeric characters or '-'
/// - Starts and ends with an alphanumeric character
pub fn validate_dns1123_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validates a DNS-1123 subdomain (dot-separated labels), as used for API
/// groups and project domains.
pub fn validate_dns1123_subdomain(value: &str) -> bool {
    if value.is_empty() || value.len() > DNS1123_SUBDOMAIN_MAX_LEN {
        return false;
    }
    value.split('.').all(validate_dns1123_label)
}

/// Validates an API version such as `v1`, `v1alpha1` or `v2beta3`.
pub fn validate_api_version(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    let major_len = rest.chars().take_while(char::is_ascii_digit).count();
    if major_len == 0 {
        return false;
    }
    let (_, stage) = rest.split_at(major_len);
    if stage.is_empty() {
        return true;
    }
    let Some(stage_number) = stage.strip_prefix("alpha").or_else(|| stage.strip_prefix("beta"))
    else {
        return false;
    };
    !stage_number.is_empty() && stage_number.chars().all(|c| c.is_ascii_digit())
}

/// Validates a resource kind.
///
/// Checks:
/// - Non-empty, at most 63 characters
/// - Starts with an uppercase ASCII letter (PascalCase)
/// - Only ASCII alphanumeric characters
pub fn validate_kind(kind: &str) -> bool {
    if kind.is_empty() || kind.len() > KIND_MAX_LEN {
        return false;
    }
    if !kind.starts_with(|c: char| c.is_ascii_uppercase()) {
        return false;
    }
    kind.chars().all(|c| c.is_ascii_alphanumeric())
}
