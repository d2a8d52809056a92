//! Credential resolution from configuration.
//!
//! The Pixabay key travels in the query string, so it is wrapped in a
//! type that never prints itself.

use super::types::ApiConfig;

/// An API key that formats as a mask under `{}` and `{:?}`.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The raw key, for building the request URL only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    /// Missing or blank key; `reason` tells the user how to set one.
    Unconfigured { reason: String },
}

impl ApiConfig {
    /// Resolve the API key.
    pub fn resolve_credential(&self) -> CredentialStatus {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                CredentialStatus::Configured(SecureString::new(key.to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!(
                    "api_key is not set (add it to the config or export {})",
                    super::loader::API_KEY_ENV
                ),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}
