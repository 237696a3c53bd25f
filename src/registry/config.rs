//! Configuration for npm-compatible registry connections.
use secrecy::SecretString;

/// Default public npm registry endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Registry connection configuration for fetching package documents.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the registry (e.g., "https://registry.npmjs.org").
    pub base_url: String,
    /// Optional bearer token for registries that require authentication.
    pub token: Option<SecretString>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            token: None,
        }
    }
}
