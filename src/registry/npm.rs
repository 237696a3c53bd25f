//! Implements the Registry trait for the npm registry
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, StatusCode, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    error::WrappedError,
    registry::{config::RegistryConfig, traits::Registry, types::Packument},
    result::Result,
};

/// npm registry implementation using reqwest to retrieve package publish
/// history documents.
pub struct NpmRegistry {
    base_url: Url,
    client: Client,
}

impl NpmRegistry {
    /// Create registry client with optional bearer token authentication
    /// for registries that require it.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            let token_value = HeaderValue::from_str(
                format!("Bearer {}", token.expose_secret()).as_str(),
            )?;

            headers.append("Authorization", token_value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        // a trailing slash keeps Url::join from replacing the final path
        // segment of registries hosted under a sub-path
        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let base_url = Url::parse(&base_url)?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl Registry for NpmRegistry {
    async fn get_packument(&self, package: &str) -> Result<Packument> {
        let url = self.base_url.join(&escape_package_name(package))?;

        debug!("fetching packument: {url}");

        let request = self.client.get(url).build()?;
        let response = self.client.execute(request).await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(WrappedError::package_not_found(package).into());
        }

        if !status.is_success() {
            return Err(
                WrappedError::fetch_failed(package, status.as_u16()).into()
            );
        }

        let document: serde_json::Value = response.json().await?;

        Ok(Packument::from_value(document))
    }
}

/// Escape a package name for use as a registry URL path segment the way
/// npm's own tooling does: the scope slash becomes `%2F` and everything
/// else is left alone.
fn escape_package_name(package: &str) -> String {
    package.replace('/', "%2F")
}
