//! Traits related to npm-compatible registries
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{registry::types::Packument, result::Result};

/// Abstraction over the registry data source.
///
/// Separating the fetch behind a trait keeps the command layer independent
/// of the network and allows tests to drive the pipeline with mock
/// documents.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Registry: Send + Sync {
    /// Fetch the full package document for a package name.
    async fn get_packument(&self, package: &str) -> Result<Packument>;
}
