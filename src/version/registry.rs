//! Registry trait for fetching package release metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageReleases;

/// Trait for fetching release metadata from a package registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every release of a package together with its artifacts
    ///
    /// # Arguments
    /// * `package_name` - The registry name of the package (e.g., "requests")
    ///
    /// # Returns
    /// * `Ok(PackageReleases)` - All listed versions, including ones without artifacts
    /// * `Err(RegistryError)` - If the fetch or decoding fails
    async fn fetch_releases(&self, package_name: &str) -> Result<PackageReleases, RegistryError>;
}
