//! PyPI registry client for fetching Python package release metadata

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{PackageReleases, ReleaseFile};

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl PypiRegistry {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(concat!("pip-date/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| RegistryError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RegistryError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            timeout_secs,
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        Self::new(&config.base_url, config.timeout_secs)
    }

    /// `{base}/pypi/{name}/json`, with the name percent-encoded as one segment
    fn package_url(&self, package_name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["pypi", package_name, "json"]);
        }
        url
    }

    fn request_error(&self, error: reqwest::Error) -> RegistryError {
        if error.is_timeout() {
            RegistryError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            RegistryError::Network(error)
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: HashMap<String, Vec<PypiFile>>,
}

/// Distribution file of a release
#[derive(Debug, Deserialize)]
struct PypiFile {
    upload_time: String,
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<PackageReleases, RegistryError> {
        let url = self.package_url(package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;

        let pypi_response: PypiResponse =
            serde_json::from_str(&body).map_err(|e| RegistryError::Decode {
                package: package_name.to_string(),
                reason: e.to_string(),
            })?;

        let releases: HashMap<String, Vec<ReleaseFile>> = pypi_response
            .releases
            .into_iter()
            .map(|(version, files)| {
                let files = files
                    .into_iter()
                    .map(|file| ReleaseFile::new(file.upload_time))
                    .collect();
                (version, files)
            })
            .collect();

        debug!(
            "Found {} versions for package {}",
            releases.len(),
            package_name
        );

        Ok(PackageReleases::new(releases))
    }
}
