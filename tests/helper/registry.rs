//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use pip_date::version::error::RegistryError;
use pip_date::version::registry::Registry;
use pip_date::version::types::{PackageReleases, ReleaseFile};

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    releases: HashMap<String, PackageReleases>,
    requested: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(mut self, package: &str, releases: &[(&str, &[&str])]) -> Self {
        let releases = releases
            .iter()
            .map(|(version, times)| {
                (
                    version.to_string(),
                    times.iter().map(|t| ReleaseFile::new(*t)).collect(),
                )
            })
            .collect();
        self.releases
            .insert(package.to_string(), PackageReleases::new(releases));
        self
    }

    /// Package names in the order they were fetched
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<PackageReleases, RegistryError> {
        self.requested
            .lock()
            .unwrap()
            .push(package_name.to_string());

        match self.releases.get(package_name) {
            Some(releases) => Ok(releases.clone()),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}

/// Builds a PyPI JSON API document
///
/// Every upload time becomes one file entry of the version, in the given order.
pub fn pypi_document(releases: &[(&str, &[&str])]) -> Value {
    let releases: serde_json::Map<String, Value> = releases
        .iter()
        .map(|(version, times)| {
            let files: Vec<Value> = times
                .iter()
                .enumerate()
                .map(|(i, time)| {
                    json!({
                        "filename": format!("pkg-{}-{}.tar.gz", version, i),
                        "packagetype": "sdist",
                        "upload_time": time,
                        "upload_time_iso_8601": format!("{}.000000Z", time),
                    })
                })
                .collect();
            (version.to_string(), Value::Array(files))
        })
        .collect();

    json!({
        "info": {"name": "pkg", "version": "latest"},
        "releases": releases,
    })
}
