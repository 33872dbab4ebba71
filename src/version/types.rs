//! Common types shared by the registry client and the resolver

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// One distributable artifact (wheel, sdist, ...) of a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFile {
    /// Raw upload timestamp as listed by the registry
    pub upload_time: String,
}

impl ReleaseFile {
    pub fn new(upload_time: impl Into<String>) -> Self {
        Self {
            upload_time: upload_time.into(),
        }
    }
}

/// Release metadata for a single package as returned by a registry
///
/// Artifact lists keep the order the registry returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReleases {
    pub releases: HashMap<String, Vec<ReleaseFile>>,
}

impl PackageReleases {
    pub fn new(releases: HashMap<String, Vec<ReleaseFile>>) -> Self {
        Self { releases }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// An eligible release: a version with at least one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: String,
    pub upload_time: NaiveDateTime,
}

/// Release selected for a package at a target date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub package: String,
    pub version: String,
    pub upload_time: NaiveDateTime,
    /// False when the package had no release before the target date and the
    /// earliest release was picked instead
    pub existed_at_date: bool,
}

impl Resolution {
    /// `name==version` pin
    pub fn pin(&self) -> String {
        format!("{}=={}", self.package, self.version)
    }

    /// Upload time as shown to the user, e.g. `2021-06-15 00:00:00`
    pub fn display_upload_time(&self) -> String {
        self.upload_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
