//! Chronological release history and date-based selection

use chrono::NaiveDateTime;

use crate::version::error::RegistryError;
use crate::version::types::{PackageReleases, Release};

/// Upload timestamps may carry fractional seconds on some mirrors
const UPLOAD_TIME_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Eligible releases of one package, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHistory {
    releases: Vec<Release>,
}

/// Release picked by [`ReleaseHistory::select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected<'a> {
    pub release: &'a Release,
    /// False when the target date precedes the first release
    pub existed_at_date: bool,
}

impl ReleaseHistory {
    /// Normalizes raw registry metadata into a sorted history
    ///
    /// Versions without artifacts are dropped. The upload time of a version is
    /// taken from the first artifact the registry lists for it.
    pub fn from_releases(
        package_name: &str,
        releases: PackageReleases,
    ) -> Result<Self, RegistryError> {
        let mut releases = releases
            .releases
            .into_iter()
            .filter_map(|(version, files)| {
                let first = files.into_iter().next()?;
                Some((version, first.upload_time))
            })
            .map(|(version, upload_time)| {
                NaiveDateTime::parse_from_str(&upload_time, UPLOAD_TIME_PARSE_FORMAT)
                    .map(|upload_time| Release {
                        version: version.clone(),
                        upload_time,
                    })
                    .map_err(|e| RegistryError::Decode {
                        package: package_name.to_string(),
                        reason: format!(
                            "invalid upload_time '{}' for version {}: {}",
                            upload_time, version, e
                        ),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        releases.sort_by(|a, b| {
            a.upload_time
                .cmp(&b.upload_time)
                .then_with(|| a.version.cmp(&b.version))
        });

        Ok(Self { releases })
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Picks the release in effect at `target`
    ///
    /// - target before (or at) the first upload: the first release, flagged as
    ///   not yet existing
    /// - target strictly after the last upload: the last release
    /// - otherwise: the last release uploaded strictly before `target`
    ///
    /// Returns `None` only for an empty history.
    pub fn select(&self, target: NaiveDateTime) -> Option<Selected<'_>> {
        if self.releases.is_empty() {
            return None;
        }

        // lower bound: number of releases uploaded before the target
        let fit_index = self
            .releases
            .partition_point(|release| release.upload_time < target);

        let (index, existed_at_date) = match fit_index {
            0 => (0, false),
            n if n == self.releases.len() => (self.releases.len() - 1, true),
            n => (n - 1, true),
        };

        Some(Selected {
            release: &self.releases[index],
            existed_at_date,
        })
    }
}
