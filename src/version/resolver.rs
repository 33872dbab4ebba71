//! Date-based version resolution
//!
//! Determines which release of a package was the newest one available at a
//! given calendar date.

use tracing::{debug, warn};

use crate::version::date::TargetDate;
use crate::version::error::ResolveError;
use crate::version::history::ReleaseHistory;
use crate::version::registry::Registry;
use crate::version::types::Resolution;

/// Resolves the release of `package_name` that was current at `target_date`
///
/// When the package did not exist yet, the earliest release is returned with
/// `existed_at_date` unset and a warning is logged.
///
/// # Returns
/// * `Ok(Resolution)` - The selected release
/// * `Err(ResolveError::Missing)` - The package has no release with artifacts
/// * `Err(ResolveError::Registry)` - Fetching or decoding the metadata failed
pub async fn resolve_at_date(
    registry: &dyn Registry,
    package_name: &str,
    target_date: TargetDate,
) -> Result<Resolution, ResolveError> {
    let releases = registry.fetch_releases(package_name).await?;
    let history = ReleaseHistory::from_releases(package_name, releases)?;

    debug!(
        "Package {} has {} eligible releases",
        package_name,
        history.len()
    );

    let selected = history
        .select(target_date.start_of_day())
        .ok_or_else(|| ResolveError::Missing(package_name.to_string()))?;

    if !selected.existed_at_date {
        warn!(
            "Package {} did not exist at the requested time! Getting the first version {} uploaded at {} available in the registry.",
            package_name, selected.release.version, selected.release.upload_time
        );
    }

    Ok(Resolution {
        package: package_name.to_string(),
        version: selected.release.version.clone(),
        upload_time: selected.release.upload_time,
        existed_at_date: selected.existed_at_date,
    })
}
