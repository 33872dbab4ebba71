//! Batch driver: resolves every requested package, then emits the results

use std::io::Write;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::output::installer::Installer;
use crate::output::{OutputError, emit};
use crate::parser::{ParseError, read_package_names};
use crate::version::date::TargetDate;
use crate::version::registry::Registry;
use crate::version::resolver::resolve_at_date;
use crate::version::types::Resolution;

/// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] ParseError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Resolved packages, in input order
    pub resolved: Vec<Resolution>,
    /// Packages that could not be resolved, in input order
    pub skipped: Vec<String>,
}

/// Resolves packages one after another, in input order
///
/// A package that fails to resolve is logged and skipped; the remaining
/// packages are still processed.
pub async fn resolve_all(
    registry: &dyn Registry,
    packages: &[String],
    target_date: TargetDate,
) -> RunReport {
    let mut report = RunReport::default();

    for package in packages {
        match resolve_at_date(registry, package, target_date).await {
            Ok(resolution) => {
                info!(
                    "Resolved {} to {} (uploaded {})",
                    package, resolution.version, resolution.upload_time
                );
                report.resolved.push(resolution);
            }
            Err(e) => {
                warn!("{}! Skipping {}...", e, package);
                report.skipped.push(package.clone());
            }
        }
    }

    report
}

/// Runs a full batch: read names, resolve them, emit the results
pub async fn run<W: Write>(
    config: &RunConfig,
    registry: &dyn Registry,
    installer: &dyn Installer,
    out: &mut W,
) -> Result<RunReport, AppError> {
    let packages = read_package_names(&config.packages)?;
    info!(
        "Resolving {} packages for {}",
        packages.len(),
        config.target_date
    );

    let report = resolve_all(registry, &packages, config.target_date).await;

    emit(
        &config.output,
        config.target_date,
        &report.resolved,
        installer,
        out,
    )
    .await?;

    Ok(report)
}
