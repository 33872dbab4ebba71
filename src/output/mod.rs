//! Output layer
//!
//! Hands resolved versions to exactly one sink, chosen by [`OutputMode`].
//!
//! # Modules
//!
//! - [`installer`]: `Installer` trait and the pip implementation
//! - [`table`]: Table rendering for list mode

pub mod installer;
pub mod table;

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::OutputMode;
use crate::output::installer::Installer;
use crate::output::table::format_table;
use crate::version::date::TargetDate;
use crate::version::types::Resolution;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write requirements to {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to console: {0}")]
    Console(#[source] std::io::Error),
}

/// Writes one `name==version` line per resolution, in order
pub fn write_requirements(path: &Path, resolutions: &[Resolution]) -> Result<(), OutputError> {
    let content: String = resolutions
        .iter()
        .map(|r| format!("{}\n", r.pin()))
        .collect();

    std::fs::write(path, content).map_err(|source| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Upgrades the installer, then installs every pin in order
///
/// Failed installs are logged and do not stop the remaining ones.
pub async fn install_all<W: Write>(
    installer: &dyn Installer,
    resolutions: &[Resolution],
    out: &mut W,
) -> Result<(), OutputError> {
    if !installer.upgrade_self().await {
        warn!("Upgrading pip failed, continuing with the installed version");
    }

    for resolution in resolutions {
        writeln!(
            out,
            "Installing {} ver {}, released at {}...",
            resolution.package,
            resolution.version,
            resolution.display_upload_time()
        )
        .map_err(OutputError::Console)?;
        out.flush().map_err(OutputError::Console)?;

        if !installer.install(&resolution.pin()).await {
            warn!("Installing {} failed, continuing", resolution.pin());
        }
    }

    Ok(())
}

/// Dispatches the resolutions to the sink selected by `mode`
pub async fn emit<W: Write>(
    mode: &OutputMode,
    target_date: TargetDate,
    resolutions: &[Resolution],
    installer: &dyn Installer,
    out: &mut W,
) -> Result<(), OutputError> {
    match mode {
        OutputMode::File(path) => {
            write_requirements(path, resolutions)?;
            info!("Wrote {} requirements to {:?}", resolutions.len(), path);
            Ok(())
        }
        OutputMode::Table => {
            writeln!(out, "{}", format_table(target_date, resolutions))
                .map_err(OutputError::Console)
        }
        OutputMode::Install => install_all(installer, resolutions, out).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::installer::MockInstaller;
    use chrono::NaiveDateTime;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use tempfile::TempDir;

    fn resolution(package: &str, version: &str) -> Resolution {
        Resolution {
            package: package.to_string(),
            version: version.to_string(),
            upload_time: NaiveDateTime::parse_from_str("2021-06-15T10:20:30", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            existed_at_date: true,
        }
    }

    fn date() -> TargetDate {
        TargetDate::parse("2021-12-01").unwrap()
    }

    #[test]
    fn write_requirements_writes_pins_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("requirements.txt");

        write_requirements(
            &path,
            &[resolution("requests", "2.26.0"), resolution("numpy", "1.21.4")],
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "requests==2.26.0\nnumpy==1.21.4\n"
        );
    }

    #[test]
    fn write_requirements_fails_for_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("requirements.txt");

        let result = write_requirements(&path, &[resolution("requests", "2.26.0")]);

        assert!(matches!(result, Err(OutputError::WriteFailed { .. })));
    }

    #[tokio::test]
    async fn install_all_upgrades_pip_first_then_installs_in_order() {
        let mut seq = Sequence::new();
        let mut installer = MockInstaller::new();
        installer
            .expect_upgrade_self()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| true);
        installer
            .expect_install()
            .with(eq("requests==2.26.0"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| true);
        installer
            .expect_install()
            .with(eq("numpy==1.21.4"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| true);

        let mut out = Vec::new();
        install_all(
            &installer,
            &[resolution("requests", "2.26.0"), resolution("numpy", "1.21.4")],
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Installing requests ver 2.26.0, released at 2021-06-15 10:20:30...\n\
             Installing numpy ver 1.21.4, released at 2021-06-15 10:20:30...\n"
        );
    }

    #[tokio::test]
    async fn install_all_continues_after_failed_install() {
        let mut installer = MockInstaller::new();
        installer.expect_upgrade_self().returning(|| false);
        installer
            .expect_install()
            .with(eq("broken==0.1"))
            .times(1)
            .returning(|_| false);
        installer
            .expect_install()
            .with(eq("six==1.16.0"))
            .times(1)
            .returning(|_| true);

        let mut out = Vec::new();
        let result = install_all(
            &installer,
            &[resolution("broken", "0.1"), resolution("six", "1.16.0")],
            &mut out,
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn emit_file_mode_does_not_install() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let installer = MockInstaller::new();
        let mut out = Vec::new();

        emit(
            &OutputMode::File(path.clone()),
            date(),
            &[resolution("requests", "2.26.0")],
            &installer,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "requests==2.26.0\n");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn emit_table_mode_prints_table_only() {
        let installer = MockInstaller::new();
        let mut out = Vec::new();

        emit(
            &OutputMode::Table,
            date(),
            &[resolution("requests", "2.26.0")],
            &installer,
            &mut out,
        )
        .await
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Actual packages for date 2021-12-01:"));
        assert!(printed.contains("requests"));
        assert!(printed.contains("2.26.0"));
    }
}
