use std::path::PathBuf;

use crate::version::date::TargetDate;

// =============================================================================
// Registry-related constants
// =============================================================================

/// Default base URL of the PyPI JSON API
pub const DEFAULT_PYPI_REGISTRY: &str = "https://pypi.org";

/// Timeout for a single registry fetch in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Environment
// =============================================================================

/// Installer program used in install mode
pub const DEFAULT_PIP_PROGRAM: &str = "pip";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "PIP_DATE_LOG";

/// Complete configuration of a single run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub packages: PackageSource,
    pub target_date: TargetDate,
    pub output: OutputMode,
    pub registry: RegistryConfig,
    pub pip_program: String,
}

/// Where package names come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Names given directly on the command line
    Names(Vec<String>),
    /// Path to a requirements-style file
    RequirementsFile(PathBuf),
}

/// What to do with the resolved versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Write `name==version` pins to a file
    File(PathBuf),
    /// Print a table of versions and release dates
    Table,
    /// Install every resolved pin with pip
    Install,
}

impl OutputMode {
    /// Picks the output mode; an output file wins over the table, which wins
    /// over installing
    pub fn from_flags(output: Option<PathBuf>, list: bool) -> Self {
        match (output, list) {
            (Some(path), _) => OutputMode::File(path),
            (None, true) => OutputMode::Table,
            (None, false) => OutputMode::Install,
        }
    }
}

/// Registry connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PYPI_REGISTRY.to_string(),
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
