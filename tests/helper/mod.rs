#![allow(dead_code)]

pub mod installer;
pub mod registry;

pub use installer::RecordingInstaller;
pub use registry::{MockRegistry, pypi_document};

use pip_date::config::{OutputMode, PackageSource, RegistryConfig, RunConfig};
use pip_date::version::date::TargetDate;

/// Run configuration for the given package names
pub fn create_config(names: &[&str], date: &str, output: OutputMode) -> RunConfig {
    RunConfig {
        packages: PackageSource::Names(names.iter().map(|s| s.to_string()).collect()),
        target_date: TargetDate::parse(date).unwrap(),
        output,
        registry: RegistryConfig::default(),
        pip_program: "pip".to_string(),
    }
}
