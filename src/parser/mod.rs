//! Input layer
//! - requirements.rs: requirements.txt parser
//!
//! Turns a [`PackageSource`] into the ordered list of distinct package names
//! to resolve.

pub mod requirements;

use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::debug;

use crate::config::PackageSource;

pub use requirements::parse_requirements;

/// Error type for reading package names
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The requirements file could not be read
    #[error("Failed to read requirements file {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the package names of `source`, duplicates removed, first occurrence wins
pub fn read_package_names(source: &PackageSource) -> Result<Vec<String>, ParseError> {
    let names = match source {
        PackageSource::Names(names) => names.clone(),
        PackageSource::RequirementsFile(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| ParseError::ReadFailed {
                    path: path.clone(),
                    source,
                })?;
            let names = parse_requirements(&content);
            debug!("Read {} requirements from {:?}", names.len(), path);
            names
        }
    };

    Ok(names.into_iter().collect::<IndexSet<_>>().into_iter().collect())
}
