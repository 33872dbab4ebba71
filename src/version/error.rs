use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid registry URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Can't decode info for package {package}: {reason}")]
    Decode { package: String, reason: String },
}

/// Per-package resolution failure.
///
/// Every variant is recoverable: the driver logs it, skips the package and
/// moves on to the next one.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Package {0} has no installable releases")]
    Missing(String),
}
