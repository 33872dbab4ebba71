//! Registry implementations for fetching package release metadata

pub mod pypi;

pub use pypi::PypiRegistry;
