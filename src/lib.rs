//! Resolve the PyPI package versions that were current at a given date
//!
//! - [`version`]: registry access and date-based resolution
//! - [`parser`]: package names from the command line or a requirements file
//! - [`output`]: table, requirements file or pip install
//! - [`app`]: batch driver tying the layers together

pub mod app;
pub mod config;
pub mod logging;
pub mod output;
pub mod parser;
pub mod version;
