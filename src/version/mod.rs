//! Version resolution layer
//!
//! This module fetches release metadata from a registry and picks the release
//! that was current at a given date.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   History   │────▶│  Resolver   │
//! │  (fetch)    │     │ (normalize) │     │(date search)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │   (PyPI)    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`date`]: Target date validation
//! - [`error`]: Error types for registry and resolution failures
//! - [`history`]: Chronological release history and selection policy
//! - [`registry`]: Registry trait for fetching release metadata
//! - [`registries`]: Concrete registry implementations
//! - [`resolver`]: Date-based version resolution
//! - [`types`]: Common types like `Release` and `Resolution`

pub mod date;
pub mod error;
pub mod history;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
