//! Version classification and ordering
//!
//! This module turns arbitrary package version strings into comparable values.
//! Each string is classified into exactly one [`Scheme`] by an ordered list of
//! grammar rules, decomposed into its components, and ordered scheme-aware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │    &str     │────▶│  Classifier  │────▶│ PackageVersion │
//! │   (raw)     │     │ (first match)│     │  (immutable)   │
//! └─────────────┘     └──────────────┘     └────────────────┘
//!                            │                      │
//!                            ▼                      ▼
//!                     ┌──────────────┐     ┌────────────────┐
//!                     │    Rules     │     │    Compare     │
//!                     │(semver, ...) │     │ (Ord, latest)  │
//!                     └──────────────┘     └────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Tries grammar rules in priority order
//! - [`rule`]: Grammar rule trait and captured components
//! - [`rules`]: Concrete rules (semantic version, numeric suffix, numeric)
//! - [`package_version`]: The parsed version value
//! - [`compare`]: Ordering and latest-version helpers
//! - [`scheme`]: Scheme enumeration
//! - [`error`]: Error types

pub mod classifier;
pub mod compare;
pub mod error;
pub mod package_version;
pub mod rule;
pub mod rules;
pub mod scheme;

pub use compare::CompareResult;
pub use error::VersionError;
pub use package_version::PackageVersion;
pub use scheme::Scheme;
