pub mod config;
pub mod logging;
pub mod report;
pub mod version;

pub use version::{CompareResult, PackageVersion, Scheme, VersionError};
