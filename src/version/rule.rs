//! Grammar rule abstraction for version schemes

use semver::{BuildMetadata, Prerelease};
use tracing::debug;

use crate::version::scheme::Scheme;

/// Components captured by the first grammar rule that matched a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captures {
    SemanticVersion {
        digits: Vec<u64>,
        prerelease: Prerelease,
        build_metadata: BuildMetadata,
    },
    MultiPartNumericSuffix {
        digits: Vec<u64>,
        suffix: String,
    },
    AlphaNumeric {
        digits: Vec<u64>,
    },
    Unstructured,
}

impl Captures {
    pub fn scheme(&self) -> Scheme {
        match self {
            Captures::SemanticVersion { .. } => Scheme::SemanticVersion,
            Captures::MultiPartNumericSuffix { .. } => Scheme::MultiPartNumericSuffix,
            Captures::AlphaNumeric { .. } => Scheme::AlphaNumeric,
            Captures::Unstructured => Scheme::Unstructured,
        }
    }
}

/// Trait for a single scheme grammar
///
/// A rule either captures the whole input or declines it. Declining covers both
/// "the grammar does not match" and "the grammar matched but a component could
/// not be decoded" (e.g. a numeric segment overflowing `u64`), so the classifier
/// moves on to the next rule in both cases.
pub trait SchemeRule: Send + Sync {
    /// Returns the scheme this rule recognizes
    fn scheme(&self) -> Scheme;

    /// Capture the components of `version` if the entire string matches
    fn capture(&self, version: &str) -> Option<Captures>;
}

/// Split a dot-separated numeric prefix into its segments.
///
/// Returns `None` if any segment is empty or does not fit in `u64`.
pub(crate) fn parse_digits(prefix: &str) -> Option<Vec<u64>> {
    prefix
        .split('.')
        .map(|segment| {
            segment
                .parse::<u64>()
                .inspect_err(|e| debug!("Rejecting numeric segment '{}': {}", segment, e))
                .ok()
        })
        .collect()
}
