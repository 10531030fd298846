//! Parsed, immutable package version

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::version::classifier::classify;
use crate::version::compare::{compare_versions, significant_digits};
use crate::version::error::VersionError;
use crate::version::rule::Captures;
use crate::version::scheme::Scheme;

/// A package version string together with its classified components.
///
/// The scheme is decided once at construction and the value never changes
/// afterwards. Ordering, equality and hashing follow the scheme:
///
/// - values of different schemes, or unstructured values, compare by raw string
/// - otherwise numeric components are compared first, missing positions as `0`
/// - ties are broken by the suffix (multi-part numeric) or prerelease (semver)
///
/// ```
/// use package_version::PackageVersion;
///
/// let rc = PackageVersion::new("1.0.0-rc.1").unwrap();
/// let release = PackageVersion::new("1.0.0").unwrap();
/// assert!(rc < release);
/// ```
#[derive(Debug, Clone)]
pub struct PackageVersion {
    raw: String,
    scheme: Scheme,
    digits: Vec<u64>,
    suffix: Option<String>,
    prerelease: Prerelease,
    build_metadata: BuildMetadata,
}

impl PackageVersion {
    /// Classify and decompose `version`.
    ///
    /// Fails only when `version` is empty or whitespace. Strings no grammar
    /// recognizes become [`Scheme::Unstructured`].
    pub fn new(version: &str) -> Result<Self, VersionError> {
        if version.trim().is_empty() {
            return Err(VersionError::InvalidArgument(
                "version cannot be empty or whitespace",
            ));
        }

        Ok(Self::from_captures(version, classify(version)))
    }

    /// Like [`PackageVersion::new`], but returns `None` instead of an error.
    pub fn try_parse(version: &str) -> Option<Self> {
        Self::new(version).ok()
    }

    fn from_captures(raw: &str, captures: Captures) -> Self {
        let mut version = Self {
            raw: raw.to_string(),
            scheme: captures.scheme(),
            digits: Vec::new(),
            suffix: None,
            prerelease: Prerelease::EMPTY,
            build_metadata: BuildMetadata::EMPTY,
        };

        match captures {
            Captures::SemanticVersion {
                digits,
                prerelease,
                build_metadata,
            } => {
                version.digits = digits;
                version.prerelease = prerelease;
                version.build_metadata = build_metadata;
            }
            Captures::MultiPartNumericSuffix { digits, suffix } => {
                version.digits = digits;
                version.suffix = Some(suffix);
            }
            Captures::AlphaNumeric { digits } => version.digits = digits,
            Captures::Unstructured => {}
        }

        version
    }

    /// The original input, unmodified
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// All dot-separated numeric components
    pub fn digits(&self) -> &[u64] {
        &self.digits
    }

    pub fn major(&self) -> Option<u64> {
        self.digits.first().copied()
    }

    pub fn minor(&self) -> Option<u64> {
        self.digits.get(1).copied()
    }

    pub fn patch(&self) -> Option<u64> {
        self.digits.get(2).copied()
    }

    pub fn revision(&self) -> Option<u64> {
        self.digits.get(3).copied()
    }

    /// Qualifier attached to a multi-part numeric version (`a` in `2.1a`)
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn has_suffix(&self) -> bool {
        self.suffix.is_some()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn has_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Dot-separated prerelease identifiers (`["rc", "1"]` for `1.0.0-rc.1`)
    pub fn prerelease(&self) -> Vec<&str> {
        identifiers(self.prerelease.as_str())
    }

    /// Dot-separated build metadata identifiers. Never affects ordering.
    pub fn build_metadata(&self) -> Vec<&str> {
        identifiers(self.build_metadata.as_str())
    }

    pub(crate) fn prerelease_precedence(&self) -> &Prerelease {
        &self.prerelease
    }
}

fn identifiers(dotted: &str) -> Vec<&str> {
    if dotted.is_empty() {
        Vec::new()
    } else {
        dotted.split('.').collect()
    }
}

impl FromStr for PackageVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_versions(self, other)
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl Hash for PackageVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        match self.scheme {
            // Equal only when the raw strings are equal
            Scheme::Unstructured => self.raw.hash(state),
            // Trailing zeros and build metadata do not affect equality
            _ => {
                significant_digits(&self.digits).hash(state);
                self.suffix.hash(state);
                self.prerelease.hash(state);
            }
        }
    }
}

impl Serialize for PackageVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PackageVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(de::Error::custom)
    }
}
