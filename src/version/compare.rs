//! Version ordering and "is there something newer" helpers

use std::cmp::Ordering;

use semver::Prerelease;
use tracing::warn;

use crate::version::package_version::PackageVersion;
use crate::version::scheme::Scheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// Scheme-aware ordering of two versions.
///
/// Mixed schemes and unstructured versions fall back to byte-wise comparison of
/// the raw strings. Within one structured scheme the numeric components decide
/// first, then the suffix or prerelease.
pub fn compare_versions(left: &PackageVersion, right: &PackageVersion) -> Ordering {
    if left.scheme() != right.scheme() || !left.scheme().is_structured() {
        return left.as_str().cmp(right.as_str());
    }

    compare_digits(left.digits(), right.digits()).then_with(|| match left.scheme() {
        Scheme::SemanticVersion => compare_prerelease(
            left.prerelease_precedence(),
            right.prerelease_precedence(),
        ),
        // `None` sorts before any suffix
        Scheme::MultiPartNumericSuffix => left.suffix().cmp(&right.suffix()),
        Scheme::AlphaNumeric | Scheme::Unstructured => Ordering::Equal,
    })
}

/// Compare numeric components position by position, padding the shorter side with zeros.
///
/// Examples:
/// - [1, 2] == [1, 2, 0]
/// - [1, 2] < [1, 2, 1]
/// - [1, 10] > [1, 9, 9]
pub fn compare_digits(left: &[u64], right: &[u64]) -> Ordering {
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Digits with trailing zeros removed, so that values comparing equal under
/// [`compare_digits`] have the same representation.
pub(crate) fn significant_digits(digits: &[u64]) -> &[u64] {
    let end = digits.iter().rposition(|d| *d != 0).map_or(0, |i| i + 1);
    &digits[..end]
}

// A release sorts after any prerelease of the same core version.
fn compare_prerelease(left: &Prerelease, right: &Prerelease) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.cmp(right),
    }
}

/// Compare the current version to the latest known version
pub fn compare_to_latest(current_version: &str, latest_version: &str) -> CompareResult {
    let Some(current) = PackageVersion::try_parse(current_version) else {
        warn!("Invalid current version: '{}'", current_version);
        return CompareResult::Invalid;
    };

    let Some(latest) = PackageVersion::try_parse(latest_version) else {
        warn!("Invalid latest version: '{}'", latest_version);
        return CompareResult::Invalid;
    };

    match current.cmp(&latest) {
        Ordering::Less => CompareResult::Outdated,
        Ordering::Equal => CompareResult::Latest,
        Ordering::Greater => CompareResult::Newer,
    }
}

/// Pick the greatest version, skipping blank entries.
///
/// Uses a single linear pass rather than sorting.
pub fn latest<'a, I>(versions: I) -> Option<PackageVersion>
where
    I: IntoIterator<Item = &'a str>,
{
    versions
        .into_iter()
        .filter_map(PackageVersion::try_parse)
        .max()
}

/// Calculate the latest patch version within the same major.minor
///
/// Returns the latest patch version if a newer patch exists,
/// or None if the current version is already the latest patch.
pub fn calculate_latest_patch(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    calculate_latest(current_version, available_versions, 2)
}

/// Calculate the latest minor version within the same major
///
/// Returns the latest minor.patch version if a newer minor exists,
/// or None if the current version is already the latest minor.
pub fn calculate_latest_minor(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    calculate_latest(current_version, available_versions, 1)
}

/// Calculate the latest major version
///
/// Returns the latest version if a newer major version exists,
/// or None if the current version is already the latest.
pub fn calculate_latest_major(
    current_version: &str,
    available_versions: &[String],
) -> Option<String> {
    calculate_latest(current_version, available_versions, 0)
}

// Candidates must share the current scheme and the first `shared_positions` digits.
fn calculate_latest(
    current_version: &str,
    available_versions: &[String],
    shared_positions: usize,
) -> Option<String> {
    let current = PackageVersion::try_parse(current_version)
        .filter(|v| v.scheme().is_structured())?;

    let latest = available_versions
        .iter()
        .filter_map(|v| PackageVersion::try_parse(v))
        .filter(|v| v.scheme() == current.scheme())
        .filter(|v| {
            (0..shared_positions).all(|i| position(v, i) == position(&current, i))
        })
        .max()?;

    if latest > current {
        Some(latest.to_string())
    } else {
        None
    }
}

fn position(version: &PackageVersion, index: usize) -> u64 {
    version.digits().get(index).copied().unwrap_or(0)
}
