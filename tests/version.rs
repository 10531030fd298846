use std::cmp::Ordering;
use std::collections::HashSet;

use package_version::{PackageVersion, Scheme, VersionError};
use rstest::rstest;

const SAMPLES: &[&str] = &[
    "1.2.3",
    "1.2.3-alpha",
    "1.2.3-alpha.1",
    "1.2.3-alpha.beta",
    "1.2.3+build.7",
    "1.0.0-rc.1",
    "1.0.0",
    "0.9.12",
    "2.1a",
    "2.1b",
    "2.1.0a",
    "10.0b3",
    "1.2",
    "1.2.0.0",
    "7",
    "10.0.19041.1",
    "not-a-version-at-all!!",
    "nightly",
    "v1.2.3",
];

fn parse(s: &str) -> PackageVersion {
    PackageVersion::new(s).unwrap()
}

fn same_scheme_groups() -> Vec<Vec<PackageVersion>> {
    [
        Scheme::SemanticVersion,
        Scheme::MultiPartNumericSuffix,
        Scheme::AlphaNumeric,
        Scheme::Unstructured,
    ]
    .into_iter()
    .map(|scheme| {
        SAMPLES
            .iter()
            .map(|s| parse(s))
            .filter(|v| v.scheme() == scheme)
            .collect()
    })
    .collect()
}

#[test]
fn to_string_round_trips_raw_input() {
    for s in SAMPLES {
        assert_eq!(parse(s).to_string(), *s);
    }
}

#[test]
fn comparison_is_reflexive_and_antisymmetric() {
    for a in SAMPLES.iter().map(|s| parse(s)) {
        assert_eq!(a.cmp(&a), Ordering::Equal, "{} vs itself", a);

        for b in SAMPLES.iter().map(|s| parse(s)) {
            assert_eq!(a.cmp(&b), b.cmp(&a).reverse(), "{} vs {}", a, b);
            assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        }
    }
}

#[test]
fn comparison_is_transitive_within_a_scheme() {
    for group in same_scheme_groups() {
        for a in &group {
            for b in &group {
                for c in &group {
                    if a <= b && b <= c {
                        assert!(a <= c, "{} <= {} <= {} but not {} <= {}", a, b, c, a, c);
                    }
                }
            }
        }
    }
}

#[test]
fn sorting_within_a_scheme_follows_precedence() {
    let mut versions: Vec<PackageVersion> = [
        "1.0.0",
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "1.0.0-alpha",
        "1.0.0-beta",
        "1.0.0-alpha.beta",
        "1.0.0-beta.2",
        "1.0.0-alpha.1",
    ]
    .iter()
    .map(|s| parse(s))
    .collect();

    versions.sort();

    let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(
        sorted,
        vec![
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ]
    );
}

#[rstest]
#[case("1.2", "1.2.0.0")]
#[case("1.0.0+build5", "1.0.0+build9")]
#[case("2.1a", "2.1.0a")]
fn equal_versions_collapse_in_hash_set(#[case] left: &str, #[case] right: &str) {
    let set: HashSet<PackageVersion> = [parse(left), parse(right)].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn zero_padded_numeric_versions_are_equal() {
    let short = parse("1.2");
    let long = parse("1.2.0.0");

    assert_eq!(short.scheme(), Scheme::AlphaNumeric);
    assert_eq!(long.scheme(), Scheme::AlphaNumeric);
    assert_eq!(short, long);
}

#[test]
fn prerelease_sorts_before_release() {
    assert!(parse("1.2.3-alpha") < parse("1.2.3"));
    assert!(parse("1.0.0-rc.1") < parse("1.0.0"));
    assert!(!(parse("1.2.3") < parse("1.2.3-alpha")));
}

#[test]
fn prerelease_identifiers_follow_semver_precedence() {
    assert!(parse("1.2.3-alpha") < parse("1.2.3-alpha.1"));
    assert!(parse("1.2.3-alpha.1") < parse("1.2.3-alpha.beta"));
}

#[test]
fn build_metadata_is_ignored_but_kept() {
    let left = parse("1.0.0+build5");
    let right = parse("1.0.0+build9");

    assert_eq!(left, right);
    assert_eq!(left.build_metadata(), vec!["build5"]);
    assert_eq!(right.build_metadata(), vec!["build9"]);
}

#[test]
fn numeric_suffix_versions_compare_by_suffix() {
    let a = parse("2.1a");

    assert_eq!(a.scheme(), Scheme::MultiPartNumericSuffix);
    assert_eq!(a.digits(), &[2, 1]);
    assert_eq!(a.suffix(), Some("a"));
    assert!(a < parse("2.1b"));
    assert!(parse("2.1") < a);
}

#[test]
fn blank_input_is_invalid_argument() {
    assert_eq!(
        PackageVersion::new("   ").unwrap_err(),
        VersionError::InvalidArgument("version cannot be empty or whitespace")
    );
    assert!(PackageVersion::try_parse("").is_none());
}

#[test]
fn unrecognized_input_is_unstructured_and_ordered_by_raw_string() {
    let odd = parse("not-a-version-at-all!!");

    assert_eq!(odd.scheme(), Scheme::Unstructured);
    assert!(odd > parse("nightly"));
    assert!(odd > parse("1.2.3"));
    assert!(parse("alpha") < odd);
}
