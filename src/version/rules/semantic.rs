//! Semantic Versioning 2.0.0 grammar
//!
//! - Core: `MAJOR.MINOR.PATCH`, no leading zeros (`1.2.3`, `0.10.0`)
//! - Prerelease: `-` then dot-separated identifiers (`1.0.0-rc.1`, `1.0.0-x-y.7`)
//! - Build metadata: `+` then dot-separated identifiers, leading zeros allowed (`1.0.0+001`)

use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use tracing::debug;

use crate::version::rule::{Captures, SchemeRule, parse_digits};
use crate::version::scheme::Scheme;

static SEMANTIC_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<core>(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*))",
        r"(?:-(?P<prerelease>",
        r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*",
        r"))?",
        r"(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("semantic version grammar is valid")
});

pub struct SemanticVersionRule;

impl SchemeRule for SemanticVersionRule {
    fn scheme(&self) -> Scheme {
        Scheme::SemanticVersion
    }

    fn capture(&self, version: &str) -> Option<Captures> {
        let caps = SEMANTIC_VERSION_RE.captures(version)?;
        let digits = parse_digits(caps.name("core")?.as_str())?;

        let prerelease = match caps.name("prerelease") {
            Some(m) => Prerelease::new(m.as_str())
                .inspect_err(|e| debug!("Rejecting prerelease '{}': {}", m.as_str(), e))
                .ok()?,
            None => Prerelease::EMPTY,
        };

        let build_metadata = match caps.name("build") {
            Some(m) => BuildMetadata::new(m.as_str())
                .inspect_err(|e| debug!("Rejecting build metadata '{}': {}", m.as_str(), e))
                .ok()?,
            None => BuildMetadata::EMPTY,
        };

        Some(Captures::SemanticVersion {
            digits,
            prerelease,
            build_metadata,
        })
    }
}
