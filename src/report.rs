//! Rendering of classification and comparison results for the CLI

use std::cmp::Ordering;

use serde::Serialize;

use crate::version::{PackageVersion, Scheme};

/// Decomposed view of a version, as printed by `classify`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Classification<'a> {
    pub version: &'a str,
    pub scheme: Scheme,
    pub digits: &'a [u64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerelease: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_metadata: Vec<&'a str>,
}

impl<'a> From<&'a PackageVersion> for Classification<'a> {
    fn from(version: &'a PackageVersion) -> Self {
        Self {
            version: version.as_str(),
            scheme: version.scheme(),
            digits: version.digits(),
            suffix: version.suffix(),
            prerelease: version.prerelease(),
            build_metadata: version.build_metadata(),
        }
    }
}

impl Classification<'_> {
    /// One-line, tab-separated text form
    ///
    /// Example: `1.0.0-rc.1+b7	semantic_version	digits=1.0.0	prerelease=rc.1	build=b7`
    pub fn to_text(&self) -> String {
        let mut fields = vec![self.version.to_string(), self.scheme.to_string()];

        if !self.digits.is_empty() {
            let digits: Vec<String> = self.digits.iter().map(u64::to_string).collect();
            fields.push(format!("digits={}", digits.join(".")));
        }
        if let Some(suffix) = self.suffix {
            fields.push(format!("suffix={}", suffix));
        }
        if !self.prerelease.is_empty() {
            fields.push(format!("prerelease={}", self.prerelease.join(".")));
        }
        if !self.build_metadata.is_empty() {
            fields.push(format!("build={}", self.build_metadata.join(".")));
        }

        fields.join("\t")
    }
}

/// Result of comparing two versions, as printed by `compare`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub left: &'a str,
    pub right: &'a str,
    pub ordering: &'static str,
}

impl<'a> Comparison<'a> {
    pub fn new(left: &'a PackageVersion, right: &'a PackageVersion) -> Self {
        Self {
            left: left.as_str(),
            right: right.as_str(),
            ordering: ordering_symbol(left.cmp(right)),
        }
    }

    pub fn to_text(&self) -> String {
        format!("{} {} {}", self.left, self.ordering, self.right)
    }
}

pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
