//! Versioning schemes recognized by the classifier

use serde::{Deserialize, Serialize};

/// Grammar family a version string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` (1.2.3-rc.1+abc)
    SemanticVersion,
    /// Dot-separated numbers with a trailing qualifier (2.1a, 1.0.0b3)
    MultiPartNumericSuffix,
    /// Dot-separated numbers only (7, 1.2, 1.2.3.4)
    AlphaNumeric,
    /// Anything else
    Unstructured,
}

impl Scheme {
    /// Returns the string representation of the scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::SemanticVersion => "semantic_version",
            Scheme::MultiPartNumericSuffix => "multi_part_numeric_suffix",
            Scheme::AlphaNumeric => "alpha_numeric",
            Scheme::Unstructured => "unstructured",
        }
    }

    /// Whether values of this scheme carry numeric components
    pub fn is_structured(&self) -> bool {
        !matches!(self, Scheme::Unstructured)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semantic_version" => Ok(Scheme::SemanticVersion),
            "multi_part_numeric_suffix" => Ok(Scheme::MultiPartNumericSuffix),
            "alpha_numeric" => Ok(Scheme::AlphaNumeric),
            "unstructured" => Ok(Scheme::Unstructured),
            _ => Err(()),
        }
    }
}
