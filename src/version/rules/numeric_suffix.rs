//! Multi-part numeric versions with a trailing qualifier
//!
//! The qualifier is attached to the last numeric segment without a separator:
//! `2.1a`, `1.0.0b3`, `5.0_rc`. Leading zeros in the numeric part are allowed.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::rule::{Captures, SchemeRule, parse_digits};
use crate::version::scheme::Scheme;

// The numeric part is greedy, so a suffix never starts with a digit.
static NUMERIC_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<digits>[0-9]+(?:\.[0-9]+)*)(?P<suffix>[a-zA-Z_][0-9a-zA-Z_]*)$")
        .expect("numeric suffix grammar is valid")
});

pub struct NumericSuffixRule;

impl SchemeRule for NumericSuffixRule {
    fn scheme(&self) -> Scheme {
        Scheme::MultiPartNumericSuffix
    }

    fn capture(&self, version: &str) -> Option<Captures> {
        let caps = NUMERIC_SUFFIX_RE.captures(version)?;
        let digits = parse_digits(caps.name("digits")?.as_str())?;
        let suffix = caps.name("suffix")?.as_str().to_string();

        Some(Captures::MultiPartNumericSuffix { digits, suffix })
    }
}
