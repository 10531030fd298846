//! Dot-separated numeric versions of any length (`7`, `1.2`, `10.0.19041.1`)

use std::sync::LazyLock;

use regex::Regex;

use crate::version::rule::{Captures, SchemeRule, parse_digits};
use crate::version::scheme::Scheme;

static ALPHA_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("numeric grammar is valid"));

pub struct AlphaNumericRule;

impl SchemeRule for AlphaNumericRule {
    fn scheme(&self) -> Scheme {
        Scheme::AlphaNumeric
    }

    fn capture(&self, version: &str) -> Option<Captures> {
        if !ALPHA_NUMERIC_RE.is_match(version) {
            return None;
        }

        // Empty segments ("1..2", ".5") pass the grammar but fail to decode
        let digits = parse_digits(version)?;
        Some(Captures::AlphaNumeric { digits })
    }
}
