//! Scheme classification
//!
//! Rules are tried in priority order and the first one that captures the whole
//! string wins. Anything no rule accepts is [`Captures::Unstructured`].

use tracing::trace;

use crate::version::rule::{Captures, SchemeRule};
use crate::version::rules::{AlphaNumericRule, NumericSuffixRule, SemanticVersionRule};

static RULES: [&dyn SchemeRule; 3] = [&SemanticVersionRule, &NumericSuffixRule, &AlphaNumericRule];

/// Classify a version string into its scheme and components
pub fn classify(version: &str) -> Captures {
    for rule in RULES {
        if let Some(captures) = rule.capture(version) {
            trace!("Classified '{}' as {}", version, rule.scheme());
            return captures;
        }
    }

    trace!("No grammar matched '{}', treating as unstructured", version);
    Captures::Unstructured
}
