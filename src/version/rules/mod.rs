//! Scheme-specific grammar rules

pub mod alpha_numeric;
pub mod numeric_suffix;
pub mod semantic;

pub use alpha_numeric::AlphaNumericRule;
pub use numeric_suffix::NumericSuffixRule;
pub use semantic::SemanticVersionRule;
