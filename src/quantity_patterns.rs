//! # Quantity Patterns Module
//!
//! Regex patterns and lookup tables used to read and render ingredient quantities.

use lazy_static::lazy_static;
use regex::Regex;

/// A plain decimal token: optional sign, digits with an optional fractional part
/// (or a bare fractional part), optional exponent. Rejects "inf", "nan" and the like.
pub const DECIMAL_PATTERN: &str = r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$";

/// Common fractions tried in order when rendering an amount; first match within
/// [`FRACTION_TOLERANCE`] wins.
pub const COMMON_FRACTIONS: [(f64, &str); 5] = [
    (0.25, "¼"),
    (0.33, "⅓"),
    (0.5, "½"),
    (0.67, "⅔"),
    (0.75, "¾"),
];

/// Maximum distance (exclusive) between a fractional part and a table entry
pub const FRACTION_TOLERANCE: f64 = 0.05;

// Compiled once, shared by every caller
lazy_static! {
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
}
