//! # Quantity Engine
//!
//! Reads free-form ingredient quantities and renders scaled values back as text.
//! This is the single definition of the parsing and formatting rules: every
//! caller that shows an amount (the scaler rows, the delta badges, the CLI) goes
//! through these functions so rounding and fraction matching never diverge.
//!
//! ## Features
//!
//! - Plain decimals ("3", "1.5", ".5")
//! - Simple fractions ("1/2", "3/4")
//! - Mixed numbers ("1 1/2")
//! - Rendering with whole numbers, fraction glyphs (¼ ⅓ ½ ⅔ ¾) or short decimals
//!
//! ## Usage
//!
//! ```rust
//! use dizzydish::quantity::{format_amount, parse_quantity};
//!
//! assert_eq!(parse_quantity("1 1/2"), Some(1.5));
//! assert_eq!(parse_quantity("to taste"), None);
//! assert_eq!(format_amount(1.5), "1 ½");
//! assert_eq!(format_amount(2.0), "2");
//! ```

use log::trace;

use crate::quantity_patterns::{COMMON_FRACTIONS, DECIMAL_REGEX, FRACTION_TOLERANCE};

/// Parse a free-form quantity into a number
///
/// Accepts decimals, `num/den` fractions and `whole num/den` mixed numbers.
/// Anything else (words, several slashes, a zero denominator) yields `None`,
/// which callers treat as "leave this amount unscaled".
///
/// # Examples
///
/// ```rust
/// use dizzydish::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("1/2"), Some(0.5));
/// assert_eq!(parse_quantity(" 3 "), Some(3.0));
/// assert_eq!(parse_quantity("1/0"), None);
/// ```
pub fn parse_quantity(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if trimmed.contains('/') {
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if let [whole, fraction] = tokens.as_slice() {
            if let (Some(whole), Some(fraction)) = (parse_decimal(whole), parse_fraction(fraction)) {
                return Some(whole + fraction);
            }
        }
        return parse_fraction(trimmed);
    }

    let value = parse_decimal(trimmed);
    if value.is_none() {
        trace!("Quantity '{}' is not numeric", trimmed);
    }
    value
}

/// Parse a `num/den` fraction; exactly one slash, both sides plain numbers, non-zero denominator
pub fn parse_fraction(text: &str) -> Option<f64> {
    let mut parts = text.split('/');
    let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
        (Some(numerator), Some(denominator), None) => (numerator, denominator),
        _ => {
            trace!("Fraction '{}' does not have exactly two parts", text);
            return None;
        }
    };

    let numerator = parse_decimal(numerator)?;
    let denominator = parse_decimal(denominator)?;
    if denominator == 0.0 {
        trace!("Fraction '{}' has a zero denominator", text);
        return None;
    }

    Some(numerator / denominator).filter(|value| value.is_finite())
}

/// Parse a plain decimal number, without fraction syntax
///
/// This is also the grammar for amounts typed by the user when constraining a
/// recipe ("I have 3"), which only accepts direct decimal entry.
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !DECIMAL_REGEX.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render an amount for display
///
/// Rules, first match wins:
/// 1. whole values print as integers ("2", "-3", "0")
/// 2. a fractional part close to ¼ ⅓ ½ ⅔ ¾ prints as a glyph ("1 ½", "-½")
/// 3. values that round to a whole number at two decimals print as integers
/// 4. everything else prints with two significant digits, like `%.2g`
///
/// # Examples
///
/// ```rust
/// use dizzydish::quantity::format_amount;
///
/// assert_eq!(format_amount(0.5), "½");
/// assert_eq!(format_amount(2.26), "2 ¼");
/// assert_eq!(format_amount(-0.5), "-½");
/// assert_eq!(format_amount(0.1), "0.1");
/// ```
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if magnitude == magnitude.floor() {
        return format!("{sign}{magnitude:.0}");
    }

    let whole = magnitude.trunc();
    let fraction = magnitude - whole;
    if let Some(glyph) = fraction_glyph(fraction) {
        return if whole > 0.0 {
            format!("{sign}{whole:.0} {glyph}")
        } else {
            format!("{sign}{glyph}")
        };
    }

    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.floor() {
        // Whole values are caught above, so this one is well inside i64 range
        return (rounded as i64).to_string();
    }

    format_two_significant(value)
}

/// Find the glyph for a fractional part in (0, 1), if one is close enough
fn fraction_glyph(fraction: f64) -> Option<&'static str> {
    COMMON_FRACTIONS
        .iter()
        .find(|(value, _)| (fraction - value).abs() < FRACTION_TOLERANCE)
        .map(|(_, glyph)| *glyph)
}

/// Render a number with two significant digits, the way C's `%.2g` does
///
/// Fixed notation when the decimal exponent is in `-4..2`, scientific notation
/// (`1.5e+02`) otherwise; trailing zeros are dropped in both cases.
///
/// # Examples
///
/// ```rust
/// use dizzydish::quantity::format_two_significant;
///
/// assert_eq!(format_two_significant(0.083), "0.083");
/// assert_eq!(format_two_significant(1.37), "1.4");
/// assert_eq!(format_two_significant(150.1), "1.5e+02");
/// ```
pub fn format_two_significant(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent must be taken after rounding to two digits: 9.96 is "10", not "9.96"
    let scientific = format!("{value:.1e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..2).contains(&exponent) {
        let decimals = (1 - exponent) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}"))
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            exponent_sign,
            exponent.abs()
        )
    }
}

/// Percentage label for a scale factor: 2.0 becomes "200%"
pub fn format_percent(factor: f64) -> String {
    format!("{}%", (factor * 100.0).round() as i64)
}

fn trim_trailing_zeros(number: &str) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        number.to_string()
    }
}
