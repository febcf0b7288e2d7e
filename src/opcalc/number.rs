//! # Numbers
//!
//! A [`Number`] is either an integer or a float. Integers stay integers through
//! operations that can keep them exact and are promoted to floats otherwise (see
//! [`crate::operations`]).
//!
//! ## Display
//!
//! The display form is the one users of interactive calculators expect:
//!
//! - integers print bare: `5`, `-3`
//! - floats always show they are floats: `5.0`, `3.5`, `0.25`
//! - very large or very small floats use exponent notation: `1e+16`, `1.5e-05`
//! - non-finite floats print as `inf`, `-inf`, `nan`
//!
//! The same form is used when writing history rows, so a float written to disk
//! parses back to the identical value.

use crate::error::{CalcError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Floats at or beyond this magnitude switch to exponent notation.
const EXP_UPPER: f64 = 1e16;
/// Non-zero floats below this magnitude switch to exponent notation.
const EXP_LOWER: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Coerces to the float representation, keeping the value.
    pub fn to_float(self) -> Number {
        Number::Float(self.as_f64())
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Whole-valued numbers render without a fractional part, everything else
    /// keeps its normal display.
    pub fn display_whole(self) -> String {
        match self {
            Number::Float(f) if f == 0.0 => "0".to_string(),
            Number::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                format!("{:.0}", f)
            }
            other => other.to_string(),
        }
    }

    /// Parses user or file text into a number, preferring the integer form.
    pub fn parse(input: &str) -> Result<Number> {
        let trimmed = input.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| CalcError::InvalidOperand(format!("'{}' is not a number", input)))
    }
}

impl FromStr for Number {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Number::parse(s)
    }
}

pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = f.abs();
    if magnitude >= EXP_UPPER || (magnitude != 0.0 && magnitude < EXP_LOWER) {
        return format_exponent(f);
    }
    if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

// `{:e}` yields "1.5e-5"; widen the exponent to a signed two-digit field.
fn format_exponent(f: f64) -> String {
    let raw = format!("{:e}", f);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", format_float(*x)),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_display_bare() {
        assert_eq!(Number::Int(5).to_string(), "5");
        assert_eq!(Number::Int(-3).to_string(), "-3");
    }

    #[test]
    fn floats_always_show_fraction() {
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Number::Float(3.5).to_string(), "3.5");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
        assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn extreme_floats_use_exponent() {
        assert_eq!(Number::Float(1e16).to_string(), "1e+16");
        assert_eq!(Number::Float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Number::Float(-2.5e300).to_string(), "-2.5e+300");
    }

    #[test]
    fn non_finite_display() {
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn display_whole_drops_fraction_only_when_whole() {
        assert_eq!(Number::Float(4.0).display_whole(), "4");
        assert_eq!(Number::Float(3.5).display_whole(), "3.5");
        assert_eq!(Number::Int(7).display_whole(), "7");
        assert_eq!(Number::Float(f64::INFINITY).display_whole(), "inf");
    }

    #[test]
    fn parse_prefers_integers() {
        assert!(matches!(Number::parse("42").unwrap(), Number::Int(42)));
        assert!(matches!(Number::parse(" -7 ").unwrap(), Number::Int(-7)));
        assert!(matches!(Number::parse("2.5").unwrap(), Number::Float(f) if f == 2.5));
        assert!(matches!(Number::parse("1e3").unwrap(), Number::Float(f) if f == 1000.0));
    }

    #[test]
    fn parse_rejects_text() {
        let err = Number::parse("abc").unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperand(_)));
        assert!(Number::parse("").is_err());
    }

    #[test]
    fn float_display_parses_back_exactly() {
        for value in [10.0, 3.5, 0.1 + 0.2, 1e16, 1.5e-5, -123456.789] {
            let text = Number::Float(value).to_string();
            assert_eq!(Number::parse(&text).unwrap().as_f64(), value, "{}", text);
        }
    }

    #[test]
    fn equality_is_numeric_across_representations() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.5));
        assert_eq!(Number::Float(0.25), 0.25);
        assert_eq!(Number::Int(5), 5);
    }
}
