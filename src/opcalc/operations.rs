//! Binary arithmetic primitives.
//!
//! Integer inputs stay integers whenever the exact result fits in an `i64`;
//! on overflow, or when either side is a float, the result is a float.
//! Division always produces a float.

use crate::error::{CalcError, Result};
use crate::number::Number;

pub fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 + y as f64)),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

pub fn subtract(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_sub(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 - y as f64)),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

pub fn multiply(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x
            .checked_mul(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 * y as f64)),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

pub fn divide(a: Number, b: Number) -> Result<Number> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero("Division by zero is not allowed"));
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

pub fn power(a: Number, b: Number) -> Result<Number> {
    if a.is_zero() && b.as_f64() < 0.0 {
        return Err(CalcError::DivisionByZero(
            "Zero cannot be raised to a negative power",
        ));
    }

    if let (Number::Int(base), Number::Int(exp)) = (a, b) {
        if exp >= 0 {
            let exact = u32::try_from(exp)
                .ok()
                .and_then(|e| base.checked_pow(e));
            if let Some(value) = exact {
                return Ok(Number::Int(value));
            }
        }
    }

    let (base, exp) = (a.as_f64(), b.as_f64());
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return Err(CalcError::Undefined(format!(
            "{} ** {} has no real result",
            a, b
        )));
    }
    Ok(Number::Float(base.powf(exp)))
}

/// Floor modulus: a non-zero result takes the sign of the divisor.
pub fn modulus(a: Number, b: Number) -> Result<Number> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero("Modulus by zero is not allowed"));
    }

    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            // i64::MIN % -1 overflows; the mathematical answer is 0
            let r = x.checked_rem(y).unwrap_or(0);
            if r != 0 && (r < 0) != (y < 0) {
                Ok(Number::Int(r + y))
            } else {
                Ok(Number::Int(r))
            }
        }
        _ => {
            let (x, y) = (a.as_f64(), b.as_f64());
            let r = x % y;
            if r == 0.0 {
                Ok(Number::Float(0.0_f64.copysign(y)))
            } else if (r < 0.0) != (y < 0.0) {
                Ok(Number::Float(r + y))
            } else {
                Ok(Number::Float(r))
            }
        }
    }
}
