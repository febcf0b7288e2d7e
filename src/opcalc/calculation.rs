//! # Calculations
//!
//! A [`Calculation`] is one arithmetic operator applied to two operands. The set
//! of operators is closed, so calculations are a plain enum: every method
//! matches exhaustively and adding an operator is a compile-time checked change.
//!
//! Calculations are short-lived. The front end builds one per request, the
//! [`Calculator`](crate::calculator::Calculator) computes it, and only the kind,
//! operands and result survive in history as an
//! [`OperationCommand`](crate::model::OperationCommand).
//!
//! ## String Forms
//!
//! - [`Calculation::describe`]: `Addition: 2 + 3 = 5`
//! - [`Calculation::debug_describe`]: `Addition(a=2, b=3, result=5)`
//!
//! Division renders a whole-valued result without a decimal point
//! (`Division: 8 / 2 = 4`). The other operators keep the result's normal
//! display, so `Addition: 2.5 + 1.5 = 4.0`.

use crate::error::{CalcError, Result};
use crate::model::OperationKind;
use crate::number::Number;
use crate::operations;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: Number,
    pub b: Number,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Addition(Operands),
    Subtraction(Operands),
    Multiplication(Operands),
    Division(Operands),
    Power(Operands),
    Modulus(Operands),
}

fn operands(a: Number, b: Number) -> Result<Operands> {
    for (name, value) in [("a", a), ("b", b)] {
        if value.is_nan() {
            return Err(CalcError::InvalidOperand(format!(
                "operand {} must be a number, got {}",
                name, value
            )));
        }
    }
    Ok(Operands { a, b })
}

impl Calculation {
    /// Builds the calculation for `kind`. Fails with `InvalidOperand` when an
    /// operand is not a number.
    pub fn create(kind: OperationKind, a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        let ops = operands(a.into(), b.into())?;
        Ok(match kind {
            OperationKind::Add => Calculation::Addition(ops),
            OperationKind::Subtract => Calculation::Subtraction(ops),
            OperationKind::Multiply => Calculation::Multiplication(ops),
            OperationKind::Divide => Calculation::Division(ops),
            OperationKind::Power => Calculation::Power(ops),
            OperationKind::Mod => Calculation::Modulus(ops),
        })
    }

    pub fn addition(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Add, a, b)
    }

    pub fn subtraction(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Subtract, a, b)
    }

    pub fn multiplication(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Multiply, a, b)
    }

    pub fn division(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Divide, a, b)
    }

    pub fn power(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Power, a, b)
    }

    pub fn modulus(a: impl Into<Number>, b: impl Into<Number>) -> Result<Self> {
        Self::create(OperationKind::Mod, a, b)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Calculation::Addition(_) => OperationKind::Add,
            Calculation::Subtraction(_) => OperationKind::Subtract,
            Calculation::Multiplication(_) => OperationKind::Multiply,
            Calculation::Division(_) => OperationKind::Divide,
            Calculation::Power(_) => OperationKind::Power,
            Calculation::Modulus(_) => OperationKind::Mod,
        }
    }

    pub fn operands(&self) -> Operands {
        match self {
            Calculation::Addition(ops)
            | Calculation::Subtraction(ops)
            | Calculation::Multiplication(ops)
            | Calculation::Division(ops)
            | Calculation::Power(ops)
            | Calculation::Modulus(ops) => *ops,
        }
    }

    pub fn a(&self) -> Number {
        self.operands().a
    }

    pub fn b(&self) -> Number {
        self.operands().b
    }

    pub fn compute(&self) -> Result<Number> {
        match *self {
            Calculation::Addition(Operands { a, b }) => Ok(operations::add(a, b)),
            Calculation::Subtraction(Operands { a, b }) => Ok(operations::subtract(a, b)),
            Calculation::Multiplication(Operands { a, b }) => Ok(operations::multiply(a, b)),
            Calculation::Division(Operands { a, b }) => operations::divide(a, b),
            Calculation::Power(Operands { a, b }) => operations::power(a, b),
            Calculation::Modulus(Operands { a, b }) => operations::modulus(a, b),
        }
    }

    fn formatted_result(&self) -> String {
        match (self, self.compute()) {
            (Calculation::Division(_), Ok(result)) => result.display_whole(),
            (_, Ok(result)) => result.to_string(),
            (_, Err(e)) => format!("<{}>", e),
        }
    }

    /// Display form: `Addition: 2 + 3 = 5`.
    pub fn describe(&self) -> String {
        let kind = self.kind();
        format!(
            "{}: {} {} {} = {}",
            kind.name(),
            self.a(),
            kind.symbol(),
            self.b(),
            self.formatted_result()
        )
    }

    /// Debug form: `Addition(a=2, b=3, result=5)`.
    pub fn debug_describe(&self) -> String {
        format!(
            "{}(a={}, b={}, result={})",
            self.kind().name(),
            self.a(),
            self.b(),
            self.formatted_result()
        )
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_scenario() {
        let calc = Calculation::addition(2, 3).unwrap();
        assert_eq!(calc.compute().unwrap(), 5);
        assert_eq!(calc.describe(), "Addition: 2 + 3 = 5");
        assert_eq!(calc.debug_describe(), "Addition(a=2, b=3, result=5)");
    }

    #[test]
    fn subtraction_and_multiplication() {
        let sub = Calculation::subtraction(5, 10).unwrap();
        assert_eq!(sub.compute().unwrap(), -5);
        assert_eq!(sub.describe(), "Subtraction: 5 - 10 = -5");

        let mul = Calculation::multiplication(4, 5).unwrap();
        assert_eq!(mul.compute().unwrap(), 20);
        assert_eq!(mul.describe(), "Multiplication: 4 * 5 = 20");
    }

    #[test]
    fn division_scenario() {
        let calc = Calculation::division(7, 2).unwrap();
        assert_eq!(calc.compute().unwrap(), 3.5);
        assert_eq!(calc.describe(), "Division: 7 / 2 = 3.5");
    }

    #[test]
    fn division_whole_result_has_no_decimal_point() {
        let calc = Calculation::division(8, 2).unwrap();
        assert_eq!(calc.describe(), "Division: 8 / 2 = 4");
        assert_eq!(calc.debug_describe(), "Division(a=8, b=2, result=4)");

        let calc = Calculation::division(4, 2).unwrap();
        assert_eq!(calc.describe(), "Division: 4 / 2 = 2");
    }

    #[test]
    fn whole_float_results_outside_division_keep_their_fraction() {
        let calc = Calculation::addition(2.5, 1.5).unwrap();
        assert_eq!(calc.describe(), "Addition: 2.5 + 1.5 = 4.0");

        let calc = Calculation::power(2, -1).unwrap();
        assert_eq!(calc.describe(), "Power: 2 ** -1 = 0.5");
    }

    #[test]
    fn modulus_scenarios() {
        assert_eq!(Calculation::modulus(-10, 3).unwrap().compute().unwrap(), 2);
        assert_eq!(Calculation::modulus(10, -3).unwrap().compute().unwrap(), -2);
        assert_eq!(
            Calculation::modulus(10, 3).unwrap().describe(),
            "Modulus: 10 % 3 = 1"
        );
    }

    #[test]
    fn power_scenarios() {
        assert_eq!(Calculation::power(0, 0).unwrap().compute().unwrap(), 1);
        assert_eq!(Calculation::power(2, -2).unwrap().compute().unwrap(), 0.25);
        assert_eq!(
            Calculation::power(2, 3).unwrap().describe(),
            "Power: 2 ** 3 = 8"
        );
    }

    #[test]
    fn zero_divisor_propagates_from_compute() {
        let div = Calculation::division(1, 0).unwrap();
        assert!(matches!(div.compute(), Err(CalcError::DivisionByZero(_))));

        let rem = Calculation::modulus(1, 0).unwrap();
        assert!(matches!(rem.compute(), Err(CalcError::DivisionByZero(_))));
    }

    #[test]
    fn describe_renders_failure_instead_of_panicking() {
        let div = Calculation::division(1, 0).unwrap();
        assert_eq!(
            div.describe(),
            "Division: 1 / 0 = <Division by zero is not allowed>"
        );
    }

    #[test]
    fn nan_operand_is_rejected() {
        let err = Calculation::addition(f64::NAN, 1).unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperand(_)));
        let err = Calculation::division(1, f64::NAN).unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperand(_)));
    }

    #[test]
    fn create_maps_every_kind() {
        for kind in OperationKind::ALL {
            let calc = Calculation::create(kind, 6, 3).unwrap();
            assert_eq!(calc.kind(), kind);
            assert_eq!(calc.a(), 6);
            assert_eq!(calc.b(), 3);
        }
    }
}
