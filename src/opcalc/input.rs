//! Parsing of interactive input lines.
//!
//! A line is either a keyword (`history`, `undo`, `clear`, `help`, `exit`,
//! `quit`) or an operation of the form `<op> <a> <b>`. Input is trimmed and
//! matched case-insensitively.
//!
//! Malformed operation lines fail in a fixed order: wrong word count
//! (`CalcError::Input`), then non-numeric operands (`InvalidOperand`), then an
//! operator with no matching calculation (`UnknownOperation`).

use crate::calculation::Calculation;
use crate::error::{CalcError, Result};
use crate::model::OperationKind;
use crate::number::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Evaluate(Calculation),
    History,
    Undo,
    Clear,
    Help,
    Exit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Request> {
    let normalized = line.trim().to_lowercase();

    match normalized.as_str() {
        "" => return Ok(Request::Empty),
        "history" => return Ok(Request::History),
        "undo" => return Ok(Request::Undo),
        "clear" => return Ok(Request::Clear),
        "help" => return Ok(Request::Help),
        "exit" | "quit" => return Ok(Request::Exit),
        _ => {}
    }

    let parts: Vec<&str> = normalized.split_whitespace().collect();
    let [op, a, b] = parts.as_slice() else {
        return Err(CalcError::Input(format!(
            "expected '<operation> <a> <b>', got {} word(s)",
            parts.len()
        )));
    };

    parse_calculation(op, a, b).map(Request::Evaluate)
}

/// Builds a calculation from its textual parts.
pub fn parse_calculation(op: &str, a: &str, b: &str) -> Result<Calculation> {
    let a = Number::parse(a)?;
    let b = Number::parse(b)?;
    let kind: OperationKind = op.parse()?;
    Calculation::create(kind, a, b)
}
