use crate::error::{CalcError, Result};
use crate::number::Number;
use std::fmt;
use std::str::FromStr;

/// The stable tag of an arithmetic operator, shared by calculations, history
/// entries and history file rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Mod,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::Mod,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
            OperationKind::Power => "power",
            OperationKind::Mod => "mod",
        }
    }

    /// Human name used in calculation descriptions.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Subtract => "Subtraction",
            OperationKind::Multiply => "Multiplication",
            OperationKind::Divide => "Division",
            OperationKind::Power => "Power",
            OperationKind::Mod => "Modulus",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Add => "+",
            OperationKind::Subtract => "-",
            OperationKind::Multiply => "*",
            OperationKind::Divide => "/",
            OperationKind::Power => "**",
            OperationKind::Mod => "%",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OperationKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// A record of one executed calculation.
///
/// The fields are stored exactly as given: the calculator builds these right
/// after a successful compute and is trusted to pass the matching result.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationCommand {
    kind: OperationKind,
    a: Number,
    b: Number,
    result: Number,
}

impl OperationCommand {
    pub fn new(kind: OperationKind, a: Number, b: Number, result: Number) -> Self {
        Self { kind, a, b, result }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn a(&self) -> Number {
        self.a
    }

    pub fn b(&self) -> Number {
        self.b
    }

    pub fn result(&self) -> Number {
        self.result
    }

    /// Row form: `<kind> <a> <b> = <result>`.
    pub fn describe(&self) -> String {
        format!("{} {} {} = {}", self.kind, self.a, self.b, self.result)
    }
}

impl fmt::Display for OperationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
