//! # Command Layer
//!
//! Each submodule runs one user-level command against a
//! [`Calculator`](crate::calculator::Calculator) and returns a [`CmdResult`]:
//! structured data plus leveled messages. Nothing here prints; the CLI decides
//! how results look on a terminal.
//!
//! Arithmetic and input errors are part of normal interactive use, so
//! [`CmdMessage::from_error`] turns them into the user-facing wording.

use crate::config::CalcConfig;
use crate::error::CalcError;
use crate::model::OperationCommand;
use crate::number::Number;

pub mod clear;
pub mod config;
pub mod evaluate;
pub mod history;
pub mod undo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// User-facing wording for errors raised by interactive input.
    pub fn from_error(error: &CalcError) -> Self {
        match error {
            CalcError::Input(_) => {
                Self::error("Invalid command format. Type 'help' for instructions.")
            }
            CalcError::InvalidOperand(_) => {
                Self::error("Invalid numbers. Please enter valid numeric values.")
            }
            CalcError::UnknownOperation(op) => Self::error(format!(
                "Unknown operation '{}'. Type 'help' for instructions.",
                op
            )),
            CalcError::DivisionByZero(_) => Self::error("Error: Division by zero."),
            other => Self::error(format!("Error: {}", other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub result: Option<Number>,
    pub entries: Vec<OperationCommand>,
    pub config: Option<CalcConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_result(mut self, result: Number) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_entries(mut self, entries: Vec<OperationCommand>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_config(mut self, config: CalcConfig) -> Self {
        self.config = Some(config);
        self
    }
}
