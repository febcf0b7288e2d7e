use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("{0}")]
    DivisionByZero(&'static str),

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Undefined result: {0}")]
    Undefined(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
