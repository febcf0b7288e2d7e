//! # Opcalc Architecture
//!
//! Opcalc is a calculator **library** with an interactive command-line client.
//! The library evaluates binary arithmetic operations, records every successful
//! operation in an ordered history, supports undoing the latest one, and
//! persists the history between sessions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive loop              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (input.rs, commands/*.rs)                    │
//! │  - Turns text into calculations                             │
//! │  - Returns structured CmdResult values with messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (calculation.rs, calculator.rs, history.rs)           │
//! │  - Calculation: closed enum of operators                    │
//! │  - Calculator: compute, record, undo                        │
//! │  - HistoryManager: ordered log + persisted mirror           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract HistoryStore trait                              │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Below the CLI layer, code takes regular Rust arguments, returns
//! `Result<T, CalcError>`, and never prints or reads a terminal. Failed
//! computations propagate to the caller and leave history untouched.
//!
//! ## Testing Strategy
//!
//! - Core and commands: unit tests against `InMemoryStore`
//! - Storage: `CsvStore` tests in temporary directories
//! - CLI: end-to-end tests of the binary (`tests/`)
//!
//! ## Module Overview
//!
//! - [`number`]: Integer/float numbers and their display form
//! - [`operations`]: Arithmetic primitives
//! - [`calculation`]: The calculation variants
//! - [`model`]: Operation kinds and history records
//! - [`history`]: The history manager
//! - [`calculator`]: Compute-and-record orchestration
//! - [`store`]: Storage abstraction and implementations
//! - [`input`]: Parsing interactive input lines
//! - [`commands`]: User-level commands returning `CmdResult`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod calculation;
pub mod calculator;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod model;
pub mod number;
pub mod operations;
pub mod store;
