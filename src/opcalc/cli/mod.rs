//! # CLI Layer
//!
//! This is **one possible UI client** for opcalc. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Data Directory
//!
//! Configuration (`config.json`) and, by default, the history file
//! (`history.csv`) live in one directory, chosen in this order:
//!
//! 1. `--home <dir>`
//! 2. the `OPCALC_HOME` environment variable
//! 3. the platform data directory (e.g. `~/.local/share/opcalc`)
//!
//! `--history-file <path>` overrides the configured history file for one run.
//!
//! ## Logging
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` is honoured; `-v` forces
//! debug level; otherwise only warnings are shown.

mod commands;
mod render;
mod repl;
mod setup;

pub use commands::run;
