//! # Opcalc CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/opcalc/cli/` and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive loop (repl.rs)                               │
//! │  - Terminal output (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (opcalc::commands, opcalc::calculator, ...)        │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Running `opcalc` with no subcommand starts the interactive loop. The
//! one-shot subcommands (`eval`, `history`, `undo`, `clear`, `config`) share the
//! same history file, so `opcalc eval add 2 3` followed by `opcalc undo`
//! behaves like the same two lines typed into the loop.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
