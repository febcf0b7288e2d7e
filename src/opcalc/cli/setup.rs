use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("OPCALC_GIT_HASH");
    const IS_RELEASE: &str = env!("OPCALC_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "opcalc", bin_name = "opcalc", version = get_version())]
#[command(about = "Command-line calculator with persistent, undoable history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory holding config.json and the default history file
    #[arg(long, global = true, env = "OPCALC_HOME")]
    pub home: Option<PathBuf>,

    /// History file to use instead of the configured one
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive calculator (default)
    Repl,

    /// Evaluate one operation and record it, e.g. `opcalc eval add 2 3`
    #[command(alias = "e")]
    Eval {
        /// Operation: add, subtract, multiply, divide, power, mod
        operation: String,

        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second operand
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Show the operation history
    #[command(alias = "h")]
    History {
        /// Only show the last N entries
        #[arg(short, long)]
        last: Option<usize>,
    },

    /// Undo the last operation
    Undo,

    /// Clear the operation history
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (history-file, prompt)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
