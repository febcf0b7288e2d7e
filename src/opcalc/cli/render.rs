use colored::Colorize;
use opcalc::commands::{CmdMessage, MessageLevel};
use opcalc::config::CalcConfig;
use opcalc::model::OperationCommand;

pub(super) const WELCOME: &str =
    "Welcome to the Calculator REPL. Type 'help' for instructions or 'exit' to quit.";

pub(super) const GOODBYE: &str = "Goodbye!";

pub(super) const HELP: &str = "
Available commands:
  add a b        - Adds a and b
  subtract a b   - Subtracts b from a
  multiply a b   - Multiplies a and b
  divide a b     - Divides a by b
  power a b      - Raises a to the power of b
  mod a b        - Remainder of a divided by b
  history        - Shows the operation history
  undo           - Undoes the last operation
  clear          - Clears the operation history
  exit           - Exits the REPL
  help           - Shows this help message
";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn format_history(entries: &[OperationCommand]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}: {}", i + 1, entry.describe()))
        .collect()
}

pub(super) fn print_history(entries: &[OperationCommand]) {
    for line in format_history(entries) {
        println!("{}", line);
    }
}

pub(super) fn print_config(config: &CalcConfig) {
    for key in CalcConfig::keys() {
        if let Ok(value) = config.get(key) {
            println!("{} = {:?}", key, value);
        }
    }
}
