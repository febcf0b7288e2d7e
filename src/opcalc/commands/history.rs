use crate::calculator::Calculator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HistoryStore;

/// Lists the whole history, or only the last `last` entries.
pub fn run<S: HistoryStore>(calc: &Calculator<S>, last: Option<usize>) -> Result<CmdResult> {
    let entries = match last {
        Some(n) => calc.get_latest(n),
        None => calc.get_history(),
    };

    let mut result = CmdResult::default().with_entries(entries.to_vec());
    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("No operations in history."));
    }
    Ok(result)
}
