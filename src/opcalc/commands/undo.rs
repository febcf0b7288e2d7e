use crate::calculator::Calculator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HistoryStore;

pub fn run<S: HistoryStore>(calc: &mut Calculator<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match calc.undo()? {
        Some(entry) => {
            result.add_message(CmdMessage::success("Last operation undone."));
            result.entries.push(entry);
        }
        None => result.add_message(CmdMessage::warning("No commands to undo.")),
    }
    Ok(result)
}
