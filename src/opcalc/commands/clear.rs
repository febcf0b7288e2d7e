use crate::calculator::Calculator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HistoryStore;

pub fn run<S: HistoryStore>(calc: &mut Calculator<S>) -> Result<CmdResult> {
    calc.clear_history()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("History cleared."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_and_confirms() {
        let mut calc = Calculator::new(StoreFixture::new().with_additions(2).store).unwrap();
        let result = run(&mut calc).unwrap();
        assert!(calc.get_history().is_empty());
        assert_eq!(result.messages[0].content, "History cleared.");

        // Clearing again is fine
        run(&mut calc).unwrap();
        assert!(calc.get_history().is_empty());
    }
}
