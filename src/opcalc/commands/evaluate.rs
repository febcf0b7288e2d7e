use crate::calculation::Calculation;
use crate::calculator::Calculator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::HistoryStore;

pub fn run<S: HistoryStore>(calc: &mut Calculator<S>, calculation: &Calculation) -> Result<CmdResult> {
    let value = calc.perform(calculation)?;
    let mut result = CmdResult::default().with_result(value);
    result.add_message(CmdMessage::success(format!("Result: {}", value)));
    result.add_message(CmdMessage::info(format!("Operation: {}", calculation)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_result_and_description() {
        let mut calc = Calculator::new(InMemoryStore::new()).unwrap();
        let result = run(&mut calc, &Calculation::division(7, 2).unwrap()).unwrap();

        assert_eq!(result.result.unwrap(), 3.5);
        assert_eq!(result.messages[0].content, "Result: 3.5");
        assert_eq!(result.messages[1].content, "Operation: Division: 7 / 2 = 3.5");
        assert_eq!(calc.get_history().len(), 1);
    }

    #[test]
    fn failure_propagates_without_recording() {
        let mut calc = Calculator::new(InMemoryStore::new()).unwrap();
        let err = run(&mut calc, &Calculation::modulus(3, 0).unwrap()).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));
        assert!(calc.get_history().is_empty());
    }
}
