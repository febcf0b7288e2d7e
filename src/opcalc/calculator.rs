use crate::calculation::Calculation;
use crate::error::Result;
use crate::history::HistoryManager;
use crate::model::OperationCommand;
use crate::number::Number;
use crate::store::HistoryStore;

/// Computes calculations and records the successful ones.
///
/// Generic over `HistoryStore`:
/// - Production: `Calculator<CsvStore>`
/// - Testing: `Calculator<InMemoryStore>`
pub struct Calculator<S: HistoryStore> {
    history: HistoryManager<S>,
}

impl<S: HistoryStore> Calculator<S> {
    pub fn new(store: S) -> Result<Self> {
        Ok(Self {
            history: HistoryManager::new(store)?,
        })
    }

    /// Computes `calculation`, records it and returns the result. A failed
    /// computation records nothing.
    pub fn perform(&mut self, calculation: &Calculation) -> Result<Number> {
        let result = calculation.compute()?;
        let command =
            OperationCommand::new(calculation.kind(), calculation.a(), calculation.b(), result);
        self.history.add(command)?;
        Ok(result)
    }

    pub fn undo(&mut self) -> Result<Option<OperationCommand>> {
        self.history.undo_last()
    }

    pub fn get_history(&self) -> &[OperationCommand] {
        self.history.get_full()
    }

    pub fn get_latest(&self, n: usize) -> &[OperationCommand] {
        self.history.get_latest(n)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    pub fn history(&self) -> &HistoryManager<S> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::model::OperationKind;
    use crate::store::memory::InMemoryStore;

    fn calculator() -> Calculator<InMemoryStore> {
        Calculator::new(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn perform_records_the_operation() {
        let mut calc = calculator();
        let result = calc.perform(&Calculation::addition(5, 10).unwrap()).unwrap();
        assert_eq!(result, 15);

        let history = calc.get_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind(), OperationKind::Add);
        assert_eq!(history[0].a(), 5);
        assert_eq!(history[0].b(), 10);
        assert_eq!(history[0].result(), 15);
    }

    #[test]
    fn history_keeps_execution_order() {
        let mut calc = calculator();
        calc.perform(&Calculation::addition(5, 5).unwrap()).unwrap();
        calc.perform(&Calculation::multiplication(4, 5).unwrap())
            .unwrap();

        let history = calc.get_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind(), OperationKind::Add);
        assert_eq!(history[1].kind(), OperationKind::Multiply);
    }

    #[test]
    fn undo_walks_back_then_reports_empty() {
        let mut calc = calculator();
        calc.perform(&Calculation::subtraction(15, 5).unwrap())
            .unwrap();
        calc.perform(&Calculation::multiplication(4, 5).unwrap())
            .unwrap();

        let last = calc.undo().unwrap().unwrap();
        assert_eq!(last.kind(), OperationKind::Multiply);
        assert_eq!(calc.get_history().len(), 1);
        assert_eq!(calc.get_history()[0].kind(), OperationKind::Subtract);

        let last = calc.undo().unwrap().unwrap();
        assert_eq!(last.kind(), OperationKind::Subtract);
        assert!(calc.get_history().is_empty());

        assert!(calc.undo().unwrap().is_none());
    }

    #[test]
    fn clear_history_empties_everything() {
        let mut calc = calculator();
        calc.perform(&Calculation::addition(5, 5).unwrap()).unwrap();
        calc.perform(&Calculation::multiplication(4, 5).unwrap())
            .unwrap();
        calc.clear_history().unwrap();
        assert!(calc.get_history().is_empty());
        assert!(calc.history().store().saved().is_empty());
    }

    #[test]
    fn division_by_zero_records_nothing() {
        let mut calc = calculator();
        calc.perform(&Calculation::addition(1, 1).unwrap()).unwrap();

        let err = calc
            .perform(&Calculation::division(5, 0).unwrap())
            .unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));

        let err = calc
            .perform(&Calculation::modulus(5, 0).unwrap())
            .unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));

        assert_eq!(calc.get_history().len(), 1);
        assert_eq!(calc.history().store().save_count(), 1);
    }

    #[test]
    fn get_latest_delegates() {
        let mut calc = calculator();
        for i in 1..=3 {
            calc.perform(&Calculation::power(2, i).unwrap()).unwrap();
        }
        let latest = calc.get_latest(2);
        assert_eq!(latest[0].result(), 4);
        assert_eq!(latest[1].result(), 8);
    }
}
