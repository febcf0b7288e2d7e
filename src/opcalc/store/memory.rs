use super::HistoryStore;
use crate::error::Result;
use crate::model::OperationCommand;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Vec<OperationCommand>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<OperationCommand>) -> Self {
        Self { entries, saves: 0 }
    }

    /// The sequence as of the last save.
    pub fn saved(&self) -> &[OperationCommand] {
        &self.entries
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for InMemoryStore {
    fn load(&self) -> Result<Vec<OperationCommand>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[OperationCommand]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::CalcError;
    use crate::model::OperationKind;
    use crate::number::Number;

    pub fn entry(kind: OperationKind, a: i64, b: i64, result: i64) -> OperationCommand {
        OperationCommand::new(kind, Number::Int(a), Number::Int(b), Number::Int(result))
    }

    /// A store whose saves always fail, for exercising rollback.
    #[derive(Default)]
    pub struct ReadOnlyStore {
        pub entries: Vec<OperationCommand>,
    }

    impl HistoryStore for ReadOnlyStore {
        fn load(&self) -> Result<Vec<OperationCommand>> {
            Ok(self.entries.clone())
        }

        fn save(&mut self, _entries: &[OperationCommand]) -> Result<()> {
            Err(CalcError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "history store is read-only",
            )))
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, kind: OperationKind, a: i64, b: i64, result: i64) -> Self {
            self.store.entries.push(entry(kind, a, b, result));
            self
        }

        /// `count` additions `i + i = 2i`, for i in 1..=count.
        pub fn with_additions(mut self, count: i64) -> Self {
            for i in 1..=count {
                self.store.entries.push(entry(OperationKind::Add, i, i, 2 * i));
            }
            self
        }
    }
}
