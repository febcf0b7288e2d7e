//! # Storage Layer
//!
//! History persistence sits behind the [`HistoryStore`] trait so the history
//! manager never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production storage, one CSV file
//!   - Header row `kind,a,b,result`, one row per entry
//!   - Every save rewrites the whole file
//!   - A missing file loads as an empty history
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Keeps the last saved sequence so tests can inspect it
//!
//! ## Storage Format
//!
//! ```text
//! kind,a,b,result
//! add,5.0,5.0,10.0
//! divide,7.0,2.0,3.5
//! ```
//!
//! Numbers are written in float form. Reading a row back yields floats for all
//! three numeric fields, so an integer entry comes back as the equal float.
//!
//! ## Limitations
//!
//! There is no locking: two processes sharing one history file race and the
//! last writer wins. Rewriting the full file on every change is fine for a
//! personal calculator history and would not be for large logs.

use crate::error::Result;
use crate::model::OperationCommand;

pub mod fs;
pub mod memory;

/// Abstract interface for history persistence.
pub trait HistoryStore {
    /// Load every persisted entry, oldest first.
    fn load(&self) -> Result<Vec<OperationCommand>>;

    /// Replace the persisted history with `entries`.
    fn save(&mut self, entries: &[OperationCommand]) -> Result<()>;
}
