use super::HistoryStore;
use crate::error::{CalcError, Result};
use crate::model::{OperationCommand, OperationKind};
use crate::number::Number;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["kind", "a", "b", "result"];

#[derive(Debug, Deserialize)]
struct HistoryRow {
    kind: String,
    a: f64,
    b: f64,
    result: f64,
}

impl HistoryRow {
    fn into_command(self) -> Result<OperationCommand> {
        let kind: OperationKind = self.kind.parse()?;
        Ok(OperationCommand::new(
            kind,
            Number::Float(self.a),
            Number::Float(self.b),
            Number::Float(self.result),
        ))
    }
}

/// CSV-file history storage.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CalcError::Io)?;
            }
        }
        Ok(())
    }

    fn encode(entries: &[OperationCommand]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for entry in entries {
            writer.write_record([
                entry.kind().tag().to_string(),
                entry.a().to_float().to_string(),
                entry.b().to_float().to_string(),
                entry.result().to_float().to_string(),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| CalcError::Io(e.into_error()))
    }
}

impl HistoryStore for CsvStore {
    fn load(&self) -> Result<Vec<OperationCommand>> {
        if !self.path.exists() {
            log::debug!("No history file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(CalcError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADER) {
            return Err(CalcError::Store(format!(
                "Unexpected header in {}: expected '{}', found '{}'",
                self.path.display(),
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut entries = Vec::new();
        for row in reader.deserialize::<HistoryRow>() {
            entries.push(row?.into_command()?);
        }

        log::debug!(
            "Loaded {} history entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn save(&mut self, entries: &[OperationCommand]) -> Result<()> {
        self.ensure_parent()?;
        let bytes = Self::encode(entries)?;
        fs::write(&self.path, bytes).map_err(CalcError::Io)?;
        log::debug!(
            "Saved {} history entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cmd(kind: OperationKind, a: i64, b: i64, result: i64) -> OperationCommand {
        OperationCommand::new(kind, a.into(), b.into(), result.into())
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("history.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn writes_header_and_float_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        let mut store = CsvStore::new(&path);

        store
            .save(&[
                cmd(OperationKind::Add, 5, 5, 10),
                OperationCommand::new(
                    OperationKind::Divide,
                    7.into(),
                    2.into(),
                    Number::Float(3.5),
                ),
            ])
            .unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "kind,a,b,result\nadd,5.0,5.0,10.0\ndivide,7.0,2.0,3.5\n");
    }

    #[test]
    fn empty_save_leaves_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        let mut store = CsvStore::new(&path);

        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "kind,a,b,result\n");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn reload_coerces_numbers_to_float() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("history.csv"));
        store.save(&[cmd(OperationKind::Multiply, 4, 5, 20)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].a().is_float());
        assert!(loaded[0].result().is_float());
        assert_eq!(loaded[0].result(), 20);
        assert_eq!(loaded[0].kind(), OperationKind::Multiply);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("history.csv");
        let mut store = CsvStore::new(&path);
        store.save(&[cmd(OperationKind::Add, 1, 1, 2)]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn wrong_header_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, "operation,a,b,result\nadd,1.0,1.0,2.0\n").unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CalcError::Store(_)));
    }

    #[test]
    fn unknown_kind_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, "kind,a,b,result\nsqrt,4.0,0.0,2.0\n").unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CalcError::UnknownOperation(_)));
    }

    #[test]
    fn malformed_number_is_a_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, "kind,a,b,result\nadd,one,1.0,2.0\n").unwrap();

        let err = CsvStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CalcError::Csv(_)));
    }
}
