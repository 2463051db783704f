//! JSON file persistence for the conversion history.
//!
//! The whole log is a single JSON array, read in full on every access and
//! rewritten in full on every mutation. Writes go to a temp file next to the
//! target and are renamed into place, so a reader in this process never sees
//! a partial file.
//!
//! There is no locking. Two processes appending at the same time race on
//! read-modify-write and the last `save` wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::HistoryError;
use super::search::search_records;
use crate::models::{ConversionRecord, NewRecord};

/// The full ordered history.
pub type HistoryLog = Vec<ConversionRecord>;

/// History backed by one JSON file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full log, creating an empty file first if none exists.
    pub fn load(&self) -> Result<HistoryLog, HistoryError> {
        if !self.path.exists() {
            debug!("Creating empty history file at {}", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| HistoryError::storage(&self.path, e))?;

        // A zero-length file is treated like `[]`
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        let log: HistoryLog = serde_json::from_str(&json)
            .map_err(|source| HistoryError::Malformed { path: self.path.clone(), source })?;

        debug!("Loaded {} history records from {}", log.len(), self.path.display());
        Ok(log)
    }

    /// Overwrites the file with `log` (temp file + rename).
    pub fn save(&self, log: &[ConversionRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| HistoryError::storage(parent, e))?;
        }

        let json = serde_json::to_string_pretty(log)
            .map_err(|e| HistoryError::storage(&self.path, e.into()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| HistoryError::storage(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(HistoryError::storage(&self.path, e));
        }

        debug!("Saved {} history records to {}", log.len(), self.path.display());
        Ok(())
    }

    /// Stamps `new` with the current time and appends it.
    pub fn append(&self, new: NewRecord) -> Result<ConversionRecord, HistoryError> {
        let record = ConversionRecord::now(new);
        self.append_record(record.clone())?;
        Ok(record)
    }

    /// Appends an already-dated record (load, push, save).
    pub fn append_record(&self, record: ConversionRecord) -> Result<(), HistoryError> {
        let mut log = self.load()?;
        log.push(record);
        self.save(&log)
    }

    /// Erases every record.
    pub fn clear(&self) -> Result<(), HistoryError> {
        self.save(&[])
    }

    /// Records whose `type` contains `query`, ignoring case, in stored order.
    pub fn search(&self, query: &str) -> Result<HistoryLog, HistoryError> {
        Ok(search_records(&self.load()?, query))
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "history.json".to_string());
        self.path.with_file_name(format!("{}.tmp", file_name))
    }
}
