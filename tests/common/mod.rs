//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use base_converter::{ConversionRecord, HistoryStore, NewRecord};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

/// Builder for a temp directory holding one history file
pub struct HistoryDirBuilder {
    temp_dir: TempDir,
}

impl HistoryDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the history file (it may not exist yet)
    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("history.json")
    }

    /// Write raw content to the history file
    pub fn with_raw_history(self, content: &str) -> Self {
        fs::write(self.history_path(), content).expect("Failed to write history.json");
        self
    }

    /// Write records to the history file through the store
    pub fn with_records(self, records: &[RecordBuilder]) -> Self {
        let log: Vec<ConversionRecord> = records.iter().map(RecordBuilder::build).collect();
        self.store().save(&log).expect("Failed to save history");
        self
    }

    pub fn store(&self) -> HistoryStore {
        HistoryStore::new(self.history_path())
    }

    pub fn read_history(&self) -> String {
        fs::read_to_string(self.history_path()).expect("Failed to read history.json")
    }
}

impl Default for HistoryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a dated conversion record
pub struct RecordBuilder {
    input: String,
    output: String,
    kind: String,
    minute: u32,
}

impl RecordBuilder {
    pub fn new(kind: &str) -> Self {
        Self { input: "10".to_string(), output: "1010".to_string(), kind: kind.to_string(), minute: 0 }
    }

    pub fn io(mut self, input: &str, output: &str) -> Self {
        self.input = input.to_string();
        self.output = output.to_string();
        self
    }

    /// Minutes after 2024-01-01 12:00 UTC
    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    pub fn build(&self) -> ConversionRecord {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 12, self.minute, 0).unwrap();
        ConversionRecord::at(NewRecord::new(&*self.input, &*self.output, &self.kind), date)
    }
}
