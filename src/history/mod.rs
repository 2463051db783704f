//! Persistent conversion history
//!
//! An append-only log of [`ConversionRecord`](crate::models::ConversionRecord)s
//! stored as a single JSON array:
//!
//! ```json
//! [{ "input": "10", "output": "1010", "type": "Base 10 to Base 2", "date": "2024-01-02T03:04:05.678Z" }]
//! ```
//!
//! The file is created as `[]` on first access. Every mutation rewrites it in
//! full through a temp file and rename. Failures surface as [`HistoryError`]
//! and are never retried.

pub mod deserializers;
pub mod error;
pub mod search;
pub mod stats;
pub mod storage;

pub use error::HistoryError;
pub use search::search_records;
pub use stats::HistoryStats;
pub use storage::{HistoryLog, HistoryStore};
