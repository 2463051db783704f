//! Search over conversion history.

use crate::models::ConversionRecord;

/// Returns the records whose `type` contains `query`, ignoring case.
///
/// Matches keep their original order. An empty query matches everything.
pub fn search_records(records: &[ConversionRecord], query: &str) -> Vec<ConversionRecord> {
    let query_lower = query.to_lowercase();

    records.iter().filter(|record| matches_query(record, &query_lower)).cloned().collect()
}

/// Checks a single record against an already-lowercased query.
pub fn matches_query(record: &ConversionRecord, query_lower: &str) -> bool {
    record.kind.to_lowercase().contains(query_lower)
}
