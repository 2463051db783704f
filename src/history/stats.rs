use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::ConversionRecord;

/// Summary of a history log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: usize,
    /// Record count per `type` label, most frequent first (ties by label)
    pub by_kind: Vec<(String, usize)>,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

impl HistoryStats {
    pub fn from_records(records: &[ConversionRecord]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.kind.as_str()).or_default() += 1;
        }

        let mut by_kind: Vec<(String, usize)> =
            counts.into_iter().map(|(kind, count)| (kind.to_string(), count)).collect();
        by_kind.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total: records.len(),
            by_kind,
            oldest: records.iter().map(|r| r.date).min(),
            newest: records.iter().map(|r| r.date).max(),
        }
    }
}
