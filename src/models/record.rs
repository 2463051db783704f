use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::Base;

/// One logged conversion, as stored in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: String,
    pub output: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(
        serialize_with = "crate::history::deserializers::serialize_date",
        deserialize_with = "crate::history::deserializers::deserialize_date"
    )]
    pub date: DateTime<Utc>,
}

impl ConversionRecord {
    /// Stamps a new record with the current time.
    pub fn now(new: NewRecord) -> Self {
        Self::at(new, Utc::now())
    }

    pub fn at(new: NewRecord, date: DateTime<Utc>) -> Self {
        Self { input: new.input, output: new.output, kind: new.kind, date }
    }
}

impl fmt::Display for ConversionRecord {
    /// `[2024-01-02 03:04:05] Base 10 to Base 2: 10 -> 1010`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} -> {}",
            self.date.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.input,
            self.output
        )
    }
}

/// A record before it is stamped with a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub input: String,
    pub output: String,
    pub kind: String,
}

impl NewRecord {
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        kind: impl fmt::Display,
    ) -> Self {
        Self { input: input.into(), output: output.into(), kind: kind.to_string() }
    }
}

/// The conversions the tool performs, rendered as history `type` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Number { from: Base, to: Base },
    TextToBase { base: Base },
    BaseToText { base: Base },
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionKind::Number { from, to } => write!(f, "Base {} to Base {}", from, to),
            ConversionKind::TextToBase { base } => write!(f, "String to Base {}", base),
            ConversionKind::BaseToText { base } => write!(f, "Base {} to String", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_kind_labels() {
        let number = ConversionKind::Number { from: Base::DECIMAL, to: Base::BINARY };
        assert_eq!(number.to_string(), "Base 10 to Base 2");

        let text = ConversionKind::TextToBase { base: Base::HEXADECIMAL };
        assert_eq!(text.to_string(), "String to Base 16");

        let back = ConversionKind::BaseToText { base: Base::OCTAL };
        assert_eq!(back.to_string(), "Base 8 to String");
    }

    #[test]
    fn test_record_at_copies_fields() {
        let date = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let record = ConversionRecord::at(NewRecord::new("10", "A", "Base 10 to Base 16"), date);

        assert_eq!(record.input, "10");
        assert_eq!(record.output, "A");
        assert_eq!(record.kind, "Base 10 to Base 16");
        assert_eq!(record.date, date);
    }

    #[test]
    fn test_record_display() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let record = ConversionRecord::at(NewRecord::new("10", "1010", "Base 10 to Base 2"), date);
        assert_eq!(record.to_string(), "[2024-01-02 03:04:05] Base 10 to Base 2: 10 -> 1010");
    }

    #[test]
    fn test_record_now_is_recent() {
        let before = Utc::now();
        let record = ConversionRecord::now(NewRecord::new("A", "B", "T"));
        assert!(record.date >= before);
        assert!(record.date <= Utc::now());
    }
}
