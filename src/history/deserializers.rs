use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Writes a date as RFC3339 UTC with millisecond precision (`2024-01-02T03:04:05.678Z`)
pub fn serialize_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Custom deserializer for dates that accepts both RFC3339 strings and integers (ms)
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid ISO-8601 date: {}", e))),
        Value::Number(n) => {
            // Unix timestamp in milliseconds
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid date"))?;
            DateTime::from_timestamp_millis(ms).ok_or_else(|| Error::custom("date out of range"))
        }
        _ => Err(Error::custom("date must be a string or number")),
    }
}
