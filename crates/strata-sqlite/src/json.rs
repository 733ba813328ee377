//! Column conversions for SQLite storage

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Result, SqliteError};

/// Serialize a character frequency map to a JSON column
pub fn serialize_frequency_map(map: &BTreeMap<String, u64>) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}

/// Deserialize a character frequency map from a JSON column
pub fn deserialize_frequency_map(json: &str) -> Result<BTreeMap<String, u64>> {
    Ok(serde_json::from_str(json)?)
}

/// Format a timestamp as fixed-width RFC3339 so that text ordering is time ordering
pub fn timestamp_to_sql(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse an RFC3339 timestamp column
pub fn sql_to_timestamp(datetime_str: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SqliteError::InvalidData(format!("invalid datetime '{}': {}", datetime_str, e)))
}

/// Integer column value; counts beyond the SQLite range clamp to `i64::MAX`
pub fn count_to_sql(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Read back a count column
pub fn sql_to_count(column: &str, n: i64) -> Result<u64> {
    u64::try_from(n).map_err(|_| SqliteError::InvalidData(format!("negative {}: {}", column, n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip_is_exact() {
        let ts = Utc.timestamp_opt(1_704_067_200, 123_456_789).unwrap();
        let sql = timestamp_to_sql(&ts);
        assert_eq!(sql, "2024-01-01T00:00:00.123456789Z");
        assert_eq!(sql_to_timestamp(&sql).unwrap(), ts);
    }

    #[test]
    fn test_timestamps_sort_as_text() {
        let earlier = timestamp_to_sql(&Utc.timestamp_opt(1_704_067_200, 500_000_000).unwrap());
        let later = timestamp_to_sql(&Utc.timestamp_opt(1_704_067_201, 0).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(matches!(
            sql_to_timestamp("yesterday"),
            Err(SqliteError::InvalidData(_))
        ));
    }

    #[test]
    fn test_counts() {
        assert_eq!(count_to_sql(7), 7);
        assert_eq!(count_to_sql(u64::MAX), i64::MAX);
        assert_eq!(sql_to_count("length", 7).unwrap(), 7);
        assert!(sql_to_count("length", -1).is_err());
    }
}
