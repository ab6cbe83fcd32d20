//! Wire-format timestamps
//!
//! Transaction dates arrive in several shapes depending on who wrote the
//! record: RFC 3339 strings (what this crate writes), bare calendar dates,
//! document-store timestamp objects (`{"seconds": .., "nanoseconds": ..}`,
//! optionally underscore-prefixed), or epoch milliseconds. They are
//! normalized to `DateTime<Utc>` once, when a record is read, so the models
//! only ever hold the canonical form.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::BudgetError;

/// A timestamp as found on disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireTimestamp {
    Rfc3339(DateTime<Utc>),
    Date(NaiveDate),
    Document {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(alias = "_nanoseconds", default)]
        nanoseconds: u32,
    },
    EpochMillis(i64),
}

impl WireTimestamp {
    /// Convert to the canonical in-memory representation
    pub fn into_utc(self) -> Result<DateTime<Utc>, BudgetError> {
        match self {
            Self::Rfc3339(dt) => Ok(dt),
            Self::Date(date) => Ok(date.and_time(NaiveTime::MIN).and_utc()),
            Self::Document {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(seconds, nanoseconds).ok_or_else(|| {
                BudgetError::Storage(format!(
                    "Timestamp out of range: {}s {}ns",
                    seconds, nanoseconds
                ))
            }),
            Self::EpochMillis(ms) => DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                BudgetError::Storage(format!("Timestamp out of range: {}ms", ms))
            }),
        }
    }
}
