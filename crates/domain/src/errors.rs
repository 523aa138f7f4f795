//! Error types used throughout the availability engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures detected at the engine boundary.
///
/// Every variant is a local-input failure: retrying identical input yields
/// the identical failure, so nothing here is retried. Callers surface a
/// generic "please pick different dates" message and log the offending raw
/// input for diagnosis.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum AvailabilityError {
    /// A date range whose start falls after its end. Trusted storage data
    /// never produces this; it indicates upstream corruption.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Claimed first day of the range.
        start: NaiveDate,
        /// Claimed last day of the range.
        end: NaiveDate,
    },

    /// A rental length below the one-day minimum.
    #[error("rental length must be at least 1 day (got {0})")]
    InvalidRequestLength(u32),

    /// An unparseable date string crossing the storage boundary.
    #[error("unparseable date from storage: {0:?}")]
    InvalidDate(String),
}

/// Result type alias for availability operations
pub type Result<T> = std::result::Result<T, AvailabilityError>;
