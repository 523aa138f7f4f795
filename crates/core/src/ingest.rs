//! Storage-collaborator boundary
//!
//! Parses the storefront API's wire shapes (ISO-8601 date strings, rental
//! lifecycle statuses) into validated domain ranges. A batch either parses
//! fully or fails as a whole: one malformed record rejects the call instead
//! of silently shrinking the range lists.

use chrono::{DateTime, NaiveDate};
use rentcal_domain::constants::BOOKED_REASON;
use rentcal_domain::{AvailabilityError, DateRange, RentalStatus, Result};
use serde::Deserialize;
use tracing::warn;

/// Booked window of an active rental, as the products API serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRangeDto {
    /// ISO-8601 start of the rental window.
    pub start_date: String,
    /// ISO-8601 end of the rental window (inclusive).
    pub end_date: String,
}

/// Vendor-defined blackout window.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedRangeDto {
    /// ISO-8601 start of the blackout.
    pub start_date: String,
    /// ISO-8601 end of the blackout (inclusive).
    pub end_date: String,
    /// Vendor-supplied reason; tooltips fall back to "Unavailable".
    #[serde(default)]
    pub reason: Option<String>,
}

/// Raw rental row joined from the storage layer, before status filtering.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecordDto {
    /// ISO-8601 start of the rental window.
    pub rental_start_date: String,
    /// ISO-8601 end of the rental window (inclusive).
    pub rental_end_date: String,
    /// Lifecycle status as recorded by the storefront.
    pub status: RentalStatus,
}

/// Parse one ISO-8601 day.
///
/// Accepts a bare calendar date (`2024-06-10`) or an RFC 3339 instant
/// (`2024-06-10T18:30:00.000Z`, what `Date.toISOString()` emits). Instants
/// are truncated to their calendar day, stripping time-of-day on ingestion.
pub fn parse_day(raw: &str) -> Result<NaiveDate> {
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(parsed);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.date_naive());
    }
    warn!(raw, "rejecting unparseable date from storage");
    Err(AvailabilityError::InvalidDate(raw.to_string()))
}

fn parse_range(start: &str, end: &str) -> Result<DateRange> {
    DateRange::new(parse_day(start)?, parse_day(end)?)
}

/// Booked ranges for the engine: every rental whose status still occupies
/// the product and whose window has not fully elapsed by `today`.
///
/// All rows parse before any filtering, so a malformed record fails the
/// whole batch.
pub fn booked_ranges(rentals: &[RentalRecordDto], today: NaiveDate) -> Result<Vec<DateRange>> {
    let mut parsed = Vec::with_capacity(rentals.len());
    for record in rentals {
        let range = parse_range(&record.rental_start_date, &record.rental_end_date)?
            .with_reason(BOOKED_REASON);
        parsed.push((record.status, range));
    }

    Ok(parsed
        .into_iter()
        .filter(|(status, range)| status.occupies_product() && range.end() >= today)
        .map(|(_, range)| range)
        .collect())
}

/// Pre-built booked ranges, for callers consuming the products API response
/// (which ships them already status-filtered).
pub fn booked_ranges_from_wire(ranges: &[BookedRangeDto]) -> Result<Vec<DateRange>> {
    ranges
        .iter()
        .map(|dto| {
            parse_range(&dto.start_date, &dto.end_date).map(|range| range.with_reason(BOOKED_REASON))
        })
        .collect()
}

/// Vendor blackout ranges ending on or after `today`.
pub fn blocked_ranges(blocks: &[BlockedRangeDto], today: NaiveDate) -> Result<Vec<DateRange>> {
    let mut parsed = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut range = parse_range(&block.start_date, &block.end_date)?;
        if let Some(reason) = &block.reason {
            range = range.with_reason(reason.clone());
        }
        parsed.push(range);
    }

    Ok(parsed.into_iter().filter(|range| range.end() >= today).collect())
}
