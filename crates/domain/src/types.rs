//! Core value types for rental availability
//!
//! `DateRange` and `RentalRequest` carry their invariants in the type:
//! construction validates, so downstream code never re-checks `start <= end`
//! or a zero-day duration.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_RENTAL_DAYS;
use crate::errors::{AvailabilityError, Result};

/// Inclusive closed interval of calendar days, optionally tagged with a
/// display reason ("Booked", "Maintenance", a vendor-supplied note).
///
/// Comparisons operate on calendar days, not instants; callers normalize
/// time-of-day away before constructing a range. The `start <= end`
/// invariant is enforced at construction, so a reversed range never exists
/// as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeParts")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    reason: Option<String>,
}

/// Raw shape used to re-validate ranges arriving through serde.
#[derive(Debug, Deserialize)]
struct DateRangeParts {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    reason: Option<String>,
}

impl TryFrom<DateRangeParts> for DateRange {
    type Error = AvailabilityError;

    fn try_from(parts: DateRangeParts) -> Result<Self> {
        let range = Self::new(parts.start, parts.end)?;
        Ok(match parts.reason {
            Some(reason) => range.with_reason(reason),
            None => range,
        })
    }
}

impl DateRange {
    /// Create a validated range; rejects `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AvailabilityError::InvalidRange { start, end });
        }
        Ok(Self { start, end, reason: None })
    }

    /// Attach the human-readable reason surfaced in calendar tooltips.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// First covered day.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last covered day (inclusive).
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Display reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Number of days covered, counting both endpoints.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `day` falls inside the range, inclusive on both ends.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Lazy walk over every covered day, start through end inclusive.
    ///
    /// Restartable: each call yields an independent iterator over the same
    /// sequence.
    pub fn days(&self) -> DayIter {
        DayIter { next: Some(self.start), end: self.end }
    }
}

/// Iterator over the calendar days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Candidate booking: a start day plus a duration in days, inclusive of both
/// the start and the end day.
///
/// Constructed transiently per user interaction (calendar click, duration
/// adjustment); never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RentalRequestParts")]
pub struct RentalRequest {
    start: NaiveDate,
    days: u32,
}

#[derive(Debug, Deserialize)]
struct RentalRequestParts {
    start: NaiveDate,
    days: u32,
}

impl TryFrom<RentalRequestParts> for RentalRequest {
    type Error = AvailabilityError;

    fn try_from(parts: RentalRequestParts) -> Result<Self> {
        Self::new(parts.start, parts.days)
    }
}

impl RentalRequest {
    /// Create a validated request; rejects durations shorter than one day.
    ///
    /// Interactive duration controls already clamp to a minimum of 1; the
    /// engine still refuses rather than silently coercing.
    pub fn new(start: NaiveDate, days: u32) -> Result<Self> {
        if days < MIN_RENTAL_DAYS {
            return Err(AvailabilityError::InvalidRequestLength(days));
        }
        Ok(Self { start, days })
    }

    /// First day of the proposed rental.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Duration in days, counting both the start and end day.
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Derived end day: `start + (days - 1)`. A one-day rental ends on its
    /// start day. Saturates at chrono's maximum representable date.
    pub fn end_date(&self) -> NaiveDate {
        self.start.checked_add_days(Days::new(u64::from(self.days - 1))).unwrap_or(NaiveDate::MAX)
    }

    /// The inclusive rental window implied by start and duration.
    pub fn window(&self) -> DateRange {
        // end_date() >= start by construction, so the invariant holds.
        DateRange { start: self.start, end: self.end_date(), reason: None }
    }
}

/// Lifecycle status of a rental as the storefront records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    /// Placed but not yet confirmed by the vendor.
    Pending,
    /// Confirmed by the vendor, awaiting dispatch.
    Confirmed,
    /// In transit to the renter.
    Shipped,
    /// Delivered, rental window not yet started or in progress.
    Delivered,
    /// Rental window in progress.
    Active,
    /// Returned and closed out.
    Completed,
    /// Cancelled before the window started.
    Cancelled,
}

impl RentalStatus {
    /// Whether a rental in this status occupies the product for its window.
    ///
    /// Completed and cancelled rentals release their dates.
    pub const fn occupies_product(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Confirmed | Self::Shipped | Self::Delivered | Self::Active
        )
    }
}

/// Per-day verdict surfaced to the calendar widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// True when the day is covered by a booked or blocked range.
    pub unavailable: bool,
    /// Display reason for the tooltip; `None` on free days.
    pub reason: Option<String>,
}

impl DayAvailability {
    /// A free day: available, no reason attached.
    pub const fn free() -> Self {
        Self { unavailable: false, reason: None }
    }

    /// An unavailable day with its display reason.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self { unavailable: true, reason: Some(reason.into()) }
    }
}
