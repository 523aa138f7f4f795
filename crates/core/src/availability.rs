//! Unavailability index and rental-window validation
//!
//! The single home for the day-by-day overlap logic that the storefront's
//! calendar widget and product page previously each carried their own copy
//! of. The calendar asks [`UnavailabilityIndex::is_start_selectable`] per
//! rendered cell; the booking gate asks [`UnavailabilityIndex::validate_window`]
//! once a duration is fixed. Both answers come from the same index.

use ahash::AHashMap as HashMap; // Fast non-cryptographic hasher
use chrono::NaiveDate;
use rentcal_domain::constants::{BOOKED_REASON, DEFAULT_BLOCK_REASON};
use rentcal_domain::{DateRange, DayAvailability, RentalRequest};
use serde::Serialize;
use tracing::debug;

/// Union of every booked and vendor-blocked day for one product (optionally
/// scoped to one variant), flattened into a day -> reason map.
///
/// Rebuilt from the two input lists on every evaluation. The index owns no
/// shared state and caches nothing across calls; refreshing the range lists
/// before each evaluation is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct UnavailabilityIndex {
    days: HashMap<NaiveDate, String>,
}

impl UnavailabilityIndex {
    /// Flatten `booked` and `blocked` into the day index.
    ///
    /// Booked ranges are scanned before blocked ranges and the first reason
    /// recorded for a day wins. That precedence is arbitrary but fixed;
    /// downstream only needs "is this day unavailable" plus one stable
    /// display reason.
    pub fn build(booked: &[DateRange], blocked: &[DateRange]) -> Self {
        let mut days = HashMap::new();

        for range in booked {
            for day in range.days() {
                days.entry(day).or_insert_with(|| BOOKED_REASON.to_string());
            }
        }
        for range in blocked {
            let reason = range.reason().unwrap_or(DEFAULT_BLOCK_REASON);
            for day in range.days() {
                days.entry(day).or_insert_with(|| reason.to_string());
            }
        }

        debug!(
            booked = booked.len(),
            blocked = blocked.len(),
            unavailable_days = days.len(),
            "built unavailability index"
        );
        Self { days }
    }

    /// Exact-day lookup. Free days report `unavailable: false` and carry no
    /// reason.
    pub fn day_availability(&self, day: NaiveDate) -> DayAvailability {
        self.days.get(&day).map_or_else(DayAvailability::free, DayAvailability::blocked)
    }

    /// Reason recorded for `day`, if the day is unavailable.
    pub fn reason(&self, day: NaiveDate) -> Option<&str> {
        self.days.get(&day).map(String::as_str)
    }

    /// Whether `day` is covered by any booked or blocked range.
    pub fn is_unavailable(&self, day: NaiveDate) -> bool {
        self.days.contains_key(&day)
    }

    /// Short-circuiting check of the whole proposed window.
    ///
    /// One conflicting day fails the window; no partial-availability notion
    /// exists. The boundary end day counts like any other day.
    pub fn is_window_free(&self, request: &RentalRequest) -> bool {
        request.window().days().all(|day| !self.is_unavailable(day))
    }

    /// Whether `day` can be offered as a rental start in the calendar UI.
    ///
    /// Today itself is selectable; strictly-past days are not. This guards
    /// individual cells only - the complete window still goes through
    /// [`Self::validate_window`] before a booking is allowed.
    pub fn is_start_selectable(&self, day: NaiveDate, today: NaiveDate) -> bool {
        day >= today && !self.is_unavailable(day)
    }

    /// Gate for the add-to-cart / book-now action.
    ///
    /// The window must start on or after `today` (every later day then also
    /// is) and clear every indexed day. Returns the first conflict found so
    /// the UI can name it.
    pub fn validate_window(&self, request: &RentalRequest, today: NaiveDate) -> WindowVerdict {
        if request.start() < today {
            return WindowVerdict::PastWindow { first_day: request.start() };
        }
        for day in request.window().days() {
            if let Some(reason) = self.reason(day) {
                return WindowVerdict::Conflict { day, reason: reason.to_string() };
            }
        }
        WindowVerdict::Bookable
    }

    /// Number of distinct unavailable days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no day is unavailable.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Outcome of validating a complete proposed window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum WindowVerdict {
    /// Every day in the window is free and none lie in the past.
    Bookable,
    /// The window starts before the evaluation day.
    PastWindow {
        /// First (past) day of the proposed window.
        first_day: NaiveDate,
    },
    /// A day in the window is booked or blocked.
    Conflict {
        /// First conflicting day, in window order.
        day: NaiveDate,
        /// Display reason recorded for that day.
        reason: String,
    },
}

impl WindowVerdict {
    /// True when the proposed window can be booked.
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Self::Bookable)
    }

    /// Display reason for the first conflict, if any.
    pub fn conflict_reason(&self) -> Option<&str> {
        match self {
            Self::Conflict { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
