//! # Rentcal Core
//!
//! Pure availability logic - no I/O, no clocks, no infrastructure.
//!
//! This crate contains:
//! - The unavailability index and rental-window validation
//! - The ingestion boundary for the storage collaborator's wire format
//! - Month-view derivation for the calendar widget
//!
//! ## Architecture Principles
//! - Only depends on `rentcal-domain`
//! - Every operation is a pure function of its inputs
//! - "Today" is always injected, never read from the wall clock
//! - Safe to call concurrently; each evaluation owns its own index

pub mod availability;
pub mod calendar;
pub mod ingest;

// Re-export specific items to avoid ambiguity
pub use availability::{UnavailabilityIndex, WindowVerdict};
pub use calendar::{DayCell, DayState, MonthView};
pub use ingest::{
    blocked_ranges, booked_ranges, booked_ranges_from_wire, parse_day, BlockedRangeDto,
    BookedRangeDto, RentalRecordDto,
};
