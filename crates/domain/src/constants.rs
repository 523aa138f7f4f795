//! Domain constants
//!
//! Centralized location for the reason strings and duration bounds shared by
//! the engine and its callers.

/// Reason attached to days covered by an active rental.
pub const BOOKED_REASON: &str = "Booked";

/// Fallback reason for vendor blocks that carry none.
pub const DEFAULT_BLOCK_REASON: &str = "Unavailable";

/// Shortest rental the engine accepts.
pub const MIN_RENTAL_DAYS: u32 = 1;

/// Duration the storefront pre-selects on a fresh product page.
pub const DEFAULT_RENTAL_DAYS: u32 = 3;
