//! # Rentcal Domain
//!
//! Value types and models for the rental-availability engine.
//!
//! This crate contains:
//! - Validated date-range and rental-request value types
//! - The rental lifecycle status enum
//! - Error types and Result definitions
//! - Domain constants (reason strings, duration bounds)
//!
//! ## Architecture
//! - No dependencies on other rentcal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use errors::*;
pub use types::*;
