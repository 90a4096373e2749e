//! Core time and error types.
//!
//! This module provides:
//! - `time`: Time types (`Date`, `DayCountConvention`, `Time`) for model-time
//!   calculations
//! - `error`: Structured error types for date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`], [`Time`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{Date, DayCountConvention, Time};
