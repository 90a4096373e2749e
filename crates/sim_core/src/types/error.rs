//! Error types for date construction and parsing.

use thiserror::Error;

/// Errors from date construction and parsing.
///
/// # Examples
///
/// ```
/// use sim_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert!(format!("{}", err).contains("2024-2-30"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The year/month/day combination does not form a calendar date.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// The input string is not an ISO 8601 (YYYY-MM-DD) date.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_components() {
        let err = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");

        let err = DateError::ParseError("not-a-date".to_string());
        assert!(format!("{}", err).contains("not-a-date"));
    }
}
