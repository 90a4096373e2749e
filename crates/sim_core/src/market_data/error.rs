//! Market data error types.
//!
//! This module provides structured error handling for quote, handle, and
//! yield curve operations.

use crate::types::time::Date;
use thiserror::Error;

/// Market data operation errors.
///
/// Failures surface at the point of use, not at construction: an empty
/// handle or unset quote is only an error once something tries to read
/// through it.
///
/// # Variants
///
/// - `UnlinkedHandle`: Dereferencing a handle with no target
/// - `UnsetQuote`: Reading a quote that has no value yet
/// - `InvalidMaturity`: Negative time to maturity or reversed interval
/// - `DateBeforeReference`: Mapping a date that precedes the curve anchor
///
/// # Examples
///
/// ```
/// use sim_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// A handle was dereferenced before being linked to a target object.
    #[error("Handle is not linked to any object")]
    UnlinkedHandle,

    /// A quote was read before any value was set.
    #[error("Quote has no value set")]
    UnsetQuote,

    /// Invalid maturity (negative time or reversed interval).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity or interval length
        t: f64,
    },

    /// A date preceding the curve's reference date was mapped to model time.
    #[error("Date {date} precedes curve reference date {reference}")]
    DateBeforeReference {
        /// The queried date
        date: Date,
        /// The curve's reference date
        reference: Date,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", MarketDataError::UnlinkedHandle),
            "Handle is not linked to any object"
        );
        assert_eq!(
            format!("{}", MarketDataError::UnsetQuote),
            "Quote has no value set"
        );
        assert_eq!(
            format!("{}", MarketDataError::InvalidMaturity { t: -0.5 }),
            "Invalid maturity: t = -0.5"
        );

        let err = MarketDataError::DateBeforeReference {
            date: Date::from_ymd(2025, 12, 31).unwrap(),
            reference: Date::from_ymd(2026, 1, 2).unwrap(),
        };
        assert_eq!(
            format!("{}", err),
            "Date 2025-12-31 precedes curve reference date 2026-01-02"
        );
    }
}
