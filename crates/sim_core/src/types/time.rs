//! Time types for model-time calculations.
//!
//! This module provides:
//! - `Date`: Type-safe calendar date wrapper around `chrono::NaiveDate`
//! - `DayCountConvention`: Industry-standard day count conventions
//! - `Time`: Model time in years (continuously measured)
//!
//! # Examples
//!
//! ```
//! use sim_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 7, 1).unwrap();
//! let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert!((yf - 181.0 / 365.0).abs() < 1e-12);
//! ```

use crate::types::error::DateError;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Model time measured in years from a reference date.
///
/// Produced by [`DayCountConvention`] year fractions and consumed by curve
/// and process evaluations.
pub type Time = f64;

/// Type-safe calendar date.
///
/// Wraps `chrono::NaiveDate` to keep chrono out of public signatures and to
/// attach the error/serialisation conventions of this workspace.
///
/// # Examples
///
/// ```
/// use sim_core::types::time::Date;
///
/// let date = Date::from_ymd(2026, 6, 15).unwrap();
/// assert_eq!(date.year(), 2026);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2026-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2026, 1, 1).unwrap();
/// let end = Date::from_ymd(2026, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2026)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2026, 6, 15).unwrap();
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2028, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2026, 2, 30).is_err());
    /// # let _ = (date, leap);
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from an ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use sim_core::types::time::Date;
    ///
    /// let date = Date::parse("2026-06-15").unwrap();
    /// assert_eq!(date.month(), 6);
    /// assert!(Date::parse("15/06/2026").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying `chrono::NaiveDate`.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Number of days from `rhs` to `self` (negative if `self` is earlier).
    fn sub(self, rhs: Self) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `ActualActual365`: Actual days / 365 (standard for derivatives and UK bonds)
/// - `ActualActual360`: Actual days / 360 (common in money market instruments)
/// - `Thirty360`: Each month treated as 30 days, year as 360 days (US corporate bonds)
///
/// # Usage
///
/// ```
/// use sim_core::types::time::DayCountConvention;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
///
/// let act_365 = DayCountConvention::ActualActual365;
/// let year_fraction = act_365.year_fraction(start, end);
/// // 181 days / 365.0 ≈ 0.4959
/// # assert!((year_fraction - 181.0 / 365.0).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    ///
    /// Used in most derivatives markets.
    ActualActual365,

    /// Actual/360: actual_days / 360.0
    ///
    /// Used in money market instruments.
    ActualActual360,

    /// 30/360 US Bond Basis
    ///
    /// Each month is treated as having 30 days, and the year as 360 days.
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::ActualActual365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::ActualActual360.name(), "ACT/360");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
            DayCountConvention::ActualActual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Calculate year fraction between two ordered dates.
    ///
    /// # Arguments
    /// * `start` - Start date
    /// * `end` - End date
    ///
    /// # Returns
    /// Year fraction as f64 (e.g., 0.5 for 6 months, 1.0 for 1 year)
    ///
    /// # Panics
    /// Panics if `start > end`; use [`year_fraction_dates`](Self::year_fraction_dates)
    /// where a signed fraction is meaningful.
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        assert!(
            start <= end,
            "start date must be less than or equal to end date"
        );
        self.year_fraction_dates(Date(start), Date(end))
    }

    /// Calculates the signed year fraction between two dates.
    ///
    /// Unlike [`year_fraction`](Self::year_fraction), this method returns
    /// negative values when `start > end` instead of panicking; the sign
    /// indicates direction.
    ///
    /// # Arguments
    /// * `start` - Start date
    /// * `end` - End date
    ///
    /// # Examples
    ///
    /// ```
    /// use sim_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2026, 1, 1).unwrap();
    /// let end = Date::from_ymd(2026, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
    /// assert!((yf - 181.0 / 365.0).abs() < 1e-12);
    ///
    /// // Reversed dates return a negative value
    /// let yf_neg = DayCountConvention::ActualActual365.year_fraction_dates(end, start);
    /// assert!((yf_neg + 181.0 / 365.0).abs() < 1e-12);
    /// ```
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        let days = end - start; // i64, can be negative

        match self {
            DayCountConvention::ActualActual365 => days as f64 / 365.0,
            DayCountConvention::ActualActual360 => days as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                let (first, second, sign) = if start <= end {
                    (start.0, end.0, 1.0)
                } else {
                    (end.0, start.0, -1.0)
                };

                // 30/360 US Bond Basis adjustments
                let d1 = if first.day() == 31 { 30 } else { first.day() };
                let d2 = if second.day() == 31 && d1 == 30 {
                    30
                } else {
                    second.day()
                };

                let days = 360 * (second.year() - first.year())
                    + 30 * (second.month() as i32 - first.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days as f64 / 360.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn date_construction_and_accessors() {
        let date = Date::from_ymd(2026, 6, 15).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
        assert_eq!(date.to_string(), "2026-06-15");
    }

    #[test]
    fn invalid_dates_rejected() {
        assert!(Date::from_ymd(2026, 2, 30).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
        assert!(Date::from_ymd(2027, 2, 29).is_err()); // not a leap year
    }

    #[test]
    fn date_parse_round_trip() {
        let date = Date::parse("2026-02-28").unwrap();
        assert_eq!(date, Date::from_ymd(2026, 2, 28).unwrap());
        assert!(Date::parse("28-02-2026").is_err());
    }

    #[test]
    fn date_subtraction_is_signed() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 31).unwrap();
        assert_eq!(end - start, 30);
        assert_eq!(start - end, -30);
    }

    #[test]
    fn act_365_year_fraction() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2027, 1, 1).unwrap();
        let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
        assert_relative_eq!(yf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn act_360_year_fraction() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 7, 1).unwrap();
        let yf = DayCountConvention::ActualActual360.year_fraction_dates(start, end);
        assert_relative_eq!(yf, 181.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn thirty_360_treats_months_as_thirty_days() {
        let start = Date::from_ymd(2026, 1, 31).unwrap();
        let end = Date::from_ymd(2026, 7, 31).unwrap();
        // Both month-ends adjust to day 30: exactly six 30-day months.
        let yf = DayCountConvention::Thirty360.year_fraction_dates(start, end);
        assert_relative_eq!(yf, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn thirty_360_signed_direction() {
        let start = Date::from_ymd(2026, 1, 15).unwrap();
        let end = Date::from_ymd(2026, 4, 15).unwrap();
        let forward = DayCountConvention::Thirty360.year_fraction_dates(start, end);
        let backward = DayCountConvention::Thirty360.year_fraction_dates(end, start);
        assert_relative_eq!(forward, 0.25, epsilon = 1e-12);
        assert_relative_eq!(backward, -0.25, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "start date must be less than or equal")]
    fn ordered_year_fraction_panics_on_reversed_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        DayCountConvention::ActualActual365.year_fraction(start, end);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            // Offsets from a fixed epoch keep every generated date valid.
            (0i64..20000).prop_map(|offset| {
                let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
                Date::from(epoch + chrono::Duration::days(offset))
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn signed_fraction_is_antisymmetric(
                a in date_strategy(),
                b in date_strategy(),
            ) {
                for convention in [
                    DayCountConvention::ActualActual365,
                    DayCountConvention::ActualActual360,
                    DayCountConvention::Thirty360,
                ] {
                    let forward = convention.year_fraction_dates(a, b);
                    let backward = convention.year_fraction_dates(b, a);
                    prop_assert!((forward + backward).abs() < 1e-12);
                }
            }

            #[test]
            fn act_conventions_scale_day_difference(
                a in date_strategy(),
                b in date_strategy(),
            ) {
                let days = (b - a) as f64;
                let yf_365 = DayCountConvention::ActualActual365.year_fraction_dates(a, b);
                let yf_360 = DayCountConvention::ActualActual360.year_fraction_dates(a, b);
                prop_assert!((yf_365 * 365.0 - days).abs() < 1e-9);
                prop_assert!((yf_360 * 360.0 - days).abs() < 1e-9);
            }
        }
    }
}
