//! Yield term structure trait definition.

use crate::market_data::error::MarketDataError;
use crate::traits::observable::Observable;
use crate::types::time::{Date, DayCountConvention, Time};

/// Interval width used when an instantaneous forward rate is requested:
/// `forward_rate(t, t)` is evaluated over `[t, t + INSTANTANEOUS_DT]`.
const INSTANTANEOUS_DT: Time = 1.0e-4;

/// Date-anchored yield curve trait for discount factor and rate calculations.
///
/// A term structure is anchored at a reference date and carries the
/// day-count convention that maps calendar dates to model time. Curves are
/// observable: consumers register for change notification instead of
/// polling.
///
/// # Contract
///
/// - `discount_factor(t)` returns the discount factor D(t) for maturity t
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `forward_rate(t1, t2)` returns the continuously compounded forward
///   rate between t1 and t2; `t1 == t2` yields the instantaneous forward
/// - `time_from_reference(date)` maps a calendar date to model time
///
/// # Invariants
///
/// - D(0) = 1 (discount factor at time 0 is 1)
/// - D(t) > 0 for all t >= 0 (discount factors are positive)
/// - D(t1) >= D(t2) for t1 <= t2 (no arbitrage condition)
///
/// # Example
///
/// ```
/// use sim_core::market_data::curves::{FlatForward, YieldTermStructure};
/// use sim_core::types::{Date, DayCountConvention};
///
/// let reference = Date::from_ymd(2026, 1, 2).unwrap();
/// let curve = FlatForward::new(reference, 0.05, DayCountConvention::ActualActual365);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let rate = curve.zero_rate(1.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
///
/// // Instantaneous forward at t = 1
/// let fwd = curve.forward_rate(1.0, 1.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldTermStructure: Observable {
    /// The date at which model time is zero.
    fn reference_date(&self) -> Date;

    /// The day-count convention mapping calendar dates to model time.
    fn day_count(&self) -> DayCountConvention;

    /// Return the discount factor for maturity `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(MarketDataError::InvalidMaturity)` - If t < 0
    fn discount_factor(&self, t: Time) -> Result<f64, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be > 0)
    ///
    /// # Returns
    ///
    /// * `Ok(r(t))` - Zero rate at time t
    /// * `Err(MarketDataError::InvalidMaturity)` - If t <= 0
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: Time) -> Result<f64, MarketDataError> {
        if t <= 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Return the continuously compounded forward rate between `t1` and `t2`.
    ///
    /// When `t2 == t1` (or the interval is shorter than the instantaneous
    /// resolution) the rate is evaluated over a small epsilon interval, so
    /// `forward_rate(t, t)` yields the instantaneous forward at `t`.
    ///
    /// # Arguments
    ///
    /// * `t1` - Start time in years (must be >= 0)
    /// * `t2` - End time in years (must be >= t1)
    ///
    /// # Returns
    ///
    /// * `Ok(f(t1, t2))` - Forward rate between t1 and t2
    /// * `Err(MarketDataError::InvalidMaturity)` - If t2 < t1
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// f(t1, t2) = ln(D(t1) / D(t2)) / (t2 - t1)
    /// ```
    fn forward_rate(&self, t1: Time, t2: Time) -> Result<f64, MarketDataError> {
        if t2 < t1 {
            return Err(MarketDataError::InvalidMaturity { t: t2 - t1 });
        }
        let (t1, t2) = if t2 - t1 < INSTANTANEOUS_DT {
            (t1, t1 + INSTANTANEOUS_DT)
        } else {
            (t1, t2)
        };
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok((df1 / df2).ln() / (t2 - t1))
    }

    /// Map a calendar date to model time from the reference date.
    ///
    /// Computes the year fraction between the reference date and `date`
    /// under this curve's day-count convention. Dates before the reference
    /// date are rejected: model time here is forward-looking only.
    ///
    /// # Arguments
    ///
    /// * `date` - The calendar date to map
    ///
    /// # Returns
    ///
    /// * `Ok(t)` - Model time in years (>= 0)
    /// * `Err(MarketDataError::DateBeforeReference)` - If `date` precedes
    ///   the reference date
    fn time_from_reference(&self, date: Date) -> Result<Time, MarketDataError> {
        let reference = self.reference_date();
        if date < reference {
            return Err(MarketDataError::DateBeforeReference { date, reference });
        }
        Ok(self
            .day_count()
            .year_fraction(reference.into_inner(), date.into_inner()))
    }
}
