//! Flat-forward yield curve implementation.

use super::YieldTermStructure;
use crate::market_data::error::MarketDataError;
use crate::market_data::handle::Handle;
use crate::market_data::quotes::{Quote, SimpleQuote};
use crate::traits::observable::{Observable, Observer, ObserverSet};
use crate::types::time::{Date, DayCountConvention};
use std::rc::{Rc, Weak};

/// Flat yield curve with a constant continuously-compounded forward rate.
///
/// The rate is held behind a [`Handle<dyn Quote>`]: editing the quote (or
/// relinking the handle) moves the whole curve, and the curve re-broadcasts
/// the change to its own observers.
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
/// // Discount factor at t=1: exp(-0.05 * 1) ≈ 0.9512
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // Zero rate is constant across maturities
/// assert!((curve.zero_rate(1.0).unwrap() - 0.05).abs() < 1e-12);
/// assert!((curve.zero_rate(5.0).unwrap() - 0.05).abs() < 1e-12);
/// ```
pub struct FlatForward {
    reference_date: Date,
    rate: Handle<dyn Quote>,
    day_count: DayCountConvention,
    observers: ObserverSet,
}

impl FlatForward {
    /// Construct a flat curve from a raw rate.
    ///
    /// The rate is wrapped into a fresh [`SimpleQuote`] owned by the curve.
    ///
    /// # Arguments
    ///
    /// * `reference_date` - Anchor date (model time zero)
    /// * `rate` - The constant rate (continuously compounded)
    /// * `day_count` - Day-count convention for date-to-time mapping
    pub fn new(reference_date: Date, rate: f64, day_count: DayCountConvention) -> Rc<Self> {
        Self::with_quote(
            reference_date,
            Handle::new(Rc::new(SimpleQuote::new(rate)) as Rc<dyn Quote>),
            day_count,
        )
    }

    /// Construct a flat curve from an existing rate quote handle.
    ///
    /// The curve registers itself with the handle and re-broadcasts its
    /// notifications, so quote edits reach the curve's observers.
    pub fn with_quote(
        reference_date: Date,
        rate: Handle<dyn Quote>,
        day_count: DayCountConvention,
    ) -> Rc<Self> {
        Rc::new_cyclic(|me: &Weak<Self>| {
            let observer: Weak<dyn Observer> = me.clone();
            rate.register_observer(observer);
            Self {
                reference_date,
                rate,
                day_count,
                observers: ObserverSet::new(),
            }
        })
    }

    /// The live rate quote handle.
    pub fn rate(&self) -> &Handle<dyn Quote> {
        &self.rate
    }
}

impl Observer for FlatForward {
    fn update(&self) {
        self.observers.notify();
    }
}

impl Observable for FlatForward {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}

impl YieldTermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Return the discount factor for maturity `t`.
    ///
    /// For a flat curve with rate r:
    /// ```text
    /// D(t) = exp(-r * t)
    /// ```
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(MarketDataError::InvalidMaturity)` - If t < 0
    /// * `Err(MarketDataError::UnlinkedHandle | UnsetQuote)` - If the rate
    ///   quote is not available
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        if t < 0.0 {
            return Err(MarketDataError::InvalidMaturity { t });
        }
        let rate = self.rate.get()?.value()?;
        Ok((-rate * t).exp())
    }
}
