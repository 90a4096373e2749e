//! Observable scalar quotes.
//!
//! A quote is a single market value (spot price, model parameter) shared by
//! potentially many consumers. Mutation goes through [`SimpleQuote::set_value`],
//! which synchronously notifies every registered observer so that dependents
//! can invalidate cached results without re-querying.

use crate::market_data::error::MarketDataError;
use crate::traits::observable::{Observable, Observer, ObserverSet};
use std::cell::Cell;
use std::rc::Weak;

/// Read access to a scalar market value.
///
/// Reading may fail: a quote can exist before any value is set, and the
/// failure surfaces here, at the point of use.
pub trait Quote: Observable {
    /// The current value of the quote.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` - The live value
    /// * `Err(MarketDataError::UnsetQuote)` - If no value has been set yet
    fn value(&self) -> Result<f64, MarketDataError>;

    /// Whether the quote currently holds a value.
    fn is_valid(&self) -> bool;
}

/// A mutable scalar value with change notification.
///
/// Shared as `Rc<SimpleQuote>`; the value lives as long as its longest
/// holder. Every `set_value` notifies all registered observers — including
/// a set to the identical value, so observers must tolerate redundant
/// notifications.
///
/// # Example
///
/// ```
/// use sim_core::market_data::quotes::{Quote, SimpleQuote};
///
/// let quote = SimpleQuote::new(0.04);
/// assert_eq!(quote.value().unwrap(), 0.04);
///
/// quote.set_value(0.09);
/// assert_eq!(quote.value().unwrap(), 0.09);
///
/// let unset = SimpleQuote::empty();
/// assert!(unset.value().is_err());
/// ```
#[derive(Debug, Default)]
pub struct SimpleQuote {
    value: Cell<Option<f64>>,
    observers: ObserverSet,
}

impl SimpleQuote {
    /// Create a quote holding `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value: Cell::new(Some(value)),
            observers: ObserverSet::new(),
        }
    }

    /// Create a quote with no value set.
    ///
    /// Reading it yields `MarketDataError::UnsetQuote` until a value is set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the value and notify all observers.
    ///
    /// Notification is unconditional: setting the current value again still
    /// notifies.
    pub fn set_value(&self, value: f64) {
        self.value.set(Some(value));
        self.observers.notify();
    }

    /// Clear the value and notify all observers.
    pub fn reset(&self) {
        self.value.set(None);
        self.observers.notify();
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Result<f64, MarketDataError> {
        self.value.get().ok_or(MarketDataError::UnsetQuote)
    }

    fn is_valid(&self) -> bool {
        self.value.get().is_some()
    }
}

impl Observable for SimpleQuote {
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
