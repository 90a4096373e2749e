//! Relinkable shared indirection to market objects.
//!
//! A [`Handle`] stands between a consumer and a market object (quote, curve)
//! that may not exist yet, or may be swapped for another instance later.
//! Consumers hold the handle, never the target directly; relinking through
//! any clone is visible to all holders and notifies every observer
//! registered on the handle.

use crate::market_data::error::MarketDataError;
use crate::traits::observable::{Observable, Observer, ObserverSet};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared state of a handle: the current target plus the subscription list.
///
/// The link itself observes the current target, re-broadcasting the target's
/// notifications to the handle's observers so that consumers see changes
/// both of *which* object is linked and *inside* the linked object.
struct Link<T: ?Sized> {
    target: RefCell<Option<Rc<T>>>,
    observers: ObserverSet,
}

impl<T: ?Sized> Observer for Link<T> {
    fn update(&self) {
        self.observers.notify();
    }
}

/// A relinkable reference to a shared market object.
///
/// Cloning a handle shares the link: `link_to` through one clone is seen by
/// all. Dereferencing an empty handle fails with
/// [`MarketDataError::UnlinkedHandle`] at the point of use — construction
/// never fails.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use sim_core::market_data::handle::Handle;
/// use sim_core::market_data::quotes::{Quote, SimpleQuote};
///
/// let handle: Handle<dyn Quote> = Handle::empty();
/// assert!(handle.get().is_err());
///
/// handle.link_to(Rc::new(SimpleQuote::new(100.0)));
/// assert_eq!(handle.get().unwrap().value().unwrap(), 100.0);
/// ```
pub struct Handle<T: ?Sized> {
    link: Rc<Link<T>>,
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            link: Rc::clone(&self.link),
        }
    }
}

impl<T: Observable + ?Sized + 'static> Handle<T> {
    /// Create a handle with no target.
    pub fn empty() -> Self {
        Self {
            link: Rc::new(Link {
                target: RefCell::new(None),
                observers: ObserverSet::new(),
            }),
        }
    }

    /// Create a handle already linked to `target`.
    pub fn new(target: Rc<T>) -> Self {
        let handle = Self::empty();
        handle.link_to(target);
        handle
    }

    /// Link (or relink) the handle to `target` and notify observers.
    ///
    /// The link subscribes to the new target, so subsequent changes inside
    /// the target propagate to the handle's observers; the previous target
    /// (if any) is unsubscribed. Unsubscription happens before the new
    /// subscription, so relinking to the current target keeps propagation
    /// intact.
    pub fn link_to(&self, target: Rc<T>) {
        let weak = Rc::downgrade(&self.link);
        let forward: Weak<dyn Observer> = weak;

        let previous = self.link.target.replace(Some(Rc::clone(&target)));
        if let Some(previous) = previous {
            previous.unregister_observer(&forward);
        }
        target.register_observer(forward);

        self.link.observers.notify();
    }

    /// Whether the handle currently points at a target.
    pub fn is_linked(&self) -> bool {
        self.link.target.borrow().is_some()
    }

    /// The current target.
    ///
    /// # Returns
    ///
    /// * `Ok(target)` - A shared reference to the linked object
    /// * `Err(MarketDataError::UnlinkedHandle)` - If the handle is empty
    pub fn get(&self) -> Result<Rc<T>, MarketDataError> {
        self.link
            .target
            .borrow()
            .clone()
            .ok_or(MarketDataError::UnlinkedHandle)
    }
}

impl<T: Observable + ?Sized + 'static> Default for Handle<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> Observable for Handle<T> {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.link.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.link.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.link.observers.notify();
    }
}
