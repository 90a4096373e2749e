//! Observer pattern primitives.
//!
//! Market objects (quotes, curves, handles, processes) form a notification
//! graph: mutating a leaf value synchronously notifies every registered
//! dependent, which may in turn re-broadcast to its own dependents. The
//! graph is explicit — each observable owns its subscription list — and
//! there is no global registry.
//!
//! # Notification Semantics
//!
//! - Notification is synchronous and fires on the mutating thread.
//! - There is no batching and no deduplication: setting a quote to its
//!   current value still notifies, and observers reachable through several
//!   paths may be updated more than once per mutation. Observers must
//!   tolerate redundant updates.
//! - Observers are held weakly; dropped observers are pruned on the next
//!   notification.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use sim_core::traits::{Observable, Observer, ObserverSet};
//!
//! struct Counter(Cell<usize>);
//!
//! impl Observer for Counter {
//!     fn update(&self) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//!
//! let set = ObserverSet::new();
//! let counter = Rc::new(Counter(Cell::new(0)));
//! let observer = Rc::downgrade(&counter);
//! set.register(observer);
//! set.notify();
//! set.notify();
//! assert_eq!(counter.0.get(), 2);
//! ```

use std::cell::RefCell;
use std::rc::Weak;

/// Receiver of synchronous change notifications.
///
/// `update` is called once per notification; it carries no payload, so the
/// observer is expected to re-read live values (or mark caches dirty) rather
/// than diff against the previous state.
pub trait Observer {
    /// Called synchronously whenever an observed object changes.
    fn update(&self);
}

/// An object owning an explicit subscription list.
///
/// Implementors typically delegate to an embedded [`ObserverSet`].
pub trait Observable {
    /// Register `observer` for future change notifications.
    ///
    /// The observer is held weakly: registration does not extend its
    /// lifetime, and a dropped observer is silently pruned.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Remove a previously registered observer.
    ///
    /// Matching is by pointer identity; unknown observers are ignored.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Notify every live registered observer, in registration order.
    fn notify_observers(&self);
}

/// Reusable subscription list backing [`Observable`] implementations.
///
/// Interior-mutable so that registration and notification work through
/// shared references; not thread-safe (sharing is `Rc`-based and mutation
/// must be serialised by the caller).
#[derive(Debug, Default)]
pub struct ObserverSet {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl ObserverSet {
    /// Create an empty subscription list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer to the list.
    pub fn register(&self, observer: Weak<dyn Observer>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Remove an observer by pointer identity.
    pub fn unregister(&self, observer: &Weak<dyn Observer>) {
        self.observers.borrow_mut().retain(|o| !o.ptr_eq(observer));
    }

    /// Notify all live observers and prune the dead ones.
    ///
    /// The internal borrow is released before any `update` call, so an
    /// observer may register further observers (or mutate other observables)
    /// from within its callback.
    pub fn notify(&self) {
        let live: Vec<_> = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|o| o.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.update();
        }
    }

    /// Number of currently registered (possibly dead) observers.
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Whether the subscription list is empty.
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter(Cell<usize>);

    impl Observer for Counter {
        fn update(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn notifies_registered_observers() {
        let set = ObserverSet::new();
        let a = Rc::new(Counter(Cell::new(0)));
        let b = Rc::new(Counter(Cell::new(0)));
        let weak_a = Rc::downgrade(&a);
        set.register(weak_a);
        let weak_b = Rc::downgrade(&b);
        set.register(weak_b);

        set.notify();
        assert_eq!(a.0.get(), 1);
        assert_eq!(b.0.get(), 1);

        set.notify();
        assert_eq!(a.0.get(), 2);
    }

    #[test]
    fn prunes_dropped_observers() {
        let set = ObserverSet::new();
        let a = Rc::new(Counter(Cell::new(0)));
        let weak_a = Rc::downgrade(&a);
        set.register(weak_a);
        {
            let short_lived = Rc::new(Counter(Cell::new(0)));
            let weak = Rc::downgrade(&short_lived);
            set.register(weak);
            assert_eq!(set.len(), 2);
        }

        set.notify();
        assert_eq!(a.0.get(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unregister_removes_by_identity() {
        let set = ObserverSet::new();
        let a = Rc::new(Counter(Cell::new(0)));
        let b = Rc::new(Counter(Cell::new(0)));
        let weak_a = Rc::downgrade(&a);
        set.register(weak_a);
        let weak_b = Rc::downgrade(&b);
        set.register(weak_b);

        let weak = Rc::downgrade(&a);
        let weak_a: Weak<dyn Observer> = weak;
        set.unregister(&weak_a);
        set.notify();
        assert_eq!(a.0.get(), 0);
        assert_eq!(b.0.get(), 1);
    }

    #[test]
    fn observer_may_register_during_update() {
        struct Registrar {
            target: Rc<ObserverSet>,
            extra: Rc<Counter>,
        }

        impl Observer for Registrar {
            fn update(&self) {
                let extra = Rc::downgrade(&self.extra);
                self.target.register(extra);
            }
        }

        let set = Rc::new(ObserverSet::new());
        let extra = Rc::new(Counter(Cell::new(0)));
        let registrar = Rc::new(Registrar {
            target: Rc::clone(&set),
            extra: Rc::clone(&extra),
        });
        let weak_registrar = Rc::downgrade(&registrar);
        set.register(weak_registrar);

        // Must not panic on re-entrant registration.
        set.notify();
        assert_eq!(set.len(), 2);
    }
}
