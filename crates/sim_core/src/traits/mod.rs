//! Cross-cutting traits for change notification.
//!
//! This module defines the observability abstractions used throughout the
//! library:
//! - `Observer`: receives synchronous invalidation callbacks
//! - `Observable`: owns an explicit subscription list and notifies it
//! - `ObserverSet`: reusable subscription-list implementation
//!
//! Dependents register once and are notified on every mutation of the
//! observed object, so cached results can be invalidated without re-querying.

pub mod observable;

// Re-export commonly used types at module level
pub use observable::{Observable, Observer, ObserverSet};
