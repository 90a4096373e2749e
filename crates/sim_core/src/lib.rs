//! # sim_core: Foundation for the diffusim Monte-Carlo library
//!
//! ## Layer 1 (Foundation) Role
//!
//! sim_core serves as the bottom layer of the workspace, providing:
//! - Observability primitives: `Observer`, `Observable`, `ObserverSet` (`traits::observable`)
//! - Time types: `Date`, `DayCountConvention`, `Time` (`types::time`)
//! - Observable scalar quotes: `Quote`, `SimpleQuote` (`market_data::quotes`)
//! - Relinkable shared indirection: `Handle` (`market_data::handle`)
//! - Date-anchored yield term structures: `YieldTermStructure`, `FlatForward`
//!   (`market_data::curves`)
//! - Error types: `DateError`, `MarketDataError`
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other sim_* crates, with minimal external
//! dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Sharing Model
//!
//! Quotes, curves, and handles are shared via `Rc` and mutated through
//! interior mutability. Change notification is synchronous and fires on the
//! mutating thread; no internal locking is provided, so concurrent use must
//! be serialised by the caller.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sim_core::market_data::curves::{FlatForward, YieldTermStructure};
//! use sim_core::market_data::quotes::{Quote, SimpleQuote};
//! use sim_core::types::{Date, DayCountConvention};
//!
//! // An observable scalar parameter
//! let spot = SimpleQuote::new(100.0);
//! assert_eq!(spot.value().unwrap(), 100.0);
//!
//! // A flat continuously-compounded curve anchored at a reference date
//! let reference = Date::from_ymd(2026, 1, 2).unwrap();
//! let curve = FlatForward::new(reference, 0.02, DayCountConvention::ActualActual365);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - (-0.02_f64).exp()).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `DayCountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
