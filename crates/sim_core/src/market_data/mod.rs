//! Market data structures feeding the diffusion models.
//!
//! This module provides the live, observable market objects a stochastic
//! process reads on every evaluation:
//!
//! - [`quotes`]: Observable scalar parameters (`Quote`, `SimpleQuote`)
//! - [`handle`]: Relinkable shared indirection (`Handle`)
//! - [`curves`]: Date-anchored yield term structures (`YieldTermStructure`,
//!   `FlatForward`)
//! - [`error`]: Market data error types (`MarketDataError`)
//!
//! # Live Values
//!
//! Nothing here is a snapshot: a quote edit or a handle relink is visible to
//! every holder on the next read, and registered observers are notified
//! synchronously at mutation time.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use sim_core::market_data::handle::Handle;
//! use sim_core::market_data::quotes::{Quote, SimpleQuote};
//!
//! let spot = Rc::new(SimpleQuote::new(100.0));
//! let handle: Handle<dyn Quote> = Handle::new(spot.clone());
//!
//! spot.set_value(101.0);
//! assert_eq!(handle.get().unwrap().value().unwrap(), 101.0);
//! ```

pub mod curves;
pub mod error;
pub mod handle;
pub mod quotes;

// Re-export commonly used types
pub use curves::{FlatForward, YieldTermStructure};
pub use error::MarketDataError;
pub use handle::Handle;
pub use quotes::{Quote, SimpleQuote};
