//! Yield term structure abstractions.
//!
//! This module provides:
//! - [`YieldTermStructure`]: Date-anchored trait for discount factor,
//!   zero/forward rate, and date-to-model-time calculations
//! - [`FlatForward`]: Constant continuously-compounded rate implementation

mod flat;
mod traits;

pub use flat::FlatForward;
pub use traits::YieldTermStructure;
