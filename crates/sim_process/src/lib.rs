//! # sim_process: Diffusion models for Monte-Carlo path simulation
//!
//! This crate provides the process primitives a path-generation engine
//! composes into simulated trajectories:
//!
//! - [`StochasticProcess`]: the engine-facing seam — `initial_values`,
//!   `drift`, `diffusion`, `apply`, and calendar-date-to-model-time mapping
//! - [`Discretization`] / [`EulerDiscretization`]: the strategy turning
//!   drift and diffusion into a single step increment
//! - [`HestonProcess`]: two-factor stochastic volatility (price, variance)
//!   with the full-truncation variance floor
//! - [`GeometricBrownianMotionProcess`]: constant-coefficient single-factor
//!   reference process
//!
//! ## Simulation Loop
//!
//! The engine asks the process for `initial_values()` once, then per step
//! obtains a delta from the discretization and advances via `apply`:
//!
//! ```
//! use nalgebra::DVector;
//! use sim_core::market_data::curves::FlatForward;
//! use sim_core::market_data::handle::Handle;
//! use sim_core::market_data::quotes::SimpleQuote;
//! use sim_core::types::{Date, DayCountConvention};
//! use sim_process::{Discretization, EulerDiscretization, HestonProcess, StochasticProcess};
//! use std::rc::Rc;
//!
//! let reference = Date::from_ymd(2026, 1, 2).unwrap();
//! let day_count = DayCountConvention::ActualActual365;
//! let process = HestonProcess::new(
//!     Handle::new(FlatForward::new(reference, 0.02, day_count)),
//!     Handle::new(FlatForward::new(reference, 0.0, day_count)),
//!     Handle::new(Rc::new(SimpleQuote::new(100.0))),
//!     0.04, 2.0, 0.04, 0.3, -0.6,
//! );
//!
//! let scheme = EulerDiscretization;
//! let mut x = process.initial_values().unwrap();
//! let dt = 1.0 / 252.0;
//! let dw = DVector::from_vec(vec![0.1, -0.2]);
//! let dx = scheme.step(&*process, 0.0, &x, dt, &dw).unwrap();
//! x = process.apply(&x, &dx);
//! assert!(x[0] > 0.0);
//! ```
//!
//! ## Live Parameters
//!
//! Processes hold observable quotes and relinkable curve handles from
//! `sim_core`; parameter edits propagate through change notification and
//! are picked up by the next `drift`/`diffusion`/`initial_values` call.
//! Nothing is cached internally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod discretization;
pub mod error;
pub mod gbm;
pub mod heston;
pub mod process;

// Re-export commonly used types at crate level
pub use discretization::{Discretization, EulerDiscretization};
pub use error::ProcessError;
pub use gbm::GeometricBrownianMotionProcess;
pub use heston::HestonProcess;
pub use process::StochasticProcess;
