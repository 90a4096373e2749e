//! The simulation-engine-facing process trait.

use crate::error::ProcessError;
use nalgebra::{DMatrix, DVector};
use sim_core::types::time::{Date, Time};

/// A multi-dimensional diffusion process.
///
/// This is the seam between a diffusion model and any discretization
/// strategy: the engine combines `drift(t, x) * dt` with
/// `diffusion(t, x) * sqrt(dt) * Z` (`Z` a vector of independent standard
/// normals), and hands the resulting delta to `apply` to advance the state.
/// The process supplies the (possibly nonlinear) state update; the
/// discretization supplies the increment assembly.
///
/// # Live Evaluation
///
/// `initial_values`, `drift`, and `diffusion` are pure functions of their
/// arguments and the *current* market data (quotes, curve handles). They
/// re-read live values on every call and cache nothing, so external
/// parameter mutation is visible immediately.
///
/// # Dimensionality Contract
///
/// State vectors passed to `drift`/`diffusion`/`apply` must have exactly
/// `size()` components, and noise vectors `factors()` components. A
/// mismatch is a programming error in the caller; implementations fail
/// fast with a panic rather than returning an error.
pub trait StochasticProcess {
    /// Dimension of the state vector.
    fn size(&self) -> usize;

    /// Number of independent noise sources driving the process.
    ///
    /// Defaults to [`size`](Self::size); correlation between components is
    /// expressed inside the `diffusion` matrix, not by reducing the factor
    /// count.
    fn factors(&self) -> usize {
        self.size()
    }

    /// The state at the start of the simulation.
    ///
    /// Returns a fresh vector re-read from live quotes — no caching.
    fn initial_values(&self) -> Result<DVector<f64>, ProcessError>;

    /// Deterministic drift coefficient at `(t, x)`.
    fn drift(&self, t: Time, x: &DVector<f64>) -> Result<DVector<f64>, ProcessError>;

    /// Diffusion coefficient matrix at `(t, x)`.
    ///
    /// The `size() x factors()` matrix mapping independent standard-normal
    /// increments to correlated state increments.
    fn diffusion(&self, t: Time, x: &DVector<f64>) -> Result<DMatrix<f64>, ProcessError>;

    /// Advance the state `x0` by the increment `dx`.
    ///
    /// This is where a process defines its (possibly nonlinear) update —
    /// e.g. a multiplicative update in level space for log-price dynamics.
    fn apply(&self, x0: &DVector<f64>, dx: &DVector<f64>) -> DVector<f64>;

    /// Map a calendar date to model time.
    ///
    /// Processes anchored to a term structure override this with that
    /// curve's reference date and day-count convention.
    ///
    /// # Returns
    ///
    /// * `Ok(t)` - Model time in years
    /// * `Err(ProcessError::TimeNotSupported)` - If the process has no
    ///   notion of calendar time (the default)
    fn time(&self, date: Date) -> Result<Time, ProcessError> {
        let _ = date;
        Err(ProcessError::TimeNotSupported)
    }
}
