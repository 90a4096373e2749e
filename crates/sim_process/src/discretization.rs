//! Discretization strategies for diffusion processes.
//!
//! A discretization turns the continuous-time coefficients of a
//! [`StochasticProcess`] into a single-step increment. The process never
//! owns its discretization; the simulation engine selects one at
//! construction and composes it with any process:
//!
//! ```text
//! dx = drift(process, t, x, dt) + diffusion(process, t, x, dt) * Z
//! x' = process.apply(x, dx)
//! ```

use crate::error::ProcessError;
use crate::process::StochasticProcess;
use nalgebra::{DMatrix, DVector};
use sim_core::types::time::Time;

/// Strategy assembling a step increment from process coefficients.
///
/// Implementations define how the drift and diffusion coefficients are
/// integrated over a step `[t, t + dt]`; the provided [`step`](Self::step)
/// combines them with a vector of independent standard-normal draws into
/// the delta handed to [`StochasticProcess::apply`].
pub trait Discretization {
    /// Deterministic increment over `[t, t + dt]`.
    fn drift(
        &self,
        process: &dyn StochasticProcess,
        t: Time,
        x: &DVector<f64>,
        dt: Time,
    ) -> Result<DVector<f64>, ProcessError>;

    /// Noise scaling matrix over `[t, t + dt]`.
    fn diffusion(
        &self,
        process: &dyn StochasticProcess,
        t: Time,
        x: &DVector<f64>,
        dt: Time,
    ) -> Result<DMatrix<f64>, ProcessError>;

    /// Full step increment for the standard-normal draws `dw`.
    ///
    /// # Arguments
    ///
    /// * `process` - The process being discretized
    /// * `t` - Step start time
    /// * `x` - State at `t`
    /// * `dt` - Step length
    /// * `dw` - `process.factors()` independent standard-normal draws
    fn step(
        &self,
        process: &dyn StochasticProcess,
        t: Time,
        x: &DVector<f64>,
        dt: Time,
        dw: &DVector<f64>,
    ) -> Result<DVector<f64>, ProcessError> {
        Ok(self.drift(process, t, x, dt)? + self.diffusion(process, t, x, dt)? * dw)
    }
}

/// Euler-Maruyama discretization (the default scheme).
///
/// Approximates drift and diffusion as constant over the step:
///
/// ```text
/// drift     = process.drift(t, x) * dt
/// diffusion = process.diffusion(t, x) * sqrt(dt)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EulerDiscretization;

impl Discretization for EulerDiscretization {
    fn drift(
        &self,
        process: &dyn StochasticProcess,
        t: Time,
        x: &DVector<f64>,
        dt: Time,
    ) -> Result<DVector<f64>, ProcessError> {
        Ok(process.drift(t, x)? * dt)
    }

    fn diffusion(
        &self,
        process: &dyn StochasticProcess,
        t: Time,
        x: &DVector<f64>,
        dt: Time,
    ) -> Result<DMatrix<f64>, ProcessError> {
        Ok(process.diffusion(t, x)? * dt.sqrt())
    }
}
