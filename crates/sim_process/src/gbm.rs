//! Geometric Brownian motion with constant coefficients.

use crate::error::ProcessError;
use crate::process::StochasticProcess;
use nalgebra::{DMatrix, DVector};
use sim_core::types::time::Time;

/// Single-factor geometric Brownian motion:
///
/// ```text
/// dS = mu S dt + sigma S dW
/// ```
///
/// Plain constant-coefficient dynamics, useful as a baseline for validating
/// discretization schemes against the known lognormal law. Unlike the
/// curve-anchored processes this one carries raw parameters, has no market
/// data collaborators, and no notion of calendar time.
///
/// The state update is additive in level space; positivity of the path is a
/// property of the exact solution, not enforced per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricBrownianMotionProcess {
    x0: f64,
    mu: f64,
    sigma: f64,
}

impl GeometricBrownianMotionProcess {
    /// Create a new GBM process.
    ///
    /// # Arguments
    ///
    /// * `x0` - Initial level, must be positive
    /// * `mu` - Drift rate
    /// * `sigma` - Volatility, must be non-negative
    ///
    /// # Panics
    ///
    /// Panics if `x0 <= 0` or `sigma < 0`.
    pub fn new(x0: f64, mu: f64, sigma: f64) -> Self {
        assert!(x0 > 0.0, "initial level must be positive");
        assert!(sigma >= 0.0, "volatility must be non-negative");
        Self { x0, mu, sigma }
    }

    /// The drift rate.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// The volatility.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl StochasticProcess for GeometricBrownianMotionProcess {
    fn size(&self) -> usize {
        1
    }

    fn initial_values(&self) -> Result<DVector<f64>, ProcessError> {
        Ok(DVector::from_vec(vec![self.x0]))
    }

    /// `mu * x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have exactly 1 component.
    fn drift(&self, _t: Time, x: &DVector<f64>) -> Result<DVector<f64>, ProcessError> {
        assert_eq!(x.len(), 1, "GBM state vector must have 1 component");
        Ok(DVector::from_vec(vec![self.mu * x[0]]))
    }

    /// `sigma * x` as a 1x1 matrix.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have exactly 1 component.
    fn diffusion(&self, _t: Time, x: &DVector<f64>) -> Result<DMatrix<f64>, ProcessError> {
        assert_eq!(x.len(), 1, "GBM state vector must have 1 component");
        Ok(DMatrix::from_element(1, 1, self.sigma * x[0]))
    }

    /// Additive level update, `x0 + dx`.
    fn apply(&self, x0: &DVector<f64>, dx: &DVector<f64>) -> DVector<f64> {
        assert_eq!(x0.len(), 1, "GBM state vector must have 1 component");
        assert_eq!(dx.len(), 1, "GBM increment must have 1 component");
        DVector::from_vec(vec![x0[0] + dx[0]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coefficients_scale_with_state() {
        let p = GeometricBrownianMotionProcess::new(100.0, 0.05, 0.2);
        let x = DVector::from_vec(vec![50.0]);
        assert_relative_eq!(p.drift(0.0, &x).unwrap()[0], 2.5, epsilon = 1e-15);
        assert_relative_eq!(
            p.diffusion(0.0, &x).unwrap()[(0, 0)],
            10.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn initial_values_and_dimensions() {
        let p = GeometricBrownianMotionProcess::new(100.0, 0.05, 0.2);
        assert_eq!(p.size(), 1);
        assert_eq!(p.factors(), 1);
        assert_relative_eq!(p.initial_values().unwrap()[0], 100.0, epsilon = 1e-15);
    }

    #[test]
    fn apply_is_additive() {
        let p = GeometricBrownianMotionProcess::new(100.0, 0.05, 0.2);
        let x0 = DVector::from_vec(vec![100.0]);
        let dx = DVector::from_vec(vec![-3.5]);
        assert_relative_eq!(p.apply(&x0, &dx)[0], 96.5, epsilon = 1e-15);
    }

    #[test]
    fn time_mapping_is_unsupported() {
        use sim_core::types::time::Date;
        let p = GeometricBrownianMotionProcess::new(100.0, 0.05, 0.2);
        let date = Date::from_ymd(2027, 1, 2).unwrap();
        assert_eq!(p.time(date), Err(ProcessError::TimeNotSupported));
    }

    #[test]
    #[should_panic(expected = "initial level must be positive")]
    fn non_positive_initial_level_rejected() {
        let _ = GeometricBrownianMotionProcess::new(0.0, 0.05, 0.2);
    }

    #[test]
    #[should_panic(expected = "volatility must be non-negative")]
    fn negative_volatility_rejected() {
        let _ = GeometricBrownianMotionProcess::new(100.0, 0.05, -0.1);
    }
}
