//! Heston stochastic volatility process.
//!
//! The Heston model describes two coupled SDEs for the asset price and its
//! instantaneous variance:
//!
//! ```text
//! dS = (r - q) S dt + sqrt(v) S dW_1
//! dv = kappa (theta - v) dt + sigma sqrt(v) dW_2
//! dW_1 dW_2 = rho dt
//! ```
//!
//! State vector: `x = [S, v]` (index 0 = asset level, index 1 = variance).
//!
//! ## Full Truncation
//!
//! A naive Euler step can drive the variance negative. The scheme used
//! here substitutes zero for negative variance inside `drift` and
//! `diffusion` — never inside `apply` — so the state may transiently hold
//! a negative variance while every computation reading it is floored.
//! Among the simple Euler variants this produces the smallest simulation
//! bias; see Lord, Koekkoek and van Dijk (2006), "A Comparison of biased
//! simulation schemes for stochastic volatility models".

use crate::error::ProcessError;
use crate::process::StochasticProcess;
use nalgebra::{DMatrix, DVector};
use sim_core::market_data::curves::YieldTermStructure;
use sim_core::market_data::handle::Handle;
use sim_core::market_data::quotes::{Quote, SimpleQuote};
use sim_core::traits::observable::{Observable, Observer, ObserverSet};
use sim_core::types::time::{Date, Time};
use std::rc::{Rc, Weak};

/// The Heston stochastic volatility process.
///
/// Holds two term-structure handles (risk-free, dividend), a spot quote
/// handle, and five parameter quotes it owns:
///
/// * `v0`    — initial variance
/// * `kappa` — mean-reversion speed of variance
/// * `theta` — long-run variance level
/// * `sigma` — volatility of variance (vol-of-vol)
/// * `rho`   — correlation between the two Brownian motions
///
/// All of them are live: `drift`, `diffusion`, and `initial_values` re-read
/// current values on every call, and the process registers itself as an
/// observer of every handle and parameter, re-broadcasting their change
/// notifications to its own observers.
///
/// # Example
///
/// ```
/// use sim_core::market_data::curves::FlatForward;
/// use sim_core::market_data::handle::Handle;
/// use sim_core::market_data::quotes::SimpleQuote;
/// use sim_core::types::{Date, DayCountConvention};
/// use sim_process::{HestonProcess, StochasticProcess};
/// use std::rc::Rc;
///
/// let reference = Date::from_ymd(2026, 1, 2).unwrap();
/// let day_count = DayCountConvention::ActualActual365;
/// let process = HestonProcess::new(
///     Handle::new(FlatForward::new(reference, 0.02, day_count)),
///     Handle::new(FlatForward::new(reference, 0.0, day_count)),
///     Handle::new(Rc::new(SimpleQuote::new(100.0))),
///     0.04, // v0
///     2.0,  // kappa
///     0.04, // theta
///     0.3,  // sigma
///     -0.6, // rho
/// );
///
/// let x0 = process.initial_values().unwrap();
/// assert_eq!(x0[0], 100.0);
/// assert_eq!(x0[1], 0.04);
/// ```
pub struct HestonProcess {
    risk_free_rate: Handle<dyn YieldTermStructure>,
    dividend_yield: Handle<dyn YieldTermStructure>,
    s0: Handle<dyn Quote>,
    v0: Rc<SimpleQuote>,
    kappa: Rc<SimpleQuote>,
    theta: Rc<SimpleQuote>,
    sigma: Rc<SimpleQuote>,
    rho: Rc<SimpleQuote>,
    observers: ObserverSet,
}

impl HestonProcess {
    /// Create a new Heston process.
    ///
    /// The five scalar parameters are wrapped into fresh [`SimpleQuote`]s
    /// owned by the process; mutate them through the accessors to move the
    /// model while a simulation context holds it. The process registers
    /// itself with every handle and parameter, so any change reaches
    /// observers registered on the process itself.
    ///
    /// Handles may be empty at construction: an unlinked curve or spot
    /// quote only fails at the point of use (`drift`, `initial_values`,
    /// `time`).
    ///
    /// # Arguments
    ///
    /// * `risk_free_rate` - Risk-free term structure handle
    /// * `dividend_yield` - Dividend yield term structure handle
    /// * `s0` - Spot price quote handle
    /// * `v0` - Initial variance
    /// * `kappa` - Mean-reversion speed
    /// * `theta` - Long-run variance
    /// * `sigma` - Volatility of variance
    /// * `rho` - Brownian correlation, expected in [-1, 1] (not validated;
    ///   see [`diffusion`](StochasticProcess::diffusion))
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        risk_free_rate: Handle<dyn YieldTermStructure>,
        dividend_yield: Handle<dyn YieldTermStructure>,
        s0: Handle<dyn Quote>,
        v0: f64,
        kappa: f64,
        theta: f64,
        sigma: f64,
        rho: f64,
    ) -> Rc<Self> {
        let v0 = Rc::new(SimpleQuote::new(v0));
        let kappa = Rc::new(SimpleQuote::new(kappa));
        let theta = Rc::new(SimpleQuote::new(theta));
        let sigma = Rc::new(SimpleQuote::new(sigma));
        let rho = Rc::new(SimpleQuote::new(rho));

        Rc::new_cyclic(|me: &Weak<Self>| {
            let observer: Weak<dyn Observer> = me.clone();
            risk_free_rate.register_observer(observer.clone());
            dividend_yield.register_observer(observer.clone());
            s0.register_observer(observer.clone());
            v0.register_observer(observer.clone());
            kappa.register_observer(observer.clone());
            theta.register_observer(observer.clone());
            sigma.register_observer(observer.clone());
            rho.register_observer(observer);

            Self {
                risk_free_rate,
                dividend_yield,
                s0,
                v0,
                kappa,
                theta,
                sigma,
                rho,
                observers: ObserverSet::new(),
            }
        })
    }

    /// The initial variance parameter (live, mutable through `set_value`).
    pub fn v0(&self) -> &Rc<SimpleQuote> {
        &self.v0
    }

    /// The mean-reversion speed parameter.
    pub fn kappa(&self) -> &Rc<SimpleQuote> {
        &self.kappa
    }

    /// The long-run variance parameter.
    pub fn theta(&self) -> &Rc<SimpleQuote> {
        &self.theta
    }

    /// The vol-of-vol parameter.
    pub fn sigma(&self) -> &Rc<SimpleQuote> {
        &self.sigma
    }

    /// The Brownian correlation parameter.
    pub fn rho(&self) -> &Rc<SimpleQuote> {
        &self.rho
    }

    /// The spot price quote handle.
    pub fn s0(&self) -> &Handle<dyn Quote> {
        &self.s0
    }

    /// The risk-free term structure handle.
    pub fn risk_free_rate(&self) -> &Handle<dyn YieldTermStructure> {
        &self.risk_free_rate
    }

    /// The dividend yield term structure handle.
    pub fn dividend_yield(&self) -> &Handle<dyn YieldTermStructure> {
        &self.dividend_yield
    }
}

impl StochasticProcess for HestonProcess {
    fn size(&self) -> usize {
        2
    }

    /// `[spot, v0]`, re-read from the live quotes on every call.
    fn initial_values(&self) -> Result<DVector<f64>, ProcessError> {
        let s0 = self.s0.get()?.value()?;
        let v0 = self.v0.value()?;
        Ok(DVector::from_vec(vec![s0, v0]))
    }

    /// Risk-neutral drift of `[ln S, v]`.
    ///
    /// The first component is the instantaneous forward spread minus the
    /// Itô correction, `f_r(t) - f_q(t) - vol^2 / 2`; the second is the
    /// mean reversion `kappa (theta - vol^2)`. Both use the floored
    /// `vol^2` rather than the raw variance, which is the bias-minimising
    /// choice among the plain Euler schemes.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have exactly 2 components.
    fn drift(&self, t: Time, x: &DVector<f64>) -> Result<DVector<f64>, ProcessError> {
        assert_eq!(x.len(), 2, "Heston state vector must have 2 components");
        let vol = if x[1] > 0.0 { x[1].sqrt() } else { 0.0 };

        let r = self.risk_free_rate.get()?.forward_rate(t, t)?;
        let q = self.dividend_yield.get()?.forward_rate(t, t)?;
        let kappa = self.kappa.value()?;
        let theta = self.theta.value()?;

        Ok(DVector::from_vec(vec![
            r - q - 0.5 * vol * vol,
            kappa * (theta - vol * vol),
        ]))
    }

    /// Diffusion matrix mapping two independent normals to correlated
    /// `(ln S, v)` increments.
    ///
    /// The correlation matrix is
    ///
    /// ```text
    /// |  1   rho |
    /// | rho   1  |
    /// ```
    ///
    /// whose square root (used here in closed form) is
    ///
    /// ```text
    /// |  1            0        |
    /// | rho   sqrt(1 - rho^2)  |
    /// ```
    ///
    /// Row 0 is scaled by `sigma1 = sqrt(v)` (floored at zero) and row 1
    /// by `sigma * sigma1`.
    ///
    /// `rho` outside [-1, 1] is not validated: `sqrt(1 - rho^2)` then
    /// evaluates on a negative argument and the matrix silently carries
    /// NaN entries. Faithful to the model's documented sharp edge.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have exactly 2 components.
    fn diffusion(&self, _t: Time, x: &DVector<f64>) -> Result<DMatrix<f64>, ProcessError> {
        assert_eq!(x.len(), 2, "Heston state vector must have 2 components");
        let rho = self.rho.value()?;
        let sigma1 = if x[1] > 0.0 { x[1].sqrt() } else { 0.0 };
        let sigma2 = self.sigma.value()? * sigma1;

        let mut m = DMatrix::zeros(2, 2);
        m[(0, 0)] = sigma1;
        m[(0, 1)] = 0.0;
        m[(1, 0)] = rho * sigma2;
        m[(1, 1)] = (1.0 - rho * rho).sqrt() * sigma2;
        Ok(m)
    }

    /// Advance the state: multiplicative in the asset level, additive in
    /// the variance.
    ///
    /// ```text
    /// x' = [ x0[0] * exp(dx[0]),  x0[1] + dx[1] ]
    /// ```
    ///
    /// The price stays strictly positive for any finite increment; the
    /// variance may go negative here and is floored on the next
    /// `drift`/`diffusion` evaluation, not in this method.
    ///
    /// # Panics
    ///
    /// Panics if `x0` or `dx` does not have exactly 2 components.
    fn apply(&self, x0: &DVector<f64>, dx: &DVector<f64>) -> DVector<f64> {
        assert_eq!(x0.len(), 2, "Heston state vector must have 2 components");
        assert_eq!(dx.len(), 2, "Heston increment must have 2 components");
        DVector::from_vec(vec![x0[0] * dx[0].exp(), x0[1] + dx[1]])
    }

    /// Year fraction from the risk-free curve's reference date to `date`,
    /// under that curve's day-count convention.
    fn time(&self, date: Date) -> Result<Time, ProcessError> {
        Ok(self.risk_free_rate.get()?.time_from_reference(date)?)
    }
}

impl Observer for HestonProcess {
    /// Re-broadcast collaborator changes to the process's own observers.
    fn update(&self) {
        self.observers.notify();
    }
}

impl Observable for HestonProcess {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}
