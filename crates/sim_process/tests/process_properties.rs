//! Property-based tests for the process coefficient contracts.

use nalgebra::DVector;
use proptest::prelude::*;
use sim_core::market_data::curves::FlatForward;
use sim_core::market_data::handle::Handle;
use sim_core::market_data::quotes::SimpleQuote;
use sim_core::types::{Date, DayCountConvention};
use sim_process::{HestonProcess, StochasticProcess};
use std::rc::Rc;

fn heston(rho: f64, sigma: f64) -> Rc<HestonProcess> {
    let reference = Date::from_ymd(2026, 1, 2).unwrap();
    let day_count = DayCountConvention::ActualActual365;
    HestonProcess::new(
        Handle::new(FlatForward::new(reference, 0.02, day_count)),
        Handle::new(FlatForward::new(reference, 0.0, day_count)),
        Handle::new(Rc::new(SimpleQuote::new(100.0))),
        0.04,
        2.0,
        0.04,
        sigma,
        rho,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Row 1 of the diffusion matrix is a unit decomposition of the
    /// variance volatility: M[1][0]^2 + M[1][1]^2 == (sigma * sqrt(v))^2.
    #[test]
    fn correlation_decomposition_preserves_variance_vol(
        rho in -1.0f64..=1.0,
        sigma in 0.01f64..2.0,
        v in 0.0f64..1.0,
    ) {
        let p = heston(rho, sigma);
        let x = DVector::from_vec(vec![100.0, v]);
        let m = p.diffusion(0.5, &x).unwrap();

        let expected = sigma * sigma * v;
        let actual = m[(1, 0)] * m[(1, 0)] + m[(1, 1)] * m[(1, 1)];
        prop_assert!(
            (actual - expected).abs() <= 1e-12 * expected.max(1.0),
            "row norm {} != sigma^2 v {}",
            actual,
            expected
        );
    }

    /// A zero increment leaves the state unchanged.
    #[test]
    fn apply_zero_increment_is_identity(
        s in 0.01f64..1e4,
        v in -0.5f64..1.0,
    ) {
        let p = heston(-0.6, 0.3);
        let x0 = DVector::from_vec(vec![s, v]);
        let x1 = p.apply(&x0, &DVector::from_vec(vec![0.0, 0.0]));
        prop_assert_eq!(x1[0], s);
        prop_assert_eq!(x1[1], v);
    }

    /// The multiplicative price update keeps the level strictly positive
    /// for any finite log increment.
    #[test]
    fn apply_keeps_price_positive(
        s in 0.01f64..1e4,
        d0 in -50.0f64..50.0,
        d1 in -1.0f64..1.0,
    ) {
        let p = heston(-0.6, 0.3);
        let x0 = DVector::from_vec(vec![s, 0.04]);
        let x1 = p.apply(&x0, &DVector::from_vec(vec![d0, d1]));
        prop_assert!(x1[0] > 0.0);
        prop_assert!(x1[0].is_finite());
    }

    /// Drift and diffusion agree on the floor: whenever the variance is
    /// non-positive, the price row of the diffusion vanishes and the
    /// variance drift is exactly kappa * theta.
    #[test]
    fn floored_variance_is_consistent_across_coefficients(
        v in -1.0f64..=0.0,
    ) {
        let p = heston(-0.6, 0.3);
        let x = DVector::from_vec(vec![100.0, v]);

        let d = p.drift(1.0, &x).unwrap();
        prop_assert!((d[1] - 2.0 * 0.04).abs() < 1e-14);

        let m = p.diffusion(1.0, &x).unwrap();
        prop_assert_eq!(m[(0, 0)], 0.0);
        prop_assert_eq!(m[(1, 0)], 0.0);
        prop_assert_eq!(m[(1, 1)], 0.0);
    }
}
