//! Integration test: a two-currency provider shared across threads.
//!
//! | Currency | Curve    | Interpolation | Nodes (years)        |
//! |----------|----------|---------------|----------------------|
//! | EUR      | EUR-DSC  | Linear        | 0.25, 0.5, 1, 2, 5   |
//! | USD      | USD-OIS  | Log-linear    | 0.5, 1, 3, 10        |

use std::sync::Arc;
use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use meridian_core::Currency;
use meridian_curves::prelude::*;

fn eur_curve() -> YieldCurve {
    YieldCurve::new(
        "EUR-DSC",
        vec![0.25, 0.5, 1.0, 2.0, 5.0],
        vec![0.0100, 0.0110, 0.0125, 0.0150, 0.0200],
        InterpolationMethod::Linear,
    )
    .unwrap()
}

fn usd_curve() -> YieldCurve {
    YieldCurve::new(
        "USD-OIS",
        vec![0.5, 1.0, 3.0, 10.0],
        vec![0.0450, 0.0430, 0.0400, 0.0410],
        InterpolationMethod::LogLinear,
    )
    .unwrap()
}

fn provider() -> MulticurveProviderDiscount {
    MulticurveProviderDiscount::builder()
        .discount_curve(Currency::EUR, eur_curve())
        .discount_curve(Currency::USD, usd_curve())
        .build()
        .unwrap()
}

#[test]
fn discount_factors_are_decreasing_for_positive_rates() {
    let provider = provider();
    for ccy in provider.currencies() {
        let mut previous = 1.0;
        for step in 1..=60 {
            let t = f64::from(step) * 0.25;
            let df = provider.discount_factor(ccy, t).unwrap();
            assert!(df > 0.0 && df < previous, "{ccy} df not decreasing at {t}");
            previous = df;
        }
    }
}

#[test]
fn sensitivity_basis_matches_bumped_curves() {
    let provider = provider();
    let shift = 1e-6;

    for (ccy, curve) in [(Currency::EUR, eur_curve()), (Currency::USD, usd_curve())] {
        for t in [0.1, 0.7, 1.9, 4.0, 12.0] {
            let basis = provider.curve_sensitivity_basis(ccy, t).unwrap();
            assert_eq!(basis.len(), curve.node_count());

            for node in &basis {
                let up = provider
                    .with_discount_curve(ccy, curve.with_bumped_node(node.node_index, shift).unwrap());
                let down = provider
                    .with_discount_curve(ccy, curve.with_bumped_node(node.node_index, -shift).unwrap());
                let fd = (up.discount_factor(ccy, t).unwrap() - down.discount_factor(ccy, t).unwrap())
                    / (2.0 * shift);
                assert_abs_diff_eq!(node.value, fd, epsilon = 1e-6);
                assert_relative_eq!(node.node_time, curve.times()[node.node_index]);
            }
        }
    }
}

#[test]
fn provider_is_shareable_across_threads() {
    let provider: Arc<dyn MulticurveProvider> = Arc::new(provider());
    let expected: Vec<f64> = (0..8)
        .map(|i| provider.discount_factor(Currency::USD, f64::from(i)).unwrap())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                scope.spawn(move || {
                    (0..8)
                        .map(|i| provider.discount_factor(Currency::USD, f64::from(i)).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn missing_currency_is_reported_not_defaulted() {
    let provider = provider();
    let err = provider.discount_factor(Currency::CHF, 1.0).unwrap_err();
    assert!(err.is_currency_not_found());
    assert_eq!(err.to_string(), "Currency discounting curve not found: CHF");
}
