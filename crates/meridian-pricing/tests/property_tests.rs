//! Property tests for the discounting methods and calculators.

use meridian_core::Currency;
use meridian_curves::prelude::*;
use meridian_pricing::prelude::*;
use proptest::prelude::*;

fn provider() -> MulticurveProviderDiscount {
    MulticurveProviderDiscount::builder()
        .discount_curve(
            Currency::EUR,
            YieldCurve::new(
                "EUR-DSC",
                vec![0.25, 1.0, 2.0, 5.0, 10.0, 30.0],
                vec![0.011, 0.013, 0.016, 0.022, 0.027, 0.030],
                InterpolationMethod::LogLinear,
            )
            .unwrap(),
        )
        .discount_curve(
            Currency::USD,
            YieldCurve::new(
                "USD-DSC",
                vec![0.5, 2.0, 10.0],
                vec![0.004, 0.009, 0.025],
                InterpolationMethod::Linear,
            )
            .unwrap(),
        )
        .build()
        .unwrap()
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![Currency::EUR, Currency::USD])
}

fn coupon() -> impl Strategy<Value = CouponFixed> {
    (
        currency(),
        0.0..40.0_f64,
        0.0..1.0_f64,
        -1e9..1e9_f64,
        -0.01..0.10_f64,
    )
        .prop_map(|(ccy, t, accrual, notional, rate)| {
            CouponFixed::new(ccy, t, accrual, notional, rate).unwrap()
        })
}

proptest! {
    #[test]
    fn prop_coupon_paths_agree(coupon in coupon()) {
        let provider = provider();
        let instrument = InstrumentDerivative::from(coupon);

        let pv_method = CouponFixedDiscountingMethod::new()
            .present_value(&coupon, &provider)
            .unwrap();
        let pv_visitor = PresentValueDiscountingCalculator::new()
            .present_value(&instrument, &provider)
            .unwrap();
        prop_assert!(pv_method.approx_eq(&pv_visitor, 1e-2));

        let pvcs_method = CouponFixedDiscountingMethod::new()
            .present_value_curve_sensitivity(&coupon, &provider)
            .unwrap();
        let pvcs_visitor = PresentValueCurveSensitivityDiscountingCalculator::new()
            .present_value_curve_sensitivity(&instrument, &provider)
            .unwrap();
        prop_assert!(pvcs_method.approx_eq(&pvcs_visitor, 1e2));
    }

    #[test]
    fn prop_present_value_is_linear_in_amount(
        ccy in currency(),
        t in 0.0..40.0_f64,
        a in -1e8..1e8_f64,
        b in -1e8..1e8_f64,
    ) {
        let provider = provider();
        let method = PaymentFixedDiscountingMethod::new();
        let pa = FixedCashFlow::new(ccy, t, a).unwrap();
        let pb = pa.with_amount(b);
        let pab = pa.with_amount(a + b);

        let separate = method
            .present_value(&pa, &provider)
            .unwrap()
            .plus(&method.present_value(&pb, &provider).unwrap());
        let combined = method.present_value(&pab, &provider).unwrap();
        prop_assert!(separate.approx_eq(&combined, 1e-2));

        let separate = method
            .present_value_curve_sensitivity(&pa, &provider)
            .unwrap()
            .plus(&method.present_value_curve_sensitivity(&pb, &provider).unwrap());
        let combined = method.present_value_curve_sensitivity(&pab, &provider).unwrap();
        prop_assert!(separate.approx_eq(&combined, 1e2));
    }

    #[test]
    fn prop_annuity_is_sum_of_coupons(
        coupons in prop::collection::vec(coupon(), 1..8),
    ) {
        let provider = provider();
        let eur: Vec<CouponFixed> = coupons
            .into_iter()
            .map(|c| {
                CouponFixed::new(
                    Currency::EUR,
                    c.payment_time(),
                    c.payment_year_fraction(),
                    c.notional(),
                    c.fixed_rate(),
                )
                .unwrap()
            })
            .collect();
        let annuity = AnnuityCouponFixed::new(eur.clone()).unwrap();

        let total = AnnuityDiscountingMethod::new()
            .present_value(&annuity, &provider)
            .unwrap();
        let expected: f64 = eur
            .iter()
            .map(|c| c.amount() * provider.discount_factor(Currency::EUR, c.payment_time()).unwrap())
            .sum();
        prop_assert!((total.amount_or_zero(Currency::EUR) - expected).abs() < 1e-2);
    }
}
