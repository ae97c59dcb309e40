use bonding_launch::constants::{CURVE_SCALE, CURVE_SLOPE};
use bonding_launch::settlement::{leaving_behind, refund};
use bonding_launch::vesting::unlocked_shares;
use bonding_launch::{CurveParams, LinearCurve};
use proptest::prelude::*;

fn curve(base_price: u64, slope_numerator: u128, slope_denominator: u128) -> LinearCurve {
    LinearCurve::new(CurveParams {
        base_price,
        slope_numerator,
        slope_denominator,
    })
    .unwrap()
}

fn any_curve() -> impl Strategy<Value = LinearCurve> {
    prop_oneof![
        // cost(0, s) = s²
        Just(curve(0, 2, 1)),
        // production default
        Just(LinearCurve::new(CurveParams::default()).unwrap()),
        (0u64..10_000, 0u128..1_000, 1_000u128..1_000_000)
            .prop_filter("zero-price curve", |(p0, n, _)| *p0 > 0 || *n > 0)
            .prop_map(|(p0, n, d)| curve(p0, n, d)),
    ]
}

proptest! {
    #[test]
    fn cost_is_monotone_in_upper_bound(
        curve in any_curve(),
        s0 in 0u64..1_000_000_000,
        a in 0u64..1_000_000,
        b in 0u64..1_000_000,
    ) {
        let (lo, hi) = (s0 + a.min(b), s0 + a.max(b));
        let c_lo = curve.cost(s0, lo).unwrap();
        let c_hi = curve.cost(s0, hi).unwrap();
        prop_assert!(c_lo <= c_hi);
        prop_assert_eq!(curve.cost(s0, s0).unwrap(), 0);
    }

    #[test]
    fn buy_return_is_maximal_without_overspend(
        curve in any_curve(),
        lamports in 1u64..1_000_000_000_000,
        s0 in 0u64..1_000_000_000,
    ) {
        let shares = curve.buy_return(lamports, s0).unwrap();
        prop_assert!(curve.cost(s0, s0 + shares).unwrap() <= lamports);
        prop_assert!(curve.cost(s0, s0 + shares + 1).unwrap() > lamports);
    }

    #[test]
    fn buy_return_handles_large_base_price(
        base_price in 10_000_000u64..1_000_000_000_000,
        lamports in 1u64..1_000_000_000_000_000,
        s0 in 0u64..1_000_000_000,
    ) {
        let curve = curve(base_price, CURVE_SLOPE, CURVE_SCALE);
        let shares = curve.buy_return(lamports, s0).unwrap();
        prop_assert!(shares <= lamports / base_price);
        prop_assert!(curve.cost(s0, s0 + shares).unwrap() <= lamports);
        prop_assert!(curve.cost(s0, s0 + shares + 1).unwrap() > lamports);
    }

    #[test]
    fn full_supply_value_equals_cost_from_zero(
        curve in any_curve(),
        total in 0u64..1_000_000_000,
    ) {
        prop_assert_eq!(
            curve.position_value(total, total).unwrap(),
            curve.cost(0, total).unwrap()
        );
    }

    #[test]
    fn leaving_behind_vanishes_when_value_is_within_basis(
        sold in 1u64..1_000_000,
        extra in 0u64..1_000_000,
        basis in 0u64..1_000_000_000_000,
        value in 0u64..1_000_000_000_000,
    ) {
        let held = sold + extra;
        let refund = refund(sold, held, basis).unwrap();
        prop_assert!(refund <= basis);
        let left = leaving_behind(value, refund);
        if value <= refund {
            prop_assert_eq!(left, 0);
        } else {
            prop_assert_eq!(left, value - refund);
        }
    }

    #[test]
    fn unlocks_are_monotone_and_bounded(
        seed in 0u64..u64::MAX,
        vesting_days in 1u64..400,
        day in 0u64..400,
    ) {
        let today = unlocked_shares(seed, day, vesting_days).unwrap();
        let tomorrow = unlocked_shares(seed, day + 1, vesting_days).unwrap();
        prop_assert!(today <= tomorrow);
        prop_assert!(tomorrow <= seed);
        prop_assert_eq!(unlocked_shares(seed, 0, vesting_days).unwrap(), 0);
        prop_assert_eq!(unlocked_shares(seed, vesting_days, vesting_days).unwrap(), seed);
    }
}
