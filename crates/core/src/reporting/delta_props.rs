//! Property-based tests for relative-change calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::delta::{relative_change, relative_change_opt};

/// Strategy to generate an arbitrary amount in cents.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a nonzero amount in cents.
fn nonzero_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64)
        .prop_filter("prior must be nonzero", |cents| *cents != 0)
        .prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any nonzero prior, the change is (current - prior) / |prior|.
    #[test]
    fn prop_definition_holds(current in amount(), prior in nonzero_amount()) {
        let change = relative_change(current, prior);
        prop_assert_eq!(change, (current - prior) / prior.abs());
    }

    /// The change carries the sign of (current - prior), regardless of
    /// the sign of prior.
    #[test]
    fn prop_sign_follows_difference(current in amount(), prior in nonzero_amount()) {
        let change = relative_change(current, prior);
        let difference = current - prior;
        if difference.is_zero() {
            prop_assert!(change.is_zero());
        } else {
            prop_assert_eq!(change.is_sign_positive(), difference.is_sign_positive());
        }
    }

    /// A zero prior collapses to zero at the summary call site.
    #[test]
    fn prop_zero_prior_is_zero(current in amount()) {
        prop_assert_eq!(relative_change(current, Decimal::ZERO), Decimal::ZERO);
    }

    /// A zero or absent prior collapses to None at the matrix call site.
    #[test]
    fn prop_zero_or_absent_prior_is_none(current in amount()) {
        prop_assert_eq!(relative_change_opt(Some(current), Some(Decimal::ZERO)), None);
        prop_assert_eq!(relative_change_opt(Some(current), None), None);
        prop_assert_eq!(relative_change_opt(None, Some(current)), None);
    }

    /// When both inputs are present and prior is nonzero, both call
    /// sites agree.
    #[test]
    fn prop_call_sites_agree(current in amount(), prior in nonzero_amount()) {
        prop_assert_eq!(
            relative_change_opt(Some(current), Some(prior)),
            Some(relative_change(current, prior))
        );
    }
}
