//! Relative-change calculations.
//!
//! Two entry points with deliberately different missing-data policies:
//! the KPI summary defaults absent comparators to zero and always emits a
//! number, while the comparison matrix keeps absence as `None` so "no
//! data" never reads as "zero". Division by zero is a defined result at
//! both call sites, never an error.

use rust_decimal::Decimal;

/// Relative change of `current` against `prior`, zero-defaulting.
///
/// Returns `0` when `prior` is zero, otherwise
/// `(current - prior) / |prior|`.
#[must_use]
pub fn relative_change(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        Decimal::ZERO
    } else {
        (current - prior) / prior.abs()
    }
}

/// Relative change of `current` against `prior`, null-propagating.
///
/// Returns `None` when either value is absent or `prior` is zero.
#[must_use]
pub fn relative_change_opt(current: Option<Decimal>, prior: Option<Decimal>) -> Option<Decimal> {
    match (current, prior) {
        (Some(current), Some(prior)) if !prior.is_zero() => Some((current - prior) / prior.abs()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_growth() {
        // 120 vs 100 -> +20%
        assert_eq!(relative_change(dec!(120), dec!(100)), dec!(0.20));
    }

    #[test]
    fn test_decline() {
        assert_eq!(relative_change(dec!(80), dec!(100)), dec!(-0.20));
    }

    #[test]
    fn test_zero_prior_defaults_to_zero() {
        assert_eq!(relative_change(dec!(80), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_negative_prior_uses_absolute_base() {
        // Loss shrinking from -100 to -50 is a +50% improvement.
        assert_eq!(relative_change(dec!(-50), dec!(-100)), dec!(0.50));
    }

    #[test]
    fn test_negative_current() {
        // Swing from +100 to -50 is a -150% change.
        assert_eq!(relative_change(dec!(-50), dec!(100)), dec!(-1.50));
    }

    #[test]
    fn test_small_prior() {
        assert_eq!(relative_change(dec!(1), dec!(0.01)), dec!(99));
    }

    #[test]
    fn test_opt_zero_prior_is_none() {
        assert_eq!(relative_change_opt(Some(dec!(80)), Some(Decimal::ZERO)), None);
    }

    #[test]
    fn test_opt_missing_inputs_are_none() {
        assert_eq!(relative_change_opt(None, Some(dec!(100))), None);
        assert_eq!(relative_change_opt(Some(dec!(100)), None), None);
        assert_eq!(relative_change_opt(None, None), None);
    }

    #[test]
    fn test_opt_present_values_compute() {
        assert_eq!(
            relative_change_opt(Some(dec!(120)), Some(dec!(100))),
            Some(dec!(0.20))
        );
    }

    #[test]
    fn test_opt_zero_current_computes() {
        // A present zero is data, not absence.
        assert_eq!(
            relative_change_opt(Some(Decimal::ZERO), Some(dec!(100))),
            Some(dec!(-1))
        );
    }
}
