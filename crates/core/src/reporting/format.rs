//! Display formatting and favorability classification.
//!
//! The KPI cards and the comparison table intentionally format absolute
//! values differently: cards scale sub-million amounts down to `$XK`,
//! the table prints plain two-decimal numbers and an em dash for missing
//! data. Changes are always signed percentages.

use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Placeholder for an absent value.
const EM_DASH: &str = "\u{2014}";

fn format_percent(value: Decimal) -> String {
    let percent = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

/// Formats an absolute value for a KPI card.
///
/// Percentage metrics render as `XX.X%`. Magnitude metrics are stored in
/// $ millions: at least one million prints as `$X.XM`, anything smaller
/// is rescaled to thousands as `$XK`.
#[must_use]
pub fn format_card_value(value: Decimal, is_percentage: bool) -> String {
    if is_percentage {
        return format_percent(value);
    }
    if value.abs() >= Decimal::ONE {
        let millions = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("${millions:.1}M")
    } else {
        let thousands = (value * Decimal::ONE_THOUSAND)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("${thousands:.0}K")
    }
}

/// Formats an absolute value for the comparison table.
///
/// Percentage metrics render as `XX.X%`, magnitude metrics as plain
/// two-decimal numbers, and absent values as an em dash.
#[must_use]
pub fn format_table_value(value: Option<Decimal>, is_percentage: bool) -> String {
    let Some(value) = value else {
        return EM_DASH.to_string();
    };
    if is_percentage {
        format_percent(value)
    } else {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

/// Formats a relative change as a signed one-decimal percentage.
///
/// Non-negative changes carry an explicit `+`; absent changes render as
/// an em dash.
#[must_use]
pub fn format_change(change: Option<Decimal>) -> String {
    let Some(change) = change else {
        return EM_DASH.to_string();
    };
    let sign = if change >= Decimal::ZERO { "+" } else { "" };
    let percent = (change * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{sign}{percent:.1}%")
}

/// How a change should read on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// The change moved the right way.
    Favorable,
    /// The change moved the wrong way.
    Unfavorable,
    /// No change to judge.
    Neutral,
}

/// Classifies changes as favorable or unfavorable.
///
/// A change at or above zero is favorable, except for metrics in the
/// lower-is-better set (cost lines), where the direction inverts.
#[derive(Debug, Clone)]
pub struct SentimentPolicy {
    lower_is_better: HashSet<String>,
}

impl SentimentPolicy {
    /// Creates a policy with the given lower-is-better metric slugs.
    pub fn new<I, S>(lower_is_better: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lower_is_better: lower_is_better.into_iter().map(Into::into).collect(),
        }
    }

    /// Classifies a change for the given metric.
    #[must_use]
    pub fn classify(&self, metric_slug: &str, change: Option<Decimal>) -> Sentiment {
        let Some(change) = change else {
            return Sentiment::Neutral;
        };
        let favorable = if self.lower_is_better.contains(metric_slug) {
            change < Decimal::ZERO
        } else {
            change >= Decimal::ZERO
        };
        if favorable {
            Sentiment::Favorable
        } else {
            Sentiment::Unfavorable
        }
    }
}

impl Default for SentimentPolicy {
    fn default() -> Self {
        Self::new(["opex"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0.1523), true, "15.2%")]
    #[case(dec!(0.30), true, "30.0%")]
    #[case(dec!(12.4), false, "$12.4M")]
    #[case(dec!(1), false, "$1.0M")]
    #[case(dec!(-3.25), false, "$-3.3M")]
    #[case(dec!(0.5), false, "$500K")]
    #[case(dec!(0.0004), false, "$0K")]
    #[case(dec!(-0.5), false, "$-500K")]
    fn test_card_value(#[case] value: Decimal, #[case] is_percentage: bool, #[case] expected: &str) {
        assert_eq!(format_card_value(value, is_percentage), expected);
    }

    #[rstest]
    #[case(Some(dec!(0.1523)), true, "15.2%")]
    #[case(Some(dec!(12.4)), false, "12.40")]
    #[case(Some(dec!(0.5)), false, "0.50")]
    #[case(None, false, "\u{2014}")]
    #[case(None, true, "\u{2014}")]
    fn test_table_value(
        #[case] value: Option<Decimal>,
        #[case] is_percentage: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(format_table_value(value, is_percentage), expected);
    }

    #[rstest]
    #[case(Some(dec!(0.20)), "+20.0%")]
    #[case(Some(Decimal::ZERO), "+0.0%")]
    #[case(Some(dec!(-0.134)), "-13.4%")]
    #[case(None, "\u{2014}")]
    fn test_change(#[case] change: Option<Decimal>, #[case] expected: &str) {
        assert_eq!(format_change(change), expected);
    }

    #[test]
    fn test_rising_revenue_is_favorable() {
        let policy = SentimentPolicy::default();
        assert_eq!(
            policy.classify("revenues", Some(dec!(0.10))),
            Sentiment::Favorable
        );
        assert_eq!(
            policy.classify("revenues", Some(Decimal::ZERO)),
            Sentiment::Favorable
        );
        assert_eq!(
            policy.classify("revenues", Some(dec!(-0.10))),
            Sentiment::Unfavorable
        );
    }

    #[test]
    fn test_rising_cost_line_is_unfavorable() {
        let policy = SentimentPolicy::default();
        assert_eq!(
            policy.classify("opex", Some(dec!(0.10))),
            Sentiment::Unfavorable
        );
        assert_eq!(
            policy.classify("opex", Some(dec!(-0.10))),
            Sentiment::Favorable
        );
    }

    #[test]
    fn test_absent_change_is_neutral() {
        let policy = SentimentPolicy::default();
        assert_eq!(policy.classify("revenues", None), Sentiment::Neutral);
    }

    #[test]
    fn test_configured_cost_slugs() {
        let policy = SentimentPolicy::new(["opex", "capex"]);
        assert_eq!(
            policy.classify("capex", Some(dec!(0.05))),
            Sentiment::Unfavorable
        );
    }
}
