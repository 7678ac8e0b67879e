//! KPI summary and comparison-matrix assembly.
//!
//! Pure shaping over pre-fetched rows. Both builders order units and
//! metrics by display position themselves, so the output never depends
//! on store retrieval order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::delta::{relative_change, relative_change_opt};
use super::types::{ComparisonRow, KpiEntry, MetricDef, UnitComparison, UnitDef};

/// Builds the group KPI summary.
///
/// Value maps are keyed by metric ID; missing lookups default to zero,
/// so every KPI carries numbers and zero-defaulting deltas.
#[must_use]
pub fn build_group_kpis(
    metrics: &[MetricDef],
    current: &HashMap<Uuid, Decimal>,
    prior: &HashMap<Uuid, Decimal>,
    budget: &HashMap<Uuid, Decimal>,
) -> Vec<KpiEntry> {
    let mut ordered: Vec<&MetricDef> = metrics.iter().collect();
    ordered.sort_by_key(|metric| metric.display_order);

    ordered
        .into_iter()
        .map(|metric| {
            let current_value = current.get(&metric.id).copied().unwrap_or(Decimal::ZERO);
            let prior_value = prior.get(&metric.id).copied().unwrap_or(Decimal::ZERO);
            let budget_value = budget.get(&metric.id).copied().unwrap_or(Decimal::ZERO);

            KpiEntry {
                metric: metric.name.clone(),
                slug: metric.slug.clone(),
                category: metric.category,
                is_percentage: metric.is_percentage,
                current: current_value,
                prior: prior_value,
                budget: budget_value,
                yoy_change: relative_change(current_value, prior_value),
                vs_budget: relative_change(current_value, budget_value),
            }
        })
        .collect()
}

/// Builds the unit x metric comparison matrix.
///
/// `actuals` is keyed by (unit, metric, year), `budgets` by (unit,
/// metric) for the current year. Missing lookups stay `None` so the
/// matrix distinguishes "no data" from zero; YoY compares the two most
/// recent of `years`.
#[must_use]
pub fn build_comparison(
    units: &[UnitDef],
    metrics: &[MetricDef],
    years: &[i32],
    actuals: &HashMap<(Uuid, Uuid, i32), Decimal>,
    budgets: &HashMap<(Uuid, Uuid), Decimal>,
) -> Vec<UnitComparison> {
    let mut units_ordered: Vec<&UnitDef> = units.iter().collect();
    units_ordered.sort_by_key(|unit| unit.display_order);
    let mut metrics_ordered: Vec<&MetricDef> = metrics.iter().collect();
    metrics_ordered.sort_by_key(|metric| metric.display_order);

    units_ordered
        .into_iter()
        .map(|unit| {
            let rows = metrics_ordered
                .iter()
                .map(|metric| {
                    let values: Vec<Option<Decimal>> = years
                        .iter()
                        .map(|year| actuals.get(&(unit.id, metric.id, *year)).copied())
                        .collect();

                    let current = values.last().copied().flatten();
                    let prior = if values.len() >= 2 {
                        values[values.len() - 2]
                    } else {
                        None
                    };
                    let budget = budgets.get(&(unit.id, metric.id)).copied();

                    ComparisonRow {
                        metric: metric.name.clone(),
                        slug: metric.slug.clone(),
                        is_percentage: metric.is_percentage,
                        values,
                        yoy: relative_change_opt(current, prior),
                        budget,
                        vs_budget: relative_change_opt(current, budget),
                    }
                })
                .collect();

            UnitComparison {
                unit: unit.name.clone(),
                slug: unit.slug.clone(),
                rows,
            }
        })
        .collect()
}
