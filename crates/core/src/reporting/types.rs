//! Reporting domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Month value of the full-year aggregate row.
pub const FULL_YEAR_MONTH: i32 = 0;

/// Metric category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    /// Top-line revenue metrics.
    Revenue,
    /// Profitability metrics.
    Profit,
    /// Cost metrics.
    Expense,
    /// Everything else.
    Other,
}

impl From<&str> for MetricCategory {
    fn from(value: &str) -> Self {
        match value {
            "revenue" => Self::Revenue,
            "profit" => Self::Profit,
            "expense" => Self::Expense,
            _ => Self::Other,
        }
    }
}

/// Business unit definition as read from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDef {
    /// Unit ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Ascending display position.
    pub display_order: i32,
}

/// Metric definition as read from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDef {
    /// Metric ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Metric category.
    pub category: MetricCategory,
    /// Whether values are ratios rather than $ millions.
    pub is_percentage: bool,
    /// Ascending display position.
    pub display_order: i32,
}

/// One KPI on the group summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiEntry {
    /// Metric name.
    pub metric: String,
    /// Metric slug.
    pub slug: String,
    /// Metric category.
    pub category: MetricCategory,
    /// Whether values are ratios.
    pub is_percentage: bool,
    /// Current-year full-year value (zero when absent).
    pub current: Decimal,
    /// Prior-year full-year value (zero when absent).
    pub prior: Decimal,
    /// Current-year budget (zero when absent).
    pub budget: Decimal,
    /// Year-over-year relative change.
    pub yoy_change: Decimal,
    /// Relative change of actual vs budget.
    pub vs_budget: Decimal,
}

/// One metric row in the comparison matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Metric name.
    pub metric: String,
    /// Metric slug.
    pub slug: String,
    /// Whether values are ratios.
    pub is_percentage: bool,
    /// Full-year values, aligned with the requested years; `None` is
    /// "no data", distinct from zero.
    pub values: Vec<Option<Decimal>>,
    /// Year-over-year change across the two most recent years.
    pub yoy: Option<Decimal>,
    /// Current-year budget.
    pub budget: Option<Decimal>,
    /// Relative change of actual vs budget.
    pub vs_budget: Option<Decimal>,
}

/// Comparison rows for one business unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitComparison {
    /// Unit name.
    pub unit: String,
    /// Unit slug.
    pub slug: String,
    /// Per-metric rows in display order.
    pub rows: Vec<ComparisonRow>,
}
