//! Financial reporting logic.
//!
//! This module implements the derived-metrics concern:
//! - Relative-change calculations (YoY, vs budget)
//! - KPI summary and comparison-matrix shaping
//! - Display formatting and favorability classification
//! - Domain types for units, metrics, and report rows

pub mod delta;
pub mod format;
pub mod summary;
pub mod types;

#[cfg(test)]
mod delta_props;

pub use delta::{relative_change, relative_change_opt};
pub use format::{
    Sentiment, SentimentPolicy, format_card_value, format_change, format_table_value,
};
pub use summary::{build_comparison, build_group_kpis};
pub use types::{
    ComparisonRow, FULL_YEAR_MONTH, KpiEntry, MetricCategory, MetricDef, UnitComparison, UnitDef,
};
