//! Comparison matrix route.

use std::collections::HashMap;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::routes::{internal_error, metric_def};
use crate::AppState;
use finboard_core::reporting::{self, MetricDef, UnitComparison, UnitDef};
use finboard_db::{
    BudgetRepository, BusinessUnitRepository, FinancialDataRepository, MetricRepository,
};

/// Creates the comparison routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/comparison", get(get_comparison))
}

/// Response for the unit x metric comparison matrix.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    /// Years covered, ascending; row values align with this.
    pub years: Vec<i32>,
    /// Per-unit comparison blocks in display order.
    pub comparison: Vec<UnitComparison>,
}

/// GET /api/comparison
///
/// Full-year actuals across the configured years plus current-year
/// budgets; missing lookups stay null so "no data" never reads as zero.
#[axum::debug_handler]
async fn get_comparison(State(state): State<AppState>) -> impl IntoResponse {
    let unit_repo = BusinessUnitRepository::new((*state.db).clone());
    let metric_repo = MetricRepository::new((*state.db).clone());
    let data_repo = FinancialDataRepository::new((*state.db).clone());
    let budget_repo = BudgetRepository::new((*state.db).clone());

    let years = state.reporting.comparison_years();

    // Independent reads, awaited concurrently.
    let fetched = tokio::try_join!(
        unit_repo.find_all_ordered(),
        metric_repo.find_all_ordered(),
        data_repo.find_full_year_in(&years),
        budget_repo.find_for_year(state.reporting.current_year),
    );
    let (unit_rows, metric_rows, data_rows, budget_rows) = match fetched {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to query comparison data");
            return internal_error();
        }
    };

    let units: Vec<UnitDef> = unit_rows
        .iter()
        .map(|row| UnitDef {
            id: row.id,
            name: row.name.clone(),
            slug: row.slug.clone(),
            display_order: row.display_order,
        })
        .collect();
    let metrics: Vec<MetricDef> = metric_rows.iter().map(metric_def).collect();
    let actuals: HashMap<(Uuid, Uuid, i32), Decimal> = data_rows
        .into_iter()
        .map(|row| ((row.business_unit_id, row.metric_id, row.year), row.value))
        .collect();
    let budgets: HashMap<(Uuid, Uuid), Decimal> = budget_rows
        .into_iter()
        .map(|row| ((row.business_unit_id, row.metric_id), row.value))
        .collect();

    let response = ComparisonResponse {
        comparison: reporting::build_comparison(&units, &metrics, &years, &actuals, &budgets),
        years,
    };

    (StatusCode::OK, Json(response)).into_response()
}
