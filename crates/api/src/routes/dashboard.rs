//! Group KPI summary route.

use std::collections::HashMap;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::routes::{internal_error, metric_def};
use crate::AppState;
use finboard_core::reporting::{self, KpiEntry, MetricDef};
use finboard_db::{
    BudgetRepository, BusinessUnitRepository, FinancialDataRepository, MetricRepository,
};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// Response for the group KPI summary.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Reporting year.
    pub year: i32,
    /// Business unit shown.
    pub business_unit: String,
    /// KPI entries in display order.
    pub kpis: Vec<KpiEntry>,
}

/// GET /api/dashboard
///
/// Current year vs prior year for the configured group unit; missing
/// lookups default to zero so every card carries numbers.
#[axum::debug_handler]
async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let unit_repo = BusinessUnitRepository::new((*state.db).clone());
    let metric_repo = MetricRepository::new((*state.db).clone());
    let data_repo = FinancialDataRepository::new((*state.db).clone());
    let budget_repo = BudgetRepository::new((*state.db).clone());

    let group = match unit_repo.find_by_slug(&state.reporting.group_slug).await {
        Ok(Some(unit)) => unit,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Group unit not found"})),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to look up group unit");
            return internal_error();
        }
    };

    let current_year = state.reporting.current_year;
    let prior_year = state.reporting.prior_year();

    // Independent reads, awaited concurrently.
    let fetched = tokio::try_join!(
        metric_repo.find_all_ordered(),
        data_repo.find_full_year(group.id, current_year),
        data_repo.find_full_year(group.id, prior_year),
        budget_repo.find_for_unit_year(group.id, current_year),
    );
    let (metric_rows, current_rows, prior_rows, budget_rows) = match fetched {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to query dashboard data");
            return internal_error();
        }
    };

    let metrics: Vec<MetricDef> = metric_rows.iter().map(metric_def).collect();
    let current: HashMap<Uuid, Decimal> = current_rows
        .into_iter()
        .map(|row| (row.metric_id, row.value))
        .collect();
    let prior: HashMap<Uuid, Decimal> = prior_rows
        .into_iter()
        .map(|row| (row.metric_id, row.value))
        .collect();
    let budget: HashMap<Uuid, Decimal> = budget_rows
        .into_iter()
        .map(|row| (row.metric_id, row.value))
        .collect();

    let response = DashboardResponse {
        year: current_year,
        business_unit: group.name,
        kpis: reporting::build_group_kpis(&metrics, &current, &prior, &budget),
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use tower::ServiceExt;

    use crate::{AppState, create_router};
    use finboard_db::entities::business_units;
    use finboard_shared::ReportingConfig;

    #[tokio::test]
    async fn test_missing_group_unit_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<business_units::Model>::new()])
            .into_connection();
        let state = AppState {
            db: Arc::new(db),
            reporting: Arc::new(ReportingConfig::default()),
        };
        let app = create_router(state);

        let response = app
            .oneshot(Request::get("/api/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Group unit not found"}));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let state = AppState {
            db: Arc::new(db),
            reporting: Arc::new(ReportingConfig::default()),
        };
        let app = create_router(state);

        let response = app
            .oneshot(Request::get("/api/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Internal server error"}));
    }
}
