//! Metric listing route.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::routes::internal_error;
use crate::AppState;
use finboard_core::reporting::MetricCategory;
use finboard_db::MetricRepository;

/// Creates the metric listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(list_metrics))
}

/// Response for the metric listing.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Metrics in display order.
    pub metrics: Vec<MetricItem>,
}

/// One metric definition.
#[derive(Debug, Serialize)]
pub struct MetricItem {
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

/// GET /api/metrics
#[axum::debug_handler]
async fn list_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let metric_repo = MetricRepository::new((*state.db).clone());

    let rows = match metric_repo.find_all_ordered().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to list metrics");
            return internal_error();
        }
    };

    let response = MetricsResponse {
        metrics: rows
            .into_iter()
            .map(|row| MetricItem {
                id: row.id,
                name: row.name,
                category: row.category.as_str().into(),
                slug: row.slug,
                is_percentage: row.is_percentage,
                display_order: row.display_order,
            })
            .collect(),
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
    use uuid::Uuid;

    use crate::{AppState, create_router};
    use finboard_db::entities::metrics;
    use finboard_shared::ReportingConfig;

    #[tokio::test]
    async fn test_lists_metrics_with_category() {
        let now = chrono::Utc::now().into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![metrics::Model {
                id: Uuid::new_v4(),
                name: "EBITDA Margin".to_string(),
                slug: "ebitda-margin".to_string(),
                category: "profit".to_string(),
                is_percentage: true,
                display_order: 4,
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();
        let state = AppState {
            db: Arc::new(db),
            reporting: Arc::new(ReportingConfig::default()),
        };
        let app = create_router(state);

        let response = app
            .oneshot(Request::get("/api/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["metrics"][0]["slug"], "ebitda-margin");
        assert_eq!(json["metrics"][0]["category"], "profit");
        assert_eq!(json["metrics"][0]["is_percentage"], true);
    }
}
