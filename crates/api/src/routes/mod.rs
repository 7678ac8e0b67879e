//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use finboard_core::reporting::MetricDef;

pub mod comparison;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod units;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(comparison::routes())
        .merge(units::routes())
        .merge(metrics::routes())
}

/// Generic 500 response with the documented body.
pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}

/// Maps a metric row to its core definition.
pub(crate) fn metric_def(row: &finboard_db::entities::metrics::Model) -> MetricDef {
    MetricDef {
        id: row.id,
        name: row.name.clone(),
        slug: row.slug.clone(),
        category: row.category.as_str().into(),
        is_percentage: row.is_percentage,
        display_order: row.display_order,
    }
}
