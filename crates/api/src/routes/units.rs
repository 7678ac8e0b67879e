//! Business unit listing route.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::routes::internal_error;
use crate::AppState;
use finboard_db::BusinessUnitRepository;

/// Creates the unit listing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/units", get(list_units))
}

/// Response for the unit listing.
#[derive(Debug, Serialize)]
pub struct UnitsResponse {
    /// Units in display order.
    pub units: Vec<UnitItem>,
}

/// One business unit.
#[derive(Debug, Serialize)]
pub struct UnitItem {
    /// Unit ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique slug.
    pub slug: String,
    /// Ascending display position.
    pub display_order: i32,
}

/// GET /api/units
#[axum::debug_handler]
async fn list_units(State(state): State<AppState>) -> impl IntoResponse {
    let unit_repo = BusinessUnitRepository::new((*state.db).clone());

    let rows = match unit_repo.find_all_ordered().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, "Failed to list business units");
            return internal_error();
        }
    };

    let response = UnitsResponse {
        units: rows
            .into_iter()
            .map(|row| UnitItem {
                id: row.id,
                name: row.name,
                slug: row.slug,
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
    use finboard_db::entities::business_units;
    use finboard_shared::ReportingConfig;

    #[tokio::test]
    async fn test_lists_units() {
        let now = chrono::Utc::now().into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![business_units::Model {
                id: Uuid::new_v4(),
                name: "Group".to_string(),
                slug: "group".to_string(),
                display_order: 1,
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
            .oneshot(Request::get("/api/units").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["units"][0]["slug"], "group");
        assert_eq!(json["units"][0]["display_order"], 1);
    }
}
