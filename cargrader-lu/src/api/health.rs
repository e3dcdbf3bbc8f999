//! Health check endpoints
//!
//! `/health` is a liveness probe that never touches the database.
//! `/api/health` opens the data source and reports what it finds.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::{db, AppState};

/// Liveness response: status, module name, and version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "cargrader-lu".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health
///
/// Tables present and vehicle row counts. On failure the cause is included
/// in the body; this endpoint is for operators, not the front-end.
pub async fn data_source_health(State(state): State<AppState>) -> Response {
    let db_path = state.source.path().to_path_buf();

    let result = state
        .source
        .run(move |conn| {
            Box::pin(async move { db::data_source_report(conn, &db_path).await })
        })
        .await;

    match result {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!("Error /api/health: {}", e);
            let body = Json(json!({
                "error": e.to_string(),
                "db_path": state.source.path().display().to_string(),
            }));
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(data_source_health))
}
