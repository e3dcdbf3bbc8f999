//! cargrader-lu library - vehicle grade lookup service
//!
//! Read-only JSON API over the pre-computed `AllCars` table, serving the
//! year → make → model → grade filter chain.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod params;

pub use db::ReadOnlySource;
pub use error::LookupError;

/// Application state shared across HTTP handlers
///
/// Holds no open connection; each request opens its own.
#[derive(Clone)]
pub struct AppState {
    pub source: ReadOnlySource,
}

impl AppState {
    pub fn new(source: ReadOnlySource) -> Self {
        Self { source }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let lookup = Router::new()
        .route("/api/years", get(api::list_years))
        .route("/api/makes", get(api::list_makes))
        .route("/api/models", get(api::list_models))
        .route("/api/grade", get(api::get_grade))
        .route("/api/buildinfo", get(api::get_build_info));

    let pages = Router::new()
        .route("/", get(api::serve_index))
        .route("/favicon.ico", get(api::favicon));

    Router::new()
        .merge(lookup)
        .merge(pages)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
