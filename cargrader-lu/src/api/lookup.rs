//! Cascading filter endpoints: years → makes → models → grade
//!
//! The list endpoints never fail from the caller's point of view: a
//! data-access error is logged and answered with an empty array (status 500).
//! `/api/grade` reports missing input, no match and internal failure as
//! distinct errors.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cargrader_common::Grade;
use serde::Serialize;
use tracing::{debug, error};

use crate::{db::vehicles, error::LookupError, params::LookupQuery, AppState};

/// GET /api/years
pub async fn list_years(State(state): State<AppState>) -> Response {
    let result = state
        .source
        .run(|conn| Box::pin(vehicles::list_years(conn)))
        .await;

    list_response("/api/years", result)
}

/// GET /api/makes?year=YYYY
pub async fn list_makes(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let params = into_params(query);
    let Some(year) = params.year() else {
        return empty_list::<String>();
    };

    let result = state
        .source
        .run(move |conn| Box::pin(vehicles::list_makes(conn, year)))
        .await;

    list_response("/api/makes", result)
}

/// GET /api/models?year=YYYY&make=MAKE
pub async fn list_models(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let params = into_params(query);
    let (Some(year), Some(make)) = (params.year(), params.make()) else {
        return empty_list::<String>();
    };
    let make = make.to_string();

    let result = state
        .source
        .run(move |conn| Box::pin(async move { vehicles::list_models(conn, year, &make).await }))
        .await;

    list_response("/api/models", result)
}

/// GET /api/grade?year=YYYY&make=MAKE&model=MODEL
pub async fn get_grade(
    State(state): State<AppState>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<Grade>, LookupError> {
    let params = into_params(query);
    let (Some(year), Some(make), Some(model)) = (params.year(), params.make(), params.model())
    else {
        return Err(LookupError::InvalidRequest);
    };
    let (make, model) = (make.to_string(), model.to_string());

    let grade = state
        .source
        .run(move |conn| {
            Box::pin(async move { vehicles::find_grade(conn, year, &make, &model).await })
        })
        .await
        .map_err(|e| {
            error!("Error /api/grade: {}", e);
            LookupError::from(e)
        })?;

    grade.map(Json).ok_or(LookupError::NotFound)
}

/// A query string that fails to decode counts as no parameters at all
fn into_params(query: Option<Query<Vec<(String, String)>>>) -> LookupQuery {
    query
        .map(|Query(pairs)| LookupQuery::from_pairs(pairs))
        .unwrap_or_default()
}

fn empty_list<T: Serialize>() -> Response {
    Json(Vec::<T>::new()).into_response()
}

fn list_response<T: Serialize>(endpoint: &str, result: Result<Vec<T>, sqlx::Error>) -> Response {
    match result {
        Ok(items) => {
            debug!("{} returned {} items", endpoint, items.len());
            Json(items).into_response()
        }
        Err(e) => {
            error!("Error {}: {}", endpoint, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::<T>::new())).into_response()
        }
    }
}
