//! Shared fixtures for cargrader-lu integration tests
//!
//! Builds a throwaway SQLite database shaped like the upstream `AllCars`
//! table, including the untidy year text the service has to tolerate.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cargrader_lu::{build_router, AppState, ReadOnlySource};
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// (ModelYear, Make, Model, Score, Certainty)
pub type FixtureRow = (
    Option<&'static str>,
    &'static str,
    &'static str,
    Option<f64>,
    Option<f64>,
);

pub const FIXTURE_ROWS: &[FixtureRow] = &[
    (Some(" 2018 "), "Honda", "Civic", Some(7.83), Some(4.26)),
    (Some("2018"), "Honda", "Accord", Some(6.14), Some(3.95)),
    (Some("2018"), "Honda", "Civic Si", Some(8.88), Some(4.44)),
    (Some("2018"), "Toyota", "Camry", Some(8.05), Some(4.71)),
    // Not gradeable: missing score
    (Some("2018"), "Acura", "ILX", None, Some(3.2)),
    (Some("2020"), "Ford", "Focus", Some(6.66), Some(3.33)),
    // Not gradeable: missing certainty
    (Some("2020"), "Ford", "Fiesta", Some(5.55), None),
    // Make matching is exact, so this is a different make from "Ford"
    (Some("2020"), "ford", "Ranger", Some(6.0), Some(3.5)),
    // Only row for 2019 is not gradeable
    (Some("2019"), "Mazda", "MX-5", Some(9.0), None),
    (Some("\t2017\n"), "Subaru", "Outback", Some(7.21), Some(4.04)),
    // Stored make and model carry whitespace; matching must use them verbatim
    (Some("2021"), " Honda", "Civic ", Some(7.46), Some(4.12)),
    // Malformed years
    (Some("unknown"), "Honda", "Civic", Some(7.0), Some(4.0)),
    (Some(""), "Kia", "Rio", Some(5.0), Some(5.0)),
    (Some("   "), "Kia", "Forte", Some(5.0), Some(5.0)),
    (None, "Kia", "Soul", Some(5.0), Some(5.0)),
    (Some("2016.5"), "Volkswagen", "Golf", Some(6.0), Some(3.0)),
];

/// Years the fixture should expose, newest first
pub const EXPECTED_YEARS: &[i64] = &[2021, 2020, 2018, 2017];

/// Temporary database kept alive for the duration of a test
pub struct TestDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    pub fn source(&self) -> ReadOnlySource {
        ReadOnlySource::new(&self.path)
    }

    pub fn app(&self) -> Router {
        build_router(AppState::new(self.source()))
    }
}

/// Database with the `AllCars` table populated from `FIXTURE_ROWS`
pub async fn create_test_db() -> TestDb {
    create_db_with(true).await
}

/// Database that exists but has no `AllCars` table
pub async fn create_db_without_vehicles() -> TestDb {
    create_db_with(false).await
}

async fn create_db_with(with_vehicles: bool) -> TestDb {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("GraderRater.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Should create fixture database");

    sqlx::query("CREATE TABLE Dealers (Name TEXT)")
        .execute(&mut conn)
        .await
        .expect("Should create Dealers table");

    if with_vehicles {
        sqlx::query(
            "CREATE TABLE AllCars (
                ModelYear TEXT,
                Make TEXT,
                Model TEXT,
                Score REAL,
                Certainty REAL
            )",
        )
        .execute(&mut conn)
        .await
        .expect("Should create AllCars table");

        for (year, make, model, score, certainty) in FIXTURE_ROWS {
            sqlx::query(
                "INSERT INTO AllCars (ModelYear, Make, Model, Score, Certainty)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(*year)
            .bind(*make)
            .bind(*model)
            .bind(*score)
            .bind(*certainty)
            .execute(&mut conn)
            .await
            .expect("Should insert fixture row");
        }
    }

    conn.close().await.expect("Should close fixture connection");

    TestDb { _dir: dir, path }
}

/// Database whose `AllCars` columns have no declared type, holding numbers
/// where text is usual
pub async fn create_untyped_db() -> TestDb {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("GraderRater.db");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Should create fixture database");

    sqlx::query("CREATE TABLE AllCars (ModelYear, Make, Model, Score, Certainty)")
        .execute(&mut conn)
        .await
        .expect("Should create untyped AllCars table");

    sqlx::query(
        "INSERT INTO AllCars (ModelYear, Make, Model, Score, Certainty) VALUES
            (2019, 'Fiat', 500, 6.42, 3.87),
            (2019, 'Fiat', 'Panda', 5.11, 3.02),
            (2019, 1, 'Series', 4.0, 2.0)",
    )
    .execute(&mut conn)
    .await
    .expect("Should insert untyped rows");

    conn.close().await.expect("Should close fixture connection");

    TestDb { _dir: dir, path }
}

/// Router whose database file does not exist
pub fn app_with_missing_db() -> (TempDir, Router) {
    let dir = TempDir::new().expect("Should create temp dir");
    let source = ReadOnlySource::new(dir.path().join("missing.db"));
    (dir, build_router(AppState::new(source)))
}

/// Parsed year of a fixture row, if the row counts for year-scoped queries
pub fn fixture_year(row: &FixtureRow) -> Option<i64> {
    let text = row.0?.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

pub fn is_gradeable(row: &FixtureRow) -> bool {
    row.3.is_some() && row.4.is_some()
}

/// GET `uri` and return status plus parsed JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };

    (status, body)
}
