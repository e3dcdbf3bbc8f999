//! Cascading filter queries over the vehicle table
//!
//! Only gradeable rows (Score and Certainty both present) are visible. Year
//! text is stored untyped upstream, so every query goes through the `graded`
//! CTE, which trims it and keeps only all-digit values before casting. Make
//! and Model are cast to text there as well, since the upstream columns may be
//! untyped and hold numbers.

use cargrader_common::Grade;
use sqlx::sqlite::SqliteConnection;

// Trims space, tab, LF and CR; plain TRIM() only strips spaces.
macro_rules! year_text {
    () => {
        "TRIM(ModelYear, ' ' || char(9, 10, 13))"
    };
}

macro_rules! graded_cte {
    () => {
        concat!(
            "WITH graded AS (
                SELECT CAST(", year_text!(), " AS INTEGER) AS Y,
                       CAST(Make AS TEXT) AS Make,
                       CAST(Model AS TEXT) AS Model,
                       Score, Certainty
                FROM AllCars
                WHERE Score IS NOT NULL AND Certainty IS NOT NULL
                  AND ModelYear IS NOT NULL
                  AND ", year_text!(), " <> ''
                  AND ", year_text!(), " NOT GLOB '*[^0-9]*'
            ) "
        )
    };
}

/// Distinct years of gradeable rows, newest first
pub async fn list_years(conn: &mut SqliteConnection) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar(concat!(
        graded_cte!(),
        "SELECT DISTINCT Y FROM graded ORDER BY Y DESC"
    ))
    .fetch_all(conn)
    .await
}

/// Distinct makes for `year`, ascending
pub async fn list_makes(conn: &mut SqliteConnection, year: i64) -> Result<Vec<String>, sqlx::Error> {
    let makes: Vec<Option<String>> = sqlx::query_scalar(concat!(
        graded_cte!(),
        "SELECT DISTINCT Make FROM graded WHERE Y = ? ORDER BY Make"
    ))
    .bind(year)
    .fetch_all(conn)
    .await?;

    Ok(makes.into_iter().flatten().collect())
}

/// Distinct models for `year` and exact `make`, ascending
pub async fn list_models(
    conn: &mut SqliteConnection,
    year: i64,
    make: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let models: Vec<Option<String>> = sqlx::query_scalar(concat!(
        graded_cte!(),
        "SELECT DISTINCT Model FROM graded WHERE Y = ? AND Make = ? ORDER BY Model"
    ))
    .bind(year)
    .bind(make)
    .fetch_all(conn)
    .await?;

    Ok(models.into_iter().flatten().collect())
}

/// Score and certainty for an exact year/make/model, rounded to one decimal
///
/// Duplicate combinations are not ordered; whichever row SQLite yields first
/// is returned.
pub async fn find_grade(
    conn: &mut SqliteConnection,
    year: i64,
    make: &str,
    model: &str,
) -> Result<Option<Grade>, sqlx::Error> {
    let row: Option<(f64, f64)> = sqlx::query_as(concat!(
        graded_cte!(),
        "SELECT ROUND(Score, 1), ROUND(Certainty, 1)
         FROM graded
         WHERE Y = ? AND Make = ? AND Model = ?
         LIMIT 1"
    ))
    .bind(year)
    .bind(make)
    .bind(model)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|(score, certainty)| Grade {
        year,
        make: make.to_string(),
        model: model.to_string(),
        score,
        certainty,
    }))
}
