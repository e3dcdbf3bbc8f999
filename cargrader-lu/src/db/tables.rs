//! Table listing and row counts for diagnostics

use cargrader_common::{DataSourceReport, VEHICLE_TABLE};
use sqlx::sqlite::SqliteConnection;
use std::path::Path;

/// Describe the data source: tables present and vehicle row counts
///
/// Counts are zero when the vehicle table does not exist.
pub async fn data_source_report(
    conn: &mut SqliteConnection,
    db_path: &Path,
) -> Result<DataSourceReport, sqlx::Error> {
    let tables: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT name
        FROM sqlite_master
        WHERE type = 'table'
        ORDER BY name ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    let allcars_exists = tables.iter().any(|t| t == VEHICLE_TABLE);

    let (allcars_count, with_score_certainty) = if allcars_exists {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM AllCars")
            .fetch_one(&mut *conn)
            .await?;
        let graded: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM AllCars WHERE Score IS NOT NULL AND Certainty IS NOT NULL",
        )
        .fetch_one(&mut *conn)
        .await?;
        (total, graded)
    } else {
        (0, 0)
    };

    Ok(DataSourceReport {
        db_path: db_path.display().to_string(),
        tables,
        allcars_exists,
        allcars_count,
        with_score_certainty,
    })
}
