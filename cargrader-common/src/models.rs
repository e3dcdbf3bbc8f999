//! Response models for the lookup API

use serde::{Deserialize, Serialize};

/// Table holding the pre-computed vehicle valuations
pub const VEHICLE_TABLE: &str = "AllCars";

/// Grade for one year/make/model combination
///
/// Score and certainty are rounded to one decimal place by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub year: i64,
    pub make: String,
    pub model: String,
    pub score: f64,
    pub certainty: f64,
}

/// Data-source diagnostics returned by `/api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceReport {
    /// Configured database location
    pub db_path: String,
    /// All table names in the database
    pub tables: Vec<String>,
    /// Whether the vehicle table is present
    pub allcars_exists: bool,
    /// Total rows in the vehicle table (0 if absent)
    pub allcars_count: i64,
    /// Rows carrying both Score and Certainty (0 if absent)
    pub with_score_certainty: i64,
}
