//! # CarGrader Common Library
//!
//! Shared code for the CarGrader services:
//! - Data-source location resolution (CLI / env / TOML / default)
//! - Common error type
//! - Response models shared by the lookup API and its clients

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{DataSourceReport, Grade, VEHICLE_TABLE};
