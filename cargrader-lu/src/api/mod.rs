//! HTTP API handlers for cargrader-lu

pub mod buildinfo;
pub mod health;
pub mod lookup;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use lookup::{get_grade, list_makes, list_models, list_years};
pub use ui::{favicon, serve_index};
