//! Configuration loading and data-source location resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the database file
pub const DB_PATH_ENV: &str = "DB_PATH";

/// File name of the compiled-default database
pub const DEFAULT_DB_FILE: &str = "GraderRater.db";

/// Contents of `config.toml`
///
/// Every key is optional; a missing file or key falls through to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Location of the vehicle database
    pub db_path: Option<PathBuf>,
}

impl TomlConfig {
    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Database path resolution, highest priority first:
/// 1. Command-line argument
/// 2. Environment variable
/// 3. TOML config file (`db_path` key)
/// 4. OS-dependent compiled default
///
/// A config file that exists but cannot be parsed is logged and skipped.
pub fn resolve_db_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config_file: Option<&Path>,
) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file {
        match TomlConfig::load(config_path) {
            Ok(TomlConfig {
                db_path: Some(db_path),
            }) => return db_path,
            Ok(_) => {}
            Err(e) => warn!("Ignoring config file {}: {}", config_path.display(), e),
        }
    }

    // Priority 4: OS-dependent compiled default
    default_db_path()
}

/// Locate the platform config file, if one exists
pub fn find_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("cargrader").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/cargrader/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// Get OS-dependent default database path
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("cargrader"))
        .unwrap_or_else(|| PathBuf::from("./cargrader_data"))
        .join(DEFAULT_DB_FILE)
}
