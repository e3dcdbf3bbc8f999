//! Data-source access layer for cargrader-lu
//!
//! Every connection is read-only and lives for exactly one request.

use futures::future::BoxFuture;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod tables;
pub mod vehicles;

pub use tables::data_source_report;

/// Handle factory for the read-only vehicle database
///
/// Holds only connection options. No connection outlives a single `run`.
#[derive(Debug, Clone)]
pub struct ReadOnlySource {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl ReadOnlySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        // read_only: SQLITE_OPEN_READONLY, never creates the file
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);

        Self { path, options }
    }

    /// Configured database location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-only connection
    pub async fn open(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// Run `f` against a connection opened for this call only
    ///
    /// The connection is closed before returning, whether `f` succeeded or not.
    pub async fn run<T, F>(&self, f: F) -> Result<T, sqlx::Error>
    where
        F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, sqlx::Error>>,
    {
        let mut conn = self.open().await?;
        let result = f(&mut conn).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close connection to {}: {}", self.path.display(), e);
        }

        result
    }
}
