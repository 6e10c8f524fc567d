// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use clinicdesk_core::ClinicError;
use tracing::debug;

use crate::migrations;

/// Handle to the clinic database.
///
/// Wraps a single `tokio_rusqlite::Connection`; query modules accept
/// `&Database` and run their closures through [`Database::connection`].
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` in WAL mode and migrate it.
    pub async fn open(path: &str) -> Result<Self, ClinicError> {
        Self::open_with(path, true).await
    }

    /// Open the database, choosing the journal mode explicitly.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, ClinicError> {
        if let Some(parent) = std::path::Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| ClinicError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(map_open_err)?;
        let db = Self { conn };
        db.prepare(wal_mode).await?;
        debug!(path, wal_mode, "database opened");
        Ok(db)
    }

    /// Open a private in-memory database. Used by tests and dry runs.
    pub async fn open_in_memory() -> Result<Self, ClinicError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(map_open_err)?;
        let db = Self { conn };
        db.prepare(false).await?;
        Ok(db)
    }

    /// Returns the underlying async connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), ClinicError> {
        self.checkpoint().await?;
        self.conn.close().await.map_err(map_tr_err)
    }

    /// Truncate the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), ClinicError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    async fn prepare(&self, wal_mode: bool) -> Result<(), ClinicError> {
        let journal = if wal_mode { "WAL" } else { "DELETE" };
        self.conn
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch(&format!(
                    "PRAGMA journal_mode = {journal};
                     PRAGMA synchronous = NORMAL;
                     PRAGMA busy_timeout = 5000;"
                ))?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;

        self.conn
            .call(|conn| -> Result<(), refinery::Error> { migrations::run_migrations(conn) })
            .await
            .map_err(|e| ClinicError::Storage {
                source: format!("migration failed: {e}").into(),
            })
    }
}

/// Opening reports plain rusqlite errors, unlike `call`.
fn map_open_err(e: rusqlite::Error) -> ClinicError {
    ClinicError::Storage {
        source: Box::new(e),
    }
}

/// Convert a tokio-rusqlite error into `ClinicError::Storage`.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> ClinicError {
    ClinicError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_on_a_directory_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let result = Database::open(dir.path().to_str().unwrap()).await;
        assert!(matches!(result, Err(ClinicError::Storage { .. })));
    }

    #[tokio::test]
    async fn open_creates_file_and_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("clinic.db");
        let db = Database::open(path.to_str().unwrap()).await.unwrap();
        assert!(path.exists());

        let tables: Vec<String> = db
            .connection()
            .call(|conn| -> Result<Vec<String>, rusqlite::Error> {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();
        assert!(tables.contains(&"bookings".to_string()));
        assert!(tables.contains(&"audit_log".to_string()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopening_does_not_rerun_migrations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reopen.db");
        let path = path.to_str().unwrap();

        Database::open(path).await.unwrap().close().await.unwrap();
        let db = Database::open(path).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn in_memory_database_is_migrated() {
        let db = Database::open_in_memory().await.unwrap();
        let count: i64 = db
            .connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
