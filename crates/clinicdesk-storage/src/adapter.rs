// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the BookingStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use clinicdesk_config::model::StorageConfig;
use clinicdesk_core::{
    AdapterType, AuditEntry, Booking, BookingId, BookingStatus, BookingStore, ClinicError,
    HealthStatus, NewBooking, PluginAdapter,
};

use crate::database::{map_tr_err, Database};
use crate::queries;

/// SQLite-backed booking store.
///
/// The database is opened lazily by [`BookingStore::initialize`]; every
/// other call fails with a storage error until then.
pub struct SqliteBookingStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteBookingStore {
    /// Create a store for the configured database file. Nothing is opened yet.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Wrap an already-open database. Used with in-memory databases in tests.
    pub fn from_database(db: Database) -> Self {
        Self {
            config: StorageConfig {
                database_path: ":memory:".to_string(),
                wal_mode: false,
            },
            db: OnceCell::new_with(Some(db)),
        }
    }

    fn db(&self) -> Result<&Database, ClinicError> {
        self.db.get().ok_or_else(|| ClinicError::Storage {
            source: "booking store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteBookingStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ClinicError> {
        let Ok(db) = self.db() else {
            return Ok(HealthStatus::Unhealthy("not initialized".into()));
        };
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl BookingStore for SqliteBookingStore {
    async fn initialize(&self) -> Result<(), ClinicError> {
        let path = self.config.database_path.clone();
        let db = Database::open_with(&path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| ClinicError::Storage {
            source: "booking store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite booking store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), ClinicError> {
        if self.config.wal_mode {
            self.db()?.checkpoint().await?;
            debug!("WAL checkpoint complete");
        }
        Ok(())
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ClinicError> {
        let stored = queries::bookings::insert_booking(self.db()?, booking).await?;
        info!(booking_id = %stored.id, "booking created");
        Ok(stored)
    }

    async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, ClinicError> {
        queries::bookings::get_booking(self.db()?, id).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ClinicError> {
        queries::bookings::list_bookings(self.db()?).await
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
        actor: &str,
    ) -> Result<(), ClinicError> {
        queries::bookings::update_status(self.db()?, id, status, actor).await?;
        info!(booking_id = %id, %status, actor, "booking status changed");
        Ok(())
    }

    async fn delete_booking(&self, id: BookingId, actor: &str) -> Result<(), ClinicError> {
        queries::bookings::delete_booking(self.db()?, id, actor).await?;
        info!(booking_id = %id, actor, "booking deleted");
        Ok(())
    }

    async fn list_audit_log(&self) -> Result<Vec<AuditEntry>, ClinicError> {
        queries::audit::list_audit_log(self.db()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn new_booking(name: &str) -> NewBooking {
        NewBooking {
            patient_name: name.to_string(),
            patient_email: "patient@mail.com".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            booking_type: "Dental Consultation".to_string(),
        }
    }

    async fn file_store() -> (tempfile::TempDir, SqliteBookingStore) {
        let dir = tempdir().unwrap();
        let store = SqliteBookingStore::new(StorageConfig {
            database_path: dir.path().join("bookings.db").to_string_lossy().into_owned(),
            wal_mode: true,
        });
        store.initialize().await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn calls_before_initialize_fail() {
        let store = SqliteBookingStore::new(StorageConfig::default());
        assert!(store.list_bookings().await.is_err());
        assert_eq!(
            store.health_check().await.unwrap(),
            HealthStatus::Unhealthy("not initialized".into())
        );
    }

    #[tokio::test]
    async fn double_initialize_fails() {
        let (_dir, store) = file_store().await;
        assert!(store.initialize().await.is_err());
    }

    #[tokio::test]
    async fn health_check_after_initialize() {
        let (_dir, store) = file_store().await;
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
        assert_eq!(store.name(), "sqlite");
        assert_eq!(store.adapter_type(), AdapterType::Storage);
    }

    #[tokio::test]
    async fn bookings_survive_reopen() {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("bookings.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };

        let store = SqliteBookingStore::new(config.clone());
        store.initialize().await.unwrap();
        let created = store.create_booking(&new_booking("Jane")).await.unwrap();
        store
            .update_status(created.id, BookingStatus::Cancelled, "Admin")
            .await
            .unwrap();
        store.close().await.unwrap();
        drop(store);

        let reopened = SqliteBookingStore::new(config);
        reopened.initialize().await.unwrap();
        let fetched = reopened.get_booking(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, BookingStatus::Cancelled);
        assert_eq!(reopened.list_audit_log().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(SqliteBookingStore::from_database(
            Database::open_in_memory().await.unwrap(),
        ));

        let tasks = (0..10).map(|i| {
            let store = Arc::clone(&store);
            async move { store.create_booking(&new_booking(&format!("P{i}"))).await }
        });
        let results = futures::future::join_all(tasks).await;

        let mut ids: Vec<BookingId> = results.into_iter().map(|r| r.unwrap().id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(store.list_bookings().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn staff_mutations_are_audited_through_the_trait() {
        let store: Arc<dyn BookingStore> = Arc::new(SqliteBookingStore::from_database(
            Database::open_in_memory().await.unwrap(),
        ));
        let a = store.create_booking(&new_booking("A")).await.unwrap();
        let b = store.create_booking(&new_booking("B")).await.unwrap();

        store
            .update_status(a.id, BookingStatus::Completed, "Admin")
            .await
            .unwrap();
        store.delete_booking(b.id, "Admin").await.unwrap();
        assert!(
            store
                .delete_booking(BookingId(999), "Admin")
                .await
                .unwrap_err()
                .is_not_found()
        );

        let log = store.list_audit_log().await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].booking_id, b.id);
        assert_eq!(log[1].booking_id, a.id);
    }
}
