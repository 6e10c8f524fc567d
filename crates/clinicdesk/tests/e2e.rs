// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests: a conversation books through the engine, then the
//! staff commands of the real binary operate on the same database.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use clinicdesk_agent::{CommitOutcome, ConversationEngine, NoKnowledgeBase, Session};
use clinicdesk_config::model::{ClinicConfig, StorageConfig};
use clinicdesk_core::{BookingId, BookingStore};
use clinicdesk_storage::SqliteBookingStore;
use clinicdesk_test_utils::MockNotifier;
use std::sync::Arc;

fn write_config(dir: &Path) -> (PathBuf, String) {
    let db_path = dir.join("bookings.db").to_string_lossy().into_owned();
    let config_path = dir.join("clinicdesk.toml");
    std::fs::write(
        &config_path,
        format!("[storage]\ndatabase_path = \"{db_path}\"\n\n[agent]\nlog_level = \"warn\"\n"),
    )
    .unwrap();
    (config_path, db_path)
}

fn clinicdesk(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clinicdesk"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Book one appointment through the conversation engine against `db_path`.
async fn book_through_chat(db_path: &str) -> BookingId {
    let store = Arc::new(SqliteBookingStore::new(StorageConfig {
        database_path: db_path.to_string(),
        wal_mode: true,
    }));
    store.initialize().await.unwrap();

    let engine = ConversationEngine::new(
        Arc::clone(&store) as Arc<dyn BookingStore>,
        Arc::new(MockNotifier::new()),
        Arc::new(NoKnowledgeBase),
        &ClinicConfig::default(),
    );

    let mut session = Session::new();
    let mut booked = None;
    for text in ["book", "Jane Doe", "jane@mail.com", "2025-03-10", "10:30 AM", "yes"] {
        let result = engine.handle(session, text).await;
        session = result.session;
        if let Some(CommitOutcome::Confirmed { booking, .. }) = result.outcome {
            booked = Some(booking.id);
        }
    }
    store.close().await.unwrap();
    booked.expect("conversation committed a booking")
}

#[tokio::test]
async fn staff_commands_operate_on_chat_bookings() {
    let dir = tempfile::tempdir().unwrap();
    let (config, db_path) = write_config(dir.path());

    let empty = clinicdesk(&config, &["bookings", "list"]);
    assert!(empty.status.success());
    assert!(stdout(&empty).contains("No bookings found."));

    let id = book_through_chat(&db_path).await;

    let listed = clinicdesk(&config, &["bookings", "list", "--json"]);
    assert!(listed.status.success());
    let value: serde_json::Value = serde_json::from_slice(&listed.stdout).unwrap();
    assert_eq!(value[0]["id"], id.0);
    assert_eq!(value[0]["status"], "Confirmed");

    let changed = clinicdesk(
        &config,
        &["bookings", "status", &id.to_string(), "completed", "--actor", "Receptionist"],
    );
    assert!(changed.status.success());
    assert!(stdout(&changed).contains("status changed to Completed"));

    let deleted = clinicdesk(&config, &["bookings", "delete", &id.to_string()]);
    assert!(deleted.status.success());

    let audit = clinicdesk(&config, &["audit", "--json"]);
    assert!(audit.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&audit.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["action"], "Booking deleted");
    assert_eq!(entries[0]["performed_by"], "Admin");
    assert_eq!(entries[1]["action"], "Status changed to Completed");
    assert_eq!(entries[1]["performed_by"], "Receptionist");
}

#[test]
fn unknown_booking_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = write_config(dir.path());

    let output = clinicdesk(&config, &["bookings", "delete", "999"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("booking #999 not found"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("clinicdesk.toml");
    std::fs::write(&config, "[smtp]\nhots = \"mail.test\"\n").unwrap();

    let output = clinicdesk(&config, &["bookings", "list"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown configuration key"));
    assert!(stderr.contains("host"));
}
