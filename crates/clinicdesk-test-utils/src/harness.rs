// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end conversation tests.
//!
//! `TestHarness` assembles a [`ConversationEngine`] over a temp SQLite
//! database and a [`MockNotifier`], and keeps one [`Session`] that
//! [`TestHarness::say`] threads through the engine turn by turn.

use std::sync::Arc;

use clinicdesk_agent::{ConversationEngine, NoKnowledgeBase, Session, TurnResult};
use clinicdesk_config::model::{ClinicConfig, StorageConfig};
use clinicdesk_core::{BookingStore, ClinicError, KnowledgeBase, Notifier};
use clinicdesk_storage::SqliteBookingStore;

use crate::failing_store::FailingStore;
use crate::mock_notifier::MockNotifier;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    failing_notifier: bool,
    failing_store: bool,
    knowledge: Option<Arc<dyn KnowledgeBase>>,
    clinic: ClinicConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            failing_notifier: false,
            failing_store: false,
            knowledge: None,
            clinic: ClinicConfig::default(),
        }
    }

    /// Make every confirmation email fail.
    pub fn with_failing_notifier(mut self) -> Self {
        self.failing_notifier = true;
        self
    }

    /// Replace the SQLite store with one whose every call fails.
    pub fn with_failing_store(mut self) -> Self {
        self.failing_store = true;
        self
    }

    pub fn with_knowledge(mut self, knowledge: Arc<dyn KnowledgeBase>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    pub fn with_clinic(mut self, clinic: ClinicConfig) -> Self {
        self.clinic = clinic;
        self
    }

    /// Build the harness. The temp database lives as long as the harness.
    pub async fn build(self) -> Result<TestHarness, ClinicError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| ClinicError::Storage { source: e.into() })?;

        let store: Arc<dyn BookingStore> = if self.failing_store {
            Arc::new(FailingStore::new())
        } else {
            let db_path = temp_dir.path().join("test.db");
            let store = SqliteBookingStore::new(StorageConfig {
                database_path: db_path.to_string_lossy().into_owned(),
                wal_mode: true,
            });
            store.initialize().await?;
            Arc::new(store)
        };

        let notifier = Arc::new(if self.failing_notifier {
            MockNotifier::failing()
        } else {
            MockNotifier::new()
        });
        let knowledge = self
            .knowledge
            .unwrap_or_else(|| Arc::new(NoKnowledgeBase) as Arc<dyn KnowledgeBase>);

        let engine = ConversationEngine::new(
            Arc::clone(&store),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            knowledge,
            &self.clinic,
        );

        Ok(TestHarness {
            engine,
            store,
            notifier,
            session: Session::new(),
            _temp_dir: temp_dir,
        })
    }
}

/// A conversation engine wired to a temp store and a mock notifier.
pub struct TestHarness {
    pub engine: ConversationEngine,
    pub store: Arc<dyn BookingStore>,
    pub notifier: Arc<MockNotifier>,
    /// The session carried between [`TestHarness::say`] calls.
    pub session: Session,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Default harness: working store, succeeding notifier, no knowledge.
    pub async fn new() -> Result<Self, ClinicError> {
        Self::builder().build().await
    }

    /// Send one utterance through the engine and keep the updated session.
    pub async fn say(&mut self, utterance: &str) -> TurnResult {
        let session = std::mem::take(&mut self.session);
        let result = self.engine.handle(session, utterance).await;
        self.session = result.session.clone();
        result
    }

    /// Send several utterances and return the result of each.
    pub async fn script(&mut self, utterances: &[&str]) -> Vec<TurnResult> {
        let mut results = Vec::with_capacity(utterances.len());
        for utterance in utterances {
            results.push(self.say(utterance).await);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinicdesk_agent::DialogueStage;

    #[tokio::test]
    async fn harness_threads_session_between_turns() {
        let mut harness = TestHarness::new().await.unwrap();
        harness.say("book").await;
        assert_eq!(harness.session.stage(), DialogueStage::CollectingName);
        harness.say("Jane").await;
        assert_eq!(harness.session.stage(), DialogueStage::CollectingEmail);
        assert_eq!(harness.session.history.len(), 4);
    }

    #[tokio::test]
    async fn failing_store_harness_uses_failing_store() {
        let harness = TestHarness::builder()
            .with_failing_store()
            .build()
            .await
            .unwrap();
        assert!(harness.store.list_bookings().await.is_err());
    }
}
