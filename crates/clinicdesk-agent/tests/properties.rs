// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the dialogue state machine.
//!
//! Random utterance sequences drawn from a vocabulary that exercises every
//! transition are driven through an engine over an in-memory store.

use std::sync::Arc;

use clinicdesk_agent::{CommitOutcome, ConversationEngine, DialogueStage, NoKnowledgeBase, Session};
use clinicdesk_config::model::ClinicConfig;
use clinicdesk_core::{BookingStore, Notifier};
use clinicdesk_storage::{Database, SqliteBookingStore};
use clinicdesk_test_utils::MockNotifier;
use proptest::prelude::*;

fn utterance() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("book".to_string()),
        Just("hello".to_string()),
        Just("thanks".to_string()),
        Just("what time do you open".to_string()),
        Just("Jane Doe".to_string()),
        Just("jane@mail.com".to_string()),
        Just("jane@@mail".to_string()),
        Just("2025-03-10".to_string()),
        Just("2025-13-10".to_string()),
        Just("10:30 AM".to_string()),
        Just("22:30".to_string()),
        Just("yes".to_string()),
        Just("no".to_string()),
        "\\PC{0,12}",
    ]
}

fn stage_rank(stage: DialogueStage) -> u8 {
    match stage {
        DialogueStage::Idle => 0,
        DialogueStage::CollectingName => 1,
        DialogueStage::CollectingEmail => 2,
        DialogueStage::CollectingDate => 3,
        DialogueStage::CollectingTime => 4,
        DialogueStage::AwaitingConfirmation => 5,
    }
}

/// Check that the draft carries exactly the fields of the states already passed.
fn draft_matches_stage(session: &Session) -> bool {
    let draft = session.draft();
    let rank = stage_rank(session.stage());
    draft.name.is_some() == (rank >= 2)
        && draft.email.is_some() == (rank >= 3)
        && draft.date.is_some() == (rank >= 4)
        && draft.time.is_some() == (rank >= 5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dialogue_invariants_hold(utterances in prop::collection::vec(utterance(), 1..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let store = Arc::new(SqliteBookingStore::from_database(
                Database::open_in_memory().await.unwrap(),
            ));
            let notifier = Arc::new(MockNotifier::new());
            let engine = ConversationEngine::new(
                Arc::clone(&store) as Arc<dyn BookingStore>,
                Arc::clone(&notifier) as Arc<dyn Notifier>,
                Arc::new(NoKnowledgeBase),
                &ClinicConfig::default(),
            );

            let mut session = Session::new();
            let mut committed = Vec::new();
            for text in &utterances {
                let before = session.clone();
                let result = engine.handle(session, text).await;
                session = result.session;

                prop_assert!(draft_matches_stage(&session));
                prop_assert_eq!(session.history.len(), before.history.len() + 2);

                let from = stage_rank(before.stage());
                let to = stage_rank(session.stage());
                match before.stage() {
                    DialogueStage::Idle => prop_assert!(to <= 1),
                    DialogueStage::AwaitingConfirmation => {
                        prop_assert_eq!(to, 0);
                        prop_assert!(session.draft().is_empty());
                    }
                    _ => {
                        // Either advance one step or stay put with the draft untouched.
                        prop_assert!(to == from || to == from + 1);
                        if to == from {
                            prop_assert_eq!(&session.state, &before.state);
                        }
                    }
                }

                if let Some(outcome) = result.outcome {
                    prop_assert_eq!(before.stage(), DialogueStage::AwaitingConfirmation);
                    match outcome {
                        CommitOutcome::Confirmed { booking, .. } => committed.push(booking.id),
                        CommitOutcome::NotCreated => prop_assert!(false, "store is healthy"),
                    }
                }
            }

            let stored = store.list_bookings().await.unwrap();
            prop_assert_eq!(stored.len(), committed.len());
            prop_assert!(committed.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(notifier.confirmations(), committed);
            Ok(())
        })?;
    }
}
