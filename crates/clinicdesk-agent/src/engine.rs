// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The booking conversation engine.
//!
//! [`ConversationEngine::handle`] consumes one utterance and a [`Session`]
//! and returns exactly one reply plus the updated session. The only
//! transition with external effects is the confirmed commit, which creates
//! the booking first and only then attempts notifications.

use std::sync::Arc;

use clinicdesk_config::model::ClinicConfig;
use clinicdesk_core::{Booking, BookingStore, KnowledgeBase, NewBooking, Notifier};
use tracing::{debug, error, info, warn};

use crate::intent::{self, IdleIntent};
use crate::replies;
use crate::session::{BookingDraft, DialogueState, Role, Session};
use crate::validators;

/// Result of the confirmed-commit transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The booking is durable. `email_sent` reports the confirmation attempt.
    Confirmed { booking: Booking, email_sent: bool },
    /// The store rejected the booking; nothing was persisted.
    NotCreated,
}

/// Everything one call to [`ConversationEngine::handle`] produces.
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub reply: String,
    pub session: Session,
    /// Set only on the turn that answered the confirmation prompt affirmatively.
    pub outcome: Option<CommitOutcome>,
}

struct Transition {
    next: DialogueState,
    reply: String,
    outcome: Option<CommitOutcome>,
}

impl Transition {
    fn to(next: DialogueState, reply: impl Into<String>) -> Self {
        Self {
            next,
            reply: reply.into(),
            outcome: None,
        }
    }
}

/// Drives booking dialogues. Holds no per-session state, so one engine can
/// serve any number of independent sessions.
pub struct ConversationEngine {
    store: Arc<dyn BookingStore>,
    notifier: Arc<dyn Notifier>,
    knowledge: Arc<dyn KnowledgeBase>,
    clinic_name: String,
    booking_type: String,
}

impl ConversationEngine {
    pub fn new(
        store: Arc<dyn BookingStore>,
        notifier: Arc<dyn Notifier>,
        knowledge: Arc<dyn KnowledgeBase>,
        clinic: &ClinicConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            knowledge,
            clinic_name: clinic.name.clone(),
            booking_type: clinic.booking_type.clone(),
        }
    }

    /// Handle one utterance. Never fails: store and notifier problems come
    /// back as a reply and a [`CommitOutcome`].
    pub async fn handle(&self, mut session: Session, utterance: &str) -> TurnResult {
        session.record(Role::User, utterance);

        let from = session.stage();
        let state = std::mem::take(&mut session.state);
        let Transition {
            next,
            reply,
            outcome,
        } = self.transition(state, utterance).await;
        debug!(from = %from, to = %next.stage(), "dialogue transition");

        session.state = next;
        session.record(Role::Assistant, reply.clone());
        TurnResult {
            reply,
            session,
            outcome,
        }
    }

    async fn transition(&self, state: DialogueState, utterance: &str) -> Transition {
        match state {
            DialogueState::Idle => self.on_idle(utterance).await,

            DialogueState::CollectingName => {
                if utterance.is_empty() {
                    Transition::to(DialogueState::CollectingName, replies::NAME_REQUIRED)
                } else {
                    Transition::to(
                        DialogueState::CollectingEmail {
                            name: utterance.to_string(),
                        },
                        replies::ASK_EMAIL,
                    )
                }
            }

            DialogueState::CollectingEmail { name } => {
                if validators::is_valid_email(utterance) {
                    Transition::to(
                        DialogueState::CollectingDate {
                            name,
                            email: utterance.to_string(),
                        },
                        replies::ASK_DATE,
                    )
                } else {
                    Transition::to(DialogueState::CollectingEmail { name }, replies::INVALID_EMAIL)
                }
            }

            DialogueState::CollectingDate { name, email } => match validators::parse_date(utterance)
            {
                Some(date) => Transition::to(
                    DialogueState::CollectingTime { name, email, date },
                    replies::ASK_TIME,
                ),
                None => Transition::to(
                    DialogueState::CollectingDate { name, email },
                    replies::INVALID_DATE,
                ),
            },

            DialogueState::CollectingTime { name, email, date } => {
                match validators::parse_time(utterance) {
                    Some(time) => {
                        let draft = BookingDraft {
                            name,
                            email,
                            date,
                            time,
                        };
                        let reply = replies::summary(&draft);
                        Transition::to(DialogueState::AwaitingConfirmation { draft }, reply)
                    }
                    None => Transition::to(
                        DialogueState::CollectingTime { name, email, date },
                        replies::INVALID_TIME,
                    ),
                }
            }

            DialogueState::AwaitingConfirmation { draft } => {
                if intent::is_affirmative(utterance) {
                    let (reply, outcome) = self.commit(draft).await;
                    Transition {
                        next: DialogueState::Idle,
                        reply,
                        outcome: Some(outcome),
                    }
                } else {
                    debug!("booking cancelled at confirmation");
                    Transition::to(DialogueState::Idle, replies::CANCELLED)
                }
            }
        }
    }

    async fn on_idle(&self, utterance: &str) -> Transition {
        let reply = match intent::classify(utterance) {
            IdleIntent::Greeting => replies::greeting(&self.clinic_name),
            IdleIntent::Thanks => replies::THANKS.to_string(),
            IdleIntent::Booking => {
                return Transition::to(DialogueState::CollectingName, replies::ASK_NAME);
            }
            IdleIntent::Question => self.answer_question(utterance).await,
        };
        Transition::to(DialogueState::Idle, reply)
    }

    async fn answer_question(&self, question: &str) -> String {
        match self.knowledge.answer(question).await {
            Ok(Some(answer)) => answer,
            Ok(None) => replies::NO_KNOWLEDGE.to_string(),
            Err(e) => {
                warn!(error = %e, "knowledge base failed, falling back");
                replies::NO_KNOWLEDGE.to_string()
            }
        }
    }

    /// Persist the draft, then attempt the confirmation and the staff alert.
    async fn commit(&self, draft: BookingDraft) -> (String, CommitOutcome) {
        let new_booking = NewBooking {
            patient_name: draft.name,
            patient_email: draft.email,
            date: draft.date,
            time: draft.time,
            booking_type: self.booking_type.clone(),
        };

        let booking = match self.store.create_booking(&new_booking).await {
            Ok(booking) => booking,
            Err(e) => {
                error!(error = %e, "booking could not be created");
                return (replies::NOT_CREATED.to_string(), CommitOutcome::NotCreated);
            }
        };

        let email_sent = self.notifier.send_confirmation(&booking).await.is_sent();
        self.notifier.send_staff_alert(&booking).await;
        info!(booking_id = %booking.id, email_sent, "booking committed");

        (
            replies::confirmed(booking.id, email_sent),
            CommitOutcome::Confirmed {
                booking,
                email_sent,
            },
        )
    }
}
