// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking conversation for the clinicdesk front-desk assistant.
//!
//! A per-session state machine that collects a patient's name, email, date
//! and time one utterance at a time, validates each field, and on explicit
//! confirmation commits the booking through a [`clinicdesk_core::BookingStore`]
//! before attempting notifications through a [`clinicdesk_core::Notifier`].

pub mod engine;
pub mod intent;
pub mod knowledge;
pub mod replies;
pub mod session;
pub mod validators;

pub use engine::{CommitOutcome, ConversationEngine, TurnResult};
pub use knowledge::NoKnowledgeBase;
pub use session::{BookingDraft, DialogueStage, DialogueState, DraftView, Role, Session, Turn};
