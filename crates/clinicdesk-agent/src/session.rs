// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-conversation session value.
//!
//! The dialogue state is a tagged enum: each variant carries exactly the
//! draft fields that have been validated by the time it is reached, so a
//! handler cannot read a field the patient has not supplied yet.
//!
//! States: Idle -> CollectingName -> CollectingEmail -> CollectingDate ->
//! CollectingTime -> AwaitingConfirmation -> Idle.

use chrono::{NaiveDate, NaiveTime};
use clinicdesk_core::types::{format_date, format_time};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The fields collected once a patient reaches the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Dialogue state with the draft fields guaranteed present at that state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogueState {
    #[default]
    Idle,
    CollectingName,
    CollectingEmail {
        name: String,
    },
    CollectingDate {
        name: String,
        email: String,
    },
    CollectingTime {
        name: String,
        email: String,
        date: NaiveDate,
    },
    AwaitingConfirmation {
        draft: BookingDraft,
    },
}

/// Field-less view of [`DialogueState`] for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogueStage {
    Idle,
    CollectingName,
    CollectingEmail,
    CollectingDate,
    CollectingTime,
    AwaitingConfirmation,
}

/// Read-only view of whatever draft fields the current state carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftView<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl DraftView<'_> {
    pub fn is_empty(&self) -> bool {
        *self == DraftView::default()
    }
}

impl DialogueState {
    pub fn stage(&self) -> DialogueStage {
        match self {
            DialogueState::Idle => DialogueStage::Idle,
            DialogueState::CollectingName => DialogueStage::CollectingName,
            DialogueState::CollectingEmail { .. } => DialogueStage::CollectingEmail,
            DialogueState::CollectingDate { .. } => DialogueStage::CollectingDate,
            DialogueState::CollectingTime { .. } => DialogueStage::CollectingTime,
            DialogueState::AwaitingConfirmation { .. } => DialogueStage::AwaitingConfirmation,
        }
    }

    pub fn draft(&self) -> DraftView<'_> {
        match self {
            DialogueState::Idle | DialogueState::CollectingName => DraftView::default(),
            DialogueState::CollectingEmail { name } => DraftView {
                name: Some(name),
                ..DraftView::default()
            },
            DialogueState::CollectingDate { name, email } => DraftView {
                name: Some(name),
                email: Some(email),
                ..DraftView::default()
            },
            DialogueState::CollectingTime { name, email, date } => DraftView {
                name: Some(name),
                email: Some(email),
                date: Some(*date),
                time: None,
            },
            DialogueState::AwaitingConfirmation { draft } => DraftView {
                name: Some(&draft.name),
                email: Some(&draft.email),
                date: Some(draft.date),
                time: Some(draft.time),
            },
        }
    }
}

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// One conversation. Owned by the hosting surface and passed through
/// [`crate::ConversationEngine::handle`] on every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub state: DialogueState,
    /// Append-only transcript. Display only; the engine never reads it.
    pub history: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> DialogueStage {
        self.state.stage()
    }

    pub fn draft(&self) -> DraftView<'_> {
        self.state.draft()
    }

    pub(crate) fn record(&mut self, role: Role, text: impl Into<String>) {
        self.history.push(Turn {
            role,
            text: text.into(),
        });
    }
}

impl BookingDraft {
    pub fn date_display(&self) -> String {
        format_date(self.date)
    }

    pub fn time_display(&self) -> String {
        format_time(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle_with_empty_draft() {
        let session = Session::new();
        assert_eq!(session.stage(), DialogueStage::Idle);
        assert!(session.draft().is_empty());
        assert!(session.history.is_empty());
    }

    #[test]
    fn draft_view_exposes_only_collected_fields() {
        let state = DialogueState::CollectingDate {
            name: "Jane".into(),
            email: "jane@mail.com".into(),
        };
        let view = state.draft();
        assert_eq!(view.name, Some("Jane"));
        assert_eq!(view.email, Some("jane@mail.com"));
        assert_eq!(view.date, None);
        assert_eq!(view.time, None);
    }

    #[test]
    fn stage_names_are_screaming_snake_case() {
        assert_eq!(DialogueStage::AwaitingConfirmation.to_string(), "AWAITING_CONFIRMATION");
        assert_eq!(DialogueStage::Idle.to_string(), "IDLE");
    }

    #[test]
    fn session_serializes_with_tagged_state() {
        let session = Session {
            state: DialogueState::CollectingEmail {
                name: "Jane".into(),
            },
            history: vec![Turn {
                role: Role::User,
                text: "book".into(),
            }],
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["state"]["state"], "collecting_email");
        assert_eq!(json["state"]["name"], "Jane");
        assert_eq!(json["history"][0]["role"], "user");

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
