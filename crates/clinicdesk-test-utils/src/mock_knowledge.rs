// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base stand-ins.

use async_trait::async_trait;

use clinicdesk_core::{ClinicError, KnowledgeBase};

/// Answers every question with the same text.
pub struct StaticKnowledge {
    answer: String,
}

impl StaticKnowledge {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

#[async_trait]
impl KnowledgeBase for StaticKnowledge {
    async fn answer(&self, _question: &str) -> Result<Option<String>, ClinicError> {
        Ok(Some(self.answer.clone()))
    }
}

/// Fails every lookup.
#[derive(Debug, Default)]
pub struct FailingKnowledge;

#[async_trait]
impl KnowledgeBase for FailingKnowledge {
    async fn answer(&self, _question: &str) -> Result<Option<String>, ClinicError> {
        Err(ClinicError::Knowledge {
            message: "index unavailable".into(),
        })
    }
}
