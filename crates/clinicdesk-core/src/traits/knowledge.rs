// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base trait for free-text questions outside the booking flow.

use async_trait::async_trait;

use crate::error::ClinicError;

/// Answers visitor questions from an uploaded knowledge source.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Answers a question.
    ///
    /// Returns `Ok(None)` when no knowledge source is loaded; callers treat
    /// that as a normal outcome, not an error.
    async fn answer(&self, question: &str) -> Result<Option<String>, ClinicError>;
}
