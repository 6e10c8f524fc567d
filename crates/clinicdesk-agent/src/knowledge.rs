// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base used when no document has been loaded.

use async_trait::async_trait;
use clinicdesk_core::{ClinicError, KnowledgeBase};

/// Always reports that no knowledge source is loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoKnowledgeBase;

#[async_trait]
impl KnowledgeBase for NoKnowledgeBase {
    async fn answer(&self, _question: &str) -> Result<Option<String>, ClinicError> {
        Ok(None)
    }
}
