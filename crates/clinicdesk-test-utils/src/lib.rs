// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for clinicdesk integration tests.
//!
//! Provides mock adapters and a harness for fast, deterministic tests
//! without an SMTP relay or a knowledge index.
//!
//! # Components
//!
//! - [`MockNotifier`] - Records every notification; can be told to fail
//! - [`StaticKnowledge`] / [`FailingKnowledge`] - Fixed knowledge base answers
//! - [`FailingStore`] - Booking store whose every call fails
//! - [`TestHarness`] - Engine over a temp SQLite database with scripted turns

pub mod failing_store;
pub mod harness;
pub mod mock_knowledge;
pub mod mock_notifier;

pub use failing_store::FailingStore;
pub use harness::TestHarness;
pub use mock_knowledge::{FailingKnowledge, StaticKnowledge};
pub use mock_notifier::MockNotifier;
