// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Backends extend the [`PluginAdapter`] base trait and use `#[async_trait]`
//! for dynamic dispatch compatibility.

pub mod adapter;
pub mod knowledge;
pub mod notifier;
pub mod storage;

pub use adapter::PluginAdapter;
pub use knowledge::KnowledgeBase;
pub use notifier::Notifier;
pub use storage::BookingStore;
