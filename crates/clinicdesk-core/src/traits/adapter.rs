// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait shared by storage and notification backends.

use async_trait::async_trait;

use crate::error::ClinicError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all clinicdesk adapters.
///
/// Provides identity and health check capabilities so the binary can report
/// which backends are wired in and whether they are usable.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the type of adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, ClinicError>;
}
