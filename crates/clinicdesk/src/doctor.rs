// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `clinicdesk doctor` command: health checks of the configured adapters.

use clinicdesk_core::{HealthStatus, PluginAdapter};
use colored::Colorize;

/// Run every adapter's health check. Returns false if any is unhealthy.
pub async fn run_doctor(adapters: &[&dyn PluginAdapter]) -> bool {
    let mut all_ok = true;
    for adapter in adapters {
        let label = format!("{} ({})", adapter.name(), adapter.adapter_type());
        match adapter.health_check().await {
            Ok(HealthStatus::Healthy) => println!("  {} {label}", "ok".green()),
            Ok(HealthStatus::Degraded(reason)) => {
                println!("  {} {label}: {reason}", "degraded".yellow())
            }
            Ok(HealthStatus::Unhealthy(reason)) => {
                all_ok = false;
                println!("  {} {label}: {reason}", "unhealthy".red());
            }
            Err(e) => {
                all_ok = false;
                println!("  {} {label}: {e}", "error".red());
            }
        }
    }
    all_ok
}
