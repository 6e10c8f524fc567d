// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! clinicdesk - A clinic front-desk assistant.
//!
//! This is the binary entry point: the patient chat REPL plus the staff
//! commands over the booking store.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod chat;
mod doctor;
mod staff;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use clinicdesk_agent::{ConversationEngine, NoKnowledgeBase};
use clinicdesk_config::ClinicDeskConfig;
use clinicdesk_core::{BookingId, BookingStatus, BookingStore, ClinicError, PluginAdapter};
use clinicdesk_storage::SqliteBookingStore;
use colored::Colorize;
use tracing::error;

/// clinicdesk - A clinic front-desk assistant.
#[derive(Parser, Debug)]
#[command(name = "clinicdesk", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the booking assistant.
    Chat,
    /// Review and change booking records.
    Bookings {
        #[command(subcommand)]
        action: BookingsCommand,
    },
    /// Show the staff audit log, newest first.
    Audit {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Check that the booking store and notifier are usable.
    Doctor,
}

#[derive(Subcommand, Debug)]
enum BookingsCommand {
    /// List all bookings, newest first.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Change a booking's status.
    Status {
        id: i64,
        #[arg(value_parser = staff::parse_status)]
        status: BookingStatus,
        /// Name recorded in the audit log. Defaults to agent.staff_actor.
        #[arg(long)]
        actor: Option<String>,
    },
    /// Delete a booking.
    Delete {
        id: i64,
        /// Name recorded in the audit log. Defaults to agent.staff_actor.
        #[arg(long)]
        actor: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => clinicdesk_config::load_and_validate_path(path),
        None => clinicdesk_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            clinicdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let Some(command) = cli.command else {
        println!("clinicdesk: use --help for available commands");
        return;
    };

    if let Err(e) = run(command, config).await {
        error!(error = %e, "command failed");
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: ClinicDeskConfig) -> Result<(), ClinicError> {
    let store = Arc::new(SqliteBookingStore::new(config.storage.clone()));
    store.initialize().await?;

    let result = dispatch(command, &config, Arc::clone(&store)).await;
    store.close().await?;
    result
}

async fn dispatch(
    command: Commands,
    config: &ClinicDeskConfig,
    store: Arc<SqliteBookingStore>,
) -> Result<(), ClinicError> {
    let mut stdout = std::io::stdout();
    let actor_or_default =
        |actor: Option<String>| actor.unwrap_or_else(|| config.agent.staff_actor.clone());

    match command {
        Commands::Chat => {
            let notifier = clinicdesk_notify::build_notifier(config)?;
            let engine = ConversationEngine::new(
                store as Arc<dyn BookingStore>,
                notifier,
                Arc::new(NoKnowledgeBase),
                &config.clinic,
            );
            chat::run_chat(&engine, &config.clinic.name).await
        }
        Commands::Bookings { action } => match action {
            BookingsCommand::List { json } => {
                staff::list_bookings(store.as_ref(), json, &mut stdout).await
            }
            BookingsCommand::Status { id, status, actor } => {
                let actor = actor_or_default(actor);
                staff::update_status(store.as_ref(), BookingId(id), status, &actor, &mut stdout)
                    .await
            }
            BookingsCommand::Delete { id, actor } => {
                let actor = actor_or_default(actor);
                staff::delete_booking(store.as_ref(), BookingId(id), &actor, &mut stdout).await
            }
        },
        Commands::Audit { json } => staff::show_audit(store.as_ref(), json, &mut stdout).await,
        Commands::Doctor => {
            let notifier = clinicdesk_notify::build_notifier(config)?;
            let adapters: [&dyn PluginAdapter; 2] = [store.as_ref(), notifier.as_ref()];
            if doctor::run_doctor(&adapters).await {
                Ok(())
            } else {
                Err(ClinicError::Internal("one or more adapters are unhealthy".into()))
            }
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clinicdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn status_command_parses_case_insensitively() {
        let cli = Cli::try_parse_from([
            "clinicdesk", "bookings", "status", "7", "cancelled", "--actor", "Receptionist",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Bookings {
                action: BookingsCommand::Status { id, status, actor },
            }) => {
                assert_eq!(id, 7);
                assert_eq!(status, BookingStatus::Cancelled);
                assert_eq!(actor.as_deref(), Some("Receptionist"));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(Cli::try_parse_from(["clinicdesk", "bookings", "status", "7", "archived"]).is_err());
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = clinicdesk_config::load_and_validate_str("").expect("defaults are valid");
        assert_eq!(config.agent.staff_actor, "Admin");
    }
}
