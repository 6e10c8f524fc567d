// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `clinicdesk chat` command implementation.
//!
//! Interactive REPL driving one in-memory session through the conversation
//! engine. The session lives only as long as the process.

use clinicdesk_agent::{CommitOutcome, ConversationEngine, Role, Session};
use clinicdesk_core::ClinicError;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Runs the chat REPL until `/quit`, Ctrl+C or Ctrl+D.
pub async fn run_chat(engine: &ConversationEngine, clinic_name: &str) -> Result<(), ClinicError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| ClinicError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", format!("{clinic_name} front desk").bold().green());
    println!(
        "Type {} to exit, {} to show the transcript.\n",
        "/quit".yellow(),
        "/history".yellow()
    );

    let prompt = format!("{}> ", "you".green());
    let mut session = Session::new();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                match line.trim() {
                    "/quit" | "/exit" => break,
                    "/history" => {
                        print_history(&session);
                        continue;
                    }
                    "" => continue,
                    _ => {}
                }
                let _ = rl.add_history_entry(&line);

                let result = engine.handle(session, &line).await;
                session = result.session;
                println!("{}\n", result.reply);
                if let Some(CommitOutcome::Confirmed { booking, .. }) = &result.outcome {
                    debug!(booking_id = %booking.id, "chat session committed a booking");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }
    Ok(())
}

fn print_history(session: &Session) {
    if session.history.is_empty() {
        println!("{}", "(no messages yet)".dimmed());
        return;
    }
    for turn in &session.history {
        let who = match turn.role {
            Role::User => "you".green(),
            Role::Assistant => "desk".cyan(),
        };
        println!("{who}: {}", turn.text);
    }
    println!();
}
