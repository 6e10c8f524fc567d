// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword classifiers for idle-state utterances.
//!
//! Pure functions over text: no state, no I/O. The engine only depends on
//! [`classify`], so a smarter classifier can replace these without touching
//! the dialogue.

/// Greeting vocabulary. Single words match whole words, phrases match anywhere.
const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "hola",
];

/// Thanks vocabulary, matched the same way as [`GREETINGS`].
const THANKS: &[&str] = &["thanks", "thank you", "thx", "ty"];

/// Booking-intent keywords (substring match, so `booking` and `appointments` count).
const BOOKING_KEYWORDS: &[&str] = &["book", "appointment", "schedule", "reserve", "slot"];

/// Replies accepted as confirmation of the booking summary.
const AFFIRMATIVE: &[&str] = &["yes", "y", "confirm", "ok"];

/// What an idle-state utterance is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleIntent {
    Greeting,
    Thanks,
    Booking,
    /// Anything else: forwarded to the knowledge base.
    Question,
}

/// Classify an idle-state utterance. First match wins in the order
/// greeting, thanks, booking, question.
pub fn classify(text: &str) -> IdleIntent {
    if is_greeting(text) {
        IdleIntent::Greeting
    } else if is_thanks(text) {
        IdleIntent::Thanks
    } else if has_booking_intent(text) {
        IdleIntent::Booking
    } else {
        IdleIntent::Question
    }
}

pub fn is_greeting(text: &str) -> bool {
    matches_vocabulary(text, GREETINGS)
}

pub fn is_thanks(text: &str) -> bool {
    matches_vocabulary(text, THANKS)
}

pub fn has_booking_intent(text: &str) -> bool {
    let lower = text.to_lowercase();
    BOOKING_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// True for `yes`, `y`, `confirm` or `ok`, ignoring case and surrounding whitespace.
pub fn is_affirmative(text: &str) -> bool {
    let reply = text.trim().to_lowercase();
    AFFIRMATIVE.contains(&reply.as_str())
}

// Single words must match a whole word, so "this" is not "hi" and
// "book this Thursday" is a booking rather than a greeting. Phrases such as
// "good morning" still match anywhere in the text.
fn matches_vocabulary(text: &str, vocabulary: &[&str]) -> bool {
    let lower = text.to_lowercase();
    vocabulary.iter().any(|entry| {
        if entry.contains(' ') {
            lower.contains(entry)
        } else {
            words(&lower).any(|word| word == *entry)
        }
    })
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}
