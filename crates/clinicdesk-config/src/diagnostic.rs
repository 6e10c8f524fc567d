// SPDX-FileCopyrightText: 2026 Clinicdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge.
//!
//! Unknown keys are reported with the offending line highlighted and a
//! "did you mean" suggestion ranked by Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive triggers this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum similarity for a key to be offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(code(clinicdesk::config::unknown_key), help("{help}"))]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        help: String,
        #[label("not a recognised key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for `{key}`: found {found}")]
    #[diagnostic(code(clinicdesk::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(clinicdesk::config::missing_key),
        help("add `{key} = <value>` to clinicdesk.toml")
    )]
    MissingKey { key: String },

    /// A value parsed but failed a semantic check.
    #[error("validation error: {message}")]
    #[diagnostic(code(clinicdesk::config::validation))]
    Validation { message: String },

    /// Anything else Figment reports.
    #[error("configuration error: {0}")]
    #[diagnostic(code(clinicdesk::config::other))]
    Other(String),
}

/// Convert a `figment::Error` (which may hold several errors) into diagnostics.
///
/// `sources` pairs a file path with its content and is used to locate the
/// span of unknown keys.
pub fn figment_to_config_errors(
    err: figment::Error,
    sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let path: Vec<String> = error.path.clone();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let suggestion = suggest_key(field, expected);
                    let help = match &suggestion {
                        Some(s) => format!("did you mean `{s}`? valid keys: {}", expected.join(", ")),
                        None => format!("valid keys: {}", expected.join(", ")),
                    };
                    let (span, src) = locate(&error, &path, field, sources);
                    ConfigError::UnknownKey {
                        key: qualified(&path, field),
                        suggestion,
                        help,
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: qualified(&path, field),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: path.join("."),
                    found: actual.to_string(),
                    expected: expected.clone(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Join a section path and a field into `section.field`, skipping duplicates.
fn qualified(path: &[String], field: &str) -> String {
    match path.last() {
        Some(last) if last == field => path.join("."),
        Some(_) => format!("{}.{field}", path.join(".")),
        None => field.to_string(),
    }
}

/// Find the file and byte span that introduced an unknown key.
fn locate(
    error: &figment::Error,
    path: &[String],
    field: &str,
    sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(p) => Some(p.display().to_string()),
            _ => None,
        });

    let candidate = match origin {
        Some(origin) => sources.iter().find(|(p, _)| *p == origin),
        None => sources.first(),
    };

    let Some((name, content)) = candidate else {
        return (None, None);
    };
    let section = path.iter().find(|segment| segment.as_str() != field);
    match find_key_offset(content, section.map(String::as_str), field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(name, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` as a key inside `[section]` (or the top level).
pub fn find_key_offset(content: &str, section: Option<&str>, field: &str) -> Option<usize> {
    let start = match section {
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') && section.is_some() {
            break;
        }
        if let Some(rest) = trimmed.strip_prefix(field)
            && rest.trim_start().starts_with('=')
        {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

/// Suggest the valid key closest to `unknown`, if any is close enough.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render diagnostics to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        if handler.render_report(&mut buf, error).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_key() {
        let valid = &["booking_type", "location", "phone"];
        assert_eq!(
            suggest_key("boking_type", valid),
            Some("booking_type".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_unrelated_key() {
        let valid = &["host", "port", "username"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn finds_key_inside_section_only() {
        let content = "[clinic]\nname = \"A\"\n[smtp]\nhots = \"x\"\n";
        let offset = find_key_offset(content, Some("smtp"), "hots").unwrap();
        assert_eq!(&content[offset..offset + 4], "hots");
        assert_eq!(find_key_offset(content, Some("clinic"), "hots"), None);
    }

    #[test]
    fn qualified_key_names() {
        let path = vec!["smtp".to_string()];
        assert_eq!(qualified(&path, "hots"), "smtp.hots");
        assert_eq!(qualified(&[], "agent"), "agent");
    }
}
