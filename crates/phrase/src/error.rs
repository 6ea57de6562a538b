//! Error types for pattern formatting.

use thiserror::Error;

/// An error that occurred while formatting or parsing a pattern.
///
/// Exactly one error is reported per call: scanning stops at the first
/// failure in pattern order and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A well-formed placeholder names a key absent from the context.
    #[error("missing context value for key '{key}' at offset {offset}{}", render_suggestions(suggestions))]
    MissingContext {
        key: String,
        /// Byte offset of the placeholder name within the pattern.
        offset: usize,
        /// Close matches among the available keys, closest first.
        suggestions: Vec<String>,
    },

    /// The pattern is malformed: an illegal character inside a placeholder
    /// name, a stray unmatched brace, or an unterminated placeholder at end
    /// of input.
    #[error("unexpected {} at offset {offset}", render_found(*found))]
    UnexpectedCharacter {
        /// The offending character, or `None` when the pattern ended inside
        /// an unterminated placeholder.
        found: Option<char>,
        /// Byte offset of the offending character within the pattern.
        offset: usize,
    },
}

impl FormatError {
    /// Build an `UnexpectedCharacter` from the unconsumed remainder of the
    /// pattern.
    pub(crate) fn unexpected_character(pattern: &str, remaining: &str) -> Self {
        FormatError::UnexpectedCharacter {
            found: remaining.chars().next(),
            offset: pattern.len() - remaining.len(),
        }
    }
}

fn render_found(found: Option<char>) -> String {
    match found {
        Some(c) => format!("character '{c}'"),
        None => "end of input".to_string(),
    }
}

fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (closest matches: {})", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a missing key.
///
/// Returns up to three of the closest available keys by edit distance,
/// closest first. Keys of three characters or fewer match at distance 1,
/// longer keys at distance 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
