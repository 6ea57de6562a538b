//! Pattern formatting: tokenize and substitute in a single pass.
//!
//! The formatter drives the segment parser one token at a time and resolves
//! each placeholder against the context the moment it is recognized, so the
//! first error in pattern order wins whether it is a syntax error or a
//! missing key.

use std::collections::HashMap;

use crate::error::{FormatError, compute_suggestions};
use crate::parser::ast::Segment;
use crate::parser::segment;
use crate::types::Value;

/// Format a pattern with context.
///
/// Replaces every `{name}` placeholder with the context value for `name`,
/// collapses `{{` and `}}` to literal braces, and copies all other text
/// unchanged. Substituted values are emitted verbatim and never re-scanned
/// for placeholders. The call is pure: fixed inputs always produce the same
/// output, and a failed call produces no partial output.
///
/// # Example
///
/// ```
/// use phrase::{context, format};
///
/// let pattern = "{user_name} lives in {city_name}";
/// let ctx = context! {
///     "user_name" => "Sean McQueen",
///     "city_name" => "San Francisco",
/// };
/// assert_eq!(
///     format(pattern, &ctx).unwrap(),
///     "Sean McQueen lives in San Francisco",
/// );
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - A placeholder names a key absent from `context`
/// - A placeholder name contains an illegal character
/// - A placeholder is unterminated at end of input
/// - A stray unmatched brace appears outside a placeholder
pub fn format(pattern: &str, context: &HashMap<String, Value>) -> Result<String, FormatError> {
    let mut remaining = pattern;
    let mut output = String::with_capacity(pattern.len());

    while !remaining.is_empty() {
        let consumed = pattern.len() - remaining.len();
        match segment(&mut remaining) {
            Ok(Segment::Literal(text)) => output.push_str(&text),
            Ok(Segment::Placeholder(name)) => match context.get(&name) {
                Some(value) => output.push_str(&value.to_string()),
                None => {
                    let mut available: Vec<String> = context.keys().cloned().collect();
                    available.sort_unstable();
                    return Err(FormatError::MissingContext {
                        suggestions: compute_suggestions(&name, &available),
                        key: name,
                        // The name starts one past the opening brace.
                        offset: consumed + 1,
                    });
                }
            },
            Err(_) => return Err(FormatError::unexpected_character(pattern, remaining)),
        }
    }

    Ok(output)
}
