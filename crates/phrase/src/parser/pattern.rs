//! Pattern tokenizer using winnow.
//!
//! Scans a pattern left to right into literal and placeholder segments.
//! Handles:
//! - Literal text runs
//! - Named placeholders: {name}
//! - Escape sequences: {{ }}

use winnow::combinator::{alt, cut_err, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{Pattern, Segment};
use crate::error::FormatError;

/// Parse a complete pattern into an AST.
///
/// Applies the same grammar as [`crate::format`] but resolves nothing, so
/// tooling can inspect placeholder usage without supplying a context.
pub fn parse_pattern(input: &str) -> Result<Pattern, FormatError> {
    let mut remaining = input;
    match pattern(&mut remaining) {
        Ok(p) if remaining.is_empty() => Ok(p),
        Ok(_) | Err(_) => Err(FormatError::unexpected_character(input, remaining)),
    }
}

/// Parse a full run of segments.
fn pattern(input: &mut &str) -> ModalResult<Pattern> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    Ok(Pattern {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(Segment::Literal(text));
                }
            }
            other => merged.push(other),
        }
    }

    merged
}

/// Parse a single segment (escape, placeholder, or literal run).
pub(crate) fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_text)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a placeholder: {name}
///
/// An opening brace that is not doubled commits to a placeholder: any
/// failure before the closing brace leaves the input at the offending
/// character so the caller can report its position.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded('{', cut_err((placeholder_name, '}')))
        .map(|(name, _)| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse a placeholder name (non-empty run of name characters).
fn placeholder_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_name_char).parse_next(input)
}

/// Parse a run of literal characters (anything but braces).
fn literal_text(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Check if a character is legal in a placeholder name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
