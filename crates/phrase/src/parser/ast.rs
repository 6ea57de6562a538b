//! Public AST types for interpolation patterns.
//!
//! These types are public to enable external tooling (placeholder linters,
//! string extraction scripts, etc.).

/// A parsed pattern containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

/// A segment within a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text copied verbatim to output.
    Literal(String),
    /// A named placeholder resolved against the context: {name}
    Placeholder(String),
}
