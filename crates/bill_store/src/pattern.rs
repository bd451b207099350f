//! Search pattern construction
//!
//! Name and keyword searches run as case-insensitive `$regex` queries. Raw
//! caller input interpolated into a pattern would let metacharacters change
//! the match semantics, so the default mode escapes the input and matches it
//! as a literal substring; regex semantics are opt-in.

use bson::{doc, Document};

/// How caller-supplied search input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Treat the input as literal text; regex metacharacters are escaped
    #[default]
    Literal,
    /// Treat the input as a regular expression
    Pattern,
}

/// Builds the pattern string for the given mode
pub fn build_pattern(input: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Literal => regex::escape(input),
        MatchMode::Pattern => input.to_string(),
    }
}

/// Case-insensitive `$regex` filter on the given field path
pub(crate) fn regex_filter(path: &str, input: &str, mode: MatchMode) -> Document {
    doc! { path: { "$regex": build_pattern(input, mode), "$options": "i" } }
}
