//! Lispy Parse - source text to concrete syntax tree.
//!
//! The parser does not build values. It produces a [`SyntaxNode`] tree whose
//! nodes carry a tag, the matched text, and their children, and the reader
//! in `lispy_eval` walks that tree. Delimiters, comments, and the root
//! anchors are kept as nodes so the tree mirrors the source exactly.
//!
//! ```text
//! parse("+ 1 (* 2 3)")
//!
//! >
//!   regex ''
//!   expr|symbol|regex '+'
//!   expr|number|regex '1'
//!   expr|sexpr|>
//!     char '('
//!     expr|symbol|regex '*'
//!     ...
//!   regex ''
//! ```

mod cursor;
mod error;
pub mod escape;
mod parser;
mod syntax;

pub use error::ParseError;
pub use syntax::{
    SyntaxNode, CHAR_TAG, COMMENT_TAG, MARKER_TAG, NUMBER_TAG, QEXPR_TAG, ROOT_TAG, SEXPR_TAG,
    STRING_TAG, SYMBOL_TAG,
};

/// Source name used for interactive and inline input.
pub const STDIN_NAME: &str = "<stdin>";

/// Parse inline source text.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    parse_named(STDIN_NAME, source)
}

/// Parse source text, naming it `source_name` in error positions.
#[tracing::instrument(level = "debug", skip(source))]
pub fn parse_named(source_name: &str, source: &str) -> Result<SyntaxNode, ParseError> {
    let result = parser::Parser::new(source_name, source).parse_program();
    if let Err(err) = &result {
        tracing::debug!(%err, "parse failed");
    }
    result
}

#[cfg(test)]
mod tests;
