//! Reader: concrete syntax tree to value tree.
//!
//! Nodes are classified by substring search on their tag. Delimiter,
//! anchor, and comment nodes are skipped; everything else maps to exactly
//! one value.

use lispy_parse::escape::decode_literal;
use lispy_parse::{ParseError, SyntaxNode, MARKER_TAG};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::EvalErrorKind;
use crate::value::Value;

/// Build the value for `node`.
///
/// The program root reads as an S-expression of its top-level forms. A
/// number literal outside the `i64` range reads as an `Invalid Number`
/// error value.
pub fn read(node: &SyntaxNode) -> Value {
    ensure_sufficient_stack(|| {
        let tag = node.tag();
        if tag.contains("number") {
            return read_number(node.contents());
        }
        if tag.contains("string") {
            return Value::string(decode_literal(node.contents()));
        }
        if tag.contains("symbol") {
            return Value::symbol(node.contents());
        }

        let items = node
            .children()
            .iter()
            .filter(|child| !is_skipped(child))
            .map(read)
            .collect();

        if tag.contains("qexpr") {
            Value::qexpr(items)
        } else {
            Value::sexpr(items)
        }
    })
}

/// Parse and read `source` without evaluating it.
///
/// A parse failure reads as a `Failed to parse input` error value
/// embedding the input text.
pub fn read_source(source_name: &str, source: &str) -> Value {
    read_source_with_diagnostics(source_name, source).0
}

/// Like [`read_source`], also handing back the parser's positioned error.
pub fn read_source_with_diagnostics(
    source_name: &str,
    source: &str,
) -> (Value, Option<ParseError>) {
    match lispy_parse::parse_named(source_name, source) {
        Ok(tree) => (read(&tree), None),
        Err(err) => {
            tracing::debug!(%err, "read failed");
            let value = EvalErrorKind::ParseFailure {
                input: source.to_string(),
            }
            .into();
            (value, Some(err))
        }
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => EvalErrorKind::InvalidNumber {
            text: text.to_string(),
        }
        .into(),
    }
}

fn is_skipped(node: &SyntaxNode) -> bool {
    matches!(node.contents(), "(" | ")" | "{" | "}")
        || node.tag() == MARKER_TAG
        || node.tag().contains("comment")
}
