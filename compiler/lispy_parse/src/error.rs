//! Parse error type.

/// A structured parse failure.
///
/// Renders the way the command line reports it:
/// `<source>:<line>:<column>: error: <message>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{source_name}:{line}:{column}: error: {message}")]
pub struct ParseError {
    /// Name of the parsed resource (`<stdin>` for interactive input).
    pub source_name: String,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column (in characters) of the offending character.
    pub column: usize,
    /// What the parser expected and what it found instead.
    pub message: String,
}

impl ParseError {
    /// Build an error at byte `offset` of `source`.
    pub(crate) fn at(
        source_name: &str,
        source: &str,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        let prefix = &source[..offset.min(source.len())];
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        ParseError {
            source_name: source_name.to_string(),
            line,
            column,
            message: message.into(),
        }
    }
}
