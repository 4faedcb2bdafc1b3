//! Recursive descent over the Lispy grammar.
//!
//! ```text
//! number  : /-?[0-9]+/
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&%^]+/
//! string  : /"(\\.|[^"])*"/
//! comment : /;[^\r\n]*/
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! expr    : <number> | <symbol> | <string> | <comment> | <sexpr> | <qexpr>
//! lispy   : /^/ <expr>* /$/
//! ```
//!
//! Alternatives are tried in the order listed, and whitespace between
//! tokens is skipped.

use lispy_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::syntax::{
    SyntaxNode, CHAR_TAG, COMMENT_TAG, MARKER_TAG, NUMBER_TAG, QEXPR_TAG, ROOT_TAG, SEXPR_TAG,
    STRING_TAG, SYMBOL_TAG,
};
use crate::ParseError;

const EXPECTED_EXPR: &str = "number, symbol, string, comment, '(' or '{'";

/// Whether `c` may appear in a symbol.
#[inline]
pub(crate) fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '+' | '-' | '*' | '/' | '\\' | '=' | '<' | '>' | '!' | '&' | '%' | '^'
        )
}

pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    source: &'src str,
    source_name: &'src str,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source_name: &'src str, source: &'src str) -> Self {
        Parser {
            cursor: Cursor::new(source),
            source,
            source_name,
        }
    }

    /// Parse the whole input as a program.
    pub(crate) fn parse_program(mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::leaf(MARKER_TAG, "")];
        loop {
            self.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }
            children.push(self.parse_expr()?);
        }
        children.push(SyntaxNode::leaf(MARKER_TAG, ""));
        Ok(SyntaxNode::branch(ROOT_TAG, children))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.peek() {
            Some(c) if starts_number(c, self.cursor.peek_second()) => Ok(self.parse_number()),
            Some(c) if is_symbol_char(c) => Ok(self.parse_symbol()),
            Some('"') => self.parse_string(),
            Some(';') => Ok(self.parse_comment()),
            Some('(') => self.parse_list(SEXPR_TAG, '(', ')'),
            Some('{') => self.parse_list(QEXPR_TAG, '{', '}'),
            Some(c) => Err(self.error(format!("expected {EXPECTED_EXPR} at '{c}'"))),
            None => Err(self.error(format!("expected {EXPECTED_EXPR} at end of input"))),
        })
    }

    fn parse_number(&mut self) -> SyntaxNode {
        let start = self.cursor.pos();
        if self.cursor.peek() == Some('-') {
            self.cursor.bump();
        }
        self.cursor.eat_while(|c| c.is_ascii_digit());
        SyntaxNode::leaf(NUMBER_TAG, self.cursor.slice_from(start))
    }

    fn parse_symbol(&mut self) -> SyntaxNode {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_symbol_char);
        SyntaxNode::leaf(SYMBOL_TAG, self.cursor.slice_from(start))
    }

    fn parse_string(&mut self) -> Result<SyntaxNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        loop {
            match self.cursor.bump() {
                Some('"') => break,
                Some('\\') => {
                    if self.cursor.bump().is_none() {
                        return Err(self.error("unterminated string literal"));
                    }
                }
                Some(_) => {}
                None => return Err(self.error("unterminated string literal")),
            }
        }
        Ok(SyntaxNode::leaf(STRING_TAG, self.cursor.slice_from(start)))
    }

    fn parse_comment(&mut self) -> SyntaxNode {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c != '\r' && c != '\n');
        SyntaxNode::leaf(COMMENT_TAG, self.cursor.slice_from(start))
    }

    fn parse_list(
        &mut self,
        tag: &'static str,
        open: char,
        close: char,
    ) -> Result<SyntaxNode, ParseError> {
        self.cursor.bump();
        let mut children = vec![SyntaxNode::leaf(CHAR_TAG, open.to_string())];
        loop {
            self.skip_whitespace();
            match self.cursor.peek() {
                Some(c) if c == close => {
                    self.cursor.bump();
                    children.push(SyntaxNode::leaf(CHAR_TAG, close.to_string()));
                    return Ok(SyntaxNode::branch(tag, children));
                }
                Some(_) => children.push(self.parse_expr()?),
                None => {
                    return Err(self.error(format!(
                        "expected {EXPECTED_EXPR} or '{close}' at end of input"
                    )))
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::at(self.source_name, self.source, self.cursor.pos(), message)
    }
}

/// `-?[0-9]+` matches at the current position.
#[inline]
fn starts_number(first: char, second: Option<char>) -> bool {
    first.is_ascii_digit() || (first == '-' && second.is_some_and(|c| c.is_ascii_digit()))
}
