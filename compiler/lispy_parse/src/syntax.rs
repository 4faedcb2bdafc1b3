//! Concrete syntax tree.
//!
//! Every node exposes a tag string, its literal contents, and an ordered
//! list of children. Consumers classify nodes by substring search on the
//! tag (`"number"`, `"sexpr"`, ...), so a tag lists every rule that produced
//! the node, outermost first, separated by `|`.

use lispy_stack::ensure_sufficient_stack;
use std::fmt;

/// Tag of the tree root (the whole program).
pub const ROOT_TAG: &str = ">";
/// Tag of the start/end anchors of the root and of no other node.
pub const MARKER_TAG: &str = "regex";
/// Tag of a list delimiter: `(`, `)`, `{` or `}`.
pub const CHAR_TAG: &str = "char";
/// Tag of an integer literal leaf.
pub const NUMBER_TAG: &str = "expr|number|regex";
/// Tag of a symbol leaf.
pub const SYMBOL_TAG: &str = "expr|symbol|regex";
/// Tag of a string literal leaf; contents keep quotes and escapes.
pub const STRING_TAG: &str = "expr|string|regex";
/// Tag of a `;` comment leaf.
pub const COMMENT_TAG: &str = "expr|comment|regex";
/// Tag of a parenthesised list.
pub const SEXPR_TAG: &str = "expr|sexpr|>";
/// Tag of a braced list.
pub const QEXPR_TAG: &str = "expr|qexpr|>";

/// A node of the concrete syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    tag: &'static str,
    contents: String,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node carrying matched text.
    pub fn leaf(tag: &'static str, contents: impl Into<String>) -> Self {
        SyntaxNode {
            tag,
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create a branch node with the given children.
    pub fn branch(tag: &'static str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            tag,
            contents: String::new(),
            children,
        }
    }

    /// The rule tag, e.g. `expr|number|regex`.
    #[inline]
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// The matched source text (empty for branches and markers).
    #[inline]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Child nodes in source order, delimiters and comments included.
    #[inline]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Whether this node is the program root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let indent = depth * 2;
            if self.children.is_empty() {
                writeln!(f, "{:indent$}{} '{}'", "", self.tag, self.contents)?;
            } else {
                writeln!(f, "{:indent$}{}", "", self.tag)?;
                for child in &self.children {
                    child.fmt_indented(f, depth + 1)?;
                }
            }
            Ok(())
        })
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
