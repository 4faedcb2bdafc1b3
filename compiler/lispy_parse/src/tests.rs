use super::*;
use pretty_assertions::assert_eq;

/// Tags and contents of the root's children, anchors excluded.
fn top_level(source: &str) -> Vec<(String, String)> {
    let tree = parse(source).unwrap_or_else(|err| panic!("parse failed: {err}"));
    let children = tree.children();
    children[1..children.len() - 1]
        .iter()
        .map(|node| (node.tag().to_string(), node.contents().to_string()))
        .collect()
}

fn pair(tag: &str, contents: &str) -> (String, String) {
    (tag.to_string(), contents.to_string())
}

#[test]
fn test_root_has_anchors() {
    let tree = parse("").unwrap_or_else(|err| panic!("{err}"));
    assert!(tree.is_root());
    assert_eq!(tree.children().len(), 2);
    assert!(tree.children().iter().all(|c| c.tag() == MARKER_TAG));
}

#[test]
fn test_atoms() {
    assert_eq!(
        top_level("+ 2 -3 \"hi\""),
        vec![
            pair(SYMBOL_TAG, "+"),
            pair(NUMBER_TAG, "2"),
            pair(NUMBER_TAG, "-3"),
            pair(STRING_TAG, "\"hi\""),
        ]
    );
}

#[test]
fn test_minus_alone_is_symbol() {
    assert_eq!(
        top_level("- 100"),
        vec![pair(SYMBOL_TAG, "-"), pair(NUMBER_TAG, "100")]
    );
}

#[test]
fn test_number_then_symbol_without_space() {
    assert_eq!(
        top_level("1abc"),
        vec![pair(NUMBER_TAG, "1"), pair(SYMBOL_TAG, "abc")]
    );
}

#[test]
fn test_symbol_characters() {
    assert_eq!(
        top_level("add-mul \\ & == % ^ _x1"),
        vec![
            pair(SYMBOL_TAG, "add-mul"),
            pair(SYMBOL_TAG, "\\"),
            pair(SYMBOL_TAG, "&"),
            pair(SYMBOL_TAG, "=="),
            pair(SYMBOL_TAG, "%"),
            pair(SYMBOL_TAG, "^"),
            pair(SYMBOL_TAG, "_x1"),
        ]
    );
}

#[test]
fn test_comment_runs_to_end_of_line() {
    assert_eq!(
        top_level("; + 1 2\n3"),
        vec![pair(COMMENT_TAG, "; + 1 2"), pair(NUMBER_TAG, "3")]
    );
}

#[test]
fn test_string_keeps_escapes_verbatim() {
    assert_eq!(
        top_level(r#""hello\"" "a\nb""#),
        vec![pair(STRING_TAG, r#""hello\"""#), pair(STRING_TAG, r#""a\nb""#)]
    );
}

#[test]
fn test_nested_lists_keep_delimiters() {
    let tree = parse("(+ 1 {2})").unwrap_or_else(|err| panic!("{err}"));
    let sexpr = &tree.children()[1];
    assert_eq!(sexpr.tag(), SEXPR_TAG);
    let parts: Vec<_> = sexpr.children().iter().map(SyntaxNode::contents).collect();
    assert_eq!(parts, vec!["(", "+", "1", "", ")"]);

    let qexpr = &sexpr.children()[3];
    assert_eq!(qexpr.tag(), QEXPR_TAG);
    assert_eq!(qexpr.children()[0].tag(), CHAR_TAG);
    assert_eq!(qexpr.children()[1].contents(), "2");
}

#[test]
fn test_multiline_program() {
    let source = "(fun {len l} {\n  if (== l {})\n    {0}\n    {+ 1 (len (tail l))}\n})";
    let tree = parse(source).unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(tree.children().len(), 3);
    assert_eq!(tree.children()[1].tag(), SEXPR_TAG);
}

#[test]
fn test_invalid_character_reports_position() {
    let err = parse("The quick brown fox jumps over the very lazy dog.").err();
    let err = err.unwrap_or_else(|| panic!("expected a parse error"));
    assert_eq!(err.source_name, STDIN_NAME);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 49);
    assert!(err.message.contains("at '.'"));
    assert!(err.to_string().starts_with("<stdin>:1:49: error: expected"));
}

#[test]
fn test_unclosed_list() {
    let err = parse_named("lib.lspy", "(+ 1\n  (* 2 3)").err();
    let err = err.unwrap_or_else(|| panic!("expected a parse error"));
    assert_eq!(err.source_name, "lib.lspy");
    assert_eq!(err.line, 2);
    assert!(err.message.contains("')' at end of input"));
}

#[test]
fn test_unexpected_closing_delimiter() {
    assert!(parse("+ 1 2)").is_err());
    assert!(parse("}").is_err());
}

#[test]
fn test_unterminated_string() {
    let err = parse("\"abc").err();
    let err = err.unwrap_or_else(|| panic!("expected a parse error"));
    assert_eq!(err.message, "unterminated string literal");
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse(&source).is_ok());
}
