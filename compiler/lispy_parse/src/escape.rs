//! Escape Sequence Processing
//!
//! String literals are kept verbatim in the syntax tree; the reader decodes
//! them with [`unescape_string`] and the printer re-encodes them with
//! [`escape_string`]. Both directions use the same table:
//! `\a \b \f \n \r \t \v \\ \' \" \0`.

/// Resolve a single escape character to its replacement.
///
/// Returns `Some(char)` for recognized escapes, `None` for unrecognized ones.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Inverse of [`resolve_escape`]: the escape letter for a character that
/// must be written escaped.
#[inline]
fn escape_letter(c: char) -> Option<char> {
    match c {
        '\x07' => Some('a'),
        '\x08' => Some('b'),
        '\x0c' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '\x0b' => Some('v'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '\0' => Some('0'),
        _ => None,
    }
}

/// Whether `\` followed by `c` decodes to both characters unchanged.
#[inline]
fn reads_unescaped(c: char) -> bool {
    resolve_escape(c).is_none() && escape_letter(c).is_none()
}

/// Process string escape sequences.
///
/// Invalid escapes are preserved literally (e.g., `\q` stays `\q`).
pub fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(esc) => {
                    if let Some(resolved) = resolve_escape(esc) {
                        result.push(resolved);
                    } else {
                        result.push('\\');
                        result.push(esc);
                    }
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Encode a decoded string so that [`unescape_string`] restores it.
///
/// A backslash that reads back as an unknown escape (`\q`) is written
/// bare, so such strings print the way they were written.
pub fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let bare = c == '\\' && chars.peek().is_some_and(|&next| reads_unescaped(next));
        if bare {
            result.push(c);
        } else if let Some(letter) = escape_letter(c) {
            result.push('\\');
            result.push(letter);
        } else {
            result.push(c);
        }
    }
    result
}

/// Decode the contents of a `string` syntax node, quotes included.
///
/// The surrounding double quotes are stripped before unescaping; contents
/// without them are decoded as-is.
pub fn decode_literal(contents: &str) -> String {
    let inner = contents
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(contents);
    unescape_string(inner)
}
