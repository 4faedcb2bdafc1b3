//! Character cursor over source text.

/// Byte-offset cursor over a `&str`. Always sits on a char boundary.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub(crate) fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the current character.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Text from byte offset `start` up to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_advances_by_char() {
        let mut cursor = Cursor::new("aλb");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('λ'));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.bump(), Some('b'));
        assert!(cursor.is_eof());
        assert_eq!(cursor.bump(), None);
    }

    #[test]
    fn test_peek_second() {
        let cursor = Cursor::new("-5");
        assert_eq!(cursor.peek(), Some('-'));
        assert_eq!(cursor.peek_second(), Some('5'));
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("12345 rest");
        let start = cursor.pos();
        cursor.eat_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(start), "12345");
        assert_eq!(cursor.peek(), Some(' '));
    }
}
