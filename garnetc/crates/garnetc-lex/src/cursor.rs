//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the read position
//! while the lexer walks the source one character at a time. Positions are
//! byte offsets into the UTF-8 source; every step moves over exactly one
//! `char`.

/// A cursor over source text with one character of pushback.
///
/// The position always sits *after* the character last read. [`advance`]
/// reads the next character and moves past it; [`retreat`] steps back over
/// the character last read so that the next [`advance`] yields it again.
///
/// Only a single step of pushback is supported: the lexer never needs to
/// re-read more than the one character that terminated a word or number.
///
/// [`advance`]: Cursor::advance
/// [`retreat`]: Cursor::retreat
///
/// # Example
///
/// ```
/// use garnetc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
///
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.advance(), Some('b'));
/// cursor.retreat();
/// assert_eq!(cursor.advance(), Some('b'));
/// assert_eq!(cursor.advance(), None);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset just past the character last read.
    position: usize,

    /// The character last read, `None` before the first read and at end of input.
    current: Option<char>,

    /// Whether a retreat is currently allowed.
    can_retreat: bool,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned before the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            current: None,
            can_retreat: false,
        }
    }

    /// Reads the next character and moves the position past it.
    ///
    /// Returns `None` once the end of the source has been reached; the
    /// position then stays at the source length.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        match c {
            Some(c) => {
                self.position += c.len_utf8();
                self.can_retreat = true;
            },
            None => self.can_retreat = false,
        }
        self.current = c;
        c
    }

    /// Steps back over the character last read.
    ///
    /// The next call to [`advance`](Cursor::advance) yields that character
    /// again.
    ///
    /// # Panics
    ///
    /// Panics if no character can be pushed back: before the first read,
    /// after end of input was reached, or directly after another retreat.
    #[inline]
    pub fn retreat(&mut self) {
        let c = match self.current {
            Some(c) if self.can_retreat => c,
            _ => panic!(
                "cursor retreat without a character to push back (position {})",
                self.position
            ),
        };
        self.position -= c.len_utf8();
        self.can_retreat = false;
    }

    /// Returns the next unread character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let rest = &self.source[self.position..];

        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => rest.chars().next(),
            None => None,
        }
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// Nothing is consumed on a mismatch, so no pushback is ever needed
    /// after a failed match.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the character last read.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Byte offset where the character last read starts.
    ///
    /// At end of input (or before the first read) this is the position itself.
    pub fn current_start(&self) -> usize {
        match self.current {
            Some(c) if self.can_retreat => self.position - c.len_utf8(),
            _ => self.position,
        }
    }

    /// Returns whether every character has been read.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unread remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
