//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the dispatch loop.

use tracing::debug;

use crate::classify::{is_alpha, is_digit, is_whitespace};
use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for Garnet source code.
///
/// The lexer reads the source one character at a time, skipping whitespace
/// and dispatching on the first character of each token: letters start a
/// word, digits start a number, and anything else is resolved through the
/// symbol table.
///
/// # Example
///
/// ```
/// use garnetc_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("x += 1");
///
/// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Word, "x")));
/// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::PlusEquals, "+=")));
/// assert_eq!(lexer.next_token(), Some(Token::new(TokenKind::Number, "1")));
/// assert_eq!(lexer.next_token(), None);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the raw source this lexer was created with.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// Whitespace between tokens is consumed and discarded.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let c = self.cursor.advance()?;
            if is_whitespace(c) {
                continue;
            }

            let start = self.cursor.current_start();
            let token = if is_alpha(c) {
                self.lex_word(start)
            } else if is_digit(c) {
                self.lex_number(start)
            } else {
                self.lex_symbol(c, start)
            };
            return Some(token);
        }
    }

    /// Consumes the whole source and returns every token in order.
    pub fn tokenize(self) -> Vec<Token<'a>> {
        let len = self.source().len();
        let tokens: Vec<Token<'a>> = self.collect();
        debug!(bytes = len, tokens = tokens.len(), "tokenized source");
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes `source` in one pass.
///
/// Never fails: characters without a rule of their own become
/// [`TokenKind::Char`](crate::TokenKind::Char) tokens.
///
/// # Example
///
/// ```
/// use garnetc_lex::{tokenize, Token, TokenKind};
///
/// let tokens = tokenize("@@count == 0");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::new(TokenKind::AtAt, "@@"),
///         Token::new(TokenKind::Word, "count"),
///         Token::new(TokenKind::EqualsEquals, "=="),
///         Token::new(TokenKind::Number, "0"),
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}
