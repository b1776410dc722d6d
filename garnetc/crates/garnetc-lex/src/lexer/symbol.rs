//! Punctuation and operator lexing.
//!
//! Fixed punctuation maps straight to a kind. The extensible operators
//! (`& = | - + * / @`) take their doubled form when the extension character
//! follows immediately, otherwise their single form.

use tracing::trace;

use crate::token::{compound_operator_from_char, punctuation_from_char, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the symbol `c`, which has already been read.
    pub(crate) fn lex_symbol(&mut self, c: char, start: usize) -> Token<'a> {
        let kind = if let Some(kind) = punctuation_from_char(c) {
            kind
        } else if let Some(op) = compound_operator_from_char(c) {
            if self.cursor.match_char(op.extension) {
                op.doubled
            } else {
                op.single
            }
        } else {
            trace!(character = ?c, offset = start, "no rule for character, emitting CHAR");
            TokenKind::Char
        };

        Token::new(kind, self.cursor.slice_from(start))
    }
}
