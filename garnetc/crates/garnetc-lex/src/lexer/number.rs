//! Number literal lexing.
//!
//! A number is a run of decimal digits with at most one decimal point. There
//! are no exponents, radix prefixes or signs.

use crate::classify::{is_decimal_point, is_digit};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number whose first digit has already been read.
    ///
    /// The first decimal point is absorbed; a second one ends the literal and
    /// is pushed back, so `1283.20.10` lexes as `1283.20`, `.`, `10`. A
    /// trailing point with no digits after it stays in the literal (`5.`).
    pub(crate) fn lex_number(&mut self, start: usize) -> Token<'a> {
        let mut seen_decimal_point = false;

        while let Some(c) = self.cursor.advance() {
            if is_digit(c) {
                continue;
            }
            if is_decimal_point(c) && !seen_decimal_point {
                seen_decimal_point = true;
                continue;
            }
            self.cursor.retreat();
            break;
        }

        Token::new(TokenKind::Number, self.cursor.slice_from(start))
    }
}
