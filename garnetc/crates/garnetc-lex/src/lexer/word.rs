//! Word lexing.
//!
//! Identifiers and reserved words are scanned the same way and both become
//! `TokenKind::Word`; telling `def` from `define` is left to whatever
//! consumes the token stream.

use crate::classify::is_identifier_continuation;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a word whose first letter has already been read.
    ///
    /// Letters, digits and underscores continue the word. The first other
    /// character is pushed back for the main loop.
    pub(crate) fn lex_word(&mut self, start: usize) -> Token<'a> {
        while let Some(c) = self.cursor.advance() {
            if !is_identifier_continuation(c) {
                self.cursor.retreat();
                break;
            }
        }

        Token::new(TokenKind::Word, self.cursor.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::tokenize;

    fn word(value: &str) -> Token<'_> {
        Token::new(TokenKind::Word, value)
    }

    #[test]
    fn test_word_at_end_of_file() {
        let source = "some_crazy8_worD";
        assert_eq!(tokenize(source), vec![word(source)]);
    }

    #[test]
    fn test_word_not_at_end_of_file() {
        assert_eq!(tokenize("some_crazy8_worD "), vec![word("some_crazy8_worD")]);
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(tokenize("x"), vec![word("x")]);
    }

    #[test]
    fn test_reserved_words_are_words() {
        let tokens = tokenize("class def end module");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(tokenize("RuboCop"), vec![word("RuboCop")]);
    }

    #[test]
    fn test_trailing_punctuation_is_separate() {
        assert_eq!(
            tokenize("create!"),
            vec![word("create"), Token::new(TokenKind::ExclamationMark, "!")]
        );
        assert_eq!(
            tokenize("foo?"),
            vec![word("foo"), Token::new(TokenKind::QuestionMark, "?")]
        );
    }

    #[test]
    fn test_leading_underscore_is_punctuation() {
        assert_eq!(
            tokenize("_foo"),
            vec![Token::new(TokenKind::Underscore, "_"), word("foo")]
        );
    }

    #[test]
    fn test_digits_continue_a_word() {
        assert_eq!(tokenize("utf8 x2y"), vec![word("utf8"), word("x2y")]);
    }

    #[test]
    fn test_non_ascii_letter_ends_word() {
        assert_eq!(
            tokenize("caféx"),
            vec![word("caf"), Token::new(TokenKind::Char, "é"), word("x")]
        );
    }
}
