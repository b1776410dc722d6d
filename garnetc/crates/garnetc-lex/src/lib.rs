//! garnetc-lex - Lexical Analyzer for the Garnet Programming Language
//!
//! This crate turns Garnet source text (a Ruby-like language) into a flat,
//! ordered sequence of typed tokens. It stops at token production: there is
//! no parser, no keyword table and no comment or string handling.
//!
//! # Example Usage
//!
//! ```
//! use garnetc_lex::{tokenize, Lexer, Token, TokenKind};
//!
//! let source = "@options = {}";
//!
//! // Tokenize the whole source at once
//! let tokens = tokenize(source);
//! assert_eq!(tokens[0], Token::new(TokenKind::At, "@"));
//! assert_eq!(tokens[1], Token::new(TokenKind::Word, "options"));
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::At));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, symbol tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with single-step pushback
//! - [`classify`] - Character classification predicates
//!
//! # Token Categories
//!
//! ## Words
//!
//! `[A-Za-z][A-Za-z0-9_]*`. Reserved words (`class`, `def`, `end`, ...) are
//! ordinary words.
//!
//! ## Numbers
//!
//! Decimal digits with at most one decimal point: `128`, `1283.20`, `5.`.
//! A second point ends the literal.
//!
//! ## Punctuation
//!
//! `: ( ) # ' " . [ ] { } , % < > ; ! ? \ ` _ ^`, each its own token.
//! `#` is not a comment and quotes do not start strings.
//!
//! ## Extensible operators
//!
//! - **Doubled**: `&&`, `==`, `||`, `@@`
//! - **Assignment**: `-=`, `+=`, `*=`, `/=`
//! - **Single**: `&`, `=`, `|`, `-`, `+`, `*`, `/`, `@`
//!
//! ## Fallback
//!
//! Any other character becomes a `CHAR` token carrying that character.
//! Tokenizing never fails.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::{is_alpha, is_digit, is_identifier_continuation, is_whitespace};
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{
    compound_operator_from_char, punctuation_from_char, CompoundOperator, Token, TokenKind,
};
