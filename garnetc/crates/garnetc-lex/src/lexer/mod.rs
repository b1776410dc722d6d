//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch loop
//! - `word` - Identifier and reserved-word lexing
//! - `number` - Number literal lexing
//! - `symbol` - Punctuation and operator lexing

mod core;
mod number;
mod symbol;
mod word;

pub use self::core::{tokenize, Lexer};
