//! Character classification for the Garnet lexer.
//!
//! All predicates are ASCII-only and locale independent. Anything outside
//! these classes falls through to symbol classification.

/// Checks if a character is whitespace.
///
/// Whitespace is the ASCII set matched by `\s` in most regex dialects:
/// space, tab, line feed, vertical tab, form feed and carriage return.
///
/// # Example
///
/// ```
/// use garnetc_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{00A0}'));  // no-break space
/// assert!(!is_whitespace('_'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character starts a word.
///
/// Only ASCII letters qualify; an underscore on its own is punctuation.
///
/// # Example
///
/// ```
/// use garnetc_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('_'));
/// assert!(!is_alpha('7'));
/// assert!(!is_alpha('é'));
/// ```
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is a decimal digit.
///
/// # Example
///
/// ```
/// use garnetc_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('.'));
/// assert!(!is_digit('٣'));  // Arabic-Indic digit three
/// ```
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character continues a word.
///
/// # Example
///
/// ```
/// use garnetc_lex::classify::is_identifier_continuation;
///
/// assert!(is_identifier_continuation('a'));
/// assert!(is_identifier_continuation('8'));
/// assert!(is_identifier_continuation('_'));
/// assert!(!is_identifier_continuation('?'));
/// assert!(!is_identifier_continuation('!'));
/// ```
pub fn is_identifier_continuation(c: char) -> bool {
    is_alpha(c) || is_digit(c) || c == '_'
}

/// Checks if a character is the decimal point of a number literal.
pub fn is_decimal_point(c: char) -> bool {
    c == '.'
}
