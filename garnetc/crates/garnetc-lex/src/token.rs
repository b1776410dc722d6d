//! Token definitions for the Garnet lexer.
//!
//! The set of token kinds is closed: two literal kinds, the fixed
//! punctuation, the extensible operators in their single and doubled forms,
//! and the `Char` fallback for everything else.

use std::fmt;

use serde::Serialize;

/// The kind of a token.
///
/// Kinds serialize to their upper-snake names (`L_PAREN`, `AT_AT`, ...),
/// which are also what [`TokenKind::as_str`] and `Display` produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // ========================================================================
    // Literals
    // ========================================================================
    /// Identifier or reserved word: `[A-Za-z][A-Za-z0-9_]*`
    Word,
    /// Digits with at most one decimal point: `128`, `1283.20`, `5.`
    Number,

    // ========================================================================
    // Fixed punctuation
    // ========================================================================
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `#`
    HashTag,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `.`
    Dot,
    /// `[`
    LSquareParen,
    /// `]`
    RSquareParen,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `,`
    Comma,
    /// `%`
    Percent,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `;`
    SemiColon,
    /// `!`
    ExclamationMark,
    /// `?`
    QuestionMark,
    /// `\`
    BackwardSlash,
    /// `` ` ``
    BackTick,
    /// `_` when it does not continue a word
    Underscore,
    /// `^`
    Caret,

    // ========================================================================
    // Extensible operators
    // ========================================================================
    /// `&`
    AndSign,
    /// `&&`
    AndSignAndSign,
    /// `=`
    Equals,
    /// `==`
    EqualsEquals,
    /// `|`
    Pipe,
    /// `||`
    PipePipe,
    /// `-`
    Minus,
    /// `-=`
    MinusEquals,
    /// `+`
    Plus,
    /// `+=`
    PlusEquals,
    /// `*`
    Multiply,
    /// `*=`
    MultiplyEquals,
    /// `/`
    Divide,
    /// `/=`
    DivideEquals,
    /// `@`
    At,
    /// `@@`
    AtAt,

    // ========================================================================
    // Fallback
    // ========================================================================
    /// Any character no other rule claims.
    Char,
}

impl TokenKind {
    /// Every token kind, in table order.
    pub const ALL: [TokenKind; 41] = [
        TokenKind::Word,
        TokenKind::Number,
        TokenKind::Colon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::HashTag,
        TokenKind::SingleQuote,
        TokenKind::DoubleQuote,
        TokenKind::Dot,
        TokenKind::LSquareParen,
        TokenKind::RSquareParen,
        TokenKind::LCurly,
        TokenKind::RCurly,
        TokenKind::Comma,
        TokenKind::Percent,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::SemiColon,
        TokenKind::ExclamationMark,
        TokenKind::QuestionMark,
        TokenKind::BackwardSlash,
        TokenKind::BackTick,
        TokenKind::Underscore,
        TokenKind::Caret,
        TokenKind::AndSign,
        TokenKind::AndSignAndSign,
        TokenKind::Equals,
        TokenKind::EqualsEquals,
        TokenKind::Pipe,
        TokenKind::PipePipe,
        TokenKind::Minus,
        TokenKind::MinusEquals,
        TokenKind::Plus,
        TokenKind::PlusEquals,
        TokenKind::Multiply,
        TokenKind::MultiplyEquals,
        TokenKind::Divide,
        TokenKind::DivideEquals,
        TokenKind::At,
        TokenKind::AtAt,
        TokenKind::Char,
    ];

    /// Returns the upper-snake name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Colon => "COLON",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::HashTag => "HASH_TAG",
            TokenKind::SingleQuote => "SINGLE_QUOTE",
            TokenKind::DoubleQuote => "DOUBLE_QUOTE",
            TokenKind::Dot => "DOT",
            TokenKind::LSquareParen => "L_SQUARE_PAREN",
            TokenKind::RSquareParen => "R_SQUARE_PAREN",
            TokenKind::LCurly => "L_CURLY",
            TokenKind::RCurly => "R_CURLY",
            TokenKind::Comma => "COMMA",
            TokenKind::Percent => "PERCENT",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::SemiColon => "SEMI_COLON",
            TokenKind::ExclamationMark => "EXCLAMATION_MARK",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::BackwardSlash => "BACKWARD_SLASH",
            TokenKind::BackTick => "BACK_TICK",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Caret => "CARET",
            TokenKind::AndSign => "AND_SIGN",
            TokenKind::AndSignAndSign => "AND_SIGN_AND_SIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::EqualsEquals => "EQUALS_EQUALS",
            TokenKind::Pipe => "PIPE",
            TokenKind::PipePipe => "PIPE_PIPE",
            TokenKind::Minus => "MINUS",
            TokenKind::MinusEquals => "MINUS_EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::PlusEquals => "PLUS_EQUALS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::MultiplyEquals => "MULTIPLY_EQUALS",
            TokenKind::Divide => "DIVIDE",
            TokenKind::DivideEquals => "DIVIDE_EQUALS",
            TokenKind::At => "AT",
            TokenKind::AtAt => "AT_AT",
            TokenKind::Char => "CHAR",
        }
    }

    /// Returns the fixed source text of this kind.
    ///
    /// `None` for kinds whose text varies: `Word`, `Number` and `Char`.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Word | TokenKind::Number | TokenKind::Char => return None,
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::HashTag => "#",
            TokenKind::SingleQuote => "'",
            TokenKind::DoubleQuote => "\"",
            TokenKind::Dot => ".",
            TokenKind::LSquareParen => "[",
            TokenKind::RSquareParen => "]",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::Percent => "%",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::SemiColon => ";",
            TokenKind::ExclamationMark => "!",
            TokenKind::QuestionMark => "?",
            TokenKind::BackwardSlash => "\\",
            TokenKind::BackTick => "`",
            TokenKind::Underscore => "_",
            TokenKind::Caret => "^",
            TokenKind::AndSign => "&",
            TokenKind::AndSignAndSign => "&&",
            TokenKind::Equals => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::Minus => "-",
            TokenKind::MinusEquals => "-=",
            TokenKind::Plus => "+",
            TokenKind::PlusEquals => "+=",
            TokenKind::Multiply => "*",
            TokenKind::MultiplyEquals => "*=",
            TokenKind::Divide => "/",
            TokenKind::DivideEquals => "/=",
            TokenKind::At => "@",
            TokenKind::AtAt => "@@",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a single punctuation character in the fixed table.
///
/// # Example
///
/// ```
/// use garnetc_lex::token::{punctuation_from_char, TokenKind};
///
/// assert_eq!(punctuation_from_char('('), Some(TokenKind::LParen));
/// assert_eq!(punctuation_from_char('+'), None);  // extensible operator
/// ```
pub fn punctuation_from_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        ':' => TokenKind::Colon,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '#' => TokenKind::HashTag,
        '\'' => TokenKind::SingleQuote,
        '"' => TokenKind::DoubleQuote,
        '.' => TokenKind::Dot,
        '[' => TokenKind::LSquareParen,
        ']' => TokenKind::RSquareParen,
        '{' => TokenKind::LCurly,
        '}' => TokenKind::RCurly,
        ',' => TokenKind::Comma,
        '%' => TokenKind::Percent,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        ';' => TokenKind::SemiColon,
        '!' => TokenKind::ExclamationMark,
        '?' => TokenKind::QuestionMark,
        '\\' => TokenKind::BackwardSlash,
        '`' => TokenKind::BackTick,
        '_' => TokenKind::Underscore,
        '^' => TokenKind::Caret,
        _ => return None,
    };
    Some(kind)
}

/// An operator that has a single and a doubled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundOperator {
    /// Character that, directly following the operator, forms the doubled kind.
    pub extension: char,
    /// Kind emitted when the extension does not follow.
    pub single: TokenKind,
    /// Kind emitted when the extension follows.
    pub doubled: TokenKind,
}

impl CompoundOperator {
    const fn new(extension: char, single: TokenKind, doubled: TokenKind) -> Self {
        Self {
            extension,
            single,
            doubled,
        }
    }
}

/// Looks up an extensible operator.
///
/// # Example
///
/// ```
/// use garnetc_lex::token::{compound_operator_from_char, TokenKind};
///
/// let op = compound_operator_from_char('@').unwrap();
/// assert_eq!(op.extension, '@');
/// assert_eq!(op.doubled, TokenKind::AtAt);
///
/// let op = compound_operator_from_char('-').unwrap();
/// assert_eq!(op.extension, '=');
/// assert_eq!(op.doubled, TokenKind::MinusEquals);
///
/// assert!(compound_operator_from_char('(').is_none());
/// ```
pub fn compound_operator_from_char(c: char) -> Option<CompoundOperator> {
    let op = match c {
        '&' => CompoundOperator::new('&', TokenKind::AndSign, TokenKind::AndSignAndSign),
        '=' => CompoundOperator::new('=', TokenKind::Equals, TokenKind::EqualsEquals),
        '|' => CompoundOperator::new('|', TokenKind::Pipe, TokenKind::PipePipe),
        '-' => CompoundOperator::new('=', TokenKind::Minus, TokenKind::MinusEquals),
        '+' => CompoundOperator::new('=', TokenKind::Plus, TokenKind::PlusEquals),
        '*' => CompoundOperator::new('=', TokenKind::Multiply, TokenKind::MultiplyEquals),
        '/' => CompoundOperator::new('=', TokenKind::Divide, TokenKind::DivideEquals),
        '@' => CompoundOperator::new('@', TokenKind::At, TokenKind::AtAt),
        _ => return None,
    };
    Some(op)
}

/// A classified span of source text.
///
/// `value` borrows the exact source text the token was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// The token kind.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// The source text of the token.
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token of `kind` covering `value`.
    pub fn new(kind: TokenKind, value: &'a str) -> Self {
        Self { kind, value }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
