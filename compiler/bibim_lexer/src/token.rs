//! Token types.

use std::fmt;

use bibim_ir::{BigInt, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Decimal literal with interior whitespace removed.
    Number(BigInt),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `!`
    Bang,
    /// `?=`
    EqEq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `:`
    Colon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `;`
    Semi,
    /// `]`
    RBracket,
    /// `=`
    Assign,
    /// `^`
    Caret,
    /// `@`
    At,
    Eof,
}

impl TokenKind {
    /// Source spelling, or a description for tokens without a fixed one.
    pub fn describe(&self) -> String {
        let text = match self {
            TokenKind::Number(n) => return format!("number `{n}`"),
            TokenKind::Eof => return "end of input".to_string(),
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Bang => "!",
            TokenKind::EqEq => "?=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Colon => ":",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::Semi => ";",
            TokenKind::RBracket => "]",
            TokenKind::Assign => "=",
            TokenKind::Caret => "^",
            TokenKind::At => "@",
        };
        format!("`{text}`")
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
