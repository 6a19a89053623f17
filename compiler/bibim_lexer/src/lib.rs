//! Lexer for Bibim using logos.
//!
//! Produces a flat token list terminated by [`TokenKind::Eof`]. Whitespace and
//! `~# ... #~` comments are dropped. Number literals may contain whitespace
//! between digits (`1 000` is one thousand), and `?=` may be split by
//! whitespace.

use std::fmt;

use bibim_ir::{BigInt, Span};
use logos::{FilterResult, Logos};

mod token;

pub use token::{Token, TokenKind};

/// Why lexing stopped.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated comment")]
    UnterminatedComment,
}

/// A lexing failure with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// Offending source text.
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnexpectedCharacter => {
                write!(f, "unexpected character `{}`", self.text)
            }
            LexErrorKind::UnterminatedComment => f.write_str("unterminated comment"),
        }
    }
}

impl std::error::Error for LexError {}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"~[ \t\r\n\f]*#", skip_comment)]
    Comment,

    #[regex(r"[0-9][0-9 \t\r\n\f]*", number_value)]
    Number(BigInt),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("!")]
    Bang,
    #[regex(r"\?[ \t\r\n\f]*=")]
    EqEq,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(":")]
    Colon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token(";")]
    Semi,
    #[token("]")]
    RBracket,
    #[token("=")]
    Assign,
    #[token("^")]
    Caret,
    #[token("@")]
    At,
}

fn number_value(lex: &mut logos::Lexer<RawToken>) -> Option<BigInt> {
    let digits: String = lex.slice().chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Consume a comment body up to `#`, optional whitespace, then `~`.
fn skip_comment(lex: &mut logos::Lexer<RawToken>) -> FilterResult<(), LexErrorKind> {
    let rest = lex.remainder().as_bytes();
    for (i, byte) in rest.iter().enumerate() {
        if *byte != b'#' {
            continue;
        }
        let close = rest[i + 1..]
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .map(|offset| i + 1 + offset);
        if let Some(close) = close {
            if rest[close] == b'~' {
                lex.bump(close + 1);
                return FilterResult::Skip;
            }
        }
    }
    lex.bump(rest.len());
    FilterResult::Error(LexErrorKind::UnterminatedComment)
}

/// Tokenize `source`. The last token is always [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let raw = result.map_err(|kind| LexError {
            kind,
            span: Span::from_range(range.clone()),
            text: lexer.slice().to_string(),
        })?;
        // Number literals swallow trailing whitespace; keep it out of the span.
        let end = range.start + lexer.slice().trim_end().len();
        tokens.push(Token::new(convert(raw), Span::from_range(range.start..end)));
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    Ok(tokens)
}

fn convert(raw: RawToken) -> TokenKind {
    match raw {
        // `skip_comment` never emits; a comment can only end the stream.
        RawToken::Comment => TokenKind::Eof,
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::Semi => TokenKind::Semi,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Caret => TokenKind::Caret,
        RawToken::At => TokenKind::At,
    }
}

#[cfg(test)]
mod tests;
