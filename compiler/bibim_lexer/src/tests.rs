#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn num(n: i64) -> TokenKind {
    TokenKind::Number(BigInt::from(n))
}

#[test]
fn test_lex_cell() {
    assert_eq!(
        kinds("{[0; 5 + 3]}"),
        vec![
            TokenKind::LBrace,
            TokenKind::LBracket,
            num(0),
            TokenKind::Semi,
            num(5),
            TokenKind::Plus,
            num(3),
            TokenKind::RBracket,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_all_operators() {
    assert_eq!(
        kinds("+ - * / ( ) & | ! ?= > < : = ^ @"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Amp,
            TokenKind::Pipe,
            TokenKind::Bang,
            TokenKind::EqEq,
            TokenKind::Gt,
            TokenKind::Lt,
            TokenKind::Colon,
            TokenKind::Assign,
            TokenKind::Caret,
            TokenKind::At,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_number_with_interior_whitespace() {
    assert_eq!(kinds("1 000"), vec![num(1000), TokenKind::Eof]);
    assert_eq!(kinds("12\n34;"), vec![num(1234), TokenKind::Semi, TokenKind::Eof]);
}

#[test]
fn test_big_number() {
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        kinds("123456789012345678901234567890"),
        vec![TokenKind::Number(big), TokenKind::Eof]
    );
}

#[test]
fn test_split_equality() {
    assert_eq!(kinds("1 ? \n = 2"), vec![num(1), TokenKind::EqEq, num(2), TokenKind::Eof]);
    assert_eq!(kinds("1?=2"), vec![num(1), TokenKind::EqEq, num(2), TokenKind::Eof]);
    assert!(lex("1 ? 2").is_err());
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(kinds("~# note #~ 1"), vec![num(1), TokenKind::Eof]);
    assert_eq!(kinds("1 ~ # spaced # ~ +2"), vec![num(1), TokenKind::Plus, num(2), TokenKind::Eof]);
    assert_eq!(kinds("~#\nmulti\nline\n#~@"), vec![TokenKind::At, TokenKind::Eof]);
    assert_eq!(kinds("~##~"), vec![TokenKind::Eof]);
}

#[test]
fn test_unterminated_comment() {
    let err = lex("1 ~# never closed").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.span.start, 2);
}

#[test]
fn test_unexpected_character() {
    let err = lex("{[0; x]}").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.to_string(), "unexpected character `x`");
}

#[test]
fn test_spans() {
    let tokens = lex("@:12").unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[1].span, Span::new(1, 2));
    assert_eq!(tokens[2].span, Span::new(2, 4));
    assert_eq!(tokens[3].span, Span::new(4, 4));

    let tokens = lex("1 0 \n;").unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[1].span, Span::new(5, 6));
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn test_describe() {
    assert_eq!(TokenKind::EqEq.describe(), "`?=`");
    assert_eq!(num(7).describe(), "number `7`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}
