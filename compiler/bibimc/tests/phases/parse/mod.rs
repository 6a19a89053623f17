//! Lexer and parser phase tests.

use bibim_diagnostic::ErrorCode;
use bibim_lexer::{lex, TokenKind};
use bibim_ir::BigInt;
use pretty_assertions::assert_eq;

use crate::common::cell_value;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn digits_may_be_grouped_with_whitespace() {
    assert_eq!(
        kinds("12 345\n6"),
        vec![TokenKind::Number(BigInt::from(123_456)), TokenKind::Eof]
    );
}

#[test]
fn comments_may_span_lines_and_sit_anywhere() {
    let source = "~ # header\nstill comment # ~{[0; ~#inline#~ 1]}";
    assert_eq!(cell_value("~#a#~ 1 ~#b#~ + 2"), "(1 + 2)");
    let program = bibim_parse::parse(source).unwrap();
    assert_eq!(program.len(), 1);
}

#[test]
fn equality_may_be_spaced() {
    assert_eq!(cell_value("1 ?   = 2"), "(1 ?= 2)");
}

#[test]
fn precedence_ladder() {
    assert_eq!(cell_value("@:1 = 1 | 2 & 3"), "@:1 = ((1 | 2) & 3)");
    assert_eq!(cell_value("!1 + 2 > 3"), "!((1 + 2) > 3)");
    assert_eq!(cell_value("1 + 2 * 3:4"), "(1 + (2 * 3:4))");
    assert_eq!(cell_value("@:^3/4"), "@:^(3 / 4)");
    assert_eq!(cell_value("-1/2/3"), "-((1 / 2) / 3)");
}

#[test]
fn whole_program_shape() {
    let program = bibim_parse::parse(include_str!("../../../../../demos/countdown.bibim")).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.cell(3).unwrap().key().to_string(), "1000");
}

#[test]
fn parse_failures_map_to_parser_codes() {
    let cases = [
        ("{[0; 1]", ErrorCode::E1002),
        ("{[0; 1 + ]}", ErrorCode::E1001),
        ("{[0; 1 = 1]}", ErrorCode::E1003),
        ("{}}", ErrorCode::E1004),
        ("{[0; 1 % 2]}", ErrorCode::E0001),
    ];
    for (source, code) in cases {
        let err = bibim_parse::parse(source).unwrap_err();
        let diag = bibimc::reporting::parse_error_diagnostic(&err);
        assert_eq!(diag.code, code, "for {source}");
    }
}
