//! Operator matching helpers.

use bibim_ir::{BinaryOp, UnaryOp};
use bibim_lexer::TokenKind;

use crate::Parser;

impl Parser {
    pub(crate) fn match_logic_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Amp => Some(BinaryOp::And),
            TokenKind::Pipe => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Lt => Some(BinaryOp::Lt),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    /// `^` and `-` in prefix position.
    pub(crate) fn match_prefix_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Caret => Some(UnaryOp::Denominator),
            TokenKind::Minus => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
