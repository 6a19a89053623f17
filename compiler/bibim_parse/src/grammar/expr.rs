//! Expression parsing.
//!
//! One method per precedence level, lowest first. Binary levels loop so
//! that operators associate to the left; assignment recurses so that it
//! associates to the right.

use bibim_ir::{BinaryOp, Expr, Func, Number, UnaryOp};
use bibim_lexer::TokenKind;
use bibim_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `target = value`, where `target` must be a `container:key` read.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let target = self.parse_logic()?;
        if !self.cursor.check(&TokenKind::Assign) {
            return Ok(target);
        }
        let target_span = start.merge(self.cursor.previous_span());
        let Some((container, key)) = as_get(&target) else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                target_span,
            ));
        };
        self.cursor.advance();
        let value = self.parse_expr()?;
        Ok(Expr::assign(container, key, value))
    }

    /// `&` and `|`, left associative, sharing one level.
    fn parse_logic(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while let Some(op) = self.match_logic_op() {
            self.cursor.advance();
            let right = self.parse_not()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Prefix `!`, binding looser than comparison.
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(&TokenKind::Bang) {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(Expr::unary(UnaryOp::Not, operand));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_get()?;
        while self.cursor.check(&TokenKind::Star) {
            self.cursor.advance();
            let right = self.parse_get()?;
            left = Expr::binary(BinaryOp::Mul, left, right);
        }
        Ok(left)
    }

    /// `container : key`, left associative (`a:b:c` reads `(a:b):c`).
    fn parse_get(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;
        while self.cursor.check(&TokenKind::Colon) {
            self.cursor.advance();
            let key = self.parse_prefix()?;
            left = Expr::get(left, key);
        }
        Ok(left)
    }

    /// Prefix `^` (denominator) and `-` (negation).
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_prefix_op() {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_prefix())?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_division()
    }

    /// `/` binds tightest, so `1/2` reads as a rational literal.
    fn parse_division(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;
        while self.cursor.check(&TokenKind::Slash) {
            self.cursor.advance();
            let right = self.parse_primary()?;
            left = Expr::binary(BinaryOp::Div, left, right);
        }
        Ok(left)
    }

    /// Number, container literal, parenthesized expression, or `@`.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Number(n) => {
                let n = Number::integer(n.clone());
                self.cursor.advance();
                Ok(Expr::number(n))
            }
            TokenKind::LBrace => {
                let container = ensure_sufficient_stack(|| self.parse_container())?;
                Ok(Expr::container(container))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::At => {
                self.cursor.advance();
                Ok(Expr::memory())
            }
            _ => Err(self.cursor.unexpected("an expression")),
        }
    }
}

/// Split a `container:key` read into its parts.
fn as_get(expr: &Expr) -> Option<(Expr, Expr)> {
    match expr {
        Expr::Op(func) => match func.as_ref() {
            Func::Get { container, key } => Some((container.clone(), key.clone())),
            _ => None,
        },
        Expr::Literal(_) => None,
    }
}
