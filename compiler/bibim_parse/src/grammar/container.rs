//! Program and container literals.

use bibim_ir::{Cell, ContainerRef};
use bibim_lexer::TokenKind;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// `program := container EOF`
    pub(crate) fn parse_program(&mut self) -> Result<ContainerRef, ParseError> {
        let root = self.parse_container()?;
        if !self.cursor.is_at_end() {
            let found = self.cursor.current_kind().describe();
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput { found },
                self.cursor.current_span(),
            ));
        }
        Ok(root)
    }

    /// `container := '{' cell* '}'`
    ///
    /// Each literal becomes one shared container, so every evaluation of the
    /// literal sees the same cells.
    pub(crate) fn parse_container(&mut self) -> Result<ContainerRef, ParseError> {
        self.cursor.expect(&TokenKind::LBrace, "`{`")?;
        let container = ContainerRef::default();
        while !self.cursor.check(&TokenKind::RBrace) {
            if !self.cursor.check(&TokenKind::LBracket) {
                return Err(self.cursor.unexpected("`[` or `}`"));
            }
            container.push(self.parse_cell()?);
        }
        self.cursor.advance();
        trace!(cells = container.len(), "parsed container");
        Ok(container)
    }

    /// `cell := '[' expr ';' expr ']'`
    fn parse_cell(&mut self) -> Result<Cell, ParseError> {
        let open = self.cursor.expect(&TokenKind::LBracket, "`[`")?;
        let key = self.parse_expr()?;
        self.cursor.expect(&TokenKind::Semi, "`;`")?;
        let value = self.parse_expr()?;
        let close = self.cursor.expect(&TokenKind::RBracket, "`]`")?;
        Ok(Cell::new(key, value).with_span(open.merge(close)))
    }
}
