//! Token cursor.

use bibim_ir::Span;
use bibim_lexer::{Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

static EOF: TokenKind = TokenKind::Eof;

/// Position in a token list that always ends with `Eof`.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));
        Cursor { tokens, pos: 0 }
    }

    pub(crate) fn current_kind(&self) -> &TokenKind {
        self.tokens
            .get(self.pos)
            .map_or(&EOF, |t| &t.kind)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or_else(Span::default, |t| t.span)
    }

    pub(crate) fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(t) => t.span,
            None => self.current_span(),
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Consume the current token and return its span. `Eof` is never consumed.
    pub(crate) fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }

    /// Consume `kind` or fail with an error naming `expected`.
    pub(crate) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &'static str,
    ) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the current token, which is not what the grammar wanted.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        let kind = if self.is_at_end() {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                found: self.current_kind().describe(),
                expected,
            }
        };
        ParseError::new(kind, self.current_span())
    }
}
