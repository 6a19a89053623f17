//! Parser for Bibim programs.
//!
//! A program is a single container literal:
//!
//! ```text
//! program   := container EOF
//! container := '{' cell* '}'
//! cell      := '[' expr ';' expr ']'
//! ```
//!
//! Expressions are parsed by recursive descent, one function per precedence
//! level (lowest first): assignment, `& |`, prefix `!`, `?= > <`, `+ -`, `*`,
//! `:`, prefix `^ -`, `/`, then primaries.

mod cursor;
mod error;
mod grammar;

use bibim_ir::ContainerRef;
use bibim_lexer::Token;
use tracing::debug;

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parse source text into the root container.
pub fn parse(source: &str) -> Result<ContainerRef, ParseError> {
    let tokens = bibim_lexer::lex(source)?;
    parse_tokens(tokens)
}

/// Parse an already-lexed token list (must end with `Eof`).
pub fn parse_tokens(tokens: Vec<Token>) -> Result<ContainerRef, ParseError> {
    let mut parser = Parser::new(tokens);
    let root = parser.parse_program()?;
    debug!(cells = root.len(), "parsed program");
    Ok(root)
}

/// Recursive-descent parser state.
pub(crate) struct Parser {
    cursor: Cursor,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }
}
