//! Parse error types for the clite parser
//!
//! Parse errors are reported through the parser's reporter rather than
//! returned to the caller; these types carry the message and position.

use crate::lexer::{Token, TokenType};
use clite_common::Position;
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected} in {context}, found {found}")]
    UnexpectedToken {
        expected: TokenType,
        context: &'static str,
        found: Token,
    },

    #[error("Expected statement, found {found}")]
    ExpectedStatement { found: Token },

    #[error("Expected primary expression, found {found}")]
    ExpectedPrimary { found: Token },

    #[error("Expected type, found {found}")]
    ExpectedType { found: Token },

    #[error("Invalid {kind} literal `{text}`")]
    InvalidLiteral {
        kind: TokenType,
        text: String,
        position: Position,
    },

    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    /// Where in the source the error was detected
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::ExpectedStatement { found }
            | ParseError::ExpectedPrimary { found }
            | ParseError::ExpectedType { found } => found.position,
            ParseError::InvalidLiteral { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }
}
