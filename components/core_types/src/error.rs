//! Lexical and syntactic error types.
//!
//! Both kinds are fatal for the `parse` call that raised them: there is no
//! recovery and no partial result.

use crate::SourcePosition;
use thiserror::Error;

/// No lexical rule matched at the tokenizer's cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected token: \"{character}\" at {position}")]
pub struct LexError {
    /// The character the tokenizer could not start a token with
    pub character: char,
    /// Where that character sits in the source
    pub position: SourcePosition,
}

/// The token stream does not match the shape the grammar expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token other than the expected one was found
    #[error("Unexpected token: \"{found}\", expected: \"{expected}\" at {position}")]
    UnexpectedToken {
        /// Lexeme of the offending token
        found: String,
        /// Tag that the grammar required
        expected: String,
        /// Start of the offending token
        position: SourcePosition,
    },

    /// Input ended while a token was still required
    #[error("Unexpected end of input, expected: \"{expected}\" at {position}")]
    UnexpectedEndOfInput {
        /// Tag or production that the grammar required
        expected: String,
        /// End of the source
        position: SourcePosition,
    },

    /// The left operand of an assignment is not an identifier or member access
    #[error("Invalid left-hand side in assignment expression at {position}")]
    InvalidAssignmentTarget {
        /// Position of the assignment operator
        position: SourcePosition,
    },

    /// No alternative of a production starts with the current token
    #[error("{production}: unexpected token \"{found}\" at {position}")]
    UnexpectedProduction {
        /// Production being parsed (e.g. `PrimaryExpression`)
        production: &'static str,
        /// Lexeme of the offending token
        found: String,
        /// Start of the offending token
        position: SourcePosition,
    },

    /// Statements or expressions are nested beyond the parser's depth limit
    #[error("Nesting is too deep (maximum {limit} levels) at {position}")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
        /// Start of the token that would open one level too many
        position: SourcePosition,
    },
}

impl ParseError {
    /// Position the error refers to
    pub fn position(&self) -> &SourcePosition {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEndOfInput { position, .. }
            | ParseError::InvalidAssignmentTarget { position }
            | ParseError::UnexpectedProduction { position, .. }
            | ParseError::NestingTooDeep { position, .. } => position,
        }
    }
}

/// Error returned by `parse`: a lexical or a syntactic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Tokenizer failure
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Parser failure
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Position the error refers to
    pub fn position(&self) -> &SourcePosition {
        match self {
            SyntaxError::Lex(e) => &e.position,
            SyntaxError::Parse(e) => e.position(),
        }
    }

    /// True if the tokenizer raised this error
    pub fn is_lex_error(&self) -> bool {
        matches!(self, SyntaxError::Lex(_))
    }
}
