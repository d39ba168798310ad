//! Parser error types and helpers

use crate::lexer::Token;
use core_types::{ParseError, SourcePosition};
use std::fmt::Display;

/// Create an unexpected token error, or an end-of-input error if `found` is the sentinel
pub fn unexpected_token(source: &str, found: &Token<'_>, expected: impl Display) -> ParseError {
    let position = SourcePosition::from_offset(source, found.offset);
    if found.is_eof() {
        return ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            position,
        };
    }
    ParseError::UnexpectedToken {
        found: found.value.to_string(),
        expected: expected.to_string(),
        position,
    }
}

/// Create an unexpected end of input error
pub fn unexpected_eof(source: &str, expected: impl Display) -> ParseError {
    ParseError::UnexpectedEndOfInput {
        expected: expected.to_string(),
        position: SourcePosition::from_offset(source, source.len()),
    }
}

/// Create an invalid assignment target error located at the assignment operator
pub fn invalid_assignment_target(source: &str, operator: &Token<'_>) -> ParseError {
    ParseError::InvalidAssignmentTarget {
        position: SourcePosition::from_offset(source, operator.offset),
    }
}

/// Create an error for a production that has no alternative starting with `found`
pub fn unexpected_production(
    source: &str,
    found: &Token<'_>,
    production: &'static str,
) -> ParseError {
    if found.is_eof() {
        return unexpected_eof(source, production);
    }
    ParseError::UnexpectedProduction {
        production,
        found: found.value.to_string(),
        position: SourcePosition::from_offset(source, found.offset),
    }
}

/// Create an error for nesting past `limit`, located at the token that would open the next level
pub fn nesting_too_deep(source: &str, found: &Token<'_>, limit: usize) -> ParseError {
    ParseError::NestingTooDeep {
        limit,
        position: SourcePosition::from_offset(source, found.offset),
    }
}
