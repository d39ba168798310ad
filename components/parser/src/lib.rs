//! Letter Parser Component
//!
//! Tokenizer and LL(1) recursive descent parser for Letter, a small
//! JavaScript-like language. The result is an ESTree-flavoured AST that
//! serializes to JSON with a `type` tag on every node.
//!
//! # Overview
//!
//! - [`Tokenizer`] - Splits source text into [`Token`]s using an ordered regex table
//! - [`Parser`] - Recursive descent parser producing a [`Program`]
//! - [`ast`] - AST node types
//!
//! # Example
//!
//! ```
//! use letter_parser::{Parser, Statement};
//!
//! let mut parser = Parser::new();
//! let program = parser.parse("def square(x) { return x * x; }").unwrap();
//! assert!(matches!(program.body[0], Statement::Function(_)));
//!
//! let json = serde_json::to_value(&program).unwrap();
//! assert_eq!(json["body"][0]["type"], "FunctionDeclaration");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;


pub use ast::{Expression, Program, Statement};
pub use core_types::{LexError, ParseError, SourcePosition, SyntaxError};
pub use lexer::{Keyword, Punctuator, Token, TokenKind, Tokenizer};
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
