//! Shared location and error types for the Letter front-end.
//!
//! This crate holds the types that every stage of the pipeline agrees on:
//! where something happened in the source text, and what went wrong.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Line/column/offset of a character in the source
//! - [`LexError`] - No lexical rule matched at the cursor
//! - [`ParseError`] - The token stream does not match the grammar
//! - [`SyntaxError`] - Either of the above, as returned by `parse`
//!
//! # Examples
//!
//! ```
//! use core_types::{LexError, SourcePosition, SyntaxError};
//!
//! let position = SourcePosition::from_offset("let a = #;", 8);
//! assert_eq!(position.column, 9);
//!
//! let error: SyntaxError = LexError {
//!     character: '#',
//!     position,
//! }
//! .into();
//! assert_eq!(error.position().offset, 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{LexError, ParseError, SyntaxError};
pub use source::SourcePosition;
