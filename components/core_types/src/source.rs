//! Source positions for error reporting.

use std::fmt;

/// Represents a position in source code.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::from_offset("x;\n  y;", 5);
/// assert_eq!((pos.line, pos.column), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Byte offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Resolve a byte offset into a line/column position.
    ///
    /// Offsets past the end of `source` are clamped to its length.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1;
        let mut column = 1;
        for (index, ch) in source.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
