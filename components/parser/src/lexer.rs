//! Letter tokenizer - turns source text into a lazy sequence of tokens
//!
//! Tokens are recognized by an ordered table of anchored regular expressions.
//! The first rule that matches at the cursor wins (this is not longest-match),
//! so keywords sit before identifiers and two-character operators before their
//! one-character prefixes.

use core_types::{LexError, SourcePosition};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// Letter keyword types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// let keyword
    Let,
    /// if keyword
    If,
    /// else keyword
    Else,
    /// true keyword
    True,
    /// false keyword
    False,
    /// null keyword
    Null,
    /// while keyword
    While,
    /// do keyword
    Do,
    /// for keyword
    For,
    /// def keyword
    Def,
    /// return keyword
    Return,
    /// class keyword
    Class,
    /// extends keyword
    Extends,
    /// super keyword
    Super,
    /// new keyword
    New,
    /// this keyword
    This,
}

impl Keyword {
    /// Every keyword, in the order the tokenizer tries them
    pub const ALL: [Keyword; 16] = [
        Keyword::Let,
        Keyword::If,
        Keyword::Else,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::While,
        Keyword::Do,
        Keyword::For,
        Keyword::Def,
        Keyword::Return,
        Keyword::Class,
        Keyword::Extends,
        Keyword::Super,
        Keyword::New,
        Keyword::This,
    ];

    /// Source spelling of the keyword
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::For => "for",
            Keyword::Def => "def",
            Keyword::Return => "return",
            Keyword::Class => "class",
            Keyword::Extends => "extends",
            Keyword::Super => "super",
            Keyword::New => "new",
            Keyword::This => "this",
        }
    }
}

/// Structural punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    /// Semicolon
    Semicolon,
    /// Opening brace
    LBrace,
    /// Closing brace
    RBrace,
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Comma
    Comma,
    /// Dot
    Dot,
    /// Opening bracket
    LBracket,
    /// Closing bracket
    RBracket,
}

impl Punctuator {
    const ALL: [Punctuator; 9] = [
        Punctuator::Semicolon,
        Punctuator::LBrace,
        Punctuator::RBrace,
        Punctuator::LParen,
        Punctuator::RParen,
        Punctuator::Comma,
        Punctuator::Dot,
        Punctuator::LBracket,
        Punctuator::RBracket,
    ];

    /// Source spelling of the punctuator
    pub fn as_str(self) -> &'static str {
        match self {
            Punctuator::Semicolon => ";",
            Punctuator::LBrace => "{",
            Punctuator::RBrace => "}",
            Punctuator::LParen => "(",
            Punctuator::RParen => ")",
            Punctuator::Comma => ",",
            Punctuator::Dot => ".",
            Punctuator::LBracket => "[",
            Punctuator::RBracket => "]",
        }
    }
}

/// Type tag of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Structural punctuation
    Punctuator(Punctuator),
    /// Reserved word
    Keyword(Keyword),
    /// Unsigned digit sequence
    Number,
    /// Word that is not a keyword
    Identifier,
    /// Single- or double-quoted string, quotes included in the lexeme
    String,
    /// `=`
    SimpleAssign,
    /// `+=`, `-=`, `*=`, `/=`
    ComplexAssign,
    /// `+`, `-`
    AdditiveOperator,
    /// `*`, `/`
    MultiplicativeOperator,
    /// `>`, `>=`, `<`, `<=`
    RelationalOperator,
    /// `==`, `!=`
    EqualityOperator,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Punctuator(p) => p.as_str(),
            TokenKind::Keyword(k) => k.as_str(),
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Token produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Type tag
    pub kind: TokenKind,
    /// Matched source text
    pub value: &'a str,
    /// Byte offset of the first character
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// End-of-input sentinel located at `offset`
    pub fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            value: "",
            offset,
        }
    }

    /// Whether this is the end-of-input sentinel
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// One entry of the lexical table. `kind == None` marks insignificant input.
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut table: Vec<(String, Option<TokenKind>)> = vec![
        (r"\s+".into(), None),
        (r"//.*".into(), None),
        (r"(?s)/\*.*?\*/".into(), None),
    ];

    table.extend(
        Punctuator::ALL
            .iter()
            .map(|&p| (regex::escape(p.as_str()), Some(TokenKind::Punctuator(p)))),
    );
    table.extend(
        Keyword::ALL
            .iter()
            .map(|&k| (format!(r"\b{}\b", k.as_str()), Some(TokenKind::Keyword(k)))),
    );

    table.extend([
        (r"[0-9]+".into(), Some(TokenKind::Number)),
        (r"[A-Za-z0-9_]+".into(), Some(TokenKind::Identifier)),
        (r"[=!]=".into(), Some(TokenKind::EqualityOperator)),
        (r"=".into(), Some(TokenKind::SimpleAssign)),
        (r"[*/+\-]=".into(), Some(TokenKind::ComplexAssign)),
        (r"[+\-]".into(), Some(TokenKind::AdditiveOperator)),
        (r"[*/]".into(), Some(TokenKind::MultiplicativeOperator)),
        (r"[><]=?".into(), Some(TokenKind::RelationalOperator)),
        (r"&&".into(), Some(TokenKind::LogicalAnd)),
        (r"\|\|".into(), Some(TokenKind::LogicalOr)),
        (r"!".into(), Some(TokenKind::LogicalNot)),
        (r#""[^"]*""#.into(), Some(TokenKind::String)),
        (r"'[^']*'".into(), Some(TokenKind::String)),
    ]);

    table
        .into_iter()
        .map(|(pattern, kind)| Rule {
            // The table is fixed at compile time; a bad pattern is a programming error.
            pattern: Regex::new(&format!("^(?:{pattern})")).expect("invalid lexical rule"),
            kind,
        })
        .collect()
});

/// Tokenizer for Letter source code
///
/// Pulls one significant token at a time; whitespace and comments are
/// skipped. Also usable as an [`Iterator`] over the remaining tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer bound to `source`
    pub fn new(source: &'a str) -> Self {
        let mut tokenizer = Self::default();
        tokenizer.init(source);
        tokenizer
    }

    /// Bind to a new source and rewind the cursor
    pub fn init(&mut self, source: &'a str) {
        self.source = source;
        self.cursor = 0;
        self.failed = false;
    }

    /// Current byte offset into the source
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits at the end of the source
    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Whether any input (possibly only whitespace) remains
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Get the next significant token, or the end-of-input sentinel
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            if !self.has_more_tokens() {
                return Ok(Token::eof(self.cursor));
            }

            let start = self.cursor;
            let rest = &self.source[start..];
            let matched = RULES
                .iter()
                .find_map(|rule| rule.pattern.find(rest).map(|m| (rule.kind, m.as_str())));

            let Some((kind, value)) = matched else {
                self.failed = true;
                return Err(LexError {
                    character: rest.chars().next().unwrap_or_default(),
                    position: SourcePosition::from_offset(self.source, start),
                });
            };

            self.cursor += value.len();

            if let Some(kind) = kind {
                trace!(%kind, value, offset = start, "token");
                return Ok(Token {
                    kind,
                    value,
                    offset: start,
                });
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}
