//! Integration test suite for the Letter front-end
//!
//! These tests drive source text through the tokenizer and parser and
//! compare the serialized AST against the expected JSON tree.

use serde_json::Value;

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use letter_parser;
}

/// Parse `source` and serialize the resulting program to JSON
///
/// Panics with the syntax error if `source` does not parse.
pub fn ast_json(source: &str) -> Value {
    let program = letter_parser::parse(source)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    serde_json::to_value(&program).expect("AST serializes to JSON")
}

/// Parse `source` and return the rendered syntax error message
///
/// Panics if `source` parses successfully.
pub fn error_message(source: &str) -> String {
    match letter_parser::parse(source) {
        Ok(program) => panic!("expected {source:?} to fail, got {program:?}"),
        Err(e) => e.to_string(),
    }
}

/// Wrap a single statement in the `Program` envelope
pub fn program(statement: Value) -> Value {
    serde_json::json!({ "type": "Program", "body": [statement] })
}

/// Wrap an expression in an `ExpressionStatement` inside a `Program`
pub fn expression_program(expression: Value) -> Value {
    program(serde_json::json!({
        "type": "ExpressionStatement",
        "expression": expression,
    }))
}
