//! Expression AST Integration Tests
//!
//! Source -> Tokenizer -> Parser -> AST -> JSON, compared against full trees.

use integration_tests::{ast_json, expression_program};
use serde_json::json;

fn ident(name: &str) -> serde_json::Value {
    json!({ "type": "Identifier", "name": name })
}

fn number(value: i64) -> serde_json::Value {
    json!({ "type": "NumericLiteral", "value": value })
}

#[test]
fn test_numeric_literal() {
    assert_eq!(ast_json("42;"), expression_program(number(42)));
}

#[test]
fn test_string_literals_both_quotes() {
    assert_eq!(
        ast_json(r#""hello";"#),
        expression_program(json!({ "type": "StringLiteral", "value": "hello" }))
    );
    assert_eq!(
        ast_json("'hello';"),
        expression_program(json!({ "type": "StringLiteral", "value": "hello" }))
    );
}

#[test]
fn test_boolean_and_null_literals() {
    assert_eq!(
        ast_json("true;"),
        expression_program(json!({ "type": "BooleanLiteral", "value": true }))
    );
    assert_eq!(
        ast_json("false;"),
        expression_program(json!({ "type": "BooleanLiteral", "value": false }))
    );
    assert_eq!(ast_json("null;"), expression_program(json!({ "type": "NullLiteral" })));
}

#[test]
fn test_documentation_comment_before_literal() {
    let source = "
      /**
       * Documentation
       */
       'hello';
    ";
    assert_eq!(
        ast_json(source),
        expression_program(json!({ "type": "StringLiteral", "value": "hello" }))
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(
        ast_json("-x;"),
        expression_program(json!({
            "type": "UnaryExpression",
            "operator": "-",
            "argument": ident("x"),
        }))
    );
}

#[test]
fn test_unary_not() {
    assert_eq!(
        ast_json("!x;"),
        expression_program(json!({
            "type": "UnaryExpression",
            "operator": "!",
            "argument": ident("x"),
        }))
    );
}

#[test]
fn test_nested_binary_left_associative() {
    assert_eq!(
        ast_json("3 + 2 - 2;"),
        expression_program(json!({
            "type": "BinaryExpression",
            "operator": "-",
            "left": {
                "type": "BinaryExpression",
                "operator": "+",
                "left": number(3),
                "right": number(2),
            },
            "right": number(2),
        }))
    );
}

#[test]
fn test_multiplicative_precedence() {
    assert_eq!(
        ast_json("2 + 2 * 2;"),
        expression_program(json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": number(2),
            "right": {
                "type": "BinaryExpression",
                "operator": "*",
                "left": number(2),
                "right": number(2),
            },
        }))
    );
}

#[test]
fn test_relational_and_equality() {
    assert_eq!(
        ast_json("x + 5 > 10 == true;"),
        expression_program(json!({
            "type": "BinaryExpression",
            "operator": "==",
            "left": {
                "type": "BinaryExpression",
                "operator": ">",
                "left": {
                    "type": "BinaryExpression",
                    "operator": "+",
                    "left": ident("x"),
                    "right": number(5),
                },
                "right": number(10),
            },
            "right": { "type": "BooleanLiteral", "value": true },
        }))
    );
}

#[test]
fn test_logical_expressions() {
    assert_eq!(
        ast_json("x > 0 && y < 1 || z;"),
        expression_program(json!({
            "type": "LogicalExpression",
            "operator": "||",
            "left": {
                "type": "LogicalExpression",
                "operator": "&&",
                "left": {
                    "type": "BinaryExpression",
                    "operator": ">",
                    "left": ident("x"),
                    "right": number(0),
                },
                "right": {
                    "type": "BinaryExpression",
                    "operator": "<",
                    "left": ident("y"),
                    "right": number(1),
                },
            },
            "right": ident("z"),
        }))
    );
}

#[test]
fn test_chained_assignment() {
    assert_eq!(
        ast_json("x = y = 42;"),
        expression_program(json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": ident("x"),
            "right": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": ident("y"),
                "right": number(42),
            },
        }))
    );
}

#[test]
fn test_complex_assignment() {
    assert_eq!(
        ast_json("x *= 2;"),
        expression_program(json!({
            "type": "AssignmentExpression",
            "operator": "*=",
            "left": ident("x"),
            "right": number(2),
        }))
    );
}

#[test]
fn test_member_dot() {
    assert_eq!(
        ast_json("x.y;"),
        expression_program(json!({
            "type": "MemberExpression",
            "computed": false,
            "object": ident("x"),
            "property": ident("y"),
        }))
    );
}

#[test]
fn test_member_assignment() {
    assert_eq!(
        ast_json("x.y = 1;"),
        expression_program(json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": {
                "type": "MemberExpression",
                "computed": false,
                "object": ident("x"),
                "property": ident("y"),
            },
            "right": number(1),
        }))
    );
}

#[test]
fn test_computed_member_assignment() {
    assert_eq!(
        ast_json("x[0] = 1;"),
        expression_program(json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": {
                "type": "MemberExpression",
                "computed": true,
                "object": ident("x"),
                "property": number(0),
            },
            "right": number(1),
        }))
    );
}

#[test]
fn test_member_chain() {
    assert_eq!(
        ast_json("a.b.c['d'];"),
        expression_program(json!({
            "type": "MemberExpression",
            "computed": true,
            "object": {
                "type": "MemberExpression",
                "computed": false,
                "object": {
                    "type": "MemberExpression",
                    "computed": false,
                    "object": ident("a"),
                    "property": ident("b"),
                },
                "property": ident("c"),
            },
            "property": { "type": "StringLiteral", "value": "d" },
        }))
    );
}

#[test]
fn test_call_expression() {
    assert_eq!(
        ast_json("foo(x)();"),
        expression_program(json!({
            "type": "CallExpression",
            "callee": {
                "type": "CallExpression",
                "callee": ident("foo"),
                "arguments": [ident("x")],
            },
            "arguments": [],
        }))
    );
}

#[test]
fn test_member_call_expression() {
    assert_eq!(
        ast_json("console.log(x, y);"),
        expression_program(json!({
            "type": "CallExpression",
            "callee": {
                "type": "MemberExpression",
                "computed": false,
                "object": ident("console"),
                "property": ident("log"),
            },
            "arguments": [ident("x"), ident("y")],
        }))
    );
}

#[test]
fn test_new_expression() {
    assert_eq!(
        ast_json("new Point3D(10, 20, 30);"),
        expression_program(json!({
            "type": "NewExpression",
            "callee": ident("Point3D"),
            "arguments": [number(10), number(20), number(30)],
        }))
    );
}

#[test]
fn test_this_and_super() {
    assert_eq!(
        ast_json("this.x = super.x;"),
        expression_program(json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": {
                "type": "MemberExpression",
                "computed": false,
                "object": { "type": "ThisExpression" },
                "property": ident("x"),
            },
            "right": {
                "type": "MemberExpression",
                "computed": false,
                "object": { "type": "Super" },
                "property": ident("x"),
            },
        }))
    );
}
