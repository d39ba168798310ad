//! Statement AST Integration Tests
//!
//! Covers blocks, declarations, control flow, functions and classes as
//! they appear in the serialized tree.

use integration_tests::{ast_json, expression_program, program};
use serde_json::{json, Value};

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn number(value: i64) -> Value {
    json!({ "type": "NumericLiteral", "value": value })
}

fn expression_statement(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

#[test]
fn test_empty_program() {
    assert_eq!(ast_json(""), json!({ "type": "Program", "body": [] }));
}

#[test]
fn test_empty_statement() {
    assert_eq!(ast_json(";"), program(json!({ "type": "EmptyStatement" })));
}

#[test]
fn test_block_with_statements() {
    let source = r#"
    {
      42;

      "hello";
    }

    "#;
    assert_eq!(
        ast_json(source),
        program(json!({
            "type": "BlockStatement",
            "body": [
                expression_statement(number(42)),
                expression_statement(json!({ "type": "StringLiteral", "value": "hello" })),
            ],
        }))
    );
}

#[test]
fn test_empty_block() {
    assert_eq!(
        ast_json("{\n\n}\n"),
        program(json!({ "type": "BlockStatement", "body": [] }))
    );
}

#[test]
fn test_nested_blocks() {
    let source = r#"
    {
      42;
      {
        "hello";
      }
    }
    "#;
    assert_eq!(
        ast_json(source),
        program(json!({
            "type": "BlockStatement",
            "body": [
                expression_statement(number(42)),
                {
                    "type": "BlockStatement",
                    "body": [
                        expression_statement(json!({ "type": "StringLiteral", "value": "hello" })),
                    ],
                },
            ],
        }))
    );
}

#[test]
fn test_variable_statement() {
    assert_eq!(
        ast_json("let x = 42;"),
        program(json!({
            "type": "VariableStatement",
            "declarations": [
                { "type": "VariableDeclaration", "id": ident("x"), "init": number(42) },
            ],
        }))
    );
}

#[test]
fn test_variable_statement_list() {
    assert_eq!(
        ast_json("let a, b = 2;"),
        program(json!({
            "type": "VariableStatement",
            "declarations": [
                { "type": "VariableDeclaration", "id": ident("a"), "init": null },
                { "type": "VariableDeclaration", "id": ident("b"), "init": number(2) },
            ],
        }))
    );
}

#[test]
fn test_if_else() {
    assert_eq!(
        ast_json("if (x) { x = 1; } else { x = 2; }"),
        program(json!({
            "type": "IfStatement",
            "test": ident("x"),
            "consequent": {
                "type": "BlockStatement",
                "body": [expression_statement(json!({
                    "type": "AssignmentExpression",
                    "operator": "=",
                    "left": ident("x"),
                    "right": number(1),
                }))],
            },
            "alternate": {
                "type": "BlockStatement",
                "body": [expression_statement(json!({
                    "type": "AssignmentExpression",
                    "operator": "=",
                    "left": ident("x"),
                    "right": number(2),
                }))],
            },
        }))
    );
}

#[test]
fn test_if_without_else() {
    assert_eq!(
        ast_json("if (x) ;"),
        program(json!({
            "type": "IfStatement",
            "test": ident("x"),
            "consequent": { "type": "EmptyStatement" },
            "alternate": null,
        }))
    );
}

#[test]
fn test_while_statement() {
    assert_eq!(
        ast_json("while (x > 10) { x -= 1; }"),
        program(json!({
            "type": "WhileStatement",
            "test": {
                "type": "BinaryExpression",
                "operator": ">",
                "left": ident("x"),
                "right": number(10),
            },
            "body": {
                "type": "BlockStatement",
                "body": [expression_statement(json!({
                    "type": "AssignmentExpression",
                    "operator": "-=",
                    "left": ident("x"),
                    "right": number(1),
                }))],
            },
        }))
    );
}

#[test]
fn test_do_while_statement() {
    assert_eq!(
        ast_json("do x -= 1; while (x);"),
        program(json!({
            "type": "DoWhileStatement",
            "body": expression_statement(json!({
                "type": "AssignmentExpression",
                "operator": "-=",
                "left": ident("x"),
                "right": number(1),
            })),
            "test": ident("x"),
        }))
    );
}

#[test]
fn test_for_statement() {
    assert_eq!(
        ast_json("for (let i = 0; i < 10; i += 1) ;"),
        program(json!({
            "type": "ForStatement",
            "init": {
                "type": "VariableStatement",
                "declarations": [
                    { "type": "VariableDeclaration", "id": ident("i"), "init": number(0) },
                ],
            },
            "test": {
                "type": "BinaryExpression",
                "operator": "<",
                "left": ident("i"),
                "right": number(10),
            },
            "update": {
                "type": "AssignmentExpression",
                "operator": "+=",
                "left": ident("i"),
                "right": number(1),
            },
            "body": { "type": "EmptyStatement" },
        }))
    );
}

#[test]
fn test_for_statement_empty_header() {
    assert_eq!(
        ast_json("for (;;) {}"),
        program(json!({
            "type": "ForStatement",
            "init": null,
            "test": null,
            "update": null,
            "body": { "type": "BlockStatement", "body": [] },
        }))
    );
}

#[test]
fn test_function_declaration() {
    assert_eq!(
        ast_json("def square(x) { return x * x; }"),
        program(json!({
            "type": "FunctionDeclaration",
            "name": ident("square"),
            "params": [ident("x")],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": {
                        "type": "BinaryExpression",
                        "operator": "*",
                        "left": ident("x"),
                        "right": ident("x"),
                    },
                }],
            },
        }))
    );
}

#[test]
fn test_function_bare_return() {
    assert_eq!(
        ast_json("def empty() { return; }"),
        program(json!({
            "type": "FunctionDeclaration",
            "name": ident("empty"),
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [{ "type": "ReturnStatement", "argument": null }],
            },
        }))
    );
}

#[test]
fn test_class_declaration() {
    let source = "
      class Point3D extends Point {
        def constructor(x, y, z) {
          super(x, y);
          this.z = z;
        }
      }
    ";
    assert_eq!(
        ast_json(source),
        program(json!({
            "type": "ClassDeclaration",
            "id": ident("Point3D"),
            "superClass": ident("Point"),
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "FunctionDeclaration",
                    "name": ident("constructor"),
                    "params": [ident("x"), ident("y"), ident("z")],
                    "body": {
                        "type": "BlockStatement",
                        "body": [
                            expression_statement(json!({
                                "type": "CallExpression",
                                "callee": { "type": "Super" },
                                "arguments": [ident("x"), ident("y")],
                            })),
                            expression_statement(json!({
                                "type": "AssignmentExpression",
                                "operator": "=",
                                "left": {
                                    "type": "MemberExpression",
                                    "computed": false,
                                    "object": { "type": "ThisExpression" },
                                    "property": ident("z"),
                                },
                                "right": ident("z"),
                            })),
                        ],
                    },
                }],
            },
        }))
    );
}

#[test]
fn test_class_without_superclass() {
    assert_eq!(
        ast_json("class A {}"),
        program(json!({
            "type": "ClassDeclaration",
            "id": ident("A"),
            "superClass": null,
            "body": { "type": "BlockStatement", "body": [] },
        }))
    );
}

#[test]
fn test_statement_order_is_preserved() {
    let json = ast_json("let a = 1; a += 2; ; { }");
    let types: Vec<&str> = json["body"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec!["VariableStatement", "ExpressionStatement", "EmptyStatement", "BlockStatement"]
    );
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(
        ast_json("// leading\n42; /* trailing */"),
        expression_program(number(42))
    );
}
