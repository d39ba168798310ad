//! Abstract Syntax Tree node definitions
//!
//! Every node is a plain struct that serializes to a JSON object whose first
//! key is `"type"`, carrying the node's discriminator string (`"Program"`,
//! `"BinaryExpression"`, ...). The [`Statement`] and [`Expression`] sum types
//! are untagged wrappers around those structs, so the discriminator is
//! written exactly once per node.
//!
//! The tree owns all of its text; it holds no reference to the source or to
//! the parser that built it.

use serde::{Serialize, Serializer};
use std::fmt;

/// Complete program
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    /// Top-level statements in source order
    pub body: Vec<Statement>,
}

/// Letter statements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    /// `expr;`
    Expression(ExpressionStatement),
    /// `{ ... }`
    Block(BlockStatement),
    /// `;`
    Empty(EmptyStatement),
    /// `let a = 1, b;`
    Variable(VariableStatement),
    /// `if (test) consequent else alternate`
    If(IfStatement),
    /// `while (test) body`
    While(WhileStatement),
    /// `do body while (test);`
    DoWhile(DoWhileStatement),
    /// `for (init; test; update) body`
    For(ForStatement),
    /// `def name(params) { ... }`
    Function(FunctionDeclaration),
    /// `return argument;`
    Return(ReturnStatement),
    /// `class Id extends Super { ... }`
    Class(ClassDeclaration),
}

/// Expression evaluated for its effect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    /// The expression
    pub expression: Expression,
}

/// Braced statement list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    /// Statements in source order
    pub body: Vec<Statement>,
}

/// Lone semicolon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {}

/// `let` with one or more declarations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableStatement {
    /// Declarations in source order
    pub declarations: Vec<VariableDeclaration>,
}

/// Single `id [= init]` entry of a `let`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    /// Declared name
    pub id: Identifier,
    /// Initializer
    pub init: Option<Expression>,
}

/// If statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    /// Condition
    pub test: Expression,
    /// Taken when the condition holds
    pub consequent: Box<Statement>,
    /// `else` branch
    pub alternate: Option<Box<Statement>>,
}

/// While loop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    /// Loop condition
    pub test: Expression,
    /// Loop body
    pub body: Box<Statement>,
}

/// Do-while loop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    /// Loop body
    pub body: Box<Statement>,
    /// Loop condition
    pub test: Expression,
}

/// For loop; every header clause is optional
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    /// Initialization
    pub init: Option<ForInit>,
    /// Condition
    pub test: Option<Expression>,
    /// Update expression
    pub update: Option<Expression>,
    /// Loop body
    pub body: Box<Statement>,
}

/// First clause of a `for` header
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    /// `let i = 0`
    Variable(VariableStatement),
    /// Any expression, e.g. `i = 0`
    Expression(Expression),
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration {
    /// Function name
    pub name: Identifier,
    /// Parameter names
    pub params: Vec<Identifier>,
    /// Function body
    pub body: BlockStatement,
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    /// Return value
    pub argument: Option<Expression>,
}

/// Class declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ClassDeclaration {
    /// Class name
    pub id: Identifier,
    /// Superclass named after `extends`
    #[serde(rename = "superClass")]
    pub super_class: Option<Identifier>,
    /// Class body
    pub body: BlockStatement,
}

/// Letter expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    /// Variable reference
    Identifier(Identifier),
    /// Number literal
    NumericLiteral(NumericLiteral),
    /// String literal
    StringLiteral(StringLiteral),
    /// `true` / `false`
    BooleanLiteral(BooleanLiteral),
    /// `null`
    NullLiteral(NullLiteral),
    /// `target op= value`
    Assignment(AssignmentExpression),
    /// Arithmetic, relational or equality operation
    Binary(BinaryExpression),
    /// `&&` / `||`
    Logical(LogicalExpression),
    /// Prefix operation
    Unary(UnaryExpression),
    /// `object.property` / `object[property]`
    Member(MemberExpression),
    /// `callee(arguments)`
    Call(CallExpression),
    /// `this`
    This(ThisExpression),
    /// `new callee(arguments)`
    New(NewExpression),
    /// `super`
    Super(Super),
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    /// Identifier name
    pub name: String,
}

impl Identifier {
    /// Create an identifier node
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Number literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NumericLiteral {
    /// Numeric value
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
}

/// String literal; `value` is the text between the quotes, unescaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    /// Contents without the surrounding quotes
    pub value: String,
}

/// Boolean literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    /// Boolean value
    pub value: bool,
}

/// Null literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct NullLiteral {}

/// Assignment expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    /// Assignment operator
    pub operator: AssignmentOperator,
    /// Target
    pub left: AssignmentTarget,
    /// Assigned value
    pub right: Box<Expression>,
}

/// Left side of an assignment: only these two shapes are assignable
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssignmentTarget {
    /// Simple identifier
    Identifier(Identifier),
    /// Member expression
    Member(MemberExpression),
}

impl From<AssignmentTarget> for Expression {
    fn from(target: AssignmentTarget) -> Self {
        match target {
            AssignmentTarget::Identifier(id) => Expression::Identifier(id),
            AssignmentTarget::Member(member) => Expression::Member(member),
        }
    }
}

impl TryFrom<Expression> for AssignmentTarget {
    type Error = Expression;

    /// Hands the expression back unchanged when it is not assignable.
    fn try_from(expr: Expression) -> Result<Self, Self::Error> {
        match expr {
            Expression::Identifier(id) => Ok(AssignmentTarget::Identifier(id)),
            Expression::Member(member) => Ok(AssignmentTarget::Member(member)),
            other => Err(other),
        }
    }
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    /// Operator
    pub operator: BinaryOperator,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

/// Logical expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    /// Operator
    pub operator: LogicalOperator,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    /// Operator
    pub operator: UnaryOperator,
    /// Operand
    pub argument: Box<Expression>,
}

/// Member expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    /// True for `object[property]`, false for `object.property`
    pub computed: bool,
    /// Object
    pub object: Box<Expression>,
    /// Property; always an [`Identifier`] when not computed
    pub property: Box<Expression>,
}

/// Call expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    /// Callee
    pub callee: Box<Expression>,
    /// Arguments
    pub arguments: Vec<Expression>,
}

/// `this`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {}

/// New expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    /// Constructor
    pub callee: Box<Expression>,
    /// Arguments
    pub arguments: Vec<Expression>,
}

/// `super`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Super {}

/// Assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssignmentOperator {
    /// `=`
    #[serde(rename = "=")]
    Assign,
    /// `+=`
    #[serde(rename = "+=")]
    AddAssign,
    /// `-=`
    #[serde(rename = "-=")]
    SubAssign,
    /// `*=`
    #[serde(rename = "*=")]
    MulAssign,
    /// `/=`
    #[serde(rename = "/=")]
    DivAssign,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// Addition
    #[serde(rename = "+")]
    Add,
    /// Subtraction
    #[serde(rename = "-")]
    Sub,
    /// Multiplication
    #[serde(rename = "*")]
    Mul,
    /// Division
    #[serde(rename = "/")]
    Div,
    /// Greater than
    #[serde(rename = ">")]
    Gt,
    /// Greater than or equal
    #[serde(rename = ">=")]
    GtEq,
    /// Less than
    #[serde(rename = "<")]
    Lt,
    /// Less than or equal
    #[serde(rename = "<=")]
    LtEq,
    /// Equality
    #[serde(rename = "==")]
    Eq,
    /// Inequality
    #[serde(rename = "!=")]
    NotEq,
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    /// Logical AND
    #[serde(rename = "&&")]
    And,
    /// Logical OR
    #[serde(rename = "||")]
    Or,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// Unary plus
    #[serde(rename = "+")]
    Plus,
    /// Negation
    #[serde(rename = "-")]
    Minus,
    /// Logical NOT
    #[serde(rename = "!")]
    Not,
}

macro_rules! operator_text {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Source spelling of the operator
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }

            /// Operator spelled `lexeme`, if any
            pub fn from_lexeme(lexeme: &str) -> Option<Self> {
                match lexeme {
                    $($text => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator_text!(AssignmentOperator {
    Assign => "=",
    AddAssign => "+=",
    SubAssign => "-=",
    MulAssign => "*=",
    DivAssign => "/=",
});

operator_text!(BinaryOperator {
    Add => "+",
    Sub => "-",
    Mul => "*",
    Div => "/",
    Gt => ">",
    GtEq => ">=",
    Lt => "<",
    LtEq => "<=",
    Eq => "==",
    NotEq => "!=",
});

operator_text!(LogicalOperator {
    And => "&&",
    Or => "||",
});

operator_text!(UnaryOperator {
    Plus => "+",
    Minus => "-",
    Not => "!",
});

/// Integral values are written as JSON integers so that `42` stays `42`.
///
/// Integers of 2^64 and above fall back to float form (`1e20`); the value is
/// the same number, only the notation differs from `JSON.stringify`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if value.fract() == 0.0 {
        if (0.0..U64_BOUND).contains(value) {
            return serializer.serialize_u64(*value as u64);
        }
        if (-I64_BOUND..0.0).contains(value) {
            return serializer.serialize_i64(*value as i64);
        }
    }
    serializer.serialize_f64(*value)
}
