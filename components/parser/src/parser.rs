//! Recursive descent parser for Letter
//!
//! LL(1): every production decides what to do from a single token of
//! lookahead. Binary operator levels are folded iteratively to the left;
//! assignment and prefix operators recurse to the right.

use crate::ast::*;
use crate::error::*;
use crate::lexer::{Keyword, Punctuator, Token, TokenKind, Tokenizer};
use core_types::SyntaxError;
use tracing::{debug, instrument};

type ParseResult<T> = Result<T, SyntaxError>;

/// Parse `source` into a [`Program`] with a fresh parser
///
/// # Examples
///
/// ```
/// use letter_parser::{ast::Statement, parse};
///
/// let program = parse("let x = 42;").unwrap();
/// assert!(matches!(program.body[0], Statement::Variable(_)));
/// ```
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    Parser::new().parse(source)
}

/// Default limit on how deeply statements and expressions may nest
///
/// Blocks, statement bodies, assignments, prefix operators and `new` each
/// open a level. Deeper input fails with `ParseError::NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Letter parser
///
/// Holds no source between calls: a parser can be reused for any number of
/// independent [`Parser::parse`] calls on sources of any lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default nesting limit
    pub fn new() -> Self {
        Self::with_max_depth(MAX_NESTING_DEPTH)
    }

    /// Create a parser that rejects nesting deeper than `max_depth`
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Nesting limit applied to each parse
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse the source into an AST
    #[instrument(level = "debug", skip_all, fields(source_len = source.len()))]
    pub fn parse(&mut self, source: &str) -> Result<Program, SyntaxError> {
        let mut state = ParseState::new(source, self.max_depth)?;
        let program = state.parse_program()?;
        debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }
}

/// Per-call state: the tokenizer over one source and its lookahead
struct ParseState<'s> {
    source: &'s str,
    tokenizer: Tokenizer<'s>,
    lookahead: Token<'s>,
    depth: usize,
    max_depth: usize,
}

impl<'s> ParseState<'s> {
    fn new(source: &'s str, max_depth: usize) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source);

        // Prime the lookahead for predictive parsing.
        let lookahead = tokenizer.next_token()?;

        Ok(Self {
            source,
            tokenizer,
            lookahead,
            depth: 0,
            max_depth,
        })
    }

    fn parse_program(&mut self) -> ParseResult<Program> {
        let body = self.parse_statement_list(TokenKind::Eof)?;
        Ok(Program { body })
    }

    fn parse_statement_list(&mut self, stop: TokenKind) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.check(stop) && !self.lookahead.is_eof() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.nested(Self::parse_statement_kind)
    }

    fn parse_statement_kind(&mut self) -> ParseResult<Statement> {
        match self.lookahead.kind {
            TokenKind::Punctuator(Punctuator::Semicolon) => {
                self.advance()?;
                Ok(Statement::Empty(EmptyStatement {}))
            }
            TokenKind::Punctuator(Punctuator::LBrace) => {
                Ok(Statement::Block(self.parse_block_statement()?))
            }
            TokenKind::Keyword(Keyword::Let) => self.parse_variable_statement(),
            TokenKind::Keyword(Keyword::If) => self.parse_if_statement(),
            TokenKind::Keyword(Keyword::While) => self.parse_while_statement(),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_while_statement(),
            TokenKind::Keyword(Keyword::For) => self.parse_for_statement(),
            TokenKind::Keyword(Keyword::Def) => self.parse_function_declaration(),
            TokenKind::Keyword(Keyword::Return) => self.parse_return_statement(),
            TokenKind::Keyword(Keyword::Class) => self.parse_class_declaration(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.expect_punctuator(Punctuator::LBrace)?;
        let body = self.parse_statement_list(TokenKind::Punctuator(Punctuator::RBrace))?;
        self.expect_punctuator(Punctuator::RBrace)?;
        Ok(BlockStatement { body })
    }

    fn parse_variable_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::Let)?;
        let declarations = self.parse_variable_declaration_list()?;
        self.expect_punctuator(Punctuator::Semicolon)?;
        Ok(Statement::Variable(VariableStatement { declarations }))
    }

    fn parse_variable_declaration_list(&mut self) -> ParseResult<Vec<VariableDeclaration>> {
        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.check_punctuator(Punctuator::Comma) {
            self.advance()?;
            declarations.push(self.parse_variable_declaration()?);
        }
        Ok(declarations)
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let id = self.parse_identifier()?;

        // Anything but a list separator or terminator must be an initializer.
        let init = if self.check_punctuator(Punctuator::Semicolon)
            || self.check_punctuator(Punctuator::Comma)
        {
            None
        } else {
            self.expect(TokenKind::SimpleAssign)?;
            Some(self.parse_assignment_expression()?)
        };

        Ok(VariableDeclaration { id, init })
    }

    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::If)?;
        self.expect_punctuator(Punctuator::LParen)?;
        let test = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;

        let consequent = Box::new(self.parse_statement()?);

        // Binds to the innermost `if` still being parsed.
        let alternate = if self.check_keyword(Keyword::Else) {
            self.advance()?;
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If(IfStatement {
            test,
            consequent,
            alternate,
        }))
    }

    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::While)?;
        self.expect_punctuator(Punctuator::LParen)?;
        let test = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::While(WhileStatement { test, body }))
    }

    fn parse_do_while_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::Do)?;
        let body = Box::new(self.parse_statement()?);
        self.expect_keyword(Keyword::While)?;
        self.expect_punctuator(Punctuator::LParen)?;
        let test = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;
        self.expect_punctuator(Punctuator::Semicolon)?;

        Ok(Statement::DoWhile(DoWhileStatement { body, test }))
    }

    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::For)?;
        self.expect_punctuator(Punctuator::LParen)?;

        let init = if self.check_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_for_init()?)
        };
        self.expect_punctuator(Punctuator::Semicolon)?;

        let test = if self.check_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punctuator(Punctuator::Semicolon)?;

        let update = if self.check_punctuator(Punctuator::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punctuator(Punctuator::RParen)?;

        let body = Box::new(self.parse_statement()?);

        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body,
        }))
    }

    /// `let` declarations here are terminated by the header's `;`, not their own.
    fn parse_for_init(&mut self) -> ParseResult<ForInit> {
        if self.check_keyword(Keyword::Let) {
            self.advance()?;
            let declarations = self.parse_variable_declaration_list()?;
            return Ok(ForInit::Variable(VariableStatement { declarations }));
        }
        Ok(ForInit::Expression(self.parse_expression()?))
    }

    fn parse_function_declaration(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::Def)?;
        let name = self.parse_identifier()?;

        self.expect_punctuator(Punctuator::LParen)?;
        let params = if self.check_punctuator(Punctuator::RParen) {
            Vec::new()
        } else {
            self.parse_formal_parameter_list()?
        };
        self.expect_punctuator(Punctuator::RParen)?;

        let body = self.parse_block_statement()?;

        Ok(Statement::Function(FunctionDeclaration { name, params, body }))
    }

    fn parse_formal_parameter_list(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut params = Vec::new();
        loop {
            params.push(self.parse_identifier()?);
            if !self.check_punctuator(Punctuator::Comma) {
                break;
            }
            self.advance()?;
        }
        Ok(params)
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::Return)?;
        let argument = if self.check_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_punctuator(Punctuator::Semicolon)?;

        Ok(Statement::Return(ReturnStatement { argument }))
    }

    fn parse_class_declaration(&mut self) -> ParseResult<Statement> {
        self.expect_keyword(Keyword::Class)?;
        let id = self.parse_identifier()?;

        let super_class = if self.check_keyword(Keyword::Extends) {
            self.advance()?;
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let body = self.parse_block_statement()?;

        Ok(Statement::Class(ClassDeclaration {
            id,
            super_class,
            body,
        }))
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression()?;
        self.expect_punctuator(Punctuator::Semicolon)?;
        Ok(Statement::Expression(ExpressionStatement { expression }))
    }

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_assignment_expression()
    }

    fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        self.nested(Self::parse_assignment_kind)
    }

    fn parse_assignment_kind(&mut self) -> ParseResult<Expression> {
        let left = self.parse_logical_or_expression()?;

        if !matches!(self.lookahead.kind, TokenKind::SimpleAssign | TokenKind::ComplexAssign) {
            return Ok(left);
        }

        let token = self.advance()?;
        let operator = AssignmentOperator::from_lexeme(token.value)
            .ok_or_else(|| unexpected_token(self.source, &token, "assignment operator"))?;
        let left = AssignmentTarget::try_from(left)
            .map_err(|_| invalid_assignment_target(self.source, &token))?;
        let right = Box::new(self.parse_assignment_expression()?);

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left,
            right,
        }))
    }

    fn parse_logical_or_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::LogicalOr, Self::parse_logical_and_expression)
    }

    fn parse_logical_and_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::LogicalAnd, Self::parse_equality_expression)
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::EqualityOperator, Self::parse_relational_expression)
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::RelationalOperator, Self::parse_additive_expression)
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::AdditiveOperator, Self::parse_multiplicative_expression)
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Expression> {
        self.fold_binary_level(TokenKind::MultiplicativeOperator, Self::parse_unary_expression)
    }

    /// One left-associative precedence level: `operand (operator operand)*`.
    fn fold_binary_level(
        &mut self,
        operator: TokenKind,
        operand: fn(&mut Self) -> ParseResult<Expression>,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;

        while self.check(operator) {
            let token = self.advance()?;
            let right = operand(self)?;
            left = self.binary_node(&token, left, right)?;
        }

        Ok(left)
    }

    fn binary_node(
        &self,
        token: &Token<'s>,
        left: Expression,
        right: Expression,
    ) -> ParseResult<Expression> {
        let left = Box::new(left);
        let right = Box::new(right);

        if let Some(operator) = LogicalOperator::from_lexeme(token.value) {
            return Ok(Expression::Logical(LogicalExpression {
                operator,
                left,
                right,
            }));
        }

        let operator = BinaryOperator::from_lexeme(token.value)
            .ok_or_else(|| unexpected_token(self.source, token, "binary operator"))?;
        Ok(Expression::Binary(BinaryExpression {
            operator,
            left,
            right,
        }))
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        if !matches!(self.lookahead.kind, TokenKind::AdditiveOperator | TokenKind::LogicalNot) {
            return self.parse_left_hand_side_expression();
        }

        self.nested(Self::parse_prefix_operation)
    }

    fn parse_prefix_operation(&mut self) -> ParseResult<Expression> {
        let token = self.advance()?;
        let operator = UnaryOperator::from_lexeme(token.value)
            .ok_or_else(|| unexpected_token(self.source, &token, "unary operator"))?;
        let argument = Box::new(self.parse_unary_expression()?);

        Ok(Expression::Unary(UnaryExpression { operator, argument }))
    }

    fn parse_left_hand_side_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_member_expression()?;

        while self.check_punctuator(Punctuator::LParen) {
            let arguments = self.parse_arguments()?;
            expr = Expression::Call(CallExpression {
                callee: Box::new(expr),
                arguments,
            });
        }

        Ok(expr)
    }

    fn parse_member_expression(&mut self) -> ParseResult<Expression> {
        let mut object = self.parse_primary_expression()?;

        loop {
            if self.check_punctuator(Punctuator::Dot) {
                self.advance()?;
                let property = Expression::Identifier(self.parse_identifier()?);
                object = Expression::Member(MemberExpression {
                    computed: false,
                    object: Box::new(object),
                    property: Box::new(property),
                });
            } else if self.check_punctuator(Punctuator::LBracket) {
                self.advance()?;
                let property = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RBracket)?;
                object = Expression::Member(MemberExpression {
                    computed: true,
                    object: Box::new(object),
                    property: Box::new(property),
                });
            } else {
                break;
            }
        }

        Ok(object)
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect_punctuator(Punctuator::LParen)?;
        let mut args = Vec::new();

        if !self.check_punctuator(Punctuator::RParen) {
            loop {
                args.push(self.parse_assignment_expression()?);
                if !self.check_punctuator(Punctuator::Comma) {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect_punctuator(Punctuator::RParen)?;
        Ok(args)
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        match self.lookahead.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::Null) => {
                self.parse_literal()
            }
            TokenKind::Punctuator(Punctuator::LParen) => self.parse_parenthesized_expression(),
            TokenKind::Identifier => Ok(Expression::Identifier(self.parse_identifier()?)),
            TokenKind::Keyword(Keyword::This) => {
                self.advance()?;
                Ok(Expression::This(ThisExpression {}))
            }
            TokenKind::Keyword(Keyword::Super) => {
                self.advance()?;
                Ok(Expression::Super(Super {}))
            }
            TokenKind::Keyword(Keyword::New) => self.nested(Self::parse_new_expression),
            _ => {
                let err = unexpected_production(self.source, &self.lookahead, "PrimaryExpression");
                Err(err.into())
            }
        }
    }

    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.expect_punctuator(Punctuator::LParen)?;
        let expr = self.parse_expression()?;
        self.expect_punctuator(Punctuator::RParen)?;
        Ok(expr)
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expression> {
        self.expect_keyword(Keyword::New)?;
        let callee = Box::new(self.parse_member_expression()?);
        let arguments = self.parse_arguments()?;
        Ok(Expression::New(NewExpression { callee, arguments }))
    }

    fn parse_literal(&mut self) -> ParseResult<Expression> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| unexpected_production(self.source, &token, "NumericLiteral"))?;
                Ok(Expression::NumericLiteral(NumericLiteral { value }))
            }
            TokenKind::String => {
                // The lexeme always carries its two single-byte quotes.
                let value = token.value[1..token.value.len() - 1].to_string();
                Ok(Expression::StringLiteral(StringLiteral { value }))
            }
            TokenKind::Keyword(Keyword::True) => {
                Ok(Expression::BooleanLiteral(BooleanLiteral { value: true }))
            }
            TokenKind::Keyword(Keyword::False) => {
                Ok(Expression::BooleanLiteral(BooleanLiteral { value: false }))
            }
            TokenKind::Keyword(Keyword::Null) => Ok(Expression::NullLiteral(NullLiteral {})),
            _ => Err(unexpected_production(self.source, &token, "Literal").into()),
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Identifier::new(token.value))
    }

    /// Run `production` one nesting level deeper, failing past the limit.
    fn nested<T>(&mut self, production: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(nesting_too_deep(self.source, &self.lookahead, self.max_depth).into());
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    fn check_punctuator(&self, p: Punctuator) -> bool {
        self.check(TokenKind::Punctuator(p))
    }

    fn check_keyword(&self, k: Keyword) -> bool {
        self.check(TokenKind::Keyword(k))
    }

    /// Consume the lookahead unconditionally and pull the next token.
    fn advance(&mut self) -> ParseResult<Token<'s>> {
        let token = self.lookahead;
        self.lookahead = self.tokenizer.next_token()?;
        Ok(token)
    }

    /// Consume the lookahead if it has the given tag, otherwise fail.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'s>> {
        if !self.check(kind) {
            return Err(unexpected_token(self.source, &self.lookahead, kind).into());
        }
        self.advance()
    }

    fn expect_punctuator(&mut self, p: Punctuator) -> ParseResult<()> {
        self.expect(TokenKind::Punctuator(p)).map(|_| ())
    }

    fn expect_keyword(&mut self, k: Keyword) -> ParseResult<()> {
        self.expect(TokenKind::Keyword(k)).map(|_| ())
    }
}
