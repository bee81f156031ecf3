// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser for the JavaScript dialect
//!
//! Covers the subset that has a PythonScript counterpart: imports,
//! functions, classes, the usual control flow and expressions. Semicolons
//! are optional statement terminators.

use super::stream::TokenStream;
use crate::ast::{
    BinaryOperator, BoolOperator, CompareOperator, Comparison, DeclarationKind, DictEntry,
    DictKey, ElifClause, ExceptHandler, Expression, ForIter, ImportKind, ImportedName, Module,
    Parameter, ParameterKind, Position, Statement, UnaryOperator,
};
use crate::error::{ParserError, SourceLocation};
use crate::lexer::{Token, TokenKind};
use tracing::debug;

/// Parse a JavaScript token list into a module
pub fn parse(tokens: Vec<Token>, origin: &str) -> Result<Module, ParserError> {
    let module = Parser::new(tokens, origin).parse_program()?;
    debug!(origin, statements = module.body.len(), "parsed JavaScript program");
    Ok(module)
}

pub struct Parser {
    stream: TokenStream,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, origin: &str) -> Self {
        Self {
            stream: TokenStream::new(tokens, origin),
        }
    }

    fn position(&self) -> Position {
        Position::of(self.stream.current())
    }

    pub fn is_at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    fn skip_semicolons(&mut self) -> Result<(), ParserError> {
        while self.stream.eat_operator(";")? {}
        Ok(())
    }

    /// Grammar: statement* EOF
    pub fn parse_program(&mut self) -> Result<Module, ParserError> {
        let location = self.position();
        let mut body = Vec::new();

        loop {
            self.skip_semicolons()?;
            if self.stream.is_at_end() {
                break;
            }
            body.push(self.parse_statement()?);
        }

        Ok(Module { body, location })
    }

    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        if self.stream.check_operator("{") {
            return Err(self.stream.syntax_error("standalone blocks are not supported"));
        }
        if !self.stream.check(TokenKind::Keyword) {
            return self.parse_simple_statement();
        }
        let keyword = self.stream.current().lexeme.clone();

        match keyword.as_str() {
            "import" => self.parse_import(),
            "export" => {
                self.stream.advance()?;
                if self.stream.current().is(TokenKind::Identifier, "default") {
                    self.stream.advance()?;
                }
                self.parse_statement()
            }
            "function" => self.parse_function_declaration(),
            "class" => self.parse_class_declaration(),
            "if" => self.parse_if_statement(),
            "for" => self.parse_for_statement(),
            "while" => self.parse_while_statement(),
            "try" => self.parse_try_statement(),
            "return" => self.parse_return_statement(),
            "break" | "continue" => {
                let location = self.position();
                self.stream.advance()?;
                self.stream.eat_operator(";")?;
                Ok(if keyword == "break" {
                    Statement::Break { location }
                } else {
                    Statement::Continue { location }
                })
            }
            "let" | "const" | "var" => {
                let statement = self.parse_declaration()?;
                self.stream.eat_operator(";")?;
                Ok(statement)
            }
            _ => self.parse_simple_statement(),
        }
    }

    /// Grammar: "{" statement* "}"
    fn parse_block(&mut self) -> Result<Vec<Statement>, ParserError> {
        self.stream.expect_operator("{")?;
        let mut body = Vec::new();

        loop {
            self.skip_semicolons()?;
            if self.stream.eat_operator("}")? {
                break;
            }
            if self.stream.is_at_end() {
                return Err(self.stream.unexpected("'}'"));
            }
            body.push(self.parse_statement()?);
        }
        Ok(body)
    }

    /// A braced block or a single statement
    fn parse_body(&mut self) -> Result<Vec<Statement>, ParserError> {
        if self.stream.check_operator("{") {
            self.parse_block()
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }

    /// Grammar: ("let" | "const" | "var") IDENT ["=" expr]
    fn parse_declaration(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        let declaration = match self.stream.advance()?.lexeme.as_str() {
            "const" => DeclarationKind::Const,
            "var" => DeclarationKind::Var,
            _ => DeclarationKind::Let,
        };
        let name_location = self.position();
        let name = self.stream.expect_identifier()?;
        let value = if self.stream.eat_operator("=")? {
            Some(self.parse_expression()?)
        } else {
            None
        };
        if self.stream.check_operator(",") {
            return Err(self
                .stream
                .syntax_error("declaring several variables in one statement is not supported"));
        }

        Ok(Statement::Assign {
            targets: vec![Expression::Variable {
                name,
                location: name_location,
            }],
            value,
            declaration: Some(declaration),
            location,
        })
    }

    /// Grammar: "function" IDENT "(" parameters ")" block
    fn parse_function_declaration(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("function")?;
        let name = self.stream.expect_identifier()?;
        self.parse_function_rest(name, location)
    }

    fn parse_function_rest(
        &mut self,
        name: String,
        location: Position,
    ) -> Result<Statement, ParserError> {
        self.stream.expect_operator("(")?;
        let params = self.parse_parameters()?;
        self.stream.expect_operator(")")?;
        let body = self.parse_block()?;

        Ok(Statement::FunctionDef {
            name,
            params,
            body,
            location,
        })
    }

    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, ParserError> {
        let mut params = Vec::new();

        while !self.stream.check_operator(")") {
            let location = self.position();
            let kind = if self.stream.eat_operator("...")? {
                ParameterKind::Rest
            } else {
                ParameterKind::Positional
            };
            let name = self.stream.expect_identifier()?;
            let default = if kind == ParameterKind::Positional && self.stream.eat_operator("=")? {
                Some(self.parse_expression()?)
            } else {
                None
            };
            params.push(Parameter {
                name,
                kind,
                default,
                location,
            });

            if !self.stream.eat_operator(",")? {
                break;
            }
        }
        Ok(params)
    }

    /// Grammar: "class" IDENT ["extends" IDENT] "{" member* "}"
    fn parse_class_declaration(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("class")?;
        let name = self.stream.expect_identifier()?;
        let base = if self.stream.eat_keyword("extends")? {
            Some(self.stream.expect_identifier()?)
        } else {
            None
        };

        self.stream.expect_operator("{")?;
        let mut body = Vec::new();
        loop {
            self.skip_semicolons()?;
            if self.stream.eat_operator("}")? {
                break;
            }
            if self.stream.is_at_end() {
                return Err(self.stream.unexpected("'}'"));
            }
            body.push(self.parse_class_member()?);
        }

        Ok(Statement::ClassDef {
            name,
            base,
            body,
            location,
        })
    }

    /// A method `name(params) { ... }` or a field `name = value;`
    fn parse_class_member(&mut self) -> Result<Statement, ParserError> {
        if self.stream.current().is(TokenKind::Identifier, "static")
            && self
                .stream
                .peek(1)
                .is_some_and(|t| t.kind == TokenKind::Identifier)
        {
            self.stream.advance()?;
        }

        let location = self.position();
        let name = self.stream.expect_identifier()?;

        if self.stream.check_operator("(") {
            return self.parse_function_rest(name, location);
        }

        let value = if self.stream.eat_operator("=")? {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.stream.eat_operator(";")?;

        Ok(Statement::Assign {
            targets: vec![Expression::Variable { name, location }],
            value,
            declaration: None,
            location,
        })
    }

    /// `else if` chains are flattened into elif clauses.
    /// Grammar: "if" "(" expr ")" body ["else" (if_statement | body)]
    fn parse_if_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        let (condition, body) = self.parse_conditional_clause("if")?;

        let mut elif_clauses = Vec::new();
        let mut else_body = None;
        while self.stream.eat_keyword("else")? {
            if self.stream.check_keyword("if") {
                let clause_location = self.position();
                let (condition, body) = self.parse_conditional_clause("if")?;
                elif_clauses.push(ElifClause {
                    condition,
                    body,
                    location: clause_location,
                });
            } else {
                else_body = Some(self.parse_body()?);
                break;
            }
        }

        Ok(Statement::If {
            condition,
            body,
            elif_clauses,
            else_body,
            location,
        })
    }

    /// Grammar: keyword "(" expr ")" body
    fn parse_conditional_clause(
        &mut self,
        keyword: &str,
    ) -> Result<(Expression, Vec<Statement>), ParserError> {
        self.stream.expect_keyword(keyword)?;
        self.stream.expect_operator("(")?;
        let condition = self.parse_expression()?;
        self.stream.expect_operator(")")?;
        let body = self.parse_body()?;
        Ok((condition, body))
    }

    fn parse_while_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        let (condition, body) = self.parse_conditional_clause("while")?;

        Ok(Statement::While {
            condition,
            body,
            location,
        })
    }

    /// Parse `for (x of xs)` or a three-clause loop. A three-clause loop that
    /// only counts a variable up or down becomes a range loop.
    fn parse_for_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("for")?;
        self.stream.expect_operator("(")?;

        let declares = ["let", "const", "var"]
            .iter()
            .any(|k| self.stream.check_keyword(k));
        let offset = usize::from(declares);
        let is_for_of = self
            .stream
            .peek(offset)
            .is_some_and(|t| t.kind == TokenKind::Identifier)
            && self
                .stream
                .peek(offset + 1)
                .is_some_and(|t| t.is_keyword("of"));

        if is_for_of {
            if declares {
                self.stream.advance()?;
            }
            let target = self.stream.expect_identifier()?;
            self.stream.expect_keyword("of")?;
            let iterable = self.parse_expression()?;
            self.stream.expect_operator(")")?;
            let body = self.parse_body()?;
            return Ok(Statement::For {
                target,
                iter: ForIter::Each { iterable },
                body,
                location,
            });
        }

        let init = if self.stream.check_operator(";") {
            None
        } else if declares {
            Some(self.parse_declaration()?)
        } else {
            Some(self.parse_assignment_or_expression()?)
        };
        self.stream.expect_operator(";")?;
        let test = if self.stream.check_operator(";") {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.stream.expect_operator(";")?;
        let update = if self.stream.check_operator(")") {
            None
        } else {
            Some(self.parse_assignment_or_expression()?)
        };
        self.stream.expect_operator(")")?;
        let body = self.parse_body()?;

        Ok(match as_range_loop(&init, &test, &update) {
            Some((target, iter)) => Statement::For {
                target,
                iter,
                body,
                location,
            },
            None => Statement::ForClassic {
                init: init.map(Box::new),
                test,
                update: update.map(Box::new),
                body,
                location,
            },
        })
    }

    /// Grammar: "try" block ["catch" ["(" IDENT ")"] block] ["finally" block]
    fn parse_try_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("try")?;
        let body = self.parse_block()?;

        let mut handler = None;
        if self.stream.check_keyword("catch") {
            let handler_location = self.position();
            self.stream.advance()?;
            let name = if self.stream.eat_operator("(")? {
                let name = self.stream.expect_identifier()?;
                self.stream.expect_operator(")")?;
                Some(name)
            } else {
                None
            };
            let body = self.parse_block()?;
            handler = Some(ExceptHandler {
                name,
                body,
                location: handler_location,
            });
        }

        let finally_body = if self.stream.eat_keyword("finally")? {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finally_body.is_none() {
            return Err(self.stream.unexpected("'catch' or 'finally'"));
        }

        Ok(Statement::Try {
            body,
            handler,
            finally_body,
            location,
        })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("return")?;

        let value = if self.stream.check_operator(";")
            || self.stream.check_operator("}")
            || self.stream.is_at_end()
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.stream.eat_operator(";")?;

        Ok(Statement::Return { value, location })
    }

    /// Grammar: "import" STRING
    ///        | "import" IDENT "from" STRING
    ///        | "import" "*" "as" IDENT "from" STRING
    ///        | "import" "{" IDENT ["as" IDENT] ("," ...)* "}" "from" STRING
    fn parse_import(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("import")?;

        if self.stream.check(TokenKind::String) {
            let module = self.stream.advance()?.lexeme;
            self.stream.eat_operator(";")?;
            return Ok(Statement::Import {
                module,
                kind: ImportKind::Module { alias: None },
                location,
            });
        }

        let kind = if self.stream.eat_operator("{")? {
            let mut names = Vec::new();
            while !self.stream.check_operator("}") {
                let name = self.stream.expect_identifier()?;
                let alias = if self.stream.eat_keyword("as")? {
                    Some(self.stream.expect_identifier()?)
                } else {
                    None
                };
                names.push(ImportedName { name, alias });
                if !self.stream.eat_operator(",")? {
                    break;
                }
            }
            self.stream.expect_operator("}")?;
            ImportKind::Names { names }
        } else if self.stream.eat_operator("*")? {
            self.stream.expect_keyword("as")?;
            ImportKind::Module {
                alias: Some(self.stream.expect_identifier()?),
            }
        } else {
            ImportKind::Module {
                alias: Some(self.stream.expect_identifier()?),
            }
        };

        self.stream.expect_keyword("from")?;
        let module = self.stream.expect(TokenKind::String, None)?.lexeme;
        self.stream.eat_operator(";")?;

        Ok(Statement::Import {
            module,
            kind,
            location,
        })
    }

    /// Expression statement or assignment, followed by an optional `;`.
    /// `console.log(...)` becomes a print statement.
    fn parse_simple_statement(&mut self) -> Result<Statement, ParserError> {
        let statement = self.parse_assignment_or_expression()?;
        self.stream.eat_operator(";")?;

        Ok(match statement {
            Statement::Expression {
                expression: Expression::Call { callee, args, .. },
                location,
            } if is_console_log(&callee) => Statement::Print { args, location },
            other => other,
        })
    }

    fn parse_assignment_or_expression(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();

        if self.stream.check_operator("++") || self.stream.check_operator("--") {
            let op = increment_operator(&self.stream.advance()?.lexeme);
            let target = self.parse_unary_expression()?;
            self.check_assignable(&target)?;
            return Ok(increment(target, op, location));
        }

        let first = self.parse_expression()?;

        if self.stream.check_operator("=") {
            let mut targets = vec![first];
            let value = loop {
                self.stream.advance()?;
                let next = self.parse_expression()?;
                if self.stream.check_operator("=") {
                    targets.push(next);
                } else {
                    break next;
                }
            };
            for target in &targets {
                self.check_assignable(target)?;
            }
            return Ok(Statement::Assign {
                targets,
                value: Some(value),
                declaration: None,
                location,
            });
        }

        if let Some(op) = augmented_operator(self.stream.current()) {
            self.check_assignable(&first)?;
            self.stream.advance()?;
            let value = self.parse_expression()?;
            return Ok(Statement::AugAssign {
                target: first,
                op,
                value,
                location,
            });
        }

        if self.stream.check_operator("++") || self.stream.check_operator("--") {
            self.check_assignable(&first)?;
            let op = increment_operator(&self.stream.advance()?.lexeme);
            return Ok(increment(first, op, location));
        }

        Ok(Statement::Expression {
            expression: first,
            location,
        })
    }

    fn check_assignable(&self, target: &Expression) -> Result<(), ParserError> {
        if target.is_assignable() {
            Ok(())
        } else {
            let position = target.location();
            Err(ParserError::InvalidAssignmentTarget {
                target: target.kind_name().to_string(),
                location: SourceLocation::new(self.stream.origin(), position.line, position.column),
            })
        }
    }

    /// Grammar: or_expr ["?" expr ":" expr]
    pub fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let test = self.parse_or_expression()?;

        if !self.stream.eat_operator("?")? {
            return Ok(test);
        }
        let consequent = self.parse_expression()?;
        self.stream.expect_operator(":")?;
        let alternate = self.parse_expression()?;

        Ok(Expression::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            location,
        })
    }

    fn parse_or_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_and_expression()?;

        while self.stream.eat_operator("||")? {
            let right = self.parse_and_expression()?;
            left = Expression::BoolOp {
                op: BoolOperator::Or,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }
        Ok(left)
    }

    fn parse_and_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_equality_expression()?;

        while self.stream.eat_operator("&&")? {
            let right = self.parse_equality_expression()?;
            left = Expression::BoolOp {
                op: BoolOperator::And,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }
        Ok(left)
    }

    /// Strict and loose equality both map to plain equality
    fn parse_equality_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_relational_expression()?;

        loop {
            let op = match self.stream.current().lexeme.as_str() {
                "===" | "==" => CompareOperator::Equal,
                "!==" | "!=" => CompareOperator::NotEqual,
                _ => break,
            };
            if !self.stream.check(TokenKind::Operator) {
                break;
            }
            self.stream.advance()?;
            let right = self.parse_relational_expression()?;
            left = compare(left, op, right, location);
        }
        Ok(left)
    }

    fn parse_relational_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_additive_expression()?;

        loop {
            let op = match self.stream.current().lexeme.as_str() {
                "<" => CompareOperator::Less,
                ">" => CompareOperator::Greater,
                "<=" => CompareOperator::LessEqual,
                ">=" => CompareOperator::GreaterEqual,
                _ => break,
            };
            if !self.stream.check(TokenKind::Operator) {
                break;
            }
            self.stream.advance()?;
            let right = self.parse_additive_expression()?;
            left = compare(left, op, right, location);
        }
        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            let op = if self.stream.check_operator("+") {
                BinaryOperator::Add
            } else if self.stream.check_operator("-") {
                BinaryOperator::Subtract
            } else {
                break;
            };
            self.stream.advance()?;
            let right = self.parse_multiplicative_expression()?;
            left = binary(op, left, right, location);
        }
        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut left = self.parse_power_expression()?;

        loop {
            let op = if self.stream.check_operator("*") {
                BinaryOperator::Multiply
            } else if self.stream.check_operator("/") {
                BinaryOperator::Divide
            } else if self.stream.check_operator("%") {
                BinaryOperator::Modulo
            } else {
                break;
            };
            self.stream.advance()?;
            let right = self.parse_power_expression()?;
            left = binary(op, left, right, location);
        }
        Ok(left)
    }

    fn parse_power_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let base = self.parse_unary_expression()?;

        if self.stream.eat_operator("**")? {
            let exponent = self.parse_power_expression()?;
            return Ok(binary(BinaryOperator::Power, base, exponent, location));
        }
        Ok(base)
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let op = if self.stream.check_operator("!") {
            UnaryOperator::Not
        } else if self.stream.check_operator("-") {
            UnaryOperator::Negate
        } else if self.stream.check_operator("+") {
            UnaryOperator::Plus
        } else {
            return self.parse_postfix_expression();
        };
        self.stream.advance()?;
        let operand = self.parse_unary_expression()?;

        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
            location,
        })
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut expr = self.parse_primary_expression()?;

        loop {
            if self.stream.eat_operator(".")? {
                let name = self.parse_property_name()?;
                expr = Expression::Attribute {
                    object: Box::new(expr),
                    name,
                    location,
                };
            } else if self.stream.eat_operator("[")? {
                let index = self.parse_expression()?;
                self.stream.expect_operator("]")?;
                expr = Expression::Index {
                    object: Box::new(expr),
                    index: Box::new(index),
                    location,
                };
            } else if self.stream.eat_operator("(")? {
                let args = self.parse_sequence(")")?;
                expr = Expression::Call {
                    callee: Box::new(expr),
                    args,
                    location,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Property names after `.` may be reserved words
    fn parse_property_name(&mut self) -> Result<String, ParserError> {
        match self.stream.current().kind {
            TokenKind::Identifier | TokenKind::Keyword => Ok(self.stream.advance()?.lexeme),
            _ => Err(self.stream.unexpected("property name")),
        }
    }

    fn parse_sequence(&mut self, close: &str) -> Result<Vec<Expression>, ParserError> {
        let mut items = Vec::new();
        while !self.stream.check_operator(close) {
            items.push(self.parse_expression()?);
            if !self.stream.eat_operator(",")? {
                break;
            }
        }
        self.stream.expect_operator(close)?;
        Ok(items)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let token = self.stream.current().clone();

        match token.kind {
            TokenKind::Number => {
                self.stream.advance()?;
                Ok(Expression::Number {
                    value: token.lexeme,
                    location,
                })
            }
            TokenKind::String => {
                self.stream.advance()?;
                Ok(Expression::String {
                    value: token.lexeme,
                    location,
                })
            }
            TokenKind::TemplateString => {
                self.stream.advance()?;
                Ok(Expression::TemplateLiteral {
                    raw: token.lexeme,
                    location,
                })
            }
            TokenKind::Identifier => {
                self.stream.advance()?;
                Ok(Expression::Variable {
                    name: token.lexeme,
                    location,
                })
            }
            TokenKind::Keyword => match token.lexeme.as_str() {
                "true" | "false" => {
                    self.stream.advance()?;
                    Ok(Expression::Boolean {
                        value: token.lexeme == "true",
                        location,
                    })
                }
                "null" | "undefined" => {
                    self.stream.advance()?;
                    Ok(Expression::Null { location })
                }
                "this" => {
                    self.stream.advance()?;
                    Ok(Expression::This { location })
                }
                "super" => {
                    self.stream.advance()?;
                    Ok(Expression::Super { location })
                }
                "new" => self.parse_new_expression(),
                _ => Err(self.stream.unexpected("expression")),
            },
            TokenKind::Operator => match token.lexeme.as_str() {
                "(" => {
                    self.stream.advance()?;
                    let expr = self.parse_expression()?;
                    self.stream.expect_operator(")")?;
                    Ok(expr)
                }
                "[" => {
                    self.stream.advance()?;
                    let elements = self.parse_sequence("]")?;
                    Ok(Expression::List { elements, location })
                }
                "{" => {
                    self.stream.advance()?;
                    self.parse_object(location)
                }
                _ => Err(self.stream.unexpected("expression")),
            },
            _ => Err(self.stream.unexpected("expression")),
        }
    }

    /// Grammar: "new" IDENT ("." IDENT)* ["(" arguments ")"]
    fn parse_new_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("new")?;

        let name = self.stream.expect_identifier()?;
        let mut callee = Expression::Variable { name, location };
        while self.stream.eat_operator(".")? {
            let name = self.parse_property_name()?;
            callee = Expression::Attribute {
                object: Box::new(callee),
                name,
                location,
            };
        }
        let args = if self.stream.eat_operator("(")? {
            self.parse_sequence(")")?
        } else {
            Vec::new()
        };

        Ok(Expression::New {
            callee: Box::new(callee),
            args,
            location,
        })
    }

    /// Object literal; the opening brace is already consumed
    fn parse_object(&mut self, location: Position) -> Result<Expression, ParserError> {
        let mut entries = Vec::new();

        while !self.stream.check_operator("}") {
            let key_token = self.stream.current().clone();
            let key = match key_token.kind {
                TokenKind::Identifier | TokenKind::Keyword | TokenKind::String => {
                    self.stream.advance()?;
                    DictKey::Literal {
                        value: key_token.lexeme.clone(),
                    }
                }
                TokenKind::Number => {
                    self.stream.advance()?;
                    DictKey::Number {
                        value: key_token.lexeme.clone(),
                    }
                }
                _ if key_token.is_operator("[") => {
                    self.stream.advance()?;
                    let expression = self.parse_expression()?;
                    self.stream.expect_operator("]")?;
                    DictKey::Computed { expression }
                }
                _ => return Err(self.stream.unexpected("property name")),
            };

            let value = if self.stream.eat_operator(":")? {
                self.parse_expression()?
            } else if key_token.kind == TokenKind::Identifier {
                Expression::Variable {
                    location: Position::of(&key_token),
                    name: key_token.lexeme,
                }
            } else {
                return Err(self.stream.unexpected("':'"));
            };
            entries.push(DictEntry { key, value });

            if !self.stream.eat_operator(",")? {
                break;
            }
        }
        self.stream.expect_operator("}")?;

        Ok(Expression::Dict { entries, location })
    }
}

fn is_console_log(callee: &Expression) -> bool {
    matches!(
        callee,
        Expression::Attribute { object, name, .. }
            if name == "log" && object.as_variable() == Some("console")
    )
}

/// Recognize `let i = a; i < b; i++` style headers
fn as_range_loop(
    init: &Option<Statement>,
    test: &Option<Expression>,
    update: &Option<Statement>,
) -> Option<(String, ForIter)> {
    let (target, start) = match init.as_ref()? {
        Statement::Assign {
            targets,
            value: Some(value),
            ..
        } if targets.len() == 1 => (targets[0].as_variable()?, value),
        _ => return None,
    };

    let (op, stop) = match test.as_ref()? {
        Expression::CompareChain {
            left, comparisons, ..
        } if comparisons.len() == 1 && left.as_variable() == Some(target) => {
            (comparisons[0].op, &comparisons[0].right)
        }
        _ => return None,
    };

    let (update_op, amount) = match update.as_ref()? {
        Statement::AugAssign {
            target: updated,
            op,
            value,
            ..
        } if updated.as_variable() == Some(target) => (*op, value),
        _ => return None,
    };

    let step = match (op, update_op) {
        (CompareOperator::Less, BinaryOperator::Add) => {
            if is_number(amount, "1") {
                None
            } else {
                Some(amount.clone())
            }
        }
        (CompareOperator::Greater, BinaryOperator::Subtract) => Some(Expression::UnaryOp {
            op: UnaryOperator::Negate,
            operand: Box::new(amount.clone()),
            location: amount.location(),
        }),
        _ => return None,
    };

    let start = if is_number(start, "0") && step.is_none() {
        None
    } else {
        Some(start.clone())
    };

    Some((
        target.to_string(),
        ForIter::Range {
            start,
            stop: stop.clone(),
            step,
        },
    ))
}

fn is_number(expr: &Expression, literal: &str) -> bool {
    matches!(expr, Expression::Number { value, .. } if value == literal)
}

fn compare(left: Expression, op: CompareOperator, right: Expression, location: Position) -> Expression {
    Expression::CompareChain {
        left: Box::new(left),
        comparisons: vec![Comparison { op, right }],
        location,
    }
}

fn binary(op: BinaryOperator, left: Expression, right: Expression, location: Position) -> Expression {
    Expression::BinOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
        location,
    }
}

fn increment_operator(lexeme: &str) -> BinaryOperator {
    if lexeme == "--" {
        BinaryOperator::Subtract
    } else {
        BinaryOperator::Add
    }
}

fn increment(target: Expression, op: BinaryOperator, location: Position) -> Statement {
    Statement::AugAssign {
        target,
        op,
        value: Expression::Number {
            value: "1".to_string(),
            location,
        },
        location,
    }
}

fn augmented_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    match token.lexeme.as_str() {
        "+=" => Some(BinaryOperator::Add),
        "-=" => Some(BinaryOperator::Subtract),
        "*=" => Some(BinaryOperator::Multiply),
        "/=" => Some(BinaryOperator::Divide),
        "%=" => Some(BinaryOperator::Modulo),
        "**=" => Some(BinaryOperator::Power),
        _ => None,
    }
}
