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

//! Parser for the PythonScript dialect
//!
//! Recursive descent over the token stream, with one function per
//! precedence level. Blocks are delimited by INDENT/DEDENT tokens.

use super::stream::TokenStream;
use crate::ast::{
    BinaryOperator, BoolOperator, CompareOperator, Comparison, DictEntry, DictKey, ElifClause,
    ExceptHandler, Expression, ForIter, ImportKind, ImportedName, Module, Parameter,
    ParameterKind, Position, Segment, Statement, UnaryOperator,
};
use crate::error::{ParserError, SourceLocation};
use crate::lexer::{self, find_closing_brace, Token, TokenKind};
use tracing::{debug, trace};

/// Parse a PythonScript token list into a module
pub fn parse(tokens: Vec<Token>, origin: &str) -> Result<Module, ParserError> {
    let module = Parser::new(tokens, origin).parse_module()?;
    debug!(origin, statements = module.body.len(), "parsed PythonScript module");
    Ok(module)
}

pub struct Parser {
    stream: TokenStream,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, origin: &str) -> Self {
        Self {
            stream: TokenStream::with_indentation(tokens, origin),
        }
    }

    fn position(&self) -> Position {
        Position::of(self.stream.current())
    }

    /// Parse the whole token list
    /// Grammar: statement* EOF
    pub fn parse_module(&mut self) -> Result<Module, ParserError> {
        let location = self.position();
        let mut body = Vec::new();

        loop {
            self.stream.skip_newlines()?;
            if self.stream.is_at_end() {
                break;
            }
            body.push(self.parse_statement()?);
        }

        if self.stream.indent_depth() != 0 {
            return Err(self.stream.syntax_error("indented block is not closed at end of input"));
        }

        Ok(Module { body, location })
    }

    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        if !self.stream.check(TokenKind::Keyword) {
            return self.parse_simple_statement();
        }
        let keyword = self.stream.current().lexeme.clone();

        match keyword.as_str() {
            "def" => self.parse_function_def(),
            "class" => self.parse_class_def(),
            "if" => self.parse_if_statement(),
            "for" => self.parse_for_statement(),
            "while" => self.parse_while_statement(),
            "try" => self.parse_try_statement(),
            "import" | "from" => {
                let statement = self.parse_import()?;
                self.end_simple_statement()?;
                Ok(statement)
            }
            "return" => self.parse_return_statement(),
            "print" if self.stream.peek(1).is_some_and(|t| t.is_operator("(")) => {
                self.parse_print_statement()
            }
            "pass" | "break" | "continue" => {
                let location = self.position();
                let keyword = self.stream.advance()?;
                self.end_simple_statement()?;
                Ok(match keyword.lexeme.as_str() {
                    "pass" => Statement::Pass { location },
                    "break" => Statement::Break { location },
                    _ => Statement::Continue { location },
                })
            }
            _ => self.parse_simple_statement(),
        }
    }

    /// A simple statement ends at NEWLINE, or right before DEDENT/EOF
    fn end_simple_statement(&mut self) -> Result<(), ParserError> {
        if self.stream.check(TokenKind::Newline) {
            self.stream.advance()?;
            Ok(())
        } else if self.stream.check(TokenKind::Dedent) || self.stream.is_at_end() {
            Ok(())
        } else {
            Err(self.stream.unexpected("NEWLINE"))
        }
    }

    /// Parse an indented block
    /// Grammar: ":" NEWLINE INDENT statement+ DEDENT
    fn parse_block(&mut self) -> Result<Vec<Statement>, ParserError> {
        self.stream.expect_operator(":")?;
        self.stream.expect(TokenKind::Newline, None)?;
        self.stream.skip_newlines()?;
        self.stream.expect(TokenKind::Indent, None)?;

        let mut body = Vec::new();
        loop {
            self.stream.skip_newlines()?;
            if self.stream.check(TokenKind::Dedent) {
                self.stream.advance()?;
                break;
            }
            if self.stream.is_at_end() {
                return Err(self.stream.unexpected("DEDENT"));
            }
            body.push(self.parse_statement()?);
        }
        Ok(body)
    }

    /// Parse a function definition
    /// Grammar: "def" IDENT "(" parameters ")" block
    fn parse_function_def(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("def")?;
        let name = self.stream.expect_identifier()?;
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
            let kind = if self.stream.eat_operator("**")? {
                ParameterKind::KeywordCollector
            } else if self.stream.eat_operator("*")? {
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

    /// Parse a class definition
    /// Grammar: "class" IDENT [ "(" [IDENT] ")" ] block
    fn parse_class_def(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("class")?;
        let name = self.stream.expect_identifier()?;

        let mut base = None;
        if self.stream.eat_operator("(")? {
            if !self.stream.check_operator(")") {
                base = Some(self.stream.expect_identifier()?);
            }
            self.stream.expect_operator(")")?;
        }
        let body = self.parse_block()?;

        Ok(Statement::ClassDef {
            name,
            base,
            body,
            location,
        })
    }

    /// Grammar: "if" expr block ("elif" expr block)* ["else" block]
    fn parse_if_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("if")?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;

        let mut elif_clauses = Vec::new();
        while self.stream.check_keyword("elif") {
            let clause_location = self.position();
            self.stream.advance()?;
            let condition = self.parse_expression()?;
            let body = self.parse_block()?;
            elif_clauses.push(ElifClause {
                condition,
                body,
                location: clause_location,
            });
        }

        let else_body = if self.stream.eat_keyword("else")? {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            body,
            elif_clauses,
            else_body,
            location,
        })
    }

    /// Parse a for loop. A `range(...)` call with one to three arguments
    /// makes a counting loop.
    /// Grammar: "for" IDENT "in" expr block
    fn parse_for_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("for")?;
        let target = self.stream.expect_identifier()?;
        self.stream.expect_keyword("in")?;
        let iterable = self.parse_expression()?;
        let body = self.parse_block()?;

        let iter = match iterable {
            Expression::Call { callee, args, .. }
                if callee.as_variable() == Some("range") && (1..=3).contains(&args.len()) =>
            {
                let mut args = args.into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(stop), None, _) => ForIter::Range {
                        start: None,
                        stop,
                        step: None,
                    },
                    (Some(start), Some(stop), step) => ForIter::Range {
                        start: Some(start),
                        stop,
                        step,
                    },
                    _ => return Err(self.stream.syntax_error("range() needs an argument")),
                }
            }
            iterable => ForIter::Each { iterable },
        };

        Ok(Statement::For {
            target,
            iter,
            body,
            location,
        })
    }

    /// Grammar: "while" expr block
    fn parse_while_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("while")?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;

        Ok(Statement::While {
            condition,
            body,
            location,
        })
    }

    /// The exception type after `except` is accepted and dropped.
    /// Grammar: "try" block ["except" [IDENT] ["as" IDENT] block] ["finally" block]
    fn parse_try_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("try")?;
        let body = self.parse_block()?;

        let mut handler = None;
        if self.stream.check_keyword("except") {
            let handler_location = self.position();
            self.stream.advance()?;
            if self.stream.check(TokenKind::Identifier) {
                self.stream.advance()?;
            }
            let name = if self.stream.eat_keyword("as")? {
                Some(self.stream.expect_identifier()?)
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
            return Err(self.stream.unexpected("'except' or 'finally'"));
        }

        Ok(Statement::Try {
            body,
            handler,
            finally_body,
            location,
        })
    }

    /// Grammar: "import" dotted ["as" IDENT]
    ///        | "from" dotted "import" IDENT ["as" IDENT] ("," IDENT ["as" IDENT])*
    fn parse_import(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();

        if self.stream.eat_keyword("import")? {
            let module = self.parse_dotted_name()?;
            let alias = self.parse_alias()?;
            return Ok(Statement::Import {
                module,
                kind: ImportKind::Module { alias },
                location,
            });
        }

        self.stream.expect_keyword("from")?;
        let module = self.parse_dotted_name()?;
        self.stream.expect_keyword("import")?;

        let mut names = Vec::new();
        loop {
            let name = self.stream.expect_identifier()?;
            let alias = self.parse_alias()?;
            names.push(ImportedName { name, alias });
            if !self.stream.eat_operator(",")? {
                break;
            }
        }

        Ok(Statement::Import {
            module,
            kind: ImportKind::Names { names },
            location,
        })
    }

    fn parse_dotted_name(&mut self) -> Result<String, ParserError> {
        let mut name = self.stream.expect_identifier()?;
        while self.stream.eat_operator(".")? {
            name.push('.');
            name.push_str(&self.stream.expect_identifier()?);
        }
        Ok(name)
    }

    fn parse_alias(&mut self) -> Result<Option<String>, ParserError> {
        if self.stream.eat_keyword("as")? {
            Ok(Some(self.stream.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("return")?;

        let value = if self.stream.check(TokenKind::Newline)
            || self.stream.check(TokenKind::Dedent)
            || self.stream.is_at_end()
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.end_simple_statement()?;

        Ok(Statement::Return { value, location })
    }

    /// Grammar: "print" "(" arguments ")"
    fn parse_print_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        self.stream.expect_keyword("print")?;
        self.stream.expect_operator("(")?;
        let args = self.parse_arguments()?;
        self.end_simple_statement()?;

        Ok(Statement::Print { args, location })
    }

    /// Parse an expression statement, assignment or augmented assignment
    fn parse_simple_statement(&mut self) -> Result<Statement, ParserError> {
        let location = self.position();
        let first = self.parse_expression()?;

        let statement = if self.stream.check_operator("=") {
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
            Statement::Assign {
                targets,
                value: Some(value),
                declaration: None,
                location,
            }
        } else if let Some(op) = augmented_operator(self.stream.current()) {
            self.check_assignable(&first)?;
            self.stream.advance()?;
            let value = self.parse_expression()?;
            Statement::AugAssign {
                target: first,
                op,
                value,
                location,
            }
        } else {
            Statement::Expression {
                expression: first,
                location,
            }
        };

        self.end_simple_statement()?;
        Ok(statement)
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

    /// Parse a full expression, including the conditional form
    /// Grammar: or_expr ["if" or_expr "else" expression]
    pub fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let consequent = self.parse_or_expression()?;

        if !self.stream.check_keyword("if") {
            return Ok(consequent);
        }
        self.stream.advance()?;
        let test = self.parse_or_expression()?;
        self.stream.expect_keyword("else")?;
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

        while self.stream.eat_keyword("or")? {
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
        let mut left = self.parse_not_expression()?;

        while self.stream.eat_keyword("and")? {
            let right = self.parse_not_expression()?;
            left = Expression::BoolOp {
                op: BoolOperator::And,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }
        Ok(left)
    }

    fn parse_not_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        if self.stream.eat_keyword("not")? {
            let operand = self.parse_not_expression()?;
            return Ok(Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
                location,
            });
        }
        self.parse_comparison_expression()
    }

    /// Parse a comparison chain. A lone `in` / `not in` test becomes a
    /// membership node.
    fn parse_comparison_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let left = self.parse_additive_expression()?;
        let mut comparisons = Vec::new();

        while let Some(op) = self.comparison_operator() {
            if op == CompareOperator::NotIn {
                self.stream.advance()?;
            }
            self.stream.advance()?;
            let right = self.parse_additive_expression()?;
            comparisons.push(Comparison { op, right });
        }

        if comparisons.is_empty() {
            return Ok(left);
        }

        if comparisons.len() == 1
            && matches!(comparisons[0].op, CompareOperator::In | CompareOperator::NotIn)
        {
            if let Some(Comparison { op, right }) = comparisons.pop() {
                return Ok(Expression::Membership {
                    element: Box::new(left),
                    container: Box::new(right),
                    negated: op == CompareOperator::NotIn,
                    location,
                });
            }
        }

        Ok(Expression::CompareChain {
            left: Box::new(left),
            comparisons,
            location,
        })
    }

    fn comparison_operator(&self) -> Option<CompareOperator> {
        let token = self.stream.current();
        match (token.kind, token.lexeme.as_str()) {
            (TokenKind::Operator, "<") => Some(CompareOperator::Less),
            (TokenKind::Operator, ">") => Some(CompareOperator::Greater),
            (TokenKind::Operator, "<=") => Some(CompareOperator::LessEqual),
            (TokenKind::Operator, ">=") => Some(CompareOperator::GreaterEqual),
            (TokenKind::Operator, "==") => Some(CompareOperator::Equal),
            (TokenKind::Operator, "!=") => Some(CompareOperator::NotEqual),
            (TokenKind::Keyword, "in") => Some(CompareOperator::In),
            (TokenKind::Keyword, "not")
                if self.stream.peek(1).is_some_and(|t| t.is_keyword("in")) =>
            {
                Some(CompareOperator::NotIn)
            }
            _ => None,
        }
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
            } else if self.stream.check_operator("//") {
                BinaryOperator::FloorDivide
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

    /// `**` is right-associative
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
        let op = if self.stream.check_operator("-") {
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

    /// Parse attribute access, subscripts, slices and calls
    fn parse_postfix_expression(&mut self) -> Result<Expression, ParserError> {
        let location = self.position();
        let mut expr = self.parse_primary_expression()?;

        loop {
            if self.stream.eat_operator(".")? {
                let name = self.stream.expect_identifier()?;
                expr = Expression::Attribute {
                    object: Box::new(expr),
                    name,
                    location,
                };
            } else if self.stream.eat_operator("[")? {
                expr = self.parse_subscript(expr, location)?;
            } else if self.stream.eat_operator("(")? {
                let args = self.parse_arguments()?;
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

    /// Grammar: "[" expr "]" | "[" [expr] ":" [expr] [":" [expr]] "]"
    fn parse_subscript(
        &mut self,
        object: Expression,
        location: Position,
    ) -> Result<Expression, ParserError> {
        let start = if self.stream.check_operator(":") {
            None
        } else {
            Some(self.parse_expression()?)
        };

        if !self.stream.eat_operator(":")? {
            self.stream.expect_operator("]")?;
            return match start {
                Some(index) => Ok(Expression::Index {
                    object: Box::new(object),
                    index: Box::new(index),
                    location,
                }),
                None => Err(self.stream.unexpected("expression")),
            };
        }

        let stop = if self.stream.check_operator("]") || self.stream.check_operator(":") {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        let step = if self.stream.eat_operator(":")? && !self.stream.check_operator("]") {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.stream.expect_operator("]")?;

        Ok(Expression::Slice {
            object: Box::new(object),
            start: start.map(Box::new),
            stop,
            step,
            location,
        })
    }

    /// Comma-separated arguments; the opening `(` is already consumed
    fn parse_arguments(&mut self) -> Result<Vec<Expression>, ParserError> {
        self.parse_sequence(")")
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
            TokenKind::InterpolatedString => {
                self.stream.advance()?;
                let segments = self.parse_interpolated_string(&token)?;
                Ok(Expression::InterpolatedString { segments, location })
            }
            TokenKind::Identifier => {
                self.stream.advance()?;
                Ok(Expression::Variable {
                    name: token.lexeme,
                    location,
                })
            }
            TokenKind::Keyword => match token.lexeme.as_str() {
                "True" | "False" => {
                    self.stream.advance()?;
                    Ok(Expression::Boolean {
                        value: token.lexeme == "True",
                        location,
                    })
                }
                "None" => {
                    self.stream.advance()?;
                    Ok(Expression::Null { location })
                }
                "print" => {
                    self.stream.advance()?;
                    Ok(Expression::Variable {
                        name: token.lexeme,
                        location,
                    })
                }
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
                    self.parse_dict(location)
                }
                _ => Err(self.stream.unexpected("expression")),
            },
            _ => Err(self.stream.unexpected("expression")),
        }
    }

    /// Grammar: "{" [key ":" expr ("," key ":" expr)* [","]] "}"
    fn parse_dict(&mut self, location: Position) -> Result<Expression, ParserError> {
        let mut entries = Vec::new();

        while !self.stream.check_operator("}") {
            let key = match self.parse_expression()? {
                Expression::String { value, .. } => DictKey::Literal { value },
                Expression::Number { value, .. } => DictKey::Number { value },
                expression => DictKey::Computed { expression },
            };
            self.stream.expect_operator(":")?;
            let value = self.parse_expression()?;
            entries.push(DictEntry { key, value });

            if !self.stream.eat_operator(",")? {
                break;
            }
        }
        self.stream.expect_operator("}")?;

        Ok(Expression::Dict { entries, location })
    }

    /// Split an f-string body into text and expression segments. Each
    /// embedded expression is lexed and parsed on its own.
    fn parse_interpolated_string(&self, token: &Token) -> Result<Vec<Segment>, ParserError> {
        let location = token.location(self.stream.origin());
        let chars: Vec<char> = token.lexeme.chars().collect();
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();
            match ch {
                '{' if next == Some('{') => {
                    text.push('{');
                    i += 2;
                }
                '}' if next == Some('}') => {
                    text.push('}');
                    i += 2;
                }
                '{' => {
                    let close = find_closing_brace(&chars, i + 1).ok_or_else(|| {
                        ParserError::InvalidInterpolation {
                            message: "unterminated '{' in interpolated string".to_string(),
                            location: location.clone(),
                        }
                    })?;
                    let source: String = chars[i + 1..close].iter().collect();
                    if !text.is_empty() {
                        segments.push(Segment::Text {
                            value: std::mem::take(&mut text),
                        });
                    }
                    let expr = parse_embedded_expression(&source, &location)?;
                    segments.push(Segment::Expr { expr });
                    i = close + 1;
                }
                _ => {
                    text.push(ch);
                    i += 1;
                }
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text { value: text });
        }
        Ok(segments)
    }
}

/// Lex and parse one embedded expression with a fresh lexer and parser.
/// Errors are reported at the enclosing literal.
fn parse_embedded_expression(
    source: &str,
    location: &SourceLocation,
) -> Result<Expression, ParserError> {
    let invalid = |message: String| ParserError::InvalidInterpolation {
        message,
        location: location.clone(),
    };

    let source = source.trim();
    if source.is_empty() {
        return Err(invalid("empty expression".to_string()));
    }
    trace!(source, "parsing embedded expression");

    let tokens = lexer::pyscript::tokenize(source, &location.origin)
        .map_err(|e| invalid(e.message()))?;
    let mut parser = Parser::new(tokens, &location.origin);
    let expr = parser.parse_expression().map_err(|e| invalid(e.message()))?;

    parser.stream.skip_newlines()?;
    if !parser.stream.is_at_end() {
        return Err(invalid(format!(
            "unexpected {} after embedded expression",
            parser.stream.current()
        )));
    }
    Ok(expr)
}

fn binary(op: BinaryOperator, left: Expression, right: Expression, location: Position) -> Expression {
    Expression::BinOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
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
        "//=" => Some(BinaryOperator::FloorDivide),
        "%=" => Some(BinaryOperator::Modulo),
        "**=" => Some(BinaryOperator::Power),
        _ => None,
    }
}
