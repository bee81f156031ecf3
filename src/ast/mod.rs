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

//! Abstract Syntax Tree shared by both dialects
//!
//! Both parsers build these nodes and both generators consume them. Nodes own
//! their children and are not modified after parsing. Serialized nodes are
//! tagged with a `"type"` field.

use crate::lexer::Token;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Line and column of the first token of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn of(token: &Token) -> Self {
        Self::new(token.line, token.column)
    }
}

/// Root of a parsed source unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub body: Vec<Statement>,
    pub location: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    Import {
        module: String,
        kind: ImportKind,
        location: Position,
    },
    ClassDef {
        name: String,
        base: Option<String>,
        body: Vec<Statement>,
        location: Position,
    },
    FunctionDef {
        name: String,
        params: Vec<Parameter>,
        body: Vec<Statement>,
        location: Position,
    },
    If {
        condition: Expression,
        body: Vec<Statement>,
        elif_clauses: Vec<ElifClause>,
        else_body: Option<Vec<Statement>>,
        location: Position,
    },
    For {
        target: String,
        iter: ForIter,
        body: Vec<Statement>,
        location: Position,
    },
    /// Three-clause loop that is not a plain counting loop
    ForClassic {
        init: Option<Box<Statement>>,
        test: Option<Expression>,
        update: Option<Box<Statement>>,
        body: Vec<Statement>,
        location: Position,
    },
    While {
        condition: Expression,
        body: Vec<Statement>,
        location: Position,
    },
    Try {
        body: Vec<Statement>,
        handler: Option<ExceptHandler>,
        finally_body: Option<Vec<Statement>>,
        location: Position,
    },
    Return {
        value: Option<Expression>,
        location: Position,
    },
    /// `a = b = value`; targets are listed left to right
    Assign {
        targets: Vec<Expression>,
        value: Option<Expression>,
        declaration: Option<DeclarationKind>,
        location: Position,
    },
    AugAssign {
        target: Expression,
        op: BinaryOperator,
        value: Expression,
        location: Position,
    },
    Print {
        args: Vec<Expression>,
        location: Position,
    },
    Expression {
        expression: Expression,
        location: Position,
    },
    Pass {
        location: Position,
    },
    Break {
        location: Position,
    },
    Continue {
        location: Position,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportKind {
    /// `import m [as alias]`, `import x from "m"`, `import * as x from "m"`
    Module { alias: Option<String> },
    /// `from m import a [as b], ...`, `import { a [as b], ... } from "m"`
    Names { names: Vec<ImportedName> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub default: Option<Expression>,
    pub location: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    Positional,
    /// `*args` / `...args`
    Rest,
    /// `**kwargs`
    KeywordCollector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElifClause {
    pub condition: Expression,
    pub body: Vec<Statement>,
    pub location: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptHandler {
    pub name: Option<String>,
    pub body: Vec<Statement>,
    pub location: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForIter {
    /// `range(stop)`, `range(start, stop)`, `range(start, stop, step)`
    Range {
        start: Option<Expression>,
        stop: Expression,
        step: Option<Expression>,
    },
    Each { iterable: Expression },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Let,
    Const,
    Var,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    BinOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Position,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
        location: Position,
    },
    BoolOp {
        op: BoolOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Position,
    },
    /// `a < b < c` means `a < b and b < c`; never empty
    CompareChain {
        left: Box<Expression>,
        comparisons: Vec<Comparison>,
        location: Position,
    },
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
        location: Position,
    },
    Membership {
        element: Box<Expression>,
        container: Box<Expression>,
        negated: bool,
        location: Position,
    },
    Index {
        object: Box<Expression>,
        index: Box<Expression>,
        location: Position,
    },
    Slice {
        object: Box<Expression>,
        start: Option<Box<Expression>>,
        stop: Option<Box<Expression>>,
        step: Option<Box<Expression>>,
        location: Position,
    },
    Attribute {
        object: Box<Expression>,
        name: String,
        location: Position,
    },
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
        location: Position,
    },
    New {
        callee: Box<Expression>,
        args: Vec<Expression>,
        location: Position,
    },
    List {
        elements: Vec<Expression>,
        location: Position,
    },
    Dict {
        entries: Vec<DictEntry>,
        location: Position,
    },
    InterpolatedString {
        segments: Vec<Segment>,
        location: Position,
    },
    /// Backtick literal; `${...}` parts are kept as written
    TemplateLiteral {
        raw: String,
        location: Position,
    },
    Number {
        value: String,
        location: Position,
    },
    String {
        value: String,
        location: Position,
    },
    Boolean {
        value: bool,
        location: Position,
    },
    Null {
        location: Position,
    },
    Variable {
        name: String,
        location: Position,
    },
    This {
        location: Position,
    },
    Super {
        location: Position,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate,
    Plus,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolOperator {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOperator {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    In,
    NotIn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub op: CompareOperator,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: DictKey,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DictKey {
    /// String key, quoted or a bare JavaScript property name
    Literal { value: String },
    Number { value: String },
    /// Key computed from an expression
    Computed { expression: Expression },
}

/// Piece of an interpolated string, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { value: String },
    Expr { expr: Expression },
}

impl Statement {
    pub fn location(&self) -> Position {
        match self {
            Statement::Import { location, .. }
            | Statement::ClassDef { location, .. }
            | Statement::FunctionDef { location, .. }
            | Statement::If { location, .. }
            | Statement::For { location, .. }
            | Statement::ForClassic { location, .. }
            | Statement::While { location, .. }
            | Statement::Try { location, .. }
            | Statement::Return { location, .. }
            | Statement::Assign { location, .. }
            | Statement::AugAssign { location, .. }
            | Statement::Print { location, .. }
            | Statement::Expression { location, .. }
            | Statement::Pass { location }
            | Statement::Break { location }
            | Statement::Continue { location } => *location,
        }
    }

    /// Node name as it appears in serialized output
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Import { .. } => "Import",
            Statement::ClassDef { .. } => "ClassDef",
            Statement::FunctionDef { .. } => "FunctionDef",
            Statement::If { .. } => "If",
            Statement::For { .. } => "For",
            Statement::ForClassic { .. } => "ForClassic",
            Statement::While { .. } => "While",
            Statement::Try { .. } => "Try",
            Statement::Return { .. } => "Return",
            Statement::Assign { .. } => "Assign",
            Statement::AugAssign { .. } => "AugAssign",
            Statement::Print { .. } => "Print",
            Statement::Expression { .. } => "Expression",
            Statement::Pass { .. } => "Pass",
            Statement::Break { .. } => "Break",
            Statement::Continue { .. } => "Continue",
        }
    }
}

impl Expression {
    pub fn location(&self) -> Position {
        match self {
            Expression::BinOp { location, .. }
            | Expression::UnaryOp { location, .. }
            | Expression::BoolOp { location, .. }
            | Expression::CompareChain { location, .. }
            | Expression::Conditional { location, .. }
            | Expression::Membership { location, .. }
            | Expression::Index { location, .. }
            | Expression::Slice { location, .. }
            | Expression::Attribute { location, .. }
            | Expression::Call { location, .. }
            | Expression::New { location, .. }
            | Expression::List { location, .. }
            | Expression::Dict { location, .. }
            | Expression::InterpolatedString { location, .. }
            | Expression::TemplateLiteral { location, .. }
            | Expression::Number { location, .. }
            | Expression::String { location, .. }
            | Expression::Boolean { location, .. }
            | Expression::Null { location }
            | Expression::Variable { location, .. }
            | Expression::This { location }
            | Expression::Super { location } => *location,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::BinOp { .. } => "BinOp",
            Expression::UnaryOp { .. } => "UnaryOp",
            Expression::BoolOp { .. } => "BoolOp",
            Expression::CompareChain { .. } => "CompareChain",
            Expression::Conditional { .. } => "Conditional",
            Expression::Membership { .. } => "Membership",
            Expression::Index { .. } => "Index",
            Expression::Slice { .. } => "Slice",
            Expression::Attribute { .. } => "Attribute",
            Expression::Call { .. } => "Call",
            Expression::New { .. } => "New",
            Expression::List { .. } => "List",
            Expression::Dict { .. } => "Dict",
            Expression::InterpolatedString { .. } => "InterpolatedString",
            Expression::TemplateLiteral { .. } => "TemplateLiteral",
            Expression::Number { .. } => "Number",
            Expression::String { .. } => "String",
            Expression::Boolean { .. } => "Boolean",
            Expression::Null { .. } => "Null",
            Expression::Variable { .. } => "Variable",
            Expression::This { .. } => "This",
            Expression::Super { .. } => "Super",
        }
    }

    /// Name of a plain variable reference
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expression::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this expression may appear on the left of an assignment
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expression::Variable { .. } | Expression::Attribute { .. } | Expression::Index { .. }
        )
    }
}
