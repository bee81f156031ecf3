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

//! Error types for the PythonScript transpiler
//!
//! Lexing and parsing stop at the first error. Every error carries the
//! location (origin, line, column) where it was detected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A location in a source unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File name or other label for the source unit
    pub origin: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl SourceLocation {
    pub fn new(origin: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            origin: origin.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.origin, self.line, self.column)
    }
}

/// Errors raised while turning source text into tokens
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexerError {
    #[error("{location}: unterminated string literal")]
    UnterminatedString { location: SourceLocation },

    #[error("{location}: unterminated interpolated string literal")]
    UnterminatedInterpolatedString { location: SourceLocation },

    #[error("{location}: unterminated template literal")]
    UnterminatedTemplate { location: SourceLocation },

    #[error("{location}: unterminated block comment")]
    UnterminatedBlockComment { location: SourceLocation },

    #[error("{location}: unexpected character '{character}'")]
    UnexpectedCharacter {
        character: char,
        location: SourceLocation,
    },

    #[error("{location}: inconsistent indentation (dedent to column width {found} matches no enclosing block)")]
    InconsistentIndentation { found: u32, location: SourceLocation },

    #[error("{location}: invalid number '{value}'")]
    InvalidNumber {
        value: String,
        location: SourceLocation,
    },
}

impl LexerError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            LexerError::UnterminatedString { location }
            | LexerError::UnterminatedInterpolatedString { location }
            | LexerError::UnterminatedTemplate { location }
            | LexerError::UnterminatedBlockComment { location }
            | LexerError::UnexpectedCharacter { location, .. }
            | LexerError::InconsistentIndentation { location, .. }
            | LexerError::InvalidNumber { location, .. } => location,
        }
    }

    /// The error text without the location prefix
    pub fn message(&self) -> String {
        strip_location(&self.to_string(), self.location())
    }
}

/// Errors raised while building the AST from tokens
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParserError {
    #[error("{location}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: SourceLocation,
    },

    #[error("{location}: unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: String,
        location: SourceLocation,
    },

    #[error("{location}: unbalanced DEDENT")]
    UnbalancedDedent { location: SourceLocation },

    #[error("{location}: invalid interpolation: {message}")]
    InvalidInterpolation {
        message: String,
        location: SourceLocation,
    },

    #[error("{location}: invalid assignment target {target}")]
    InvalidAssignmentTarget {
        target: String,
        location: SourceLocation,
    },

    #[error("{location}: {message}")]
    SyntaxError {
        message: String,
        location: SourceLocation,
    },
}

impl ParserError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParserError::UnexpectedToken { location, .. }
            | ParserError::UnexpectedEof { location, .. }
            | ParserError::UnbalancedDedent { location }
            | ParserError::InvalidInterpolation { location, .. }
            | ParserError::InvalidAssignmentTarget { location, .. }
            | ParserError::SyntaxError { location, .. } => location,
        }
    }

    /// The error text without the location prefix
    pub fn message(&self) -> String {
        strip_location(&self.to_string(), self.location())
    }
}

/// Invalid configuration values
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be between 1 and 8, got {value}")]
    IndentOutOfRange { field: &'static str, value: usize },

    #[error("invalid configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Top-level error for a full transpilation
#[derive(Debug, Error)]
pub enum CompilerError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension for {}: expected .pjs or .js", path.display())]
    UnknownDialect { path: PathBuf },
}

fn strip_location(rendered: &str, location: &SourceLocation) -> String {
    let prefix = format!("{}: ", location);
    rendered
        .strip_prefix(prefix.as_str())
        .unwrap_or(rendered)
        .to_string()
}
