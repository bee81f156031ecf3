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

//! Lexer for the indentation-sensitive PythonScript dialect
//!
//! Besides the usual tokens this lexer produces NEWLINE at the end of every
//! physical line outside brackets, and INDENT/DEDENT whenever the leading
//! whitespace of a non-blank line changes.

use super::{is_alpha, is_digit, Cursor, OperatorTable, Token, TokenKind};
use crate::error::LexerError;
use lazy_static::lazy_static;
use std::collections::HashSet;
use tracing::debug;

/// Columns a tab counts for when measuring indentation
pub const TAB_WIDTH: u32 = 4;

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = [
        "if", "elif", "else", "for", "while", "def", "class", "return", "try", "except",
        "finally", "import", "from", "as", "print", "in", "not", "and", "or", "True", "False",
        "None", "pass", "break", "continue",
    ]
    .into_iter()
    .collect();
    static ref OPERATORS: OperatorTable = OperatorTable::new(&[
        "//=", "**=", "**", "//", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "+", "-",
        "*", "/", "%", "=", "<", ">", "(", ")", "[", "]", "{", "}", ":", ",", ".",
    ]);
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Tokenize PythonScript source
pub fn tokenize(source: &str, origin: &str) -> Result<Vec<Token>, LexerError> {
    let tokens = Lexer::new(source, origin).tokenize()?;
    debug!(origin, count = tokens.len(), "tokenized PythonScript source");
    Ok(tokens)
}

pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    indent_stack: Vec<u32>,
    bracket_depth: usize,
}

impl Lexer {
    pub fn new(input: &str, origin: &str) -> Self {
        Self {
            cursor: Cursor::new(input, origin),
            tokens: Vec::new(),
            indent_stack: vec![0],
            bracket_depth: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        self.handle_indentation()?;

        while let Some(ch) = self.cursor.current() {
            let (line, column) = (self.cursor.line(), self.cursor.column());
            match ch {
                '\n' => {
                    self.cursor.advance();
                    if self.bracket_depth == 0 {
                        self.push(TokenKind::Newline, "\n", line, column);
                        self.handle_indentation()?;
                    }
                }
                ' ' | '\t' | '\r' => self.cursor.advance(),
                '#' => self.skip_comment(),
                '\\' if self.cursor.peek() == Some('\n') => {
                    // explicit line continuation
                    self.cursor.advance();
                    self.cursor.advance();
                }
                '"' | '\'' => {
                    let start = self.cursor.location();
                    let value = self
                        .cursor
                        .read_quoted()
                        .ok_or(LexerError::UnterminatedString { location: start })?;
                    self.push(TokenKind::String, value, line, column);
                }
                'f' if matches!(self.cursor.peek(), Some('"') | Some('\'')) => {
                    let start = self.cursor.location();
                    self.cursor.advance();
                    let raw = self
                        .cursor
                        .read_quoted()
                        .ok_or(LexerError::UnterminatedInterpolatedString { location: start })?;
                    self.push(TokenKind::InterpolatedString, raw, line, column);
                }
                c if is_digit(c) => {
                    let number = self.cursor.read_number()?;
                    self.push(TokenKind::Number, number, line, column);
                }
                c if is_alpha(c) => {
                    let word = self.cursor.read_identifier();
                    let kind = if is_keyword(&word) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Identifier
                    };
                    self.push(kind, word, line, column);
                }
                c => {
                    let op = self.cursor.read_operator(&OPERATORS).ok_or_else(|| {
                        LexerError::UnexpectedCharacter {
                            character: c,
                            location: self.cursor.location(),
                        }
                    })?;
                    self.track_brackets(op);
                    self.push(TokenKind::Operator, op, line, column);
                }
            }
        }

        let (line, column) = (self.cursor.line(), self.cursor.column());
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push(TokenKind::Dedent, "", line, column);
        }
        self.push(TokenKind::Eof, "", line, column);
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) {
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if ch == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    fn track_brackets(&mut self, op: &str) {
        match op {
            "(" | "[" | "{" => self.bracket_depth += 1,
            ")" | "]" | "}" => self.bracket_depth = self.bracket_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Measure the leading whitespace of the line at the cursor and emit
    /// INDENT/DEDENT tokens. Blank and comment-only lines leave the stack alone.
    fn handle_indentation(&mut self) -> Result<(), LexerError> {
        let mut width = 0;
        while let Some(ch) = self.cursor.current() {
            match ch {
                ' ' => width += 1,
                '\t' => width += TAB_WIDTH,
                _ => break,
            }
            self.cursor.advance();
        }

        match self.cursor.current() {
            None | Some('\n') | Some('\r') | Some('#') => return Ok(()),
            _ => {}
        }

        let (line, column) = (self.cursor.line(), self.cursor.column());
        let top = self.indent_stack.last().copied().unwrap_or(0);

        if width > top {
            self.indent_stack.push(width);
            self.push(TokenKind::Indent, width.to_string(), line, column);
        } else if width < top {
            while self.indent_stack.last().is_some_and(|level| *level > width) {
                self.indent_stack.pop();
                self.push(TokenKind::Dedent, "", line, column);
            }
            if self.indent_stack.last().copied().unwrap_or(0) != width {
                return Err(LexerError::InconsistentIndentation {
                    found: width,
                    location: self.cursor.location(),
                });
            }
        }
        Ok(())
    }
}
