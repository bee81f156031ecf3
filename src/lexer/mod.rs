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

//! Lexical analysis for both dialects
//!
//! The token model and the character cursor are shared; each dialect has its
//! own lexer with its own keyword and operator tables.

pub mod javascript;
pub mod pyscript;

use crate::error::{LexerError, SourceLocation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[cfg(test)]
mod tests;

/// Token categories shared by both dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,
    String,
    /// PythonScript `f"..."` literal, braces uninterpreted
    InterpolatedString,
    /// JavaScript backtick literal, raw text
    TemplateString,
    Identifier,
    Keyword,
    /// Operators and punctuation
    Operator,
    Indent,
    Dedent,
    Newline,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::InterpolatedString => "INTERPOLATED_STRING",
            TokenKind::TemplateString => "TEMPLATE_STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A token with its category and the 1-based position of its first character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.is(TokenKind::Operator, op)
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is(TokenKind::Keyword, keyword)
    }

    pub fn location(&self, origin: &str) -> SourceLocation {
        SourceLocation::new(origin, self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline | TokenKind::Eof => {
                write!(f, "{}", self.kind)
            }
            _ => write!(f, "{} '{}'", self.kind, self.lexeme),
        }
    }
}

/// Index of the `}` that closes an embedded expression starting at `from`,
/// skipping nested braces and quoted strings
pub(crate) fn find_closing_brace(chars: &[char], from: usize) -> Option<usize> {
    let mut depth = 1;
    let mut quote: Option<char> = None;

    for (offset, ch) in chars.get(from..)?.iter().enumerate() {
        match quote {
            Some(q) if *ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' | '`' => quote = Some(*ch),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(from + offset);
                    }
                }
                _ => {}
            },
        }
    }
    None
}

pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_alnum(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

/// Operator table grouped by length so matching can be greedy
pub struct OperatorTable {
    three: HashSet<&'static str>,
    two: HashSet<&'static str>,
    one: HashSet<&'static str>,
}

impl OperatorTable {
    pub fn new(operators: &[&'static str]) -> Self {
        let mut table = Self {
            three: HashSet::new(),
            two: HashSet::new(),
            one: HashSet::new(),
        };
        for op in operators {
            match op.chars().count() {
                3 => table.three.insert(*op),
                2 => table.two.insert(*op),
                _ => table.one.insert(*op),
            };
        }
        table
    }

    /// Longest operator starting at the cursor, if any
    fn longest_match(&self, cursor: &Cursor) -> Option<&'static str> {
        for (len, set) in [(3, &self.three), (2, &self.two), (1, &self.one)] {
            let candidate = cursor.slice_ahead(len);
            if candidate.chars().count() == len {
                if let Some(op) = set.get(candidate.as_str()) {
                    return Some(*op);
                }
            }
        }
        None
    }
}

/// Character-level cursor used by both lexers
pub(crate) struct Cursor {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    origin: String,
}

impl Cursor {
    pub fn new(input: &str, origin: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            origin: origin.to_string(),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.origin.clone(), self.line, self.column)
    }

    pub fn advance(&mut self) {
        if self.current() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn slice_ahead(&self, len: usize) -> String {
        self.input
            .get(self.position..)
            .unwrap_or_default()
            .iter()
            .take(len)
            .collect()
    }

    pub fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(ch) = self.current().filter(|c| is_alnum(*c)) {
            ident.push(ch);
            self.advance();
        }
        ident
    }

    /// Read a decimal literal with at most one fractional part and an
    /// optional exponent, or a `0x` hexadecimal literal
    pub fn read_number(&mut self) -> Result<String, LexerError> {
        let start = self.location();
        let mut number = String::new();

        if self.current() == Some('0')
            && matches!(self.peek(), Some('x') | Some('X'))
            && self.nth(2).is_some_and(|c| c.is_ascii_hexdigit())
        {
            number.push('0');
            self.advance();
            if let Some(marker) = self.current() {
                number.push(marker);
            }
            self.advance();
            while let Some(ch) = self.current().filter(|c| c.is_ascii_hexdigit()) {
                number.push(ch);
                self.advance();
            }
            return self.finish_number(number, start);
        }

        let mut seen_dot = false;
        while let Some(ch) = self.current() {
            if is_digit(ch) {
                number.push(ch);
                self.advance();
            } else if ch == '.' && self.peek().is_some_and(is_digit) {
                if seen_dot {
                    number.push(ch);
                    self.advance();
                    number.push_str(&self.read_identifier());
                    return Err(LexerError::InvalidNumber {
                        value: number,
                        location: start,
                    });
                }
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if matches!(self.current(), Some('e') | Some('E')) {
            let digits_at = match self.peek() {
                Some('+') | Some('-') => 2,
                _ => 1,
            };
            if self.nth(digits_at).is_some_and(is_digit) {
                for _ in 0..digits_at {
                    if let Some(ch) = self.current() {
                        number.push(ch);
                    }
                    self.advance();
                }
                while let Some(ch) = self.current().filter(|c| is_digit(*c)) {
                    number.push(ch);
                    self.advance();
                }
            }
        }

        self.finish_number(number, start)
    }

    /// A letter directly after a literal makes the whole run invalid
    fn finish_number(
        &mut self,
        mut number: String,
        start: SourceLocation,
    ) -> Result<String, LexerError> {
        if self.current().is_some_and(is_alpha) {
            number.push_str(&self.read_identifier());
            return Err(LexerError::InvalidNumber {
                value: number,
                location: start,
            });
        }
        Ok(number)
    }

    fn nth(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Read a quoted string starting at the opening quote, decoding escapes.
    /// Unknown escapes keep the escaped character and drop the backslash.
    pub fn read_quoted(&mut self) -> Option<String> {
        let quote = self.current()?;
        self.advance();
        let mut value = String::new();

        while let Some(ch) = self.current() {
            if ch == quote {
                self.advance();
                return Some(value);
            }
            if ch == '\n' {
                return None;
            }
            if ch == '\\' {
                self.advance();
                let escaped = self.current()?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    other => other,
                });
                self.advance();
                continue;
            }
            value.push(ch);
            self.advance();
        }
        None
    }

    pub fn read_operator(&mut self, table: &OperatorTable) -> Option<&'static str> {
        let op = table.longest_match(self)?;
        for _ in 0..op.chars().count() {
            self.advance();
        }
        Some(op)
    }
}
