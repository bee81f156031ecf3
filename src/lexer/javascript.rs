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

//! Lexer for the brace-delimited JavaScript dialect

use super::{is_alnum, is_alpha, is_digit, Cursor, OperatorTable, Token, TokenKind};
use crate::error::LexerError;
use lazy_static::lazy_static;
use std::collections::HashSet;
use tracing::debug;

lazy_static! {
    static ref KEYWORDS: HashSet<&'static str> = [
        "let", "const", "var", "function", "return", "if", "else", "for", "while", "break",
        "continue", "class", "extends", "new", "this", "super", "import", "from", "export", "as",
        "try", "catch", "finally", "true", "false", "null", "undefined", "of",
    ]
    .into_iter()
    .collect();
    static ref OPERATORS: OperatorTable = OperatorTable::new(&[
        "===", "!==", "**=", "...", "**", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=",
        "-=", "*=", "/=", "%=", "=>", "+", "-", "*", "/", "%", "=", "<", ">", "!", "?", "(", ")",
        "[", "]", "{", "}", ":", ",", ".", ";",
    ]);
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Tokenize JavaScript source
pub fn tokenize(source: &str, origin: &str) -> Result<Vec<Token>, LexerError> {
    let tokens = Lexer::new(source, origin).tokenize()?;
    debug!(origin, count = tokens.len(), "tokenized JavaScript source");
    Ok(tokens)
}

pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str, origin: &str) -> Self {
        Self {
            cursor: Cursor::new(input, origin),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        while let Some(ch) = self.cursor.current() {
            let (line, column) = (self.cursor.line(), self.cursor.column());
            match ch {
                c if c.is_whitespace() => self.cursor.advance(),
                '/' if self.cursor.peek() == Some('/') => self.skip_line_comment(),
                '/' if self.cursor.peek() == Some('*') => self.skip_block_comment()?,
                '"' | '\'' => {
                    let start = self.cursor.location();
                    let value = self
                        .cursor
                        .read_quoted()
                        .ok_or(LexerError::UnterminatedString { location: start })?;
                    self.push(TokenKind::String, value, line, column);
                }
                '`' => {
                    let raw = self.read_template()?;
                    self.push(TokenKind::TemplateString, raw, line, column);
                }
                c if is_digit(c) => {
                    let number = self.cursor.read_number()?;
                    self.push(TokenKind::Number, number, line, column);
                }
                c if is_alpha(c) || c == '$' => {
                    let word = self.read_word();
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
                    self.push(TokenKind::Operator, op, line, column);
                }
            }
        }

        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.push(TokenKind::Eof, "", line, column);
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) {
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.cursor.current().filter(|c| is_alnum(*c) || *c == '$') {
            word.push(ch);
            self.cursor.advance();
        }
        word
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.cursor.current() {
            if ch == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexerError> {
        let start = self.cursor.location();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            match self.cursor.current() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                }
                Some(_) => self.cursor.advance(),
                None => return Err(LexerError::UnterminatedBlockComment { location: start }),
            }
        }
    }

    /// Capture a backtick literal verbatim. Escapes are kept as written so
    /// that an escaped backtick does not end the literal.
    fn read_template(&mut self) -> Result<String, LexerError> {
        let start = self.cursor.location();
        self.cursor.advance();
        let mut raw = String::new();

        loop {
            match self.cursor.current() {
                Some('`') => {
                    self.cursor.advance();
                    return Ok(raw);
                }
                Some('\\') => {
                    raw.push('\\');
                    self.cursor.advance();
                    if let Some(escaped) = self.cursor.current() {
                        raw.push(escaped);
                        self.cursor.advance();
                    }
                }
                Some(ch) => {
                    raw.push(ch);
                    self.cursor.advance();
                }
                None => return Err(LexerError::UnterminatedTemplate { location: start }),
            }
        }
    }
}
