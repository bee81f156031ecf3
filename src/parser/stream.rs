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

//! Token cursor shared by both parsers

use crate::error::{ParserError, SourceLocation};
use crate::lexer::{Token, TokenKind};

pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
    origin: String,
    /// Indentation levels entered so far; only present for PythonScript
    indent_stack: Option<Vec<u32>>,
}

impl TokenStream {
    /// Create a stream. A trailing EOF token is appended if missing.
    pub fn new(mut tokens: Vec<Token>, origin: &str) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens.last().map(|t| (t.line, t.column)).unwrap_or((1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", line, column));
        }
        Self {
            tokens,
            position: 0,
            origin: origin.to_string(),
            indent_stack: None,
        }
    }

    /// Create a stream that checks INDENT/DEDENT balance as tokens are consumed
    pub fn with_indentation(tokens: Vec<Token>, origin: &str) -> Self {
        let mut stream = Self::new(tokens, origin);
        stream.indent_stack = Some(vec![0]);
        stream
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The token at the cursor; EOF once the input is exhausted
    pub fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    /// Look ahead without consuming; `peek(0)` is the current token
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub fn check_operator(&self, op: &str) -> bool {
        self.current().is_operator(op)
    }

    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current().is_keyword(keyword)
    }

    pub fn location(&self) -> SourceLocation {
        self.current().location(&self.origin)
    }

    /// Consume the current token and return it
    pub fn advance(&mut self) -> Result<Token, ParserError> {
        let token = self.current().clone();
        if let Some(stack) = self.indent_stack.as_mut() {
            match token.kind {
                TokenKind::Indent => {
                    let top = stack.last().copied().unwrap_or(0);
                    stack.push(token.lexeme.parse().unwrap_or(top + 1));
                }
                TokenKind::Dedent => {
                    if stack.len() <= 1 {
                        return Err(ParserError::UnbalancedDedent {
                            location: token.location(&self.origin),
                        });
                    }
                    stack.pop();
                }
                _ => {}
            }
        }
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        Ok(token)
    }

    /// Consume the current token if it has the given kind and, when given,
    /// the given lexeme
    pub fn expect(&mut self, kind: TokenKind, value: Option<&str>) -> Result<Token, ParserError> {
        let token = self.current();
        let matches = token.kind == kind && value.map_or(true, |v| token.lexeme == v);
        if matches {
            return self.advance();
        }

        let expected = match value {
            Some(v) => format!("{} '{}'", kind, v),
            None => kind.to_string(),
        };
        Err(self.unexpected(expected))
    }

    pub fn expect_operator(&mut self, op: &str) -> Result<Token, ParserError> {
        self.expect(TokenKind::Operator, Some(op))
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<Token, ParserError> {
        self.expect(TokenKind::Keyword, Some(keyword))
    }

    pub fn expect_identifier(&mut self) -> Result<String, ParserError> {
        Ok(self.expect(TokenKind::Identifier, None)?.lexeme)
    }

    /// Consume the current token if it is the given operator
    pub fn eat_operator(&mut self, op: &str) -> Result<bool, ParserError> {
        if self.check_operator(op) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn eat_keyword(&mut self, keyword: &str) -> Result<bool, ParserError> {
        if self.check_keyword(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn skip_newlines(&mut self) -> Result<(), ParserError> {
        while self.check(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }

    /// Current indentation depth; 0 at module level
    pub fn indent_depth(&self) -> usize {
        self.indent_stack
            .as_ref()
            .map_or(0, |stack| stack.len().saturating_sub(1))
    }

    /// Error describing the current token as unexpected
    pub fn unexpected(&self, expected: impl Into<String>) -> ParserError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            ParserError::UnexpectedEof {
                expected: expected.into(),
                location: self.location(),
            }
        } else {
            ParserError::UnexpectedToken {
                expected: expected.into(),
                found: token.to_string(),
                location: self.location(),
            }
        }
    }

    pub fn syntax_error(&self, message: impl Into<String>) -> ParserError {
        ParserError::SyntaxError {
            message: message.into(),
            location: self.location(),
        }
    }
}
