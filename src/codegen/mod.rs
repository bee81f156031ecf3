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

//! Code generation
//!
//! Each generator walks the AST and writes the other dialect's text. Generation
//! never fails: a construct without a counterpart is written as a visible
//! placeholder comment and logged.

pub mod javascript;
pub mod pyscript;


/// Where the generator currently is, threaded by value through the walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenContext {
    /// Inside a method body; the receiver is in scope
    pub in_method: bool,
    /// Directly inside a class body; a nested function becomes a method
    pub in_class: bool,
}

impl GenContext {
    pub fn class_body(self) -> Self {
        Self {
            in_method: false,
            in_class: true,
        }
    }

    pub fn method_body(self) -> Self {
        Self {
            in_method: true,
            in_class: false,
        }
    }

    pub fn function_body(self) -> Self {
        Self {
            in_method: false,
            in_class: false,
        }
    }
}

/// Output formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl CodegenOptions {
    pub fn javascript() -> Self {
        Self { indent_width: 2 }
    }

    pub fn pyscript() -> Self {
        Self { indent_width: 4 }
    }
}

/// Line-oriented output buffer that tracks the current indentation
pub(crate) struct CodeWriter {
    output: String,
    unit: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new(options: &CodegenOptions) -> Self {
        Self {
            output: String::new(),
            unit: " ".repeat(options.indent_width),
            depth: 0,
        }
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.unit);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Bytes written so far
    pub fn written(&self) -> usize {
        self.output.len()
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Double-quoted string literal, valid in both dialects
pub(crate) fn quote_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
