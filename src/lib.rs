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

//! PythonScript transpiler
//!
//! Translates between PythonScript (`.pjs`), an indentation-based dialect,
//! and JavaScript (`.js`). Each direction runs the same pipeline:
//! lexer, parser, shared AST, then the other dialect's generator.

pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod prelude;

use ast::Module;
use config::Config;
use error::CompilerError;
use lexer::Token;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source dialect of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    PythonScript,
    JavaScript,
}

impl Dialect {
    /// Detect the dialect from a `.pjs` or `.js` extension
    pub fn from_path(path: &Path) -> Result<Self, CompilerError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("pjs") => Ok(Dialect::PythonScript),
            Some("js") => Ok(Dialect::JavaScript),
            _ => Err(CompilerError::UnknownDialect {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The dialect this one is translated into
    pub fn target(self) -> Self {
        match self {
            Dialect::PythonScript => Dialect::JavaScript,
            Dialect::JavaScript => Dialect::PythonScript,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Dialect::PythonScript => "pjs",
            Dialect::JavaScript => "js",
        }
    }

    /// Output path next to `input` with the target dialect's extension
    pub fn output_path(self, input: &Path) -> PathBuf {
        input.with_extension(self.target().extension())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::PythonScript => f.write_str("PythonScript"),
            Dialect::JavaScript => f.write_str("JavaScript"),
        }
    }
}

pub fn tokenize(source: &str, origin: &str, dialect: Dialect) -> Result<Vec<Token>, CompilerError> {
    let tokens = match dialect {
        Dialect::PythonScript => lexer::pyscript::tokenize(source, origin)?,
        Dialect::JavaScript => lexer::javascript::tokenize(source, origin)?,
    };
    Ok(tokens)
}

pub fn parse(source: &str, origin: &str, dialect: Dialect) -> Result<Module, CompilerError> {
    let tokens = tokenize(source, origin, dialect)?;
    let module = match dialect {
        Dialect::PythonScript => parser::pyscript::parse(tokens, origin)?,
        Dialect::JavaScript => parser::javascript::parse(tokens, origin)?,
    };
    Ok(module)
}

/// Translate one unit of `dialect` source into the other dialect
pub fn transpile(
    source: &str,
    origin: &str,
    dialect: Dialect,
    config: &Config,
) -> Result<String, CompilerError> {
    config.validate()?;
    let module = parse(source, origin, dialect)?;

    let output = match dialect.target() {
        Dialect::JavaScript => {
            let code = codegen::javascript::generate_with(&module, &config.js_options());
            if config.prelude {
                format!("{}\n{}", prelude::stdlib_header(), code)
            } else {
                code
            }
        }
        Dialect::PythonScript => codegen::pyscript::generate_with(&module, &config.py_options()),
    };

    debug!(origin, from = %dialect, to = %dialect.target(), bytes = output.len(), "transpiled unit");
    Ok(output)
}
