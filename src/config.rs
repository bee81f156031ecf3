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

//! Transpiler configuration
//!
//! Read from an optional JSON file; missing fields take their defaults.

use crate::codegen::CodegenOptions;
use crate::error::{CompilerError, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per indentation level in generated JavaScript
    pub js_indent: usize,
    /// Spaces per indentation level in generated PythonScript
    pub py_indent: usize,
    /// Prepend the runtime prelude to generated JavaScript
    pub prelude: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            js_indent: 2,
            py_indent: 4,
            prelude: false,
        }
    }
}

impl Config {
    /// Load and validate a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self, CompilerError> {
        let text = std::fs::read_to_string(path).map_err(|source| CompilerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_indent("js_indent", self.js_indent)?;
        check_indent("py_indent", self.py_indent)
    }

    pub fn js_options(&self) -> CodegenOptions {
        CodegenOptions {
            indent_width: self.js_indent,
        }
    }

    pub fn py_options(&self) -> CodegenOptions {
        CodegenOptions {
            indent_width: self.py_indent,
        }
    }
}

fn check_indent(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if (1..=MAX_INDENT).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::IndentOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.js_indent, 2);
        assert_eq!(config.py_indent, 4);
        assert!(!config.prelude);
    }

    #[test]
    fn test_indent_out_of_range() {
        let config = Config {
            js_indent: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::IndentOutOfRange {
                field: "js_indent",
                value: 0
            })
        );

        let config = Config {
            py_indent: 9,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"js_indent": 4}"#).unwrap();
        assert_eq!(config.js_indent, 4);
        assert_eq!(config.py_indent, 4);
    }

    #[test]
    fn test_from_file_rejects_invalid_indent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"py_indent": 12}}"#).unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CompilerError::Config(_)));
    }

    #[test]
    fn test_from_file_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"js_indent": }}"#).unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CompilerError::Config(ConfigError::Parse { .. })
        ));
        assert!(err.to_string().starts_with("invalid configuration in"));
    }
}
