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

//! End-to-end transpilation through the library entry points

use pythonscript::ast::{ForIter, Statement};
use pythonscript::config::Config;
use pythonscript::error::CompilerError;
use pythonscript::{parse, transpile, Dialect};
use std::path::Path;

fn to_js(source: &str) -> String {
    transpile(source, "main.pjs", Dialect::PythonScript, &Config::default())
        .expect("PythonScript source should transpile")
}

fn to_py(source: &str) -> String {
    transpile(source, "main.js", Dialect::JavaScript, &Config::default())
        .expect("JavaScript source should transpile")
}

#[test]
fn test_dialect_from_path() {
    assert_eq!(
        Dialect::from_path(Path::new("src/app.pjs")).unwrap(),
        Dialect::PythonScript
    );
    assert_eq!(
        Dialect::from_path(Path::new("app.js")).unwrap(),
        Dialect::JavaScript
    );
    assert!(matches!(
        Dialect::from_path(Path::new("notes.txt")),
        Err(CompilerError::UnknownDialect { .. })
    ));
}

#[test]
fn test_dialect_output_path() {
    assert_eq!(
        Dialect::PythonScript.output_path(Path::new("dir/app.pjs")),
        Path::new("dir/app.js")
    );
    assert_eq!(
        Dialect::JavaScript.output_path(Path::new("app.js")),
        Path::new("app.pjs")
    );
    assert_eq!(Dialect::JavaScript.target(), Dialect::PythonScript);
    assert_eq!(Dialect::PythonScript.to_string(), "PythonScript");
}

#[test]
fn test_floor_division_program() {
    let js = to_js("x = 10\ny = 3\nprint(x // y)\n");
    assert!(js.contains("console.log(Math.floor(x / y))"));
    assert!(js.starts_with("let x, y;"));
}

#[test]
fn test_class_program_to_javascript() {
    let source = r#"class Stack:
    def __init__(self):
        self.items = []

    def push(self, item):
        self.items.append(item)

    def has(self, item):
        return item in self.items

    def top(self):
        return self.items[-1]
"#;
    let js = to_js(source);
    assert!(js.contains("class Stack {"));
    assert!(js.contains("constructor() {"));
    assert!(js.contains("this.items = [];"));
    assert!(js.contains("this.items.push(item);"));
    assert!(js.contains("return this.items.includes(item);"));
    assert!(js.contains("return this.items.at(-1);"));
    assert!(!js.contains("self"));
}

#[test]
fn test_class_program_to_pythonscript() {
    let source = r#"
import { Base } from "./lib/base.js";

class Counter extends Base {
  constructor(start) {
    super(start);
    this.count = start;
  }

  increment(by = 1) {
    this.count += by;
    return this.count;
  }
}

const c = new Counter(0);
console.log(`count is ${c.increment()}`);
"#;
    let expected = r#"from lib.base import Base
class Counter(Base):
    def __init__(self, start):
        super().__init__(start)
        self.count = start
    def increment(self, by=1):
        self.count += by
        return self.count
c = Counter(0)
print(f"count is {c.increment()}")
"#;
    assert_eq!(to_py(source), expected);
}

#[test]
fn test_range_loop_round_trip() {
    let js = to_js("for i in range(5):\n    print(i)\n    print(i * 2)\n");
    assert!(js.contains("for (let i = 0; i < 5; i++) {"));

    let back = to_py(&js);
    assert!(back.starts_with("for i in range(5):"));

    let module = parse(&back, "back.pjs", Dialect::PythonScript).unwrap();
    match &module.body[0] {
        Statement::For { iter, body, .. } => {
            assert!(matches!(iter, ForIter::Range { start: None, step: None, .. }));
            assert_eq!(body.len(), 2);
        }
        other => panic!("expected a for loop, got {:?}", other),
    }
}

#[test]
fn test_interpolation_round_trip() {
    let js = to_js("name = \"Ada\"\nprint(f\"Hello, {name}!\")\n");
    assert!(js.contains("console.log(`Hello, ${name}!`);"));
    let back = to_py(&js);
    assert!(back.contains("print(f\"Hello, {name}!\")"));
}

#[test]
fn test_prelude_is_prepended() {
    let config = Config {
        prelude: true,
        ..Config::default()
    };
    let js = transpile("print(len([1, 2]))\n", "main.pjs", Dialect::PythonScript, &config).unwrap();
    assert!(js.starts_with(pythonscript::prelude::stdlib_header()));
    assert!(js.ends_with("console.log(len([1, 2]));\n"));

    // JavaScript to PythonScript ignores the prelude flag
    let py = transpile("f();", "main.js", Dialect::JavaScript, &config).unwrap();
    assert_eq!(py, "f()\n");
}

#[test]
fn test_indent_configuration() {
    let config = Config {
        js_indent: 4,
        py_indent: 2,
        prelude: false,
    };
    let js = transpile("if a:\n    b()\n", "main.pjs", Dialect::PythonScript, &config).unwrap();
    assert_eq!(js, "if (a) {\n    b();\n}\n");
    let py = transpile("if (a) { b(); }", "main.js", Dialect::JavaScript, &config).unwrap();
    assert_eq!(py, "if a:\n  b()\n");
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = Config {
        js_indent: 12,
        ..Config::default()
    };
    let err = transpile("x = 1\n", "main.pjs", Dialect::PythonScript, &config).unwrap_err();
    assert!(matches!(err, CompilerError::Config(_)));
}

#[test]
fn test_lexer_error_surfaces_with_location() {
    let err = transpile("x = \"open\n", "bad.pjs", Dialect::PythonScript, &Config::default())
        .unwrap_err();
    assert!(matches!(err, CompilerError::Lexer(_)));
    assert!(err.to_string().starts_with("bad.pjs:1:5:"));
}

#[test]
fn test_parser_error_surfaces_with_location() {
    let err = transpile("if x\n    y = 1\n", "bad.pjs", Dialect::PythonScript, &Config::default())
        .unwrap_err();
    assert!(matches!(err, CompilerError::Parser(_)));
    assert!(err.to_string().starts_with("bad.pjs:1:5:"));
}
