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

//! Command line tests against the built binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pythonscript"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run pythonscript")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_build_pythonscript_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.pjs"), "x = 10\ny = 3\nprint(x // y)\n").unwrap();

    let output = run(&["build", "main.pjs"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("main.pjs -> main.js"));

    let js = fs::read_to_string(dir.path().join("main.js")).unwrap();
    assert!(js.contains("console.log(Math.floor(x / y));"));
}

#[test]
fn test_build_javascript_file_with_explicit_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.js"), "console.log(items.length);\n").unwrap();

    let output = run(&["build", "app.js", "-o", "converted.pjs"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let py = fs::read_to_string(dir.path().join("converted.pjs")).unwrap();
    assert_eq!(py, "print(len(items))\n");
}

#[test]
fn test_build_many_files_into_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.pjs"), "print(1)\n").unwrap();
    fs::write(dir.path().join("b.js"), "console.log(2);\n").unwrap();

    let output = run(&["build", "a.pjs", "b.js", "--out-dir", "out"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/a.js")).unwrap(),
        "console.log(1);\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("out/b.pjs")).unwrap(),
        "print(2)\n"
    );
}

#[test]
fn test_build_reports_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.pjs"), "print(1)\n").unwrap();
    fs::write(dir.path().join("bad.pjs"), "if x\n    y = 1\n").unwrap();

    let output = run(&["build", "good.pjs", "bad.pjs"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("1 of 2 files failed to build"));
    assert!(dir.path().join("good.js").exists());
    assert!(!dir.path().join("bad.js").exists());
}

#[test]
fn test_build_rejects_output_with_many_inputs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.pjs"), "print(1)\n").unwrap();
    fs::write(dir.path().join("b.pjs"), "print(2)\n").unwrap();

    let output = run(&["build", "a.pjs", "b.pjs", "-o", "out.js"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--output can only be used with a single input"));
}

#[test]
fn test_build_with_prelude_and_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.pjs"), "for i in range(2):\n    print(i)\n").unwrap();
    fs::write(dir.path().join("config.json"), r#"{ "js_indent": 4 }"#).unwrap();

    let output = run(
        &["build", "main.pjs", "--prelude", "--config", "config.json"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let js = fs::read_to_string(dir.path().join("main.js")).unwrap();
    assert!(js.starts_with("// --- PythonScript stdlib (minimal) ---"));
    assert!(js.contains("for (let i = 0; i < 2; i++) {\n    console.log(i);\n}"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.pjs"), "print(1)\n").unwrap();
    fs::write(dir.path().join("config.json"), r#"{ "py_indent": 0 }"#).unwrap();

    let output = run(&["build", "main.pjs", "--config", "config.json"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("py_indent must be between 1 and 8"));
}

#[test]
fn test_unknown_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let output = run(&["lint", "notes.txt"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unsupported file extension"));
}

#[test]
fn test_lint_ok_and_failed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.js"), "let x = 1;\n").unwrap();
    fs::write(dir.path().join("broken.pjs"), "def f(:\n    pass\n").unwrap();

    let output = run(&["lint", "ok.js"], dir.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Lint OK");

    let output = run(&["lint", "broken.pjs"], dir.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Lint failed: broken.pjs:1:7:"));
}

#[test]
fn test_tokenize_prints_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.pjs"), "x = 1\n").unwrap();

    let output = run(&["tokenize", "main.pjs"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let tokens: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens[0]["kind"], "IDENTIFIER");
    assert_eq!(tokens[0]["lexeme"], "x");
    assert_eq!(tokens.last().unwrap()["kind"], "EOF");
}

#[test]
fn test_ast_prints_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.js"), "const a = b + 1;\n").unwrap();

    let output = run(&["ast", "main.js"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let module: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let statement = &module["body"][0];
    assert_eq!(statement["type"], "Assign");
    assert_eq!(statement["declaration"], "Const");
    assert_eq!(statement["value"]["type"], "BinOp");
}
