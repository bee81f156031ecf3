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

use proptest::prelude::*;
use pythonscript::config::Config;
use pythonscript::error::{CompilerError, LexerError};
use pythonscript::lexer::TokenKind;
use pythonscript::{tokenize, transpile, Dialect};

/// Identifiers that can never collide with a keyword of either dialect
fn valid_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"v_[a-z0-9_]{0,12}").unwrap()
}

/// Generate random strings for fuzzing
fn fuzz_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..300)
        .prop_map(|bytes| String::from_utf8_lossy(&bytes).to_string())
}

/// Fully parenthesized arithmetic paired with the JavaScript it must produce
fn arithmetic() -> impl Strategy<Value = (String, String)> {
    let leaf = (0u32..1000).prop_map(|n| (n.to_string(), n.to_string()));
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "%"]), inner).prop_map(
            |((lp, lj), op, (rp, rj))| {
                (
                    format!("({} {} {})", lp, op, rp),
                    format!("({} {} {})", lj, op, rj),
                )
            },
        )
    })
}

/// Nested `if` blocks, one level deeper per line
fn nested_blocks(depth: usize, width: usize) -> String {
    let mut source = String::new();
    for level in 0..depth {
        source.push_str(&" ".repeat(level * width));
        source.push_str(&format!("if c{}:\n", level));
    }
    source.push_str(&" ".repeat(depth * width));
    source.push_str("pass\n");
    source
}

proptest! {
    #[test]
    fn test_valid_identifiers_tokenize(identifier in valid_identifier()) {
        for dialect in [Dialect::PythonScript, Dialect::JavaScript] {
            let tokens = tokenize(&identifier, "prop", dialect).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
            prop_assert_eq!(&tokens[0].lexeme, &identifier);
        }
    }
}

proptest! {
    #[test]
    fn test_indents_and_dedents_balance(depth in 1usize..10, width in 1usize..6) {
        let source = nested_blocks(depth, width);
        let tokens = tokenize(&source, "prop.pjs", Dialect::PythonScript).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        prop_assert_eq!(indents, depth);
        prop_assert_eq!(dedents, depth);
    }
}

proptest! {
    #[test]
    fn test_dedent_to_unknown_width_is_rejected(
        column in prop::sample::select(vec![1usize, 2, 3, 5, 6, 7])
    ) {
        let source = format!("if a:\n    if b:\n        c\n{}d\n", " ".repeat(column));
        let result = tokenize(&source, "prop.pjs", Dialect::PythonScript);
        let is_indentation_error = matches!(
            result,
            Err(CompilerError::Lexer(LexerError::InconsistentIndentation { .. }))
        );
        prop_assert!(is_indentation_error);
    }
}

proptest! {
    #[test]
    fn test_arithmetic_is_always_parenthesized((py, js) in arithmetic()) {
        let source = format!("print({})\n", py);
        let output = transpile(&source, "prop.pjs", Dialect::PythonScript, &Config::default()).unwrap();
        prop_assert_eq!(output, format!("console.log({});\n", js));
    }
}

proptest! {
    #[test]
    fn test_counting_loops_survive_a_round_trip(start in 0u32..50, stop in 0u32..100, name in valid_identifier()) {
        let js = format!(
            "for (let {n} = {}; {n} < {}; {n}++) {{\n  f({n});\n}}\n",
            start,
            stop,
            n = name
        );
        let config = Config::default();
        let py = transpile(&js, "prop.js", Dialect::JavaScript, &config).unwrap();
        let header = format!("for {} in range(", name);
        prop_assert!(py.starts_with(&header), "unexpected loop header: {}", py);
        let back = transpile(&py, "prop.pjs", Dialect::PythonScript, &config).unwrap();
        prop_assert_eq!(back, js);
    }
}

proptest! {
    #[test]
    fn test_lexers_never_crash(input in fuzz_string()) {
        // Either result is fine; the lexers must not panic
        let _ = tokenize(&input, "fuzz.pjs", Dialect::PythonScript);
        let _ = tokenize(&input, "fuzz.js", Dialect::JavaScript);
    }
}
