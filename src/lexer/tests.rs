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

use super::*;

fn py(source: &str) -> Vec<Token> {
    pyscript::tokenize(source, "test.pjs").expect("PythonScript source should tokenize")
}

fn js(source: &str) -> Vec<Token> {
    javascript::tokenize(source, "test.js").expect("JavaScript source should tokenize")
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

// ==================== TOKEN MODEL TESTS ====================

#[test]
fn test_token_display() {
    let keyword = Token::new(TokenKind::Keyword, "print", 2, 1);
    assert_eq!(keyword.to_string(), "KEYWORD 'print'");

    let indent = Token::new(TokenKind::Indent, "4", 2, 5);
    assert_eq!(indent.to_string(), "INDENT");
}

#[test]
fn test_token_kind_serializes_screaming_case() {
    let json = serde_json::to_string(&TokenKind::InterpolatedString).unwrap();
    assert_eq!(json, "\"INTERPOLATED_STRING\"");
}

#[test]
fn test_character_classes() {
    assert!(is_alpha('_'));
    assert!(is_alpha('Z'));
    assert!(!is_alpha('1'));
    assert!(is_digit('7'));
    assert!(is_alnum('x'));
    assert!(is_alnum('9'));
    assert!(!is_alnum('-'));
}

#[test]
fn test_find_closing_brace_skips_nesting_and_quotes() {
    let chars: Vec<char> = "a + {b}} rest".chars().collect();
    assert_eq!(find_closing_brace(&chars, 0), Some(7));

    let quoted: Vec<char> = "\"}\" }".chars().collect();
    assert_eq!(find_closing_brace(&quoted, 0), Some(4));

    let open: Vec<char> = "a + b".chars().collect();
    assert_eq!(find_closing_brace(&open, 0), None);
}

// ==================== PYTHONSCRIPT LEXER TESTS ====================

#[test]
fn test_simple_assignment() {
    let tokens = py("x = 10");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(lexemes(&tokens), vec!["x", "=", "10", ""]);
    assert_eq!((tokens[2].line, tokens[2].column), (1, 5));
}

#[test]
fn test_keywords_are_recognized() {
    let tokens = py("if not x and True: pass");
    assert!(tokens[0].is_keyword("if"));
    assert!(tokens[1].is_keyword("not"));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert!(tokens[3].is_keyword("and"));
    assert!(tokens[4].is_keyword("True"));
    assert!(tokens[5].is_operator(":"));
    assert!(tokens[6].is_keyword("pass"));
}

#[test]
fn test_indent_and_dedent() {
    let tokens = py("if x:\n    y\n");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[4].lexeme, "4");
}

#[test]
fn test_tab_counts_as_four_columns() {
    let tokens = py("if x:\n\ty\n");
    let indent = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Indent)
        .expect("an INDENT token");
    assert_eq!(indent.lexeme, pyscript::TAB_WIDTH.to_string());
}

#[test]
fn test_remaining_dedents_at_end_of_input() {
    let tokens = py("if a:\n    if b:\n        c");
    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_inconsistent_indentation_is_rejected() {
    let err = pyscript::tokenize("if a:\n    if b:\n        c\n  d\n", "test.pjs").unwrap_err();
    assert!(matches!(
        err,
        LexerError::InconsistentIndentation { found: 2, .. }
    ));
    assert_eq!(err.location().line, 4);
}

#[test]
fn test_blank_and_comment_lines_keep_indentation() {
    let tokens = py("if a:\n    b\n\n# note\n    c\n");
    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(indents, 1);
    assert_eq!(dedents, 1);
}

#[test]
fn test_no_newlines_inside_brackets() {
    let tokens = py("x = [1,\n      2]\n");
    assert_eq!(lexemes(&tokens), vec!["x", "=", "[", "1", ",", "2", "]", "\n", ""]);
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::Indent));
}

#[test]
fn test_operators_match_greedily() {
    let tokens = py("a //= b ** c // d");
    assert_eq!(lexemes(&tokens), vec!["a", "//=", "b", "**", "c", "//", "d", ""]);
}

#[test]
fn test_string_escapes() {
    let tokens = py(r#"s = "a\tb\q\"""#);
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "a\tbq\"");
}

#[test]
fn test_unterminated_string_reports_start() {
    let err = pyscript::tokenize("x = \"abc", "test.pjs").unwrap_err();
    assert!(matches!(err, LexerError::UnterminatedString { .. }));
    assert_eq!((err.location().line, err.location().column), (1, 5));
}

#[test]
fn test_interpolated_string_keeps_braces() {
    let tokens = py("f\"{a} and {b}\"");
    assert_eq!(tokens[0].kind, TokenKind::InterpolatedString);
    assert_eq!(tokens[0].lexeme, "{a} and {b}");
}

#[test]
fn test_invalid_number() {
    let err = pyscript::tokenize("x = 1.2.3", "test.pjs").unwrap_err();
    match err {
        LexerError::InvalidNumber { value, .. } => assert_eq!(value, "1.2.3"),
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_exponent_and_hex_numbers() {
    let tokens = js("x = 1e3; y = 2.5E-4; z = 0xFF;");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].lexeme, "1e3");
    assert_eq!(tokens[6].lexeme, "2.5E-4");
    assert_eq!(tokens[10].lexeme, "0xFF");

    let tokens = py("n = 6e+2\n");
    assert_eq!(tokens[2].lexeme, "6e+2");
}

#[test]
fn test_dangling_exponent_is_invalid() {
    let err = pyscript::tokenize("x = 1e", "test.pjs").unwrap_err();
    match err {
        LexerError::InvalidNumber { value, .. } => assert_eq!(value, "1e"),
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_unexpected_character() {
    let err = pyscript::tokenize("x = @", "test.pjs").unwrap_err();
    assert!(matches!(
        err,
        LexerError::UnexpectedCharacter { character: '@', .. }
    ));
}

// ==================== JAVASCRIPT LEXER TESTS ====================

#[test]
fn test_js_declaration() {
    let tokens = js("let x = a === b;");
    assert_eq!(lexemes(&tokens), vec!["let", "x", "=", "a", "===", "b", ";", ""]);
    assert!(tokens[0].is_keyword("let"));
    assert!(tokens[4].is_operator("==="));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_js_comments_are_skipped() {
    let tokens = js("a // line\n/* block\n comment */ c");
    assert_eq!(lexemes(&tokens), vec!["a", "c", ""]);
    assert_eq!((tokens[1].line, tokens[1].column), (3, 13));
}

#[test]
fn test_js_unterminated_block_comment() {
    let err = javascript::tokenize("a /* never closed", "test.js").unwrap_err();
    assert!(matches!(err, LexerError::UnterminatedBlockComment { .. }));
}

#[test]
fn test_js_template_is_raw() {
    let tokens = js(r"`a ${b} \` c`");
    assert_eq!(tokens[0].kind, TokenKind::TemplateString);
    assert_eq!(tokens[0].lexeme, r"a ${b} \` c");
}

#[test]
fn test_js_unterminated_template() {
    let err = javascript::tokenize("`abc", "test.js").unwrap_err();
    assert!(matches!(err, LexerError::UnterminatedTemplate { .. }));
}

#[test]
fn test_js_spread_and_arrow_operators() {
    let tokens = js("f(...args) => x++ && y--");
    let ops: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(ops, vec!["(", "...", ")", "=>", "++", "&&", "--"]);
}

#[test]
fn test_js_dollar_identifiers() {
    let tokens = js("$el = jQuery$");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "$el");
    assert_eq!(tokens[2].lexeme, "jQuery$");
}

#[test]
fn test_js_no_layout_tokens() {
    let tokens = js("if (a) {\n    b;\n}\n");
    assert!(!tokens.iter().any(|t| matches!(
        t.kind,
        TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline
    )));
}
