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
use crate::lexer::TokenKind;

fn var(name: &str, line: u32, column: u32) -> Expression {
    Expression::Variable {
        name: name.to_string(),
        location: Position::new(line, column),
    }
}

fn num(value: &str) -> Expression {
    Expression::Number {
        value: value.to_string(),
        location: Position::new(1, 5),
    }
}

#[test]
fn test_position_of_token() {
    let token = Token::new(TokenKind::Identifier, "x", 3, 7);
    assert_eq!(Position::of(&token), Position::new(3, 7));
}

#[test]
fn test_statement_location_and_kind() {
    let statement = Statement::Assign {
        targets: vec![var("x", 2, 1)],
        value: Some(num("1")),
        declaration: None,
        location: Position::new(2, 1),
    };
    assert_eq!(statement.location(), Position::new(2, 1));
    assert_eq!(statement.kind_name(), "Assign");

    let pass = Statement::Pass {
        location: Position::new(9, 5),
    };
    assert_eq!(pass.location().line, 9);
    assert_eq!(pass.kind_name(), "Pass");
}

#[test]
fn test_expression_location_and_kind() {
    let expr = Expression::BinOp {
        op: BinaryOperator::Add,
        left: Box::new(var("a", 1, 1)),
        right: Box::new(num("2")),
        location: Position::new(1, 1),
    };
    assert_eq!(expr.location(), Position::new(1, 1));
    assert_eq!(expr.kind_name(), "BinOp");
    assert_eq!(num("2").kind_name(), "Number");
}

#[test]
fn test_as_variable() {
    assert_eq!(var("total", 1, 1).as_variable(), Some("total"));
    assert_eq!(num("3").as_variable(), None);
}

#[test]
fn test_assignable_targets() {
    let attribute = Expression::Attribute {
        object: Box::new(var("self", 1, 1)),
        name: "x".to_string(),
        location: Position::new(1, 1),
    };
    let index = Expression::Index {
        object: Box::new(var("a", 1, 1)),
        index: Box::new(num("0")),
        location: Position::new(1, 1),
    };
    let call = Expression::Call {
        callee: Box::new(var("f", 1, 1)),
        args: vec![],
        location: Position::new(1, 1),
    };

    assert!(var("x", 1, 1).is_assignable());
    assert!(attribute.is_assignable());
    assert!(index.is_assignable());
    assert!(!call.is_assignable());
    assert!(!num("1").is_assignable());
}

// ==================== SERIALIZATION TESTS ====================

#[test]
fn test_expression_serialization_is_tagged() {
    let expr = Expression::BinOp {
        op: BinaryOperator::FloorDivide,
        left: Box::new(var("x", 1, 7)),
        right: Box::new(var("y", 1, 12)),
        location: Position::new(1, 7),
    };
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(json["type"], "BinOp");
    assert_eq!(json["op"], "FloorDivide");
    assert_eq!(json["left"]["type"], "Variable");
    assert_eq!(json["left"]["name"], "x");
    assert_eq!(json["location"]["column"], 7);
}

#[test]
fn test_statement_serialization_round_trip() {
    let statement = Statement::For {
        target: "i".to_string(),
        iter: ForIter::Range {
            start: None,
            stop: num("5"),
            step: None,
        },
        body: vec![Statement::Break {
            location: Position::new(2, 5),
        }],
        location: Position::new(1, 1),
    };

    let json = serde_json::to_string(&statement).unwrap();
    assert!(json.contains("\"type\":\"For\""));
    assert!(json.contains("\"kind\":\"range\""));

    let decoded: Statement = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, statement);
}

#[test]
fn test_segment_and_key_tags() {
    let text = serde_json::to_value(Segment::Text {
        value: "hi".to_string(),
    })
    .unwrap();
    assert_eq!(text["type"], "text");

    let key = serde_json::to_value(DictKey::Literal {
        value: "a".to_string(),
    })
    .unwrap();
    assert_eq!(key["kind"], "literal");

    let import = serde_json::to_value(ImportKind::Module { alias: None }).unwrap();
    assert_eq!(import["kind"], "module");
}
