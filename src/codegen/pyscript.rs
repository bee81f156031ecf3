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

//! PythonScript code generation from a JavaScript AST

use super::{quote_string, CodeWriter, CodegenOptions, GenContext};
use crate::ast::{
    BinaryOperator, BoolOperator, CompareOperator, DictKey, ElifClause, ExceptHandler,
    Expression, ForIter, ImportKind, Module, Parameter, ParameterKind, Segment, Statement,
    UnaryOperator,
};
use crate::error::{ParserError, SourceLocation};
use crate::lexer::{self, find_closing_brace};
use crate::parser;
use tracing::{trace, warn};

const PREC_CONDITIONAL: u8 = 1;
const PREC_OR: u8 = 2;
const PREC_AND: u8 = 3;
const PREC_NOT: u8 = 4;
const PREC_COMPARE: u8 = 5;
const PREC_ADDITIVE: u8 = 10;
const PREC_MULTIPLICATIVE: u8 = 11;
const PREC_UNARY: u8 = 12;
const PREC_POWER: u8 = 13;
const PREC_ATOM: u8 = 14;

const TEMPLATE_ORIGIN: &str = "<template>";

/// Generate PythonScript with the default options
pub fn generate(module: &Module) -> String {
    generate_with(module, &CodegenOptions::pyscript())
}

pub fn generate_with(module: &Module, options: &CodegenOptions) -> String {
    let mut generator = Generator::new(options);
    generator.generate_module(module);
    generator.finish()
}

pub struct Generator {
    out: CodeWriter,
    placeholders: usize,
    /// Update clause of each enclosing loop, innermost last; `None` for
    /// loops that have none
    loop_updates: Vec<Option<Statement>>,
}

impl Generator {
    pub fn new(options: &CodegenOptions) -> Self {
        Self {
            out: CodeWriter::new(options),
            placeholders: 0,
            loop_updates: Vec::new(),
        }
    }

    /// Number of constructs written as placeholders so far
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    pub fn finish(self) -> String {
        self.out.finish()
    }

    pub fn generate_module(&mut self, module: &Module) {
        for statement in &module.body {
            self.generate_statement(statement, GenContext::default());
        }
    }

    fn note_placeholder(&mut self, what: &str) {
        self.placeholders += 1;
        warn!(construct = what, "no PythonScript equivalent, writing placeholder");
    }

    /// Indented block; an empty body becomes `pass`
    fn generate_block(&mut self, body: &[Statement], ctx: GenContext) {
        self.out.indent();
        let start = self.out.written();
        for statement in body {
            self.generate_statement(statement, ctx);
        }
        if self.out.written() == start {
            self.out.line("pass");
        }
        self.out.dedent();
    }

    pub fn generate_statement(&mut self, statement: &Statement, ctx: GenContext) {
        match statement {
            Statement::Import { module, kind, .. } => {
                let module = module_name(module);
                match kind {
                    ImportKind::Module { alias: Some(alias) } if *alias != module => {
                        self.out.line(&format!("import {} as {}", module, alias));
                    }
                    ImportKind::Module { .. } => self.out.line(&format!("import {}", module)),
                    ImportKind::Names { names } => {
                        let names: Vec<String> = names
                            .iter()
                            .map(|n| match &n.alias {
                                Some(alias) => format!("{} as {}", n.name, alias),
                                None => n.name.clone(),
                            })
                            .collect();
                        self.out
                            .line(&format!("from {} import {}", module, names.join(", ")));
                    }
                }
            }
            Statement::ClassDef {
                name, base, body, ..
            } => {
                match base {
                    Some(base) => self.out.line(&format!("class {}({}):", name, base)),
                    None => self.out.line(&format!("class {}:", name)),
                }
                self.generate_block(body, ctx.class_body());
            }
            Statement::FunctionDef {
                name, params, body, ..
            } => self.generate_function(name, params, body, ctx),
            Statement::If {
                condition,
                body,
                elif_clauses,
                else_body,
                ..
            } => self.generate_if(condition, body, elif_clauses, else_body.as_deref(), ctx),
            Statement::For {
                target, iter, body, ..
            } => {
                let iterable = match iter {
                    ForIter::Range { start, stop, step } => {
                        let mut args = Vec::new();
                        if start.is_some() || step.is_some() {
                            args.push(match start {
                                Some(start) => self.generate_expression(start, ctx),
                                None => "0".to_string(),
                            });
                        }
                        args.push(self.generate_expression(stop, ctx));
                        if let Some(step) = step {
                            args.push(self.generate_expression(step, ctx));
                        }
                        format!("range({})", args.join(", "))
                    }
                    ForIter::Each { iterable } => self.generate_expression(iterable, ctx),
                };
                self.out.line(&format!("for {} in {}:", target, iterable));
                self.loop_body(body, ctx);
            }
            Statement::ForClassic {
                init,
                test,
                update,
                body,
                ..
            } => {
                if let Some(init) = init {
                    self.generate_statement(init, ctx);
                }
                let test = match test {
                    Some(test) => self.generate_expression(test, ctx),
                    None => "True".to_string(),
                };
                self.out.line(&format!("while {}:", test));
                self.out.indent();
                self.loop_updates.push(update.as_deref().cloned());
                for statement in body {
                    self.generate_statement(statement, ctx);
                }
                self.loop_updates.pop();
                match update {
                    Some(update) => self.generate_statement(update, ctx),
                    None if body.is_empty() => self.out.line("pass"),
                    None => {}
                }
                self.out.dedent();
            }
            Statement::While {
                condition, body, ..
            } => {
                let condition = self.generate_expression(condition, ctx);
                self.out.line(&format!("while {}:", condition));
                self.loop_body(body, ctx);
            }
            Statement::Try {
                body,
                handler,
                finally_body,
                ..
            } => self.generate_try(body, handler.as_ref(), finally_body.as_deref(), ctx),
            Statement::Return { value, .. } => match value {
                Some(value) => {
                    let value = self.generate_expression(value, ctx);
                    self.out.line(&format!("return {}", value));
                }
                None => self.out.line("return"),
            },
            Statement::Assign { targets, value, .. } => {
                let mut parts: Vec<String> = targets
                    .iter()
                    .map(|t| self.generate_expression(t, ctx))
                    .collect();
                parts.push(match value {
                    Some(value) => self.generate_expression(value, ctx),
                    None => "None".to_string(),
                });
                self.out.line(&parts.join(" = "));
            }
            Statement::AugAssign {
                target, op, value, ..
            } => {
                let target = self.generate_expression(target, ctx);
                let value = self.generate_expression(value, ctx);
                self.out
                    .line(&format!("{} {}= {}", target, binary_symbol(*op), value));
            }
            Statement::Print { args, .. } => {
                let args = self.arguments(args, ctx);
                self.out.line(&format!("print({})", args));
            }
            Statement::Expression { expression, .. } => {
                let text = self.generate_expression(expression, ctx);
                self.out.line(&text);
            }
            Statement::Pass { .. } => self.out.line("pass"),
            Statement::Break { .. } => self.out.line("break"),
            Statement::Continue { .. } => {
                // A lowered three-clause loop runs its update before skipping ahead
                if let Some(update) = self.loop_updates.last().cloned().flatten() {
                    self.generate_statement(&update, ctx);
                }
                self.out.line("continue");
            }
        }
    }

    fn loop_body(&mut self, body: &[Statement], ctx: GenContext) {
        self.loop_updates.push(None);
        self.generate_block(body, ctx);
        self.loop_updates.pop();
    }

    fn generate_function(
        &mut self,
        name: &str,
        params: &[Parameter],
        body: &[Statement],
        ctx: GenContext,
    ) {
        let mut rendered = Vec::new();
        if ctx.in_class && params.first().map(|p| p.name.as_str()) != Some("self") {
            rendered.push("self".to_string());
        }
        for param in params {
            rendered.push(match param.kind {
                ParameterKind::Positional => match &param.default {
                    Some(default) => {
                        format!("{}={}", param.name, self.generate_expression(default, ctx))
                    }
                    None => param.name.clone(),
                },
                ParameterKind::Rest => format!("*{}", param.name),
                ParameterKind::KeywordCollector => format!("**{}", param.name),
            });
        }

        let (name, body_ctx) = if ctx.in_class {
            let name = if name == "constructor" { "__init__" } else { name };
            (name, ctx.method_body())
        } else {
            (name, ctx.function_body())
        };
        self.out
            .line(&format!("def {}({}):", name, rendered.join(", ")));
        self.generate_block(body, body_ctx);
    }

    fn generate_if(
        &mut self,
        condition: &Expression,
        body: &[Statement],
        elif_clauses: &[ElifClause],
        else_body: Option<&[Statement]>,
        ctx: GenContext,
    ) {
        let condition = self.generate_expression(condition, ctx);
        self.out.line(&format!("if {}:", condition));
        self.generate_block(body, ctx);

        for clause in elif_clauses {
            let condition = self.generate_expression(&clause.condition, ctx);
            self.out.line(&format!("elif {}:", condition));
            self.generate_block(&clause.body, ctx);
        }

        if let Some(else_body) = else_body {
            self.out.line("else:");
            self.generate_block(else_body, ctx);
        }
    }

    fn generate_try(
        &mut self,
        body: &[Statement],
        handler: Option<&ExceptHandler>,
        finally_body: Option<&[Statement]>,
        ctx: GenContext,
    ) {
        self.out.line("try:");
        self.generate_block(body, ctx);

        if let Some(handler) = handler {
            match &handler.name {
                Some(name) => self.out.line(&format!("except Exception as {}:", name)),
                None => self.out.line("except:"),
            }
            self.generate_block(&handler.body, ctx);
        }
        if let Some(finally_body) = finally_body {
            self.out.line("finally:");
            self.generate_block(finally_body, ctx);
        }
    }

    fn operand(&mut self, expr: &Expression, ctx: GenContext, min: u8) -> String {
        let text = self.generate_expression(expr, ctx);
        if precedence(expr) < min {
            format!("({})", text)
        } else {
            text
        }
    }

    fn arguments(&mut self, args: &[Expression], ctx: GenContext) -> String {
        args.iter()
            .map(|a| self.generate_expression(a, ctx))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn generate_expression(&mut self, expr: &Expression, ctx: GenContext) -> String {
        match expr {
            Expression::BinOp {
                op, left, right, ..
            } => {
                let prec = binary_precedence(*op);
                let (left_min, right_min) = if *op == BinaryOperator::Power {
                    (PREC_ATOM, PREC_UNARY)
                } else {
                    (prec, prec + 1)
                };
                format!(
                    "{} {} {}",
                    self.operand(left, ctx, left_min),
                    binary_symbol(*op),
                    self.operand(right, ctx, right_min)
                )
            }
            Expression::UnaryOp { op, operand, .. } => match op {
                UnaryOperator::Not => match includes_call(operand) {
                    Some((container, element)) => format!(
                        "{} not in {}",
                        self.operand(element, ctx, PREC_COMPARE + 1),
                        self.operand(container, ctx, PREC_COMPARE + 1)
                    ),
                    None => format!("not {}", self.operand(operand, ctx, PREC_NOT)),
                },
                UnaryOperator::Negate => format!("-{}", self.operand(operand, ctx, PREC_UNARY)),
                UnaryOperator::Plus => format!("+{}", self.operand(operand, ctx, PREC_UNARY)),
            },
            Expression::BoolOp {
                op, left, right, ..
            } => {
                let (word, prec) = match op {
                    BoolOperator::And => ("and", PREC_AND),
                    BoolOperator::Or => ("or", PREC_OR),
                };
                format!(
                    "{} {} {}",
                    self.operand(left, ctx, prec),
                    word,
                    self.operand(right, ctx, prec + 1)
                )
            }
            Expression::CompareChain {
                left, comparisons, ..
            } => {
                let mut text = self.operand(left, ctx, PREC_COMPARE + 1);
                for comparison in comparisons {
                    text.push(' ');
                    text.push_str(compare_symbol(comparison.op));
                    text.push(' ');
                    text.push_str(&self.operand(&comparison.right, ctx, PREC_COMPARE + 1));
                }
                text
            }
            Expression::Conditional {
                test,
                consequent,
                alternate,
                ..
            } => format!(
                "{} if {} else {}",
                self.operand(consequent, ctx, PREC_CONDITIONAL + 1),
                self.operand(test, ctx, PREC_CONDITIONAL + 1),
                self.operand(alternate, ctx, PREC_CONDITIONAL)
            ),
            Expression::Membership {
                element,
                container,
                negated,
                ..
            } => format!(
                "{} {} {}",
                self.operand(element, ctx, PREC_COMPARE + 1),
                if *negated { "not in" } else { "in" },
                self.operand(container, ctx, PREC_COMPARE + 1)
            ),
            Expression::Index { object, index, .. } => format!(
                "{}[{}]",
                self.operand(object, ctx, PREC_ATOM),
                self.generate_expression(index, ctx)
            ),
            Expression::Slice {
                object,
                start,
                stop,
                step,
                ..
            } => {
                let object = self.operand(object, ctx, PREC_ATOM);
                let start = self.optional(start.as_deref(), ctx);
                let stop = self.optional(stop.as_deref(), ctx);
                match step {
                    Some(step) => {
                        let step = self.generate_expression(step, ctx);
                        format!("{}[{}:{}:{}]", object, start, stop, step)
                    }
                    None => format!("{}[{}:{}]", object, start, stop),
                }
            }
            Expression::Attribute { object, name, .. } => match (object.as_ref(), name.as_str()) {
                (Expression::Super { .. }, _) => format!("super().{}", name),
                (_, "length") => format!("len({})", self.generate_expression(object, ctx)),
                (_, "push") => format!("{}.append", self.operand(object, ctx, PREC_ATOM)),
                _ => format!("{}.{}", self.operand(object, ctx, PREC_ATOM), name),
            },
            Expression::Call { callee, args, .. } => self.generate_call(callee, args, ctx),
            Expression::New { callee, args, .. } => format!(
                "{}({})",
                self.operand(callee, ctx, PREC_ATOM),
                self.arguments(args, ctx)
            ),
            Expression::List { elements, .. } => format!("[{}]", self.arguments(elements, ctx)),
            Expression::Dict { entries, .. } => {
                let mut parts = Vec::new();
                for entry in entries {
                    let key = match &entry.key {
                        DictKey::Literal { value } => quote_string(value),
                        DictKey::Number { value } => value.clone(),
                        DictKey::Computed { expression } => self.generate_expression(expression, ctx),
                    };
                    parts.push(format!("{}: {}", key, self.generate_expression(&entry.value, ctx)));
                }
                format!("{{{}}}", parts.join(", "))
            }
            Expression::InterpolatedString { segments, .. } => {
                let mut parts = Vec::new();
                for segment in segments {
                    parts.push(match segment {
                        Segment::Text { value } => FStringPart::Text(value.clone()),
                        Segment::Expr { expr } => {
                            FStringPart::Expr(self.generate_expression(expr, ctx))
                        }
                    });
                }
                render_fstring(&parts)
            }
            Expression::TemplateLiteral { raw, .. } => self.generate_template(raw, ctx),
            Expression::Number { value, .. } => value.clone(),
            Expression::String { value, .. } => quote_string(value),
            Expression::Boolean { value, .. } => (if *value { "True" } else { "False" }).to_string(),
            Expression::Null { .. } => "None".to_string(),
            Expression::Variable { name, .. } => name.clone(),
            Expression::This { .. } => "self".to_string(),
            Expression::Super { .. } => "super()".to_string(),
        }
    }

    fn optional(&mut self, expr: Option<&Expression>, ctx: GenContext) -> String {
        expr.map(|e| self.generate_expression(e, ctx))
            .unwrap_or_default()
    }

    fn generate_call(&mut self, callee: &Expression, args: &[Expression], ctx: GenContext) -> String {
        if let Expression::Attribute { object, name, .. } = callee {
            match (object.as_ref(), name.as_str(), args) {
                (_, "includes", [element]) => {
                    return format!(
                        "{} in {}",
                        self.operand(element, ctx, PREC_COMPARE + 1),
                        self.operand(object, ctx, PREC_COMPARE + 1)
                    );
                }
                (_, "at", [index]) => {
                    return format!(
                        "{}[{}]",
                        self.operand(object, ctx, PREC_ATOM),
                        self.generate_expression(index, ctx)
                    );
                }
                (_, "slice", [] | [_] | [_, _]) => {
                    let object = self.operand(object, ctx, PREC_ATOM);
                    let start = self.optional(args.first(), ctx);
                    let stop = self.optional(args.get(1), ctx);
                    return format!("{}[{}:{}]", object, start, stop);
                }
                (Expression::Variable { name: owner, .. }, "floor", [argument])
                    if owner == "Math" =>
                {
                    if let Expression::BinOp {
                        op: BinaryOperator::Divide,
                        left,
                        right,
                        ..
                    } = argument
                    {
                        return format!(
                            "{} // {}",
                            self.operand(left, ctx, PREC_MULTIPLICATIVE),
                            self.operand(right, ctx, PREC_MULTIPLICATIVE + 1)
                        );
                    }
                }
                (Expression::Variable { name: owner, .. }, "log", _) if owner == "console" => {
                    return format!("print({})", self.arguments(args, ctx));
                }
                _ => {}
            }
        }

        let args_text = self.arguments(args, ctx);
        match callee {
            Expression::Super { .. } => format!("super().__init__({})", args_text),
            _ => format!("{}({})", self.operand(callee, ctx, PREC_ATOM), args_text),
        }
    }

    /// Decode a raw template literal and reparse each `${...}` part
    fn generate_template(&mut self, raw: &str, ctx: GenContext) -> String {
        let chars: Vec<char> = raw.chars().collect();
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '\\' if i + 1 < chars.len() => {
                    text.push(match chars[i + 1] {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => other,
                    });
                    i += 2;
                }
                '$' if chars.get(i + 1) == Some(&'{') => {
                    let Some(close) = find_closing_brace(&chars, i + 2) else {
                        text.extend(&chars[i..]);
                        break;
                    };
                    let source: String = chars[i + 2..close].iter().collect();
                    match parse_template_expression(&source) {
                        Ok(expr) => {
                            if !text.is_empty() {
                                parts.push(FStringPart::Text(std::mem::take(&mut text)));
                            }
                            parts.push(FStringPart::Expr(self.generate_expression(&expr, ctx)));
                        }
                        Err(err) => {
                            self.note_placeholder(&format!("template part ${{{}}}: {}", source, err.message()));
                            text.push_str("${");
                            text.push_str(&source);
                            text.push('}');
                        }
                    }
                    i = close + 1;
                }
                ch => {
                    text.push(ch);
                    i += 1;
                }
            }
        }
        if !text.is_empty() {
            parts.push(FStringPart::Text(text));
        }

        if parts.iter().all(|p| matches!(p, FStringPart::Text(_))) {
            let text: String = parts
                .into_iter()
                .filter_map(|p| match p {
                    FStringPart::Text(t) => Some(t),
                    FStringPart::Expr(_) => None,
                })
                .collect();
            return quote_string(&text);
        }
        render_fstring(&parts)
    }
}

enum FStringPart {
    Text(String),
    Expr(String),
}

fn parse_template_expression(source: &str) -> Result<Expression, ParserError> {
    let source = source.trim();
    if source.is_empty() {
        return Err(ParserError::InvalidInterpolation {
            message: "empty expression".to_string(),
            location: SourceLocation::new(TEMPLATE_ORIGIN, 1, 1),
        });
    }
    trace!(source, "parsing template expression");

    let tokens = lexer::javascript::tokenize(source, TEMPLATE_ORIGIN).map_err(|e| {
        ParserError::InvalidInterpolation {
            message: e.message(),
            location: e.location().clone(),
        }
    })?;
    let mut parser = parser::javascript::Parser::new(tokens, TEMPLATE_ORIGIN);
    let expr = parser.parse_expression()?;
    if !parser.is_at_end() {
        return Err(ParserError::InvalidInterpolation {
            message: "trailing tokens after template expression".to_string(),
            location: SourceLocation::new(TEMPLATE_ORIGIN, 1, 1),
        });
    }
    Ok(expr)
}

/// `f"..."`, switching to single quotes when an embedded expression holds `"`
fn render_fstring(parts: &[FStringPart]) -> String {
    let quote = if parts
        .iter()
        .any(|p| matches!(p, FStringPart::Expr(e) if e.contains('"')))
    {
        '\''
    } else {
        '"'
    };

    let mut out = String::from("f");
    out.push(quote);
    for part in parts {
        match part {
            FStringPart::Text(text) => {
                for ch in text.chars() {
                    match ch {
                        '{' => out.push_str("{{"),
                        '}' => out.push_str("}}"),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\t' => out.push_str("\\t"),
                        '\r' => out.push_str("\\r"),
                        c if c == quote => {
                            out.push('\\');
                            out.push(c);
                        }
                        c => out.push(c),
                    }
                }
            }
            FStringPart::Expr(expr) => {
                out.push('{');
                out.push_str(expr);
                out.push('}');
            }
        }
    }
    out.push(quote);
    out
}

/// `./utils/math.js` becomes `utils.math`
fn module_name(path: &str) -> String {
    let path = path.trim_start_matches("./");
    let path = path
        .strip_suffix(".js")
        .or_else(|| path.strip_suffix(".pjs"))
        .unwrap_or(path);
    path.replace('/', ".")
}

/// `container.includes(element)`
fn includes_call(expr: &Expression) -> Option<(&Expression, &Expression)> {
    match expr {
        Expression::Call { callee, args, .. } => match (callee.as_ref(), args.as_slice()) {
            (Expression::Attribute { object, name, .. }, [element]) if name == "includes" => {
                Some((object.as_ref(), element))
            }
            _ => None,
        },
        _ => None,
    }
}

fn binary_precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Add | BinaryOperator::Subtract => PREC_ADDITIVE,
        BinaryOperator::Power => PREC_POWER,
        _ => PREC_MULTIPLICATIVE,
    }
}

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Conditional { .. } => PREC_CONDITIONAL,
        Expression::BoolOp {
            op: BoolOperator::Or,
            ..
        } => PREC_OR,
        Expression::BoolOp {
            op: BoolOperator::And,
            ..
        } => PREC_AND,
        Expression::UnaryOp {
            op: UnaryOperator::Not,
            ..
        } => PREC_NOT,
        Expression::CompareChain { .. } | Expression::Membership { .. } => PREC_COMPARE,
        Expression::BinOp { op, .. } => binary_precedence(*op),
        Expression::UnaryOp { .. } => PREC_UNARY,
        Expression::Call { callee, args, .. } => match callee.as_ref() {
            Expression::Attribute { name, .. } if name == "includes" && args.len() == 1 => {
                PREC_COMPARE
            }
            Expression::Attribute { object, name, .. }
                if name == "floor" && object.as_variable() == Some("Math") =>
            {
                match args.as_slice() {
                    [Expression::BinOp {
                        op: BinaryOperator::Divide,
                        ..
                    }] => PREC_MULTIPLICATIVE,
                    _ => PREC_ATOM,
                }
            }
            _ => PREC_ATOM,
        },
        _ => PREC_ATOM,
    }
}

fn binary_symbol(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Subtract => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::FloorDivide => "//",
        BinaryOperator::Modulo => "%",
        BinaryOperator::Power => "**",
    }
}

fn compare_symbol(op: CompareOperator) -> &'static str {
    match op {
        CompareOperator::Less => "<",
        CompareOperator::Greater => ">",
        CompareOperator::LessEqual => "<=",
        CompareOperator::GreaterEqual => ">=",
        CompareOperator::Equal => "==",
        CompareOperator::NotEqual => "!=",
        CompareOperator::In => "in",
        CompareOperator::NotIn => "not in",
    }
}
