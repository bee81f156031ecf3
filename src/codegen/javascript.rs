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

//! JavaScript code generation from a PythonScript AST
//!
//! Arithmetic is always parenthesized; other operators get parentheses only
//! where JavaScript precedence requires them. Plain names assigned in a scope
//! are declared once with `let` at the top of that scope.

use super::{quote_string, CodeWriter, CodegenOptions, GenContext};
use crate::ast::{
    BinaryOperator, BoolOperator, CompareOperator, DeclarationKind, DictKey, ElifClause,
    ExceptHandler, Expression, ForIter, ImportKind, Module, Parameter, ParameterKind, Segment,
    Statement, UnaryOperator,
};
use tracing::warn;

const PREC_CONDITIONAL: u8 = 2;
const PREC_OR: u8 = 3;
const PREC_AND: u8 = 4;
const PREC_COMPARE: u8 = 7;
const PREC_UNARY: u8 = 14;
const PREC_ATOM: u8 = 20;

/// Generate JavaScript with the default options
pub fn generate(module: &Module) -> String {
    generate_with(module, &CodegenOptions::javascript())
}

pub fn generate_with(module: &Module, options: &CodegenOptions) -> String {
    let mut generator = Generator::new(options);
    generator.generate_module(module);
    generator.finish()
}

pub struct Generator {
    out: CodeWriter,
    placeholders: usize,
}

impl Generator {
    pub fn new(options: &CodegenOptions) -> Self {
        Self {
            out: CodeWriter::new(options),
            placeholders: 0,
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
        self.declare_locals(&module.body, &[]);
        self.generate_body(&module.body, GenContext::default());
    }

    fn placeholder(&mut self, what: &str) -> String {
        self.placeholders += 1;
        warn!(construct = what, "no JavaScript equivalent, writing placeholder");
        format!("/* Unhandled PythonScript construct: {} */", what)
    }

    fn declare_locals(&mut self, body: &[Statement], params: &[Parameter]) {
        let mut names = Vec::new();
        collect_assigned_names(body, &mut names);
        names.retain(|name| !params.iter().any(|p| &p.name == name));
        if !names.is_empty() {
            self.out.line(&format!("let {};", names.join(", ")));
        }
    }

    fn generate_body(&mut self, body: &[Statement], ctx: GenContext) {
        for statement in body {
            self.generate_statement(statement, ctx);
        }
    }

    fn generate_block(&mut self, body: &[Statement], ctx: GenContext) {
        self.out.indent();
        self.generate_body(body, ctx);
        self.out.dedent();
    }

    pub fn generate_statement(&mut self, statement: &Statement, ctx: GenContext) {
        match statement {
            Statement::Import { module, kind, .. } => self.generate_import(module, kind),
            Statement::ClassDef {
                name, base, body, ..
            } => self.generate_class(name, base.as_deref(), body, ctx),
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
                let header = self.for_header(target, iter, ctx);
                self.out.line(&format!("for ({}) {{", header));
                self.generate_block(body, ctx);
                self.out.line("}");
            }
            Statement::ForClassic {
                init,
                test,
                update,
                body,
                ..
            } => {
                let init = init
                    .as_deref()
                    .map(|s| self.inline_statement(s, ctx))
                    .unwrap_or_default();
                let test = test
                    .as_ref()
                    .map(|t| self.generate_expression(t, ctx))
                    .unwrap_or_default();
                let update = update
                    .as_deref()
                    .map(|s| self.inline_statement(s, ctx))
                    .unwrap_or_default();
                self.out
                    .line(&format!("for ({}; {}; {}) {{", init, test, update));
                self.generate_block(body, ctx);
                self.out.line("}");
            }
            Statement::While {
                condition, body, ..
            } => {
                let condition = self.generate_expression(condition, ctx);
                self.out.line(&format!("while ({}) {{", condition));
                self.generate_block(body, ctx);
                self.out.line("}");
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
                    self.out.line(&format!("return {};", value));
                }
                None => self.out.line("return;"),
            },
            Statement::Pass { .. } => {}
            Statement::Break { .. } => self.out.line("break;"),
            Statement::Continue { .. } => self.out.line("continue;"),
            Statement::Assign { .. }
            | Statement::AugAssign { .. }
            | Statement::Print { .. }
            | Statement::Expression { .. } => {
                let text = self.inline_statement(statement, ctx);
                self.out.line(&format!("{};", text));
            }
        }
    }

    /// Simple statements without the trailing semicolon, also used inside
    /// `for (...)` headers
    fn inline_statement(&mut self, statement: &Statement, ctx: GenContext) -> String {
        match statement {
            Statement::Assign {
                targets,
                value,
                declaration,
                ..
            } => {
                let mut parts: Vec<String> = targets
                    .iter()
                    .map(|t| self.assignment_target(t, ctx))
                    .collect();
                if let Some(value) = value {
                    parts.push(self.generate_expression(value, ctx));
                }
                let text = parts.join(" = ");
                match declaration {
                    Some(DeclarationKind::Const) => format!("const {}", text),
                    Some(DeclarationKind::Var) => format!("var {}", text),
                    Some(DeclarationKind::Let) => format!("let {}", text),
                    None if value.is_none() => format!("{} = undefined", text),
                    None => text,
                }
            }
            Statement::AugAssign {
                target, op, value, ..
            } => {
                let target_text = self.assignment_target(target, ctx);
                if *op == BinaryOperator::FloorDivide {
                    let value = self.operand(value, ctx, PREC_UNARY);
                    format!("{} = Math.floor({} / {})", target_text, target_text, value)
                } else {
                    let value = self.generate_expression(value, ctx);
                    format!("{} {}= {}", target_text, binary_symbol(*op), value)
                }
            }
            Statement::Print { args, .. } => {
                format!("console.log({})", self.arguments(args, ctx))
            }
            Statement::Expression { expression, .. } => self.generate_expression(expression, ctx),
            other => self.placeholder(other.kind_name()),
        }
    }

    /// `.at()` is read-only, so a negative literal index being written to
    /// counts back from `length` instead
    fn assignment_target(&mut self, target: &Expression, ctx: GenContext) -> String {
        match target {
            Expression::Index { object, index, .. } => match negated_literal(index) {
                Some(amount) => {
                    let object = self.operand(object, ctx, PREC_ATOM);
                    format!("{o}[{o}.length - {}]", amount, o = object)
                }
                None => self.generate_expression(target, ctx),
            },
            _ => self.generate_expression(target, ctx),
        }
    }

    fn generate_import(&mut self, module: &str, kind: &ImportKind) {
        match kind {
            ImportKind::Module { alias } => {
                let binding = alias
                    .clone()
                    .unwrap_or_else(|| module.rsplit('.').next().unwrap_or(module).to_string());
                self.out.line(&format!(
                    "const {} = require({});",
                    binding,
                    quote_string(module)
                ));
            }
            ImportKind::Names { names } => {
                let bindings: Vec<String> = names
                    .iter()
                    .map(|n| match &n.alias {
                        Some(alias) => format!("{}: {}", n.name, alias),
                        None => n.name.clone(),
                    })
                    .collect();
                self.out.line(&format!(
                    "const {{ {} }} = require({});",
                    bindings.join(", "),
                    quote_string(module)
                ));
            }
        }
    }

    fn generate_class(
        &mut self,
        name: &str,
        base: Option<&str>,
        body: &[Statement],
        ctx: GenContext,
    ) {
        match base {
            Some(base) => self.out.line(&format!("class {} extends {} {{", name, base)),
            None => self.out.line(&format!("class {} {{", name)),
        }
        self.out.indent();

        let class_ctx = ctx.class_body();
        for member in body {
            match member {
                Statement::FunctionDef { .. } => self.generate_statement(member, class_ctx),
                Statement::Assign {
                    targets,
                    value: Some(value),
                    ..
                } if targets.len() == 1 && targets[0].as_variable().is_some() => {
                    let field = self.generate_expression(&targets[0], ctx);
                    let value = self.generate_expression(value, ctx);
                    self.out.line(&format!("static {} = {};", field, value));
                }
                Statement::Pass { .. } => {}
                other => {
                    let text = self.placeholder(&format!("class member {}", other.kind_name()));
                    self.out.line(&text);
                }
            }
        }

        self.out.dedent();
        self.out.line("}");
    }

    fn generate_function(
        &mut self,
        name: &str,
        params: &[Parameter],
        body: &[Statement],
        ctx: GenContext,
    ) {
        if ctx.in_class {
            let params = match params.first() {
                Some(first) if first.name == "self" => &params[1..],
                _ => params,
            };
            let method_name = if name == "__init__" { "constructor" } else { name };
            let params_text = self.parameters(params, ctx);
            self.out
                .line(&format!("{}({}) {{", method_name, params_text));
            self.out.indent();
            self.declare_locals(body, params);
            self.generate_body(body, ctx.method_body());
            self.out.dedent();
            self.out.line("}");
        } else if ctx.in_method {
            // An arrow function keeps the enclosing method's `this`
            let params_text = self.parameters(params, ctx);
            self.out
                .line(&format!("const {} = ({}) => {{", name, params_text));
            self.out.indent();
            self.declare_locals(body, params);
            self.generate_body(body, ctx);
            self.out.dedent();
            self.out.line("};");
        } else {
            let params_text = self.parameters(params, ctx);
            self.out
                .line(&format!("function {}({}) {{", name, params_text));
            self.out.indent();
            self.declare_locals(body, params);
            self.generate_body(body, ctx.function_body());
            self.out.dedent();
            self.out.line("}");
        }
    }

    fn parameters(&mut self, params: &[Parameter], ctx: GenContext) -> String {
        let mut parts = Vec::new();
        for param in params {
            parts.push(match param.kind {
                ParameterKind::Positional => match &param.default {
                    Some(default) => {
                        format!("{} = {}", param.name, self.generate_expression(default, ctx))
                    }
                    None => param.name.clone(),
                },
                ParameterKind::Rest => format!("...{}", param.name),
                ParameterKind::KeywordCollector => {
                    self.placeholder(&format!("keyword parameter **{}", param.name))
                }
            });
        }
        parts.join(", ")
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
        self.out.line(&format!("if ({}) {{", condition));
        self.generate_block(body, ctx);

        for clause in elif_clauses {
            let condition = self.generate_expression(&clause.condition, ctx);
            self.out.line(&format!("}} else if ({}) {{", condition));
            self.generate_block(&clause.body, ctx);
        }

        if let Some(else_body) = else_body {
            self.out.line("} else {");
            self.generate_block(else_body, ctx);
        }
        self.out.line("}");
    }

    fn for_header(&mut self, target: &str, iter: &ForIter, ctx: GenContext) -> String {
        match iter {
            ForIter::Range { start, stop, step } => {
                let start = start
                    .as_ref()
                    .map(|s| self.generate_expression(s, ctx))
                    .unwrap_or_else(|| "0".to_string());
                let stop = self.generate_expression(stop, ctx);
                match step {
                    None => format!("let {t} = {}; {t} < {}; {t}++", start, stop, t = target),
                    Some(step) => match negated(step) {
                        Some(amount) => format!(
                            "let {t} = {}; {t} > {}; {t} -= {}",
                            start,
                            stop,
                            self.operand(amount, ctx, PREC_UNARY),
                            t = target
                        ),
                        None if matches!(step, Expression::Number { .. }) => format!(
                            "let {t} = {}; {t} < {}; {t} += {}",
                            start,
                            stop,
                            self.generate_expression(step, ctx),
                            t = target
                        ),
                        None => {
                            let step = self.operand(step, ctx, PREC_COMPARE + 1);
                            format!(
                                "let {t} = {}; {s} > 0 ? {t} < {e} : {t} > {e}; {t} += {s}",
                                start,
                                s = step,
                                e = stop,
                                t = target
                            )
                        }
                    },
                }
            }
            ForIter::Each { iterable } => {
                format!("const {} of {}", target, self.generate_expression(iterable, ctx))
            }
        }
    }

    fn generate_try(
        &mut self,
        body: &[Statement],
        handler: Option<&ExceptHandler>,
        finally_body: Option<&[Statement]>,
        ctx: GenContext,
    ) {
        self.out.line("try {");
        self.generate_block(body, ctx);

        if let Some(handler) = handler {
            let name = handler.name.as_deref().unwrap_or("e");
            self.out.line(&format!("}} catch ({}) {{", name));
            self.generate_block(&handler.body, ctx);
        }
        if let Some(finally_body) = finally_body {
            self.out.line("} finally {");
            self.generate_block(finally_body, ctx);
        }
        self.out.line("}");
    }

    /// Render an expression, adding parentheses if its precedence is below `min`
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
            } => match op {
                BinaryOperator::FloorDivide => format!(
                    "Math.floor({} / {})",
                    self.operand(left, ctx, PREC_UNARY),
                    self.operand(right, ctx, PREC_UNARY)
                ),
                BinaryOperator::Power => format!(
                    "({} ** {})",
                    self.operand(left, ctx, PREC_UNARY + 1),
                    self.operand(right, ctx, PREC_UNARY)
                ),
                _ => format!(
                    "({} {} {})",
                    self.operand(left, ctx, PREC_UNARY),
                    binary_symbol(*op),
                    self.operand(right, ctx, PREC_UNARY)
                ),
            },
            Expression::UnaryOp { op, operand, .. } => match op {
                UnaryOperator::Not => format!("!{}", self.operand(operand, ctx, PREC_UNARY)),
                UnaryOperator::Negate => format!("-{}", self.operand(operand, ctx, PREC_UNARY + 1)),
                UnaryOperator::Plus => format!("+{}", self.operand(operand, ctx, PREC_UNARY + 1)),
            },
            Expression::BoolOp {
                op, left, right, ..
            } => {
                let (symbol, prec) = match op {
                    BoolOperator::And => ("&&", PREC_AND),
                    BoolOperator::Or => ("||", PREC_OR),
                };
                format!(
                    "{} {} {}",
                    self.operand(left, ctx, prec),
                    symbol,
                    self.operand(right, ctx, prec + 1)
                )
            }
            Expression::CompareChain {
                left, comparisons, ..
            } => {
                let mut pairs = Vec::new();
                let mut lhs = self.operand(left, ctx, PREC_COMPARE + 1);
                for comparison in comparisons {
                    let rhs = self.operand(&comparison.right, ctx, PREC_COMPARE + 1);
                    pairs.push(match comparison.op {
                        CompareOperator::In => format!("{}.includes({})", rhs, lhs),
                        CompareOperator::NotIn => format!("!{}.includes({})", rhs, lhs),
                        op => format!("{} {} {}", lhs, compare_symbol(op), rhs),
                    });
                    lhs = rhs;
                }
                if pairs.len() == 1 {
                    pairs.remove(0)
                } else {
                    pairs
                        .iter()
                        .map(|p| format!("({})", p))
                        .collect::<Vec<_>>()
                        .join(" && ")
                }
            }
            Expression::Conditional {
                test,
                consequent,
                alternate,
                ..
            } => format!(
                "{} ? {} : {}",
                self.operand(test, ctx, PREC_OR),
                self.operand(consequent, ctx, PREC_CONDITIONAL),
                self.operand(alternate, ctx, PREC_CONDITIONAL)
            ),
            Expression::Membership {
                element,
                container,
                negated,
                ..
            } => {
                let container = self.operand(container, ctx, PREC_ATOM);
                let element = self.generate_expression(element, ctx);
                let prefix = if *negated { "!" } else { "" };
                format!("{}{}.includes({})", prefix, container, element)
            }
            Expression::Index { object, index, .. } => {
                let object = self.operand(object, ctx, PREC_ATOM);
                match negated_literal(index) {
                    Some(amount) => format!("{}.at(-{})", object, amount),
                    None => format!("{}[{}]", object, self.generate_expression(index, ctx)),
                }
            }
            Expression::Slice {
                object,
                start,
                stop,
                step,
                ..
            } => {
                let object = self.operand(object, ctx, PREC_ATOM);
                let start = start
                    .as_deref()
                    .map(|s| self.generate_expression(s, ctx))
                    .unwrap_or_else(|| "0".to_string());
                let stop = stop
                    .as_deref()
                    .map(|s| self.generate_expression(s, ctx))
                    .unwrap_or_else(|| format!("{}.length", object));
                let sliced = format!("{}.slice({}, {})", object, start, stop);
                match step {
                    Some(step) => format!(
                        "{}.filter((_, i) => i % {} === 0)",
                        sliced,
                        self.operand(step, ctx, PREC_UNARY)
                    ),
                    None => sliced,
                }
            }
            Expression::Attribute { object, name, .. } => {
                let name = if name == "append" { "push" } else { name.as_str() };
                if is_super_call(object) {
                    return format!("super.{}", name);
                }
                format!("{}.{}", self.operand(object, ctx, PREC_ATOM), name)
            }
            Expression::Call { callee, args, .. } => self.generate_call(callee, args, ctx),
            Expression::New { callee, args, .. } => format!(
                "new {}({})",
                self.operand(callee, ctx, PREC_ATOM),
                self.arguments(args, ctx)
            ),
            Expression::List { elements, .. } => format!("[{}]", self.arguments(elements, ctx)),
            Expression::Dict { entries, .. } => {
                if entries.is_empty() {
                    return "{}".to_string();
                }
                let mut parts = Vec::new();
                for entry in entries {
                    let key = match &entry.key {
                        DictKey::Literal { value } => quote_string(value),
                        DictKey::Number { value } => value.clone(),
                        DictKey::Computed { expression } => {
                            format!("[{}]", self.generate_expression(expression, ctx))
                        }
                    };
                    parts.push(format!("{}: {}", key, self.generate_expression(&entry.value, ctx)));
                }
                format!("{{ {} }}", parts.join(", "))
            }
            Expression::InterpolatedString { segments, .. } => {
                let mut text = String::from("`");
                for segment in segments {
                    match segment {
                        Segment::Text { value } => text.push_str(&escape_template_text(value)),
                        Segment::Expr { expr } => {
                            text.push_str("${");
                            text.push_str(&self.generate_expression(expr, ctx));
                            text.push('}');
                        }
                    }
                }
                text.push('`');
                text
            }
            Expression::TemplateLiteral { raw, .. } => format!("`{}`", raw),
            Expression::Number { value, .. } => value.clone(),
            Expression::String { value, .. } => quote_string(value),
            Expression::Boolean { value, .. } => value.to_string(),
            Expression::Null { .. } => "null".to_string(),
            Expression::Variable { name, .. } => {
                if ctx.in_method && name == "self" {
                    "this".to_string()
                } else {
                    name.clone()
                }
            }
            Expression::This { .. } => "this".to_string(),
            Expression::Super { .. } => "super".to_string(),
        }
    }

    fn generate_call(&mut self, callee: &Expression, args: &[Expression], ctx: GenContext) -> String {
        let args_text = self.arguments(args, ctx);

        match callee {
            Expression::Variable { name, .. } if name == "print" => {
                format!("console.log({})", args_text)
            }
            Expression::Variable { name, .. } if starts_uppercase(name) => {
                format!("new {}({})", name, args_text)
            }
            Expression::Attribute { object, name, .. }
                if name == "__init__" && is_super_call(object) =>
            {
                format!("super({})", args_text)
            }
            _ => format!("{}({})", self.operand(callee, ctx, PREC_ATOM), args_text),
        }
    }
}

/// Collect plain names assigned in a scope, in first-assignment order.
/// Nested functions and classes are separate scopes.
fn collect_assigned_names(body: &[Statement], names: &mut Vec<String>) {
    fn add(name: &str, names: &mut Vec<String>) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    for statement in body {
        match statement {
            Statement::Assign {
                targets,
                declaration: None,
                ..
            } => {
                for target in targets {
                    if let Some(name) = target.as_variable() {
                        add(name, names);
                    }
                }
            }
            Statement::If {
                body,
                elif_clauses,
                else_body,
                ..
            } => {
                collect_assigned_names(body, names);
                for clause in elif_clauses {
                    collect_assigned_names(&clause.body, names);
                }
                if let Some(else_body) = else_body {
                    collect_assigned_names(else_body, names);
                }
            }
            Statement::For { body, .. } | Statement::While { body, .. } => {
                collect_assigned_names(body, names);
            }
            Statement::ForClassic { init, body, .. } => {
                if let Some(init) = init {
                    collect_assigned_names(std::slice::from_ref(init.as_ref()), names);
                }
                collect_assigned_names(body, names);
            }
            Statement::Try {
                body,
                handler,
                finally_body,
                ..
            } => {
                collect_assigned_names(body, names);
                if let Some(handler) = handler {
                    collect_assigned_names(&handler.body, names);
                }
                if let Some(finally_body) = finally_body {
                    collect_assigned_names(finally_body, names);
                }
            }
            _ => {}
        }
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
        Expression::CompareChain { comparisons, .. } if comparisons.len() > 1 => PREC_AND,
        Expression::CompareChain { comparisons, .. } => match comparisons.first().map(|c| c.op) {
            Some(CompareOperator::NotIn) => PREC_UNARY,
            Some(CompareOperator::In) => PREC_ATOM,
            _ => PREC_COMPARE,
        },
        Expression::UnaryOp { .. } => PREC_UNARY,
        Expression::Membership { negated: true, .. } => PREC_UNARY,
        _ => PREC_ATOM,
    }
}

fn binary_symbol(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Subtract => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide | BinaryOperator::FloorDivide => "/",
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
        CompareOperator::Equal => "===",
        CompareOperator::NotEqual => "!==",
        CompareOperator::In | CompareOperator::NotIn => "in",
    }
}

/// Operand of a unary minus
fn negated(expr: &Expression) -> Option<&Expression> {
    match expr {
        Expression::UnaryOp {
            op: UnaryOperator::Negate,
            operand,
            ..
        } => Some(operand),
        _ => None,
    }
}

/// `-n` for a numeric literal `n`
fn negated_literal(expr: &Expression) -> Option<&str> {
    match negated(expr)? {
        Expression::Number { value, .. } => Some(value),
        _ => None,
    }
}

fn is_super_call(expr: &Expression) -> bool {
    match expr {
        Expression::Call { callee, args, .. } => {
            args.is_empty() && callee.as_variable() == Some("super")
        }
        Expression::Super { .. } => true,
        _ => false,
    }
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn escape_template_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            other => escaped.push(other),
        }
    }
    escaped
}
