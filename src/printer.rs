//! Deterministic surface-syntax rendering of statements, used for
//! diagnostics and golden tests, plus a structural JSON dump for tooling.
//!
//! Rendering is fixed: two spaces per nesting level, decorators one per
//! line, annotations as trailing `# …` comments.  Nothing here iterates a
//! hash map, so output is stable across runs.

use crate::statement::{Assign, Class, Define, Import, Parameter, Statement, Stub, Try};
use crate::expression::Expression;
use crate::location::Node;
use itertools::Itertools;
use serde_json::{json, Value};
use std::fmt;

/// Render one statement (and its nested blocks) to surface syntax.
pub fn pretty_print(statement: &Node<Statement>) -> String {
    let mut printer = Printer::default();
    printer.statement(&statement.value);
    printer.out
}

/// Render a statement list the way a module body prints.
pub fn pretty_print_module(statements: &[Node<Statement>]) -> String {
    let mut printer = Printer::default();
    for statement in statements {
        printer.statement(&statement.value);
    }
    printer.out
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::default();
        printer.statement(self);
        write!(f, "{}", printer.out)
    }
}

// ── Printer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// An indented block; an empty one renders as `...` so headers are never
    /// left dangling (stub and generated bodies are the only empty ones).
    fn block(&mut self, statements: &[Node<Statement>]) {
        self.indent += 1;
        if statements.is_empty() {
            self.line("...");
        }
        for statement in statements {
            self.statement(&statement.value);
        }
        self.indent -= 1;
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Assign(assign) => self.line(&render_assign(assign)),
            Statement::Assert(assert) => match &assert.message {
                Some(message) => self.line(&format!("assert {}, {message}", assert.test)),
                None => self.line(&format!("assert {}", assert.test)),
            },
            Statement::Break => self.line("break"),
            Statement::Class(class) => self.class(class),
            Statement::Continue => self.line("continue"),
            Statement::Define(define) => self.define(define),
            Statement::Delete(expression) => self.line(&format!("del {expression}")),
            Statement::Expression(expression) => self.line(&expression.to_string()),
            Statement::For(looped) => {
                let keyword = if looped.is_async { "async for" } else { "for" };
                self.line(&format!(
                    "{keyword} {} in {}:",
                    looped.target, looped.iterator
                ));
                self.block(&looped.body);
                if !looped.orelse.is_empty() {
                    self.line("else:");
                    self.block(&looped.orelse);
                }
            }
            Statement::Global(names) => self.line(&format!("global {}", names.join(", "))),
            Statement::If(conditional) => {
                self.line(&format!("if {}:", conditional.test));
                self.block(&conditional.body);
                if !conditional.orelse.is_empty() {
                    self.line("else:");
                    self.block(&conditional.orelse);
                }
            }
            Statement::Import(import) => self.line(&render_import(import)),
            Statement::Nonlocal(names) => self.line(&format!("nonlocal {}", names.join(", "))),
            Statement::Pass => self.line("pass"),
            Statement::Raise(expression) => match expression {
                Some(expression) => self.line(&format!("raise {expression}")),
                None => self.line("raise"),
            },
            Statement::Return(expression) => match expression {
                Some(expression) => self.line(&format!("return {expression}")),
                None => self.line("return"),
            },
            Statement::Stub(stub) => match stub {
                Stub::Assign(assign) => self.line(&render_assign(assign)),
                Stub::Class(class) => self.class(class),
                Stub::Define(define) => self.define(define),
            },
            Statement::Try(tried) => self.tried(tried),
            Statement::While(looped) => {
                self.line(&format!("while {}:", looped.test));
                self.block(&looped.body);
                if !looped.orelse.is_empty() {
                    self.line("else:");
                    self.block(&looped.orelse);
                }
            }
            Statement::With(context) => {
                let keyword = if context.is_async { "async with" } else { "with" };
                let items = context
                    .items
                    .iter()
                    .map(|(expression, target)| match target {
                        Some(target) => format!("{expression} as {target}"),
                        None => expression.to_string(),
                    })
                    .join(", ");
                self.line(&format!("{keyword} {items}:"));
                self.block(&context.body);
            }
            Statement::Yield(expression) => self.line(&format!("yield {expression}")),
            Statement::YieldFrom(expression) => self.line(&format!("yield from {expression}")),
        }
    }

    fn class(&mut self, class: &Class) {
        for decorator in &class.decorators {
            self.line(&format!("@{decorator}"));
        }
        let bases = class
            .bases
            .iter()
            .map(|base| match &base.name {
                Some(name) => format!("{name}={}", base.value),
                None => base.value.to_string(),
            })
            .join(", ");
        if bases.is_empty() {
            self.line(&format!("class {}:", class.name));
        } else {
            self.line(&format!("class {}({bases}):", class.name));
        }
        self.block(&class.body);
    }

    fn define(&mut self, define: &Define) {
        for decorator in &define.decorators {
            self.line(&format!("@{decorator}"));
        }
        let keyword = if define.is_async { "async def" } else { "def" };
        let parameters = define
            .parameters
            .iter()
            .map(|parameter| render_parameter(&parameter.value))
            .join(", ");
        let returns = define
            .return_annotation
            .as_ref()
            .map(|annotation| format!(" -> {annotation}"))
            .unwrap_or_default();
        self.line(&format!(
            "{keyword} {}({parameters}){returns}:",
            define.name
        ));
        self.block(&define.body);
    }

    fn tried(&mut self, tried: &Try) {
        self.line("try:");
        self.block(&tried.body);
        for handler in &tried.handlers {
            let header = match (&handler.kind, &handler.name) {
                (Some(kind), Some(name)) => format!("except {kind} as {name}:"),
                (Some(kind), None) => format!("except {kind}:"),
                (None, _) => "except:".to_string(),
            };
            self.line(&header);
            self.block(&handler.body);
        }
        if !tried.orelse.is_empty() {
            self.line("else:");
            self.block(&tried.orelse);
        }
        if !tried.finally.is_empty() {
            self.line("finally:");
            self.block(&tried.finally);
        }
    }
}

fn render_assign(assign: &Assign) -> String {
    let mut text = match &assign.parent {
        Some(parent) => format!("{parent}.{}", assign.target),
        None => assign.target.to_string(),
    };
    if let Some(value) = &assign.value {
        text.push_str(&format!(" = {value}"));
    }
    if let Some(annotation) = &assign.annotation {
        text.push_str(&format!(" # {annotation}"));
    }
    text
}

fn render_parameter(parameter: &Parameter) -> String {
    let mut text = parameter.name.clone();
    if let Some(annotation) = &parameter.annotation {
        text.push_str(&format!(": {annotation}"));
    }
    if let Some(value) = &parameter.value {
        text.push_str(&format!("={value}"));
    }
    text
}

fn render_import(import: &Import) -> String {
    let entries = import
        .imports
        .iter()
        .map(|entry| match &entry.alias {
            Some(alias) => format!("{} as {alias}", entry.name),
            None => entry.name.to_string(),
        })
        .join(", ");
    match &import.from {
        Some(from) => format!("from {from} import {entries}"),
        None => format!("import {entries}"),
    }
}

// ── JSON dump ─────────────────────────────────────────────────────────────────

/// A structural dump of a statement tree: variant kinds plus the salient
/// fields, with expressions rendered to their surface form.
pub fn to_json(statement: &Node<Statement>) -> Value {
    statement_json(&statement.value)
}

fn statement_json(statement: &Statement) -> Value {
    match statement {
        Statement::Assign(assign) => json!({
            "kind": "Assign",
            "target": assign.target.to_string(),
            "annotation": optional(&assign.annotation),
            "value": optional(&assign.value),
        }),
        Statement::Assert(assert) => json!({
            "kind": "Assert",
            "test": assert.test.to_string(),
            "message": optional(&assert.message),
        }),
        Statement::Break => json!({ "kind": "Break" }),
        Statement::Class(class) => class_json(class),
        Statement::Continue => json!({ "kind": "Continue" }),
        Statement::Define(define) => define_json(define),
        Statement::Delete(expression) => json!({
            "kind": "Delete",
            "expression": expression.to_string(),
        }),
        Statement::Expression(expression) => json!({
            "kind": "Expression",
            "expression": expression.to_string(),
        }),
        Statement::For(looped) => json!({
            "kind": "For",
            "async": looped.is_async,
            "target": looped.target.to_string(),
            "iterator": looped.iterator.to_string(),
            "body": body_json(&looped.body),
            "orelse": body_json(&looped.orelse),
        }),
        Statement::Global(names) => json!({ "kind": "Global", "names": names }),
        Statement::If(conditional) => json!({
            "kind": "If",
            "test": conditional.test.to_string(),
            "body": body_json(&conditional.body),
            "orelse": body_json(&conditional.orelse),
        }),
        Statement::Import(import) => json!({
            "kind": "Import",
            "statement": render_import(import),
        }),
        Statement::Nonlocal(names) => json!({ "kind": "Nonlocal", "names": names }),
        Statement::Pass => json!({ "kind": "Pass" }),
        Statement::Raise(expression) => json!({
            "kind": "Raise",
            "expression": optional(expression),
        }),
        Statement::Return(expression) => json!({
            "kind": "Return",
            "expression": optional(expression),
        }),
        Statement::Stub(stub) => {
            let declaration = match stub {
                Stub::Assign(assign) => statement_json(&Statement::Assign(assign.clone())),
                Stub::Class(class) => class_json(class),
                Stub::Define(define) => define_json(define),
            };
            json!({ "kind": "Stub", "declaration": declaration })
        }
        Statement::Try(tried) => json!({
            "kind": "Try",
            "body": body_json(&tried.body),
            "handlers": tried.handlers.iter().map(|handler| json!({
                "type": optional(&handler.kind),
                "name": handler.name,
                "body": body_json(&handler.body),
            })).collect::<Vec<_>>(),
            "orelse": body_json(&tried.orelse),
            "finally": body_json(&tried.finally),
        }),
        Statement::While(looped) => json!({
            "kind": "While",
            "test": looped.test.to_string(),
            "body": body_json(&looped.body),
            "orelse": body_json(&looped.orelse),
        }),
        Statement::With(context) => json!({
            "kind": "With",
            "async": context.is_async,
            "items": context.items.iter().map(|(expression, target)| json!({
                "context": expression.to_string(),
                "target": optional(target),
            })).collect::<Vec<_>>(),
            "body": body_json(&context.body),
        }),
        Statement::Yield(expression) => json!({
            "kind": "Yield",
            "expression": expression.to_string(),
        }),
        Statement::YieldFrom(expression) => json!({
            "kind": "YieldFrom",
            "expression": expression.to_string(),
        }),
    }
}

fn class_json(class: &Class) -> Value {
    json!({
        "kind": "Class",
        "name": class.name.to_string(),
        "bases": class.bases.iter().map(|base| base.value.to_string()).collect::<Vec<_>>(),
        "decorators": class.decorators.iter().map(Node::to_string).collect::<Vec<_>>(),
        "docstring": class.docstring,
        "body": body_json(&class.body),
    })
}

fn define_json(define: &Define) -> Value {
    json!({
        "kind": "Define",
        "name": define.name.to_string(),
        "async": define.is_async,
        "generated": define.generated,
        "parameters": define.parameters.iter().map(|parameter| json!({
            "name": parameter.value.name,
            "annotation": optional(&parameter.value.annotation),
            "default": optional(&parameter.value.value),
        })).collect::<Vec<_>>(),
        "returns": optional(&define.return_annotation),
        "decorators": define.decorators.iter().map(Node::to_string).collect::<Vec<_>>(),
        "body": body_json(&define.body),
    })
}

fn body_json(statements: &[Node<Statement>]) -> Value {
    Value::Array(
        statements
            .iter()
            .map(|statement| statement_json(&statement.value))
            .collect(),
    )
}

fn optional(expression: &Option<Node<Expression>>) -> Value {
    match expression {
        Some(expression) => json!(expression.to_string()),
        None => Value::Null,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Access;
    use crate::location::Location;
    use crate::statement::{Handler, If, ImportEntry};

    fn node<T>(value: T) -> Node<T> {
        Node::new(value, Location::default())
    }

    #[test]
    fn test_parent_qualified_assign_with_annotation() {
        let statement = node(Statement::Assign(Assign {
            target: node(Expression::name("field")),
            annotation: Some(node(Expression::name("int"))),
            value: Some(node(Expression::Integer(1))),
            parent: Some(Access::name("Parent")),
        }));
        assert_eq!(pretty_print(&statement), "Parent.field = 1 # int\n");
    }

    #[test]
    fn test_decorated_async_define() {
        let define = Define {
            name: Access::name("fetch"),
            parameters: vec![node(Parameter {
                name: "self".to_string(),
                value: None,
                annotation: None,
            })],
            body: vec![node(Statement::Return(Some(node(Expression::name("data")))))],
            decorators: vec![node(Expression::name("cached"))],
            docstring: None,
            return_annotation: Some(node(Expression::name("bytes"))),
            is_async: true,
            generated: false,
            parent: None,
        };
        assert_eq!(
            pretty_print(&node(Statement::Define(Box::new(define)))),
            "@cached\nasync def fetch(self) -> bytes:\n  return data\n"
        );
    }

    #[test]
    fn test_try_layout() {
        let tried = Try {
            body: vec![node(Statement::Pass)],
            handlers: vec![Handler {
                kind: Some(node(Expression::name("KeyError"))),
                name: Some("e".to_string()),
                body: vec![node(Statement::Pass)],
            }],
            orelse: vec![node(Statement::Pass)],
            finally: vec![node(Statement::Pass)],
        };
        assert_eq!(
            pretty_print(&node(Statement::Try(tried))),
            "try:\n  pass\nexcept KeyError as e:\n  pass\nelse:\n  pass\nfinally:\n  pass\n"
        );
    }

    #[test]
    fn test_import_forms() {
        let from_import = node(Statement::Import(Import {
            from: Some(Access::name("collections")),
            imports: vec![
                ImportEntry {
                    name: Access::name("OrderedDict"),
                    alias: Some(Access::name("odict")),
                },
                ImportEntry {
                    name: Access::name("defaultdict"),
                    alias: None,
                },
            ],
        }));
        assert_eq!(
            pretty_print(&from_import),
            "from collections import OrderedDict as odict, defaultdict\n"
        );

        let plain = node(Statement::Import(Import {
            from: None,
            imports: vec![ImportEntry {
                name: Access::name("os.path"),
                alias: None,
            }],
        }));
        assert_eq!(pretty_print(&plain), "import os.path\n");
    }

    #[test]
    fn test_nested_indentation() {
        let statement = node(Statement::If(If {
            test: node(Expression::name("flag")),
            body: vec![node(Statement::If(If {
                test: node(Expression::name("inner")),
                body: vec![node(Statement::Pass)],
                orelse: vec![],
            }))],
            orelse: vec![node(Statement::Break)],
        }));
        assert_eq!(
            pretty_print(&statement),
            "if flag:\n  if inner:\n    pass\nelse:\n  break\n"
        );
    }

    #[test]
    fn test_empty_block_renders_ellipsis() {
        let class = Class {
            name: Access::name("Empty"),
            bases: vec![],
            body: vec![],
            decorators: vec![],
            docstring: None,
        };
        assert_eq!(
            pretty_print(&node(Statement::Class(Box::new(class)))),
            "class Empty:\n  ...\n"
        );
    }

    #[test]
    fn test_to_json_shape() {
        let statement = node(Statement::Assign(Assign {
            target: node(Expression::name("x")),
            annotation: Some(node(Expression::name("int"))),
            value: None,
            parent: None,
        }));
        let value = to_json(&statement);
        assert_eq!(value["kind"], "Assign");
        assert_eq!(value["annotation"], "int");
        assert!(value["value"].is_null());
    }
}
