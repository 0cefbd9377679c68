//! The statement level of the AST.
//!
//! Statements are mutually recursive with expressions through [`Node`]: a
//! class body holds statements, a `Define` body holds statements, and so on
//! down.  The recursion is closed: `Statement` is a single tagged enum with
//! boxed large payloads, never parameterized over itself.  All values are
//! immutable once the parser has produced them; every derivation in this
//! crate builds new nodes instead of editing in place.

use crate::expression::{Access, Argument, Expression};
use crate::location::Node;

// ── Payload records ───────────────────────────────────────────────────────────

/// `target = value`, `target: annotation = value`, or the annotation-only
/// `target: annotation`.  `parent` names the enclosing class when this is a
/// class-body assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    pub target: Node<Expression>,
    pub annotation: Option<Node<Expression>>,
    pub value: Option<Node<Expression>>,
    pub parent: Option<Access>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assert {
    pub test: Node<Expression>,
    pub message: Option<Node<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: Access,
    pub bases: Vec<Argument>,
    pub body: Vec<Node<Statement>>,
    pub decorators: Vec<Node<Expression>>,
    pub docstring: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name as written, including any `*`/`**` prefix.
    pub name: String,
    /// Default value, if any.
    pub value: Option<Node<Expression>>,
    pub annotation: Option<Node<Expression>>,
}

/// A function or method definition.
///
/// Methods keep their single-segment name relative to the class named by
/// `parent`.  `generated` marks defines synthesized by this crate (default
/// constructors); the parser never sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: Access,
    pub parameters: Vec<Node<Parameter>>,
    pub body: Vec<Node<Statement>>,
    pub decorators: Vec<Node<Expression>>,
    pub docstring: Option<String>,
    pub return_annotation: Option<Node<Expression>>,
    pub is_async: bool,
    pub generated: bool,
    pub parent: Option<Access>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct For {
    pub target: Node<Expression>,
    pub iterator: Node<Expression>,
    pub body: Vec<Node<Statement>>,
    pub orelse: Vec<Node<Statement>>,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub test: Node<Expression>,
    pub body: Vec<Node<Statement>>,
    pub orelse: Vec<Node<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    pub test: Node<Expression>,
    pub body: Vec<Node<Statement>>,
    pub orelse: Vec<Node<Statement>>,
}

/// `with a() as x, b():` holds one `(context, target)` pair per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct With {
    pub items: Vec<(Node<Expression>, Option<Node<Expression>>)>,
    pub body: Vec<Node<Statement>>,
    pub is_async: bool,
}

/// One `except` clause: `except kind as name:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub kind: Option<Node<Expression>>,
    pub name: Option<String>,
    pub body: Vec<Node<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Try {
    pub body: Vec<Node<Statement>>,
    pub handlers: Vec<Handler>,
    pub orelse: Vec<Node<Statement>>,
    pub finally: Vec<Node<Statement>>,
}

/// For `from x import y as z`: `name = y`, `alias = Some(z)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub name: Access,
    pub alias: Option<Access>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub from: Option<Access>,
    pub imports: Vec<ImportEntry>,
}

// ── Statement ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign(Assign),
    Assert(Assert),
    Break,
    Class(Box<Class>),
    Continue,
    Define(Box<Define>),
    Delete(Node<Expression>),
    Expression(Node<Expression>),
    For(For),
    Global(Vec<String>),
    If(If),
    Import(Import),
    Nonlocal(Vec<String>),
    Pass,
    Raise(Option<Node<Expression>>),
    Return(Option<Node<Expression>>),
    Stub(Stub),
    Try(Try),
    While(While),
    With(With),
    Yield(Node<Expression>),
    YieldFrom(Node<Expression>),
}

/// A declaration without implementation, carried in from `.pyi`-style side
/// files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stub {
    Assign(Assign),
    Class(Box<Class>),
    Define(Box<Define>),
}

impl Statement {
    /// The assignment this statement declares, seeing through stub forms.
    pub fn as_assign(&self) -> Option<&Assign> {
        match self {
            Self::Assign(assign) | Self::Stub(Stub::Assign(assign)) => Some(assign),
            _ => None,
        }
    }

    /// The define this statement declares, seeing through stub forms.
    pub fn as_define(&self) -> Option<&Define> {
        match self {
            Self::Define(define) | Self::Stub(Stub::Define(define)) => Some(define),
            _ => None,
        }
    }

    /// The class this statement declares, seeing through stub forms.
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) | Self::Stub(Stub::Class(class)) => Some(class),
            _ => None,
        }
    }
}

// ── Termination analysis ──────────────────────────────────────────────────────

/// Shallow, conservative termination check: does the top-level statement
/// list leave the enclosing block?  Deliberately does not recurse into
/// nested blocks; a `return` inside both branches of an `if` is not seen.
/// Callers use this as a hint where under-approximation is safe.
pub fn terminates(body: &[Node<Statement>]) -> bool {
    body.iter().any(|statement| {
        matches!(
            statement.value,
            Statement::Return(_) | Statement::Raise(_) | Statement::Continue
        )
    })
}

// ── Assume ────────────────────────────────────────────────────────────────────

/// Wrap a test expression into an `assert` with no message, placed at the
/// test's own location.  Flow-sensitive refinement injects these to record
/// facts learned from branch conditions.
pub fn assume(test: Node<Expression>) -> Node<Statement> {
    let location = test.location.clone();
    Node::new(
        Statement::Assert(Assert {
            test,
            message: None,
        }),
        location,
    )
}

// ── Docstrings ────────────────────────────────────────────────────────────────

/// The docstring of a statement list: a leading string-expression statement,
/// with lines 2+ unindented by their minimum common indent.
pub fn extract_docstring(statements: &[Node<Statement>]) -> Option<String> {
    let first = statements.first()?;
    let Statement::Expression(expression) = &first.value else {
        return None;
    };
    expression.value.as_string().map(unindent)
}

fn unindent(text: &str) -> String {
    let mut lines = text.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };
    let rest: Vec<&str> = lines.collect();
    let indent = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let mut result = first.to_string();
    for line in rest {
        result.push('\n');
        if line.len() >= indent {
            result.push_str(&line[indent..]);
        } else {
            result.push_str(line.trim_start());
        }
    }
    result
}

// ── Tests ────────────────────────────────────────────────────────────────────
