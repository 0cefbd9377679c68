//! The expression side of the AST, reduced to what statement-level analysis
//! actually inspects.
//!
//! Expressions reach this subsystem as opaque values; the checkers only ever
//! ask a handful of structural questions (is this an access chain, a tuple,
//! a string or integer literal), so that is the whole surface exposed here.
//! Access chains (`a.b(1).c`, `typing.Union[int, str]`) appear constantly
//! and get a small construction API of their own, used heavily by the
//! desugaring preambles and union synthesis.

use crate::location::Node;
use itertools::Itertools;
use std::fmt;

// ── Access chains ─────────────────────────────────────────────────────────────

/// One segment of an access chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A dotted name component: the `b` in `a.b`.
    Identifier(String),
    /// A call applied to the chain so far: the `(1, x=2)` in `a.b(1, x=2)`.
    Call(Vec<Argument>),
    /// A subscript applied to the chain so far: the `[int, str]` in
    /// `typing.Union[int, str]`.
    Subscript(Vec<Node<Expression>>),
    /// An arbitrary expression lifted into chain position, e.g. when a
    /// non-access iterator is rewritten to `(<expr>).__iter__()`.
    Expression(Box<Node<Expression>>),
}

/// One argument of a call segment; `name` is set for keyword arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Node<Expression>,
}

impl Argument {
    pub fn positional(value: Node<Expression>) -> Self {
        Self { name: None, value }
    }
}

/// An ordered sequence of segments representing a qualified name, call, or
/// subscript expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Access(pub Vec<Segment>);

impl Access {
    /// Build an identifier-only chain from a dotted name: `"abc.abstractmethod"`
    /// becomes two identifier segments.
    pub fn name(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .map(|part| Segment::Identifier(part.to_string()))
                .collect(),
        )
    }

    /// Build `<dotted>[<arguments>]`, e.g. `typing.Union[int, str]`.
    pub fn subscripted(dotted: &str, arguments: Vec<Node<Expression>>) -> Self {
        let mut access = Self::name(dotted);
        access.0.push(Segment::Subscript(arguments));
        access
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Extend the chain with a no-argument method call: `x` → `x.method()`.
    pub fn with_call(&self, method: &str) -> Self {
        self.with_call_arguments(method, Vec::new())
    }

    /// Extend the chain with a method call carrying arguments.
    pub fn with_call_arguments(&self, method: &str, arguments: Vec<Argument>) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Identifier(method.to_string()));
        segments.push(Segment::Call(arguments));
        Self(segments)
    }

    /// The identifier the chain ultimately names: `a.b.c` → `c`, `a.b()` → `b`.
    pub fn last_identifier(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|segment| match segment {
            Segment::Identifier(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// `Some(name)` iff the chain is exactly one identifier segment.
    pub fn as_single_identifier(&self) -> Option<&str> {
        match self.segments() {
            [Segment::Identifier(name)] => Some(name),
            _ => None,
        }
    }

    /// Whether this chain names `dotted`: the leading identifier segments
    /// must equal the dot-separated components pairwise, and any remaining
    /// segments must all be calls.  `abc.abstractmethod` matches both
    /// `@abc.abstractmethod` and `@abc.abstractmethod()`, but not
    /// `@abc.abstractmethod.register` or `@abc`.
    pub fn names(&self, dotted: &str) -> bool {
        let mut components = dotted.split('.');
        let mut segments = self.0.iter();
        loop {
            match (components.next(), segments.next()) {
                (Some(component), Some(Segment::Identifier(name))) if name == component => {}
                (None, None) => return true,
                (None, Some(Segment::Call(_))) => {
                    return segments.all(|segment| matches!(segment, Segment::Call(_)))
                }
                _ => return false,
            }
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Identifier(name) => {
                    if index > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Segment::Call(arguments) => {
                    let rendered = arguments
                        .iter()
                        .map(|argument| match &argument.name {
                            Some(name) => format!("{name}={}", argument.value),
                            None => argument.value.to_string(),
                        })
                        .join(", ");
                    write!(f, "({rendered})")?;
                }
                Segment::Subscript(arguments) => {
                    write!(f, "[{}]", arguments.iter().map(Node::to_string).join(", "))?;
                }
                Segment::Expression(expression) => {
                    if index > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{expression}")?;
                }
            }
        }
        Ok(())
    }
}

// ── Expressions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Access(Access),
    Await(Box<Node<Expression>>),
    Integer(i64),
    String(String),
    Tuple(Vec<Node<Expression>>),
}

impl Expression {
    /// An identifier-chain expression from a dotted name.
    pub fn name(dotted: &str) -> Self {
        Self::Access(Access::name(dotted))
    }

    pub fn as_access(&self) -> Option<&Access> {
        match self {
            Self::Access(access) => Some(access),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Node<Expression>]> {
        match self {
            Self::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// `Some(name)` iff the expression is an access chain of exactly one
    /// identifier segment, the form attribute-map keys take.
    pub fn as_simple_name(&self) -> Option<&str> {
        self.as_access()?.as_single_identifier()
    }
}

/// View an expression as a chain to extend: an access chain is used as-is,
/// anything else is lifted into a single expression segment.
pub fn to_access_chain(expression: &Node<Expression>) -> Access {
    match expression.value.as_access() {
        Some(access) => access.clone(),
        None => Access(vec![Segment::Expression(Box::new(expression.clone()))]),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access(access) => write!(f, "{access}"),
            Self::Await(expression) => write!(f, "await {expression}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Tuple(elements) => match elements.as_slice() {
                [single] => write!(f, "({single},)"),
                _ => write!(f, "({})", elements.iter().map(Node::to_string).join(", ")),
            },
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
