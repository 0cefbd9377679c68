//! Source positions and the located-node wrapper every AST value lives in.
//!
//! Lines are 1-indexed and columns 0-indexed, matching the parser's
//! conventions.  The file path is shared (`Arc<str>`) so cloning a subtree
//! during desugaring does not duplicate path storage.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// ── Position / Location ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Location {
    pub path: Option<Arc<str>>,
    pub start: Position,
    pub stop: Position,
}

impl Location {
    pub fn new(path: Option<Arc<str>>, start: Position, stop: Position) -> Self {
        Self { path, start, stop }
    }

    /// A location covering a single point, used for nodes synthesized at the
    /// position of an existing construct.
    pub fn at(path: Option<Arc<str>>, position: Position) -> Self {
        Self {
            path,
            start: position,
            stop: position,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}:{}", self.start),
            None => write!(f, "{}", self.start),
        }
    }
}

// ── Node ─────────────────────────────────────────────────────────────────────

/// An AST value together with its source location.
///
/// Equality and hashing deliberately ignore the location: a declaration in a
/// stub file must compare equal to the matching declaration in the source
/// file, and synthesized nodes must compare equal to hand-built expectations
/// regardless of which construct induced them.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub location: Location,
    pub value: T,
}

impl<T> Node<T> {
    pub fn new(value: T, location: Location) -> Self {
        Self { location, value }
    }

    /// Replace the payload, keeping the location.  This is how synthesized
    /// nodes inherit the location of the construct that induced them.
    pub fn replace<U>(&self, value: U) -> Node<U> {
        Node {
            location: self.location.clone(),
            value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Node<U> {
        Node {
            location: self.location,
            value: f(self.value),
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
