//! The record describing a discovered class attribute, and the key type
//! attribute tables are indexed by.

use crate::expression::Expression;
use crate::location::Node;
use crate::statement::Define;
use indexmap::IndexMap;
use std::fmt;

/// Attribute-map key: the single identifier an attribute is reachable under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeName(String);

impl AttributeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discovered attribute.
///
/// `primitive` marks attributes arising from direct assignment, as opposed
/// to attributes synthesized from properties, methods, or nested classes.
/// `defines` accumulates overload signatures when several `Define`s share a
/// name; their bodies are cleared before storage and downstream must not
/// expect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub target: Node<Expression>,
    pub annotation: Option<Node<Expression>>,
    pub defines: Option<Vec<Define>>,
    pub value: Option<Node<Expression>>,
    pub is_async: bool,
    pub setter: bool,
    pub primitive: bool,
}

impl Attribute {
    /// A bare attribute for `target` with everything else absent or false.
    pub fn new(target: Node<Expression>) -> Self {
        Self {
            target,
            annotation: None,
            defines: None,
            value: None,
            is_async: false,
            setter: false,
            primitive: false,
        }
    }
}

/// Attribute tables preserve source order: entries iterate in the order they
/// were discovered, never in hash order.
pub type AttributeMap = IndexMap<AttributeName, Node<Attribute>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn test_attribute_name_display() {
        assert_eq!(AttributeName::from("field").to_string(), "field");
    }

    #[test]
    fn test_new_attribute_defaults() {
        let attribute = Attribute::new(Node::new(Expression::name("x"), Location::default()));
        assert!(attribute.annotation.is_none());
        assert!(attribute.defines.is_none());
        assert!(!attribute.primitive);
        assert!(!attribute.setter);
    }
}
