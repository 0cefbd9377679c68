//! Queries and derivations on function and method definitions: decorator
//! tests, role tests, implicit-attribute extraction, and property
//! recognition.
//!
//! The one genuinely subtle piece is implicit-attribute extraction: walking
//! a constructor to discover the instance attributes it installs through
//! `self.x = …`, flattening nested control flow, inlining calls to sibling
//! methods one level deep, and unifying divergent annotations through
//! `typing.Union[…]`.

use crate::attribute::{Attribute, AttributeMap, AttributeName};
use crate::expression::{Access, Expression, Segment};
use crate::location::{Location, Node};
use crate::recognized::RecognizedNames;
use crate::statement::{Assign, Class, Define, Parameter, Statement};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// Name of the synthetic define wrapping a module's top-level statements.
pub const TOPLEVEL_NAME: &str = "$toplevel";

/// Calling one of these in a function body marks it for debug dumps.
const DUMP_MARKER: &str = "augur_dump";
const DUMP_CFG_MARKER: &str = "augur_dump_cfg";

const ABSTRACT_DECORATORS: &[&str] = &[
    "abstractmethod",
    "abc.abstractmethod",
    "abstractproperty",
    "abc.abstractproperty",
];

/// Besides `__init__`, these names act as constructors in test files:
/// unittest-style setup hooks install instance attributes the same way.
const TEST_CONSTRUCTOR_NAMES: &[&str] = &["setUp", "_setup", "_async_setup", "with_context"];

impl Define {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Wrap a module's top-level statements in the synthetic `$toplevel`
    /// define.
    pub fn create_toplevel(body: Vec<Node<Statement>>) -> Define {
        Define {
            name: Access::name(TOPLEVEL_NAME),
            parameters: Vec::new(),
            body,
            decorators: Vec::new(),
            docstring: None,
            return_annotation: None,
            is_async: false,
            generated: false,
            parent: None,
        }
    }

    /// Synthesize the default `__init__` for a class without an explicit
    /// constructor: a single `self` parameter, a `pass` body, and the class
    /// docstring carried over.
    pub fn create_generated_constructor(definition: &Class, location: &Location) -> Define {
        Define {
            name: Access::name("__init__"),
            parameters: vec![Node::new(
                Parameter {
                    name: "self".to_string(),
                    value: None,
                    annotation: None,
                },
                location.clone(),
            )],
            body: vec![Node::new(Statement::Pass, location.clone())],
            decorators: Vec::new(),
            docstring: definition.docstring.clone(),
            return_annotation: None,
            is_async: false,
            generated: true,
            parent: Some(definition.name.clone()),
        }
    }

    // ── Decorator queries ────────────────────────────────────────────────────

    /// Whether some decorator names `name` (see [`Access::names`] for the
    /// matching rule: exact identifier components, trailing calls allowed).
    pub fn has_decorator(&self, name: &str) -> bool {
        self.decorators.iter().any(|decorator| {
            decorator
                .value
                .as_access()
                .is_some_and(|access| access.names(name))
        })
    }

    pub fn is_coroutine(&self) -> bool {
        self.has_decorator("asyncio.coroutines.coroutine")
    }

    pub fn is_abstract_method(&self) -> bool {
        ABSTRACT_DECORATORS
            .iter()
            .any(|decorator| self.has_decorator(decorator))
    }

    pub fn is_overloaded_method(&self) -> bool {
        self.has_decorator("overload") || self.has_decorator("typing.overload")
    }

    pub fn is_static_method(&self) -> bool {
        self.has_decorator("staticmethod")
    }

    pub fn is_class_method(&self, recognized: &RecognizedNames) -> bool {
        recognized
            .classmethod_decorators
            .iter()
            .any(|decorator| self.has_decorator(decorator))
    }

    /// Whether this define is decorated `@<own name>.setter`.
    pub fn is_property_setter(&self) -> bool {
        match self.name.last_identifier() {
            Some(name) => self.has_decorator(&format!("{name}.setter")),
            None => false,
        }
    }

    // ── Role queries ─────────────────────────────────────────────────────────

    /// A method is a define nested in a class, retaining its single-segment
    /// name relative to that class.
    pub fn is_method(&self) -> bool {
        self.parent.is_some() && self.name.as_single_identifier().is_some()
    }

    /// Whether this define installs instance attributes: `__init__`, or one
    /// of the test-framework setup hooks when `in_test` is set.
    pub fn is_constructor(&self, in_test: bool) -> bool {
        if self.parent.is_none() {
            return false;
        }
        match self.name.as_single_identifier() {
            Some("__init__") => true,
            Some(name) => in_test && TEST_CONSTRUCTOR_NAMES.contains(&name),
            None => false,
        }
    }

    pub fn is_toplevel(&self) -> bool {
        self.name.as_single_identifier() == Some(TOPLEVEL_NAME)
    }

    pub fn is_untyped(&self) -> bool {
        self.return_annotation.is_none()
    }

    pub fn is_generated_constructor(&self) -> bool {
        self.generated
    }

    /// Whether the body calls the debug-dump marker at its top level.
    pub fn dump(&self) -> bool {
        self.has_dump_marker(DUMP_MARKER)
    }

    /// Whether the body calls the control-flow-graph dump marker.
    pub fn dump_cfg(&self) -> bool {
        self.has_dump_marker(DUMP_CFG_MARKER)
    }

    fn has_dump_marker(&self, marker: &str) -> bool {
        self.body.iter().any(|statement| match &statement.value {
            Statement::Expression(expression) => {
                expression.value.as_access().is_some_and(|access| {
                    matches!(
                        access.segments(),
                        [Segment::Identifier(name), Segment::Call(_)] if name == marker
                    )
                })
            }
            _ => false,
        })
    }

    // ── Implicit attributes ──────────────────────────────────────────────────

    /// The instance attributes this constructor installs through
    /// `self.x = …`, keyed by field name.
    ///
    /// Nested control flow is flattened (both branches of conditionals and
    /// loops, try body/orelse/finally, with bodies), and a top-level call to
    /// a sibling method defined in `definition`'s body is inlined one level
    /// deep, which catches the common "delegate to `self._init_fields()`"
    /// idiom.  When the same field is assigned under different annotations,
    /// the annotations unify into `typing.Union[…]`.
    pub fn implicit_attributes(&self, definition: &Class) -> AttributeMap {
        group_attribute_occurrences(self.implicit_attribute_occurrences(definition))
    }

    /// The raw, ungrouped attribute occurrences of this constructor, in
    /// traversal order.  Class-level aggregation concatenates the
    /// occurrences of every constructor before unifying, so annotations
    /// diverging *across* constructors still union.
    pub(crate) fn implicit_attribute_occurrences<'a>(
        &'a self,
        definition: &'a Class,
    ) -> Vec<(AttributeName, Node<Attribute>)> {
        let receiver = self
            .parameters
            .first()
            .map(|parameter| parameter.value.name.trim_start_matches('*'))
            .unwrap_or("self");

        let parameter_annotations: HashMap<&str, &Node<Expression>> = self
            .parameters
            .iter()
            .filter_map(|parameter| {
                parameter
                    .value
                    .annotation
                    .as_ref()
                    .map(|annotation| (parameter.value.name.trim_start_matches('*'), annotation))
            })
            .collect();

        let siblings: HashMap<&str, &Define> = definition
            .body
            .iter()
            .filter_map(|statement| statement.value.as_define())
            .filter_map(|define| {
                define
                    .name
                    .as_single_identifier()
                    .map(|name| (name, define))
            })
            .collect();

        let mut expanded = Vec::new();
        expand_body(&self.body, receiver, &siblings, &mut expanded);

        let mut occurrences = Vec::new();
        for statement in expanded {
            let Statement::Assign(assign) = &statement.value else {
                continue;
            };
            collect_assign_occurrences(assign, receiver, &parameter_annotations, &mut occurrences);
        }
        occurrences
    }

    // ── Property recognition ─────────────────────────────────────────────────

    /// The attribute a `@property`-style decorator on this define exposes,
    /// if any: class-level properties wrap the return annotation in
    /// `typing.ClassVar[…]`, instance properties use it directly, and
    /// `@<name>.setter` defines take the annotation of their second
    /// parameter.
    pub fn property_attribute(
        &self,
        location: &Location,
        recognized: &RecognizedNames,
    ) -> Option<Node<Attribute>> {
        let name = self.name.last_identifier()?;

        let decorated_from = |set: &HashSet<String>| {
            self.decorators.iter().any(|decorator| {
                decorator
                    .value
                    .as_access()
                    .is_some_and(|access| set.iter().any(|candidate| access.names(candidate)))
            })
        };

        let mut attribute = Attribute::new(Node::new(Expression::name(name), location.clone()));
        attribute.is_async = self.is_async;
        if decorated_from(&recognized.class_property_decorators) {
            attribute.annotation = self.return_annotation.as_ref().map(|annotation| {
                annotation.replace(Expression::Access(Access::subscripted(
                    "typing.ClassVar",
                    vec![annotation.clone()],
                )))
            });
        } else if decorated_from(&recognized.property_decorators) {
            attribute.annotation = self.return_annotation.clone();
        } else if self.is_property_setter() && self.parameters.len() >= 2 {
            attribute.annotation = self.parameters[1].value.annotation.clone();
            attribute.setter = true;
        } else {
            return None;
        }
        Some(Node::new(attribute, location.clone()))
    }
}

// ── Constructor-body expansion ────────────────────────────────────────────────

/// Flatten `body` into the statement stream attribute discovery scans.
///
/// Compound statements contribute the statements of every branch; a
/// top-level `self.m(…)` call whose `m` is a sibling define is replaced by
/// that define's body verbatim.  The inlined body is *not* expanded again;
/// inlining is single-level, which also makes cycles impossible.
fn expand_body<'a>(
    body: &'a [Node<Statement>],
    receiver: &str,
    siblings: &HashMap<&str, &'a Define>,
    expanded: &mut Vec<&'a Node<Statement>>,
) {
    use crate::statement::{For, If, Try, While, With};

    for statement in body {
        match &statement.value {
            Statement::If(If { body, orelse, .. })
            | Statement::While(While { body, orelse, .. })
            | Statement::For(For { body, orelse, .. }) => {
                expand_body(body, receiver, siblings, expanded);
                expand_body(orelse, receiver, siblings, expanded);
            }
            Statement::With(With { body, .. }) => {
                expand_body(body, receiver, siblings, expanded);
            }
            Statement::Try(Try {
                body,
                orelse,
                finally,
                ..
            }) => {
                expand_body(body, receiver, siblings, expanded);
                expand_body(orelse, receiver, siblings, expanded);
                expand_body(finally, receiver, siblings, expanded);
            }
            Statement::Expression(expression) => {
                match sibling_call(expression, receiver, siblings) {
                    Some(callee) => expanded.extend(callee.body.iter()),
                    None => expanded.push(statement),
                }
            }
            _ => expanded.push(statement),
        }
    }
}

/// Match `receiver.method()` where `method` is a sibling define.
fn sibling_call<'a>(
    expression: &Node<Expression>,
    receiver: &str,
    siblings: &HashMap<&str, &'a Define>,
) -> Option<&'a Define> {
    match expression.value.as_access()?.segments() {
        [Segment::Identifier(first), Segment::Identifier(method), Segment::Call(_)]
            if first == receiver =>
        {
            siblings.get(method.as_str()).copied()
        }
        _ => None,
    }
}

// ── Occurrence collection and unification ─────────────────────────────────────

/// Match `receiver.field`: exactly two identifier segments.
fn receiver_field<'a>(target: &'a Node<Expression>, receiver: &str) -> Option<&'a str> {
    match target.value.as_access()?.segments() {
        [Segment::Identifier(first), Segment::Identifier(field)] if first == receiver => {
            Some(field)
        }
        _ => None,
    }
}

fn collect_assign_occurrences(
    assign: &Assign,
    receiver: &str,
    parameter_annotations: &HashMap<&str, &Node<Expression>>,
    occurrences: &mut Vec<(AttributeName, Node<Attribute>)>,
) {
    match &assign.target.value {
        Expression::Tuple(targets) => {
            let values: Vec<Option<Node<Expression>>> = match assign
                .value
                .as_ref()
                .and_then(|value| value.value.as_tuple())
            {
                Some(elements) if elements.len() == targets.len() => {
                    elements.iter().map(|element| Some(element.clone())).collect()
                }
                _ => vec![None; targets.len()],
            };
            for (target, value) in targets.iter().zip(values) {
                record_occurrence(target, None, value, receiver, parameter_annotations, occurrences);
            }
        }
        _ => record_occurrence(
            &assign.target,
            assign.annotation.clone(),
            assign.value.clone(),
            receiver,
            parameter_annotations,
            occurrences,
        ),
    }
}

fn record_occurrence(
    target: &Node<Expression>,
    annotation: Option<Node<Expression>>,
    value: Option<Node<Expression>>,
    receiver: &str,
    parameter_annotations: &HashMap<&str, &Node<Expression>>,
    occurrences: &mut Vec<(AttributeName, Node<Attribute>)>,
) {
    let Some(field) = receiver_field(target, receiver) else {
        return;
    };
    // No explicit annotation: a plain `self.x = param` inherits the
    // parameter's declared annotation.
    let annotation = annotation.or_else(|| {
        value
            .as_ref()
            .and_then(|value| value.value.as_simple_name())
            .and_then(|name| parameter_annotations.get(name))
            .map(|annotation| (*annotation).clone())
    });

    let mut attribute = Attribute::new(target.replace(Expression::name(field)));
    attribute.annotation = annotation;
    attribute.value = value;
    attribute.primitive = true;
    occurrences.push((AttributeName::from(field), target.replace(attribute)));
}

/// Group occurrences by field name (traversal order) and unify each group's
/// annotations: structurally equal annotations collapse, divergent ones
/// become `typing.Union[…]` over the distinct annotations in first-seen
/// order, and a group with no annotated occurrence stays unannotated.
pub(crate) fn group_attribute_occurrences(
    occurrences: Vec<(AttributeName, Node<Attribute>)>,
) -> AttributeMap {
    let mut grouped: IndexMap<AttributeName, Vec<Node<Attribute>>> = IndexMap::new();
    for (name, attribute) in occurrences {
        grouped.entry(name).or_default().push(attribute);
    }
    grouped
        .into_iter()
        .map(|(name, group)| (name, unify_group(group)))
        .collect()
}

fn unify_group(group: Vec<Node<Attribute>>) -> Node<Attribute> {
    let distinct: Vec<Node<Expression>> = group
        .iter()
        .filter_map(|attribute| attribute.value.annotation.clone())
        .unique()
        .collect();
    let annotation = if distinct.len() <= 1 {
        distinct.into_iter().next()
    } else {
        let location = distinct[0].location.clone();
        Some(Node::new(
            Expression::Access(Access::subscripted("typing.Union", distinct)),
            location,
        ))
    };

    let mut merged = group
        .into_iter()
        .next()
        .expect("attribute groups are built from at least one occurrence");
    merged.value.annotation = annotation;
    merged
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::statement::{If, Stub};

    fn node<T>(value: T) -> Node<T> {
        Node::new(value, Location::default())
    }

    fn parameter(name: &str, annotation: Option<&str>) -> Node<Parameter> {
        node(Parameter {
            name: name.to_string(),
            value: None,
            annotation: annotation.map(|annotation| node(Expression::name(annotation))),
        })
    }

    fn method(name: &str, parameters: Vec<Node<Parameter>>, body: Vec<Node<Statement>>) -> Define {
        Define {
            name: Access::name(name),
            parameters,
            body,
            decorators: Vec::new(),
            docstring: None,
            return_annotation: None,
            is_async: false,
            generated: false,
            parent: Some(Access::name("C")),
        }
    }

    /// `self.<field> = <value>`
    fn self_assign(field: &str, value: &str) -> Node<Statement> {
        node(Statement::Assign(Assign {
            target: node(Expression::name(&format!("self.{field}"))),
            annotation: None,
            value: Some(node(Expression::name(value))),
            parent: None,
        }))
    }

    /// `self.<method>()`
    fn self_call(name: &str) -> Node<Statement> {
        let mut access = Access::name("self");
        access = access.with_call(name);
        node(Statement::Expression(node(Expression::Access(access))))
    }

    fn class_with(body: Vec<Node<Statement>>) -> Class {
        Class {
            name: Access::name("C"),
            bases: Vec::new(),
            body,
            decorators: Vec::new(),
            docstring: None,
        }
    }

    fn decorated(mut define: Define, decorators: &[&str]) -> Define {
        define.decorators = decorators
            .iter()
            .map(|name| node(Expression::name(name)))
            .collect();
        define
    }

    #[test]
    fn test_has_decorator_exact_and_called() {
        let define = decorated(method("f", vec![], vec![]), &["abc.abstractmethod"]);
        assert!(define.has_decorator("abc.abstractmethod"));
        assert!(!define.has_decorator("abstractmethod"));
        assert!(define.is_abstract_method());
    }

    #[test]
    fn test_is_property_setter() {
        let define = decorated(method("foo", vec![], vec![]), &["foo.setter"]);
        assert!(define.is_property_setter());
        let other = decorated(method("bar", vec![], vec![]), &["foo.setter"]);
        assert!(!other.is_property_setter());
    }

    #[test]
    fn test_is_method_requires_parent_and_single_segment_name() {
        assert!(method("f", vec![], vec![]).is_method());

        let mut orphan = method("f", vec![], vec![]);
        orphan.parent = None;
        assert!(!orphan.is_method());

        let mut qualified = method("f", vec![], vec![]);
        qualified.name = Access::name("C.f");
        assert!(!qualified.is_method());
    }

    #[test]
    fn test_is_constructor_names() {
        assert!(method("__init__", vec![], vec![]).is_constructor(false));
        assert!(!method("setUp", vec![], vec![]).is_constructor(false));
        assert!(method("setUp", vec![], vec![]).is_constructor(true));
        assert!(method("with_context", vec![], vec![]).is_constructor(true));

        let mut toplevel_like = method("__init__", vec![], vec![]);
        toplevel_like.parent = None;
        assert!(!toplevel_like.is_constructor(false), "requires a parent");
    }

    #[test]
    fn test_create_toplevel_roundtrip() {
        let body = vec![node(Statement::Pass)];
        let toplevel = Define::create_toplevel(body.clone());
        assert!(toplevel.is_toplevel());
        assert!(!toplevel.generated);
        assert_eq!(toplevel.body, body);
    }

    #[test]
    fn test_generated_constructor_shape() {
        let mut class = class_with(vec![]);
        class.docstring = Some("doc".to_string());
        let constructor = Define::create_generated_constructor(&class, &Location::default());
        assert!(constructor.generated);
        assert!(constructor.is_constructor(false));
        assert_eq!(constructor.docstring.as_deref(), Some("doc"));
        assert_eq!(constructor.parameters.len(), 1);
        assert_eq!(constructor.parameters[0].value.name, "self");
        // And its implicit attributes are empty: the body is a bare `pass`.
        assert!(constructor.implicit_attributes(&class).is_empty());
    }

    #[test]
    fn test_dump_marker_detection() {
        let marker = {
            let mut access = Access::name(DUMP_MARKER);
            access.0.push(Segment::Call(vec![]));
            node(Statement::Expression(node(Expression::Access(access))))
        };
        let define = method("f", vec![], vec![marker]);
        assert!(define.dump());
        assert!(!define.dump_cfg());
    }

    #[test]
    fn test_implicit_attributes_parameter_fallback() {
        let constructor = method(
            "__init__",
            vec![parameter("self", None), parameter("x", Some("int"))],
            vec![self_assign("a", "x")],
        );
        let class = class_with(vec![]);
        let attributes = constructor.implicit_attributes(&class);
        let attribute = &attributes[&AttributeName::from("a")];
        assert_eq!(
            attribute.value.annotation.as_ref().map(ToString::to_string),
            Some("int".to_string())
        );
        assert!(attribute.value.primitive);
    }

    #[test]
    fn test_implicit_attributes_expand_branches() {
        let conditional = node(Statement::If(If {
            test: node(Expression::name("flag")),
            body: vec![self_assign("a", "one")],
            orelse: vec![self_assign("b", "two")],
        }));
        let constructor = method("__init__", vec![parameter("self", None)], vec![conditional]);
        let attributes = constructor.implicit_attributes(&class_with(vec![]));
        assert!(attributes.contains_key(&AttributeName::from("a")));
        assert!(attributes.contains_key(&AttributeName::from("b")));
    }

    #[test]
    fn test_implicit_attributes_inline_sibling_once() {
        let helper = method(
            "_init_fields",
            vec![parameter("self", None)],
            vec![self_assign("inner", "value")],
        );
        let constructor = method(
            "__init__",
            vec![parameter("self", None)],
            vec![self_call("_init_fields")],
        );
        let class = class_with(vec![node(Statement::Define(Box::new(helper)))]);
        let attributes = constructor.implicit_attributes(&class);
        assert!(
            attributes.contains_key(&AttributeName::from("inner")),
            "sibling-call bodies must be inlined"
        );
    }

    #[test]
    fn test_implicit_attributes_union_of_divergent_annotations() {
        let first = node(Statement::Assign(Assign {
            target: node(Expression::name("self.x")),
            annotation: Some(node(Expression::name("int"))),
            value: None,
            parent: None,
        }));
        let second = node(Statement::Assign(Assign {
            target: node(Expression::name("self.x")),
            annotation: Some(node(Expression::name("str"))),
            value: None,
            parent: None,
        }));
        let constructor = method("__init__", vec![parameter("self", None)], vec![first, second]);
        let attributes = constructor.implicit_attributes(&class_with(vec![]));
        let annotation = attributes[&AttributeName::from("x")]
            .value
            .annotation
            .as_ref()
            .map(ToString::to_string);
        assert_eq!(annotation, Some("typing.Union[int, str]".to_string()));
    }

    #[test]
    fn test_implicit_attributes_tuple_target() {
        let assign = node(Statement::Assign(Assign {
            target: node(Expression::Tuple(vec![
                node(Expression::name("self.a")),
                node(Expression::name("self.b")),
            ])),
            annotation: None,
            value: Some(node(Expression::Tuple(vec![
                node(Expression::name("x")),
                node(Expression::name("y")),
            ]))),
            parent: None,
        }));
        let constructor = method("__init__", vec![parameter("self", None)], vec![assign]);
        let attributes = constructor.implicit_attributes(&class_with(vec![]));
        assert!(attributes.contains_key(&AttributeName::from("a")));
        assert!(attributes.contains_key(&AttributeName::from("b")));
    }

    #[test]
    fn test_property_attribute_instance_and_class_level() {
        let recognized = RecognizedNames::default();
        let location = Location::default();

        let mut getter = decorated(method("foo", vec![], vec![]), &["property"]);
        getter.return_annotation = Some(node(Expression::name("int")));
        let attribute = getter.property_attribute(&location, &recognized).unwrap();
        assert_eq!(
            attribute.value.annotation.as_ref().map(ToString::to_string),
            Some("int".to_string())
        );
        assert!(!attribute.value.setter);

        let mut class_level = decorated(method("bar", vec![], vec![]), &["classproperty"]);
        class_level.return_annotation = Some(node(Expression::name("str")));
        let attribute = class_level
            .property_attribute(&location, &recognized)
            .unwrap();
        assert_eq!(
            attribute.value.annotation.as_ref().map(ToString::to_string),
            Some("typing.ClassVar[str]".to_string())
        );
    }

    #[test]
    fn test_property_attribute_setter() {
        let recognized = RecognizedNames::default();
        let setter = decorated(
            method(
                "foo",
                vec![parameter("self", None), parameter("value", Some("str"))],
                vec![],
            ),
            &["foo.setter"],
        );
        let attribute = setter
            .property_attribute(&Location::default(), &recognized)
            .unwrap();
        assert!(attribute.value.setter);
        assert_eq!(
            attribute.value.annotation.as_ref().map(ToString::to_string),
            Some("str".to_string())
        );
    }

    #[test]
    fn test_property_attribute_plain_method_is_none() {
        let define = method("foo", vec![parameter("self", None)], vec![]);
        assert!(define
            .property_attribute(&Location::default(), &RecognizedNames::default())
            .is_none());
    }

    #[test]
    fn test_siblings_seen_through_stub_defines() {
        let helper = method(
            "_setup_fields",
            vec![parameter("self", None)],
            vec![self_assign("stubbed", "value")],
        );
        let class = class_with(vec![node(Statement::Stub(Stub::Define(Box::new(helper))))]);
        let constructor = method(
            "__init__",
            vec![parameter("self", None)],
            vec![self_call("_setup_fields")],
        );
        let attributes = constructor.implicit_attributes(&class);
        assert!(attributes.contains_key(&AttributeName::from("stubbed")));
    }
}
