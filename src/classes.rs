//! Attribute aggregation and stub merging for class definitions.
//!
//! A class body is read five ways, each producing an attribute layer:
//! explicit class-body assignments, implicit constructor attributes,
//! property defines, callable (method) attributes, and nested classes.
//! Layers merge under a fixed precedence with explicit assignments
//! strongest, and every table preserves source order so downstream output
//! is deterministic.

use crate::attribute::{Attribute, AttributeMap, AttributeName};
use crate::define::group_attribute_occurrences;
use crate::expression::{Access, Argument, Expression};
use crate::location::Node;
use crate::recognized::RecognizedNames;
use crate::statement::{Assign, Class, Define, Statement};
use log::{debug, trace};

impl Class {
    /// The defines of the body that install instance attributes (see
    /// [`Define::is_constructor`]).
    pub fn constructors(&self, in_test: bool) -> Vec<&Define> {
        self.body
            .iter()
            .filter_map(|statement| statement.value.as_define())
            .filter(|define| define.is_constructor(in_test))
            .collect()
    }

    /// The class's attribute table.
    ///
    /// Layers are merged in increasing strength (nested classes, callables,
    /// properties, implicit constructor attributes when
    /// `include_generated_attributes` is set, explicit assignments), so on a
    /// key conflict the explicit class-body assignment wins.
    pub fn attributes(
        &self,
        recognized: &RecognizedNames,
        in_test: bool,
        include_generated_attributes: bool,
    ) -> AttributeMap {
        let mut merged = self.nested_class_attributes();
        merged = merge_layer(self.callable_attributes(), merged);
        merged = merge_layer(self.property_attributes(recognized), merged);
        if include_generated_attributes {
            merged = merge_layer(self.implicit_attributes_layer(in_test), merged);
        }
        merged = merge_layer(self.explicit_attributes(), merged);
        trace!("aggregated {} attribute(s) for {}", merged.len(), self.name);
        merged
    }

    // ── Layer 1: explicit class-body assignments ─────────────────────────────

    fn explicit_attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        for statement in &self.body {
            let Some(assign) = statement.value.as_assign() else {
                continue;
            };
            match &assign.target.value {
                Expression::Tuple(targets) => {
                    collect_tuple_targets(targets, assign, &mut attributes);
                }
                _ => {
                    let Some(name) = assign.target.value.as_simple_name() else {
                        continue;
                    };
                    let mut attribute = Attribute::new(assign.target.clone());
                    attribute.annotation = assign.annotation.clone();
                    attribute.value = assign.value.clone();
                    attribute.primitive = true;
                    insert_keeping_location(
                        &mut attributes,
                        AttributeName::from(name),
                        assign.target.replace(attribute),
                    );
                }
            }
        }
        attributes
    }

    // ── Layer 2: implicit constructor attributes ─────────────────────────────

    /// Occurrences from every constructor are concatenated in source order
    /// before unification, so a field annotated `int` in `__init__` and
    /// `str` in `setUp` comes out as `typing.Union[int, str]`.
    fn implicit_attributes_layer(&self, in_test: bool) -> AttributeMap {
        let mut occurrences = Vec::new();
        for constructor in self.constructors(in_test) {
            occurrences.extend(constructor.implicit_attribute_occurrences(self));
        }
        group_attribute_occurrences(occurrences)
    }

    // ── Layer 3: property defines ────────────────────────────────────────────

    fn property_attributes(&self, recognized: &RecognizedNames) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        for statement in &self.body {
            let Some(define) = statement.value.as_define() else {
                continue;
            };
            let Some(attribute) = define.property_attribute(&statement.location, recognized)
            else {
                continue;
            };
            let Some(name) = attribute.value.target.value.as_simple_name() else {
                continue;
            };
            let name = AttributeName::from(name);
            match attributes.get_mut(&name) {
                Some(existing) => merge_getter_setter(existing, attribute),
                None => {
                    attributes.insert(name, attribute);
                }
            }
        }
        attributes
    }

    // ── Layer 4: callable attributes ─────────────────────────────────────────

    /// One attribute per method name; overloads accumulate in `defines`.
    /// Bodies are cleared before storage.
    fn callable_attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        for statement in &self.body {
            let Some(define) = statement.value.as_define() else {
                continue;
            };
            let Some(name) = define.name.last_identifier() else {
                continue;
            };
            let mut signature = define.clone();
            signature.body = Vec::new();

            let name = AttributeName::from(name);
            match attributes.get_mut(&name) {
                Some(existing) => {
                    if let Some(defines) = &mut existing.value.defines {
                        defines.push(signature);
                    }
                }
                None => {
                    let target = Node::new(
                        Expression::name(name.as_str()),
                        statement.location.clone(),
                    );
                    let mut attribute = Attribute::new(target);
                    attribute.defines = Some(vec![signature]);
                    attributes.insert(name, Node::new(attribute, statement.location.clone()));
                }
            }
        }
        attributes
    }

    // ── Layer 5: nested classes ──────────────────────────────────────────────

    fn nested_class_attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        for statement in &self.body {
            let Some(nested) = statement.value.as_class() else {
                continue;
            };
            let Some(name) = nested.name.last_identifier() else {
                continue;
            };
            let qualified = Node::new(
                Expression::Access(nested.name.clone()),
                statement.location.clone(),
            );
            let annotation = Expression::Access(Access::subscripted(
                "typing.ClassVar",
                vec![statement.replace(Expression::Access(Access::subscripted(
                    "typing.Type",
                    vec![qualified],
                )))],
            ));

            let mut attribute =
                Attribute::new(Node::new(Expression::name(name), statement.location.clone()));
            attribute.annotation = Some(statement.replace(annotation));
            insert_keeping_location(
                &mut attributes,
                AttributeName::from(name),
                statement.replace(attribute),
            );
        }
        attributes
    }

    // ── Stub merging ─────────────────────────────────────────────────────────

    /// Merge a parallel stub class into this definition: stub annotations
    /// replace definition annotations on matching assignments, stub
    /// signatures replace parameters and return annotations on matching
    /// defines, and stub declarations nothing matched are carried over ahead
    /// of the updated body.
    pub fn update(&self, stub: &Class) -> Class {
        let mut consumed = vec![false; stub.body.len()];

        let updated: Vec<Node<Statement>> = self
            .body
            .iter()
            .map(|statement| match &statement.value {
                Statement::Assign(assign) => {
                    match find_stub_assign(&stub.body, &mut consumed, &assign.target) {
                        Some(stub_assign) => statement.replace(Statement::Assign(Assign {
                            annotation: stub_assign.annotation.clone(),
                            ..assign.clone()
                        })),
                        None => statement.clone(),
                    }
                }
                Statement::Define(define) => {
                    match find_stub_define(&stub.body, &mut consumed, define) {
                        Some(stub_define) => {
                            let mut updated = define.as_ref().clone();
                            updated.parameters = stub_define.parameters.clone();
                            updated.return_annotation = stub_define.return_annotation.clone();
                            statement.replace(Statement::Define(Box::new(updated)))
                        }
                        None => statement.clone(),
                    }
                }
                _ => statement.clone(),
            })
            .collect();

        let undefined: Vec<Node<Statement>> = stub
            .body
            .iter()
            .zip(&consumed)
            .filter(|(_, consumed)| !**consumed)
            .map(|(statement, _)| statement.clone())
            .collect();
        if !undefined.is_empty() {
            debug!(
                "carrying {} unmatched stub declaration(s) into {}",
                undefined.len(),
                self.name
            );
        }

        let mut body = undefined;
        body.extend(updated);
        Class {
            name: self.name.clone(),
            bases: self.bases.clone(),
            body,
            decorators: self.decorators.clone(),
            docstring: self.docstring.clone(),
        }
    }
}

// ── Tuple-destructuring assignments ───────────────────────────────────────────

fn collect_tuple_targets(
    targets: &[Node<Expression>],
    assign: &Assign,
    attributes: &mut AttributeMap,
) {
    let Some(value) = &assign.value else {
        return;
    };
    match &value.value {
        // Parallel form: `a, b = x, y` pairs element-wise when arities match;
        // a mismatch contributes nothing.
        Expression::Tuple(elements) => {
            if elements.len() != targets.len() {
                return;
            }
            for (target, element) in targets.iter().zip(elements) {
                insert_simple_target(target, Some(element.clone()), attributes);
            }
        }
        // Chain form: `a, b = expr` reads through `expr.__getitem__(i)`.
        Expression::Access(access) => {
            for (index, target) in targets.iter().enumerate() {
                let item = access.with_call_arguments(
                    "__getitem__",
                    vec![Argument::positional(
                        value.replace(Expression::Integer(index as i64)),
                    )],
                );
                insert_simple_target(
                    target,
                    Some(value.replace(Expression::Access(item))),
                    attributes,
                );
            }
        }
        _ => {}
    }
}

fn insert_simple_target(
    target: &Node<Expression>,
    value: Option<Node<Expression>>,
    attributes: &mut AttributeMap,
) {
    let Some(name) = target.value.as_simple_name() else {
        return;
    };
    let mut attribute = Attribute::new(target.clone());
    attribute.value = value;
    attribute.primitive = true;
    insert_keeping_location(
        attributes,
        AttributeName::from(name),
        target.replace(attribute),
    );
}

// ── Merge helpers ─────────────────────────────────────────────────────────────

/// Left-biased merge: entries of `layer` win over `accumulated`.  The final
/// table therefore iterates strongest layer first, weaker layers after, all
/// in source order.
fn merge_layer(layer: AttributeMap, accumulated: AttributeMap) -> AttributeMap {
    let mut merged = layer;
    for (name, attribute) in accumulated {
        merged.entry(name).or_insert(attribute);
    }
    merged
}

/// Within a layer later entries overwrite earlier ones, but the stored
/// location stays that of the first occurrence.
fn insert_keeping_location(
    attributes: &mut AttributeMap,
    name: AttributeName,
    attribute: Node<Attribute>,
) {
    match attributes.get_mut(&name) {
        Some(existing) => {
            existing.value = attribute.value;
        }
        None => {
            attributes.insert(name, attribute);
        }
    }
}

/// A getter and a setter for the same name collapse into one attribute:
/// `setter = true`, getter annotation kept in `annotation`, setter parameter
/// annotation moved into `value`.
fn merge_getter_setter(existing: &mut Node<Attribute>, incoming: Node<Attribute>) {
    match (existing.value.setter, incoming.value.setter) {
        (false, true) => {
            existing.value.value = incoming.value.annotation;
            existing.value.setter = true;
        }
        (true, false) => {
            existing.value.value = existing.value.annotation.take();
            existing.value.annotation = incoming.value.annotation;
        }
        _ => {
            existing.value = incoming.value;
        }
    }
}

// ── Stub lookups ──────────────────────────────────────────────────────────────

fn find_stub_assign<'a>(
    stub_body: &'a [Node<Statement>],
    consumed: &mut [bool],
    target: &Node<Expression>,
) -> Option<&'a Assign> {
    for (index, statement) in stub_body.iter().enumerate() {
        if consumed[index] {
            continue;
        }
        if let Some(assign) = statement.value.as_assign() {
            if assign.target == *target {
                consumed[index] = true;
                return Some(assign);
            }
        }
    }
    None
}

fn find_stub_define<'a>(
    stub_body: &'a [Node<Statement>],
    consumed: &mut [bool],
    define: &Define,
) -> Option<&'a Define> {
    for (index, statement) in stub_body.iter().enumerate() {
        if consumed[index] {
            continue;
        }
        if let Some(stub_define) = statement.value.as_define() {
            if stub_define.name == define.name
                && stub_define.parameters.len() == define.parameters.len()
            {
                consumed[index] = true;
                return Some(stub_define);
            }
        }
    }
    None
}

// ── Tests ────────────────────────────────────────────────────────────────────
