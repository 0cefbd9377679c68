use augur::{
    Access, Assign, Class, Define, Expression, Location, Node, Parameter, RecognizedNames,
    Statement,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

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

fn method(name: &str, body: Vec<Node<Statement>>) -> Node<Statement> {
    node(Statement::Define(Box::new(Define {
        name: Access::name(name),
        parameters: vec![parameter("self", None), parameter("value", Some("int"))],
        body,
        decorators: Vec::new(),
        docstring: None,
        return_annotation: Some(node(Expression::name("int"))),
        is_async: false,
        generated: false,
        parent: Some(Access::name("Synthetic")),
    })))
}

/// Build a class with a field-heavy constructor and a spread of methods so
/// every aggregation layer gets exercised.
fn make_class(fields: usize, methods: usize) -> Class {
    let constructor_body = (0..fields)
        .map(|index| {
            node(Statement::Assign(Assign {
                target: node(Expression::name(&format!("self.field_{index}"))),
                annotation: Some(node(Expression::name("int"))),
                value: Some(node(Expression::name("value"))),
                parent: None,
            }))
        })
        .collect();

    let mut body = vec![method("__init__", constructor_body)];
    for index in 0..methods {
        body.push(method(
            &format!("method_{index}"),
            vec![node(Statement::Return(Some(node(Expression::name(
                "self.value",
            )))))],
        ));
    }
    Class {
        name: Access::name("Synthetic"),
        bases: Vec::new(),
        body,
        decorators: Vec::new(),
        docstring: None,
    }
}

fn bench_attributes(c: &mut Criterion) {
    let recognized = RecognizedNames::default();
    let small = make_class(8, 8);
    let large = make_class(64, 64);

    c.bench_function("attributes_small", |b| {
        b.iter(|| black_box(&small).attributes(&recognized, false, true))
    });
    c.bench_function("attributes_large", |b| {
        b.iter(|| black_box(&large).attributes(&recognized, false, true))
    });
    c.bench_function("pretty_print_large", |b| {
        let statement = node(Statement::Class(Box::new(make_class(64, 64))));
        b.iter(|| augur::pretty_print(black_box(&statement)))
    });
}

criterion_group!(benches, bench_attributes);
criterion_main!(benches);
