//! Surface-to-core rewrites for compound statements.
//!
//! Each compound construct implicitly invokes protocol methods: iteration
//! goes through `__iter__`/`__next__`, context managers through
//! `__enter__`, exception handlers bind a name at a type.  The preamble of
//! a construct is a short statement list making those calls explicit; the
//! type checker prepends it to the body when analyzing the construct.
//! Synthesized nodes inherit the location of the expression that induced
//! them.

use crate::expression::{to_access_chain, Access, Expression};
use crate::location::Node;
use crate::statement::{Assign, For, Statement, Try, With};

impl For {
    /// `for target in iter:` binds `target` to `iter.__iter__().__next__()`;
    /// the async form dispatches to `__aiter__`/`__anext__`.  A non-access
    /// iterator is lifted into chain position first.
    pub fn preamble(&self) -> Node<Statement> {
        let (iter_method, next_method) = if self.is_async {
            ("__aiter__", "__anext__")
        } else {
            ("__iter__", "__next__")
        };
        let chain = to_access_chain(&self.iterator)
            .with_call(iter_method)
            .with_call(next_method);
        let value = self.iterator.replace(Expression::Access(chain));
        self.target.replace(Statement::Assign(Assign {
            target: self.target.clone(),
            annotation: None,
            value: Some(value),
            parent: None,
        }))
    }
}

impl With {
    /// One statement per item: `target = expr.__enter__()` (awaited
    /// `__aenter__` when async), or the bare context expression when there
    /// is no target, so it is still type-checked.
    pub fn preamble(&self) -> Vec<Node<Statement>> {
        self.items
            .iter()
            .map(|(expression, target)| match target {
                Some(target) => {
                    let method = if self.is_async { "__aenter__" } else { "__enter__" };
                    let call = expression
                        .replace(Expression::Access(to_access_chain(expression).with_call(method)));
                    let value = if self.is_async {
                        expression.replace(Expression::Await(Box::new(call)))
                    } else {
                        call
                    };
                    expression.replace(Statement::Assign(Assign {
                        target: target.clone(),
                        annotation: None,
                        value: Some(value),
                        parent: None,
                    }))
                }
                None => expression.replace(Statement::Expression(expression.clone())),
            })
            .collect()
    }
}

impl Try {
    /// One statement per handler: `name: kind` for a plain kind,
    /// `name: typing.Union[…]` for a tuple of kinds, the bare kind
    /// expression when no name is bound, nothing for a bare `except:`.
    pub fn preamble(&self) -> Vec<Node<Statement>> {
        self.handlers
            .iter()
            .filter_map(|handler| {
                let kind = handler.kind.as_ref()?;
                match &handler.name {
                    Some(name) => {
                        let annotation = match kind.value.as_tuple() {
                            Some(elements) => kind.replace(Expression::Access(
                                Access::subscripted("typing.Union", elements.to_vec()),
                            )),
                            None => kind.clone(),
                        };
                        Some(kind.replace(Statement::Assign(Assign {
                            target: kind.replace(Expression::name(name)),
                            annotation: Some(annotation),
                            value: None,
                            parent: None,
                        })))
                    }
                    None => Some(kind.replace(Statement::Expression(kind.clone()))),
                }
            })
            .collect()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
