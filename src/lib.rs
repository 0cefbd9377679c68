//! Statement-level AST services for Python static type analysis.
//!
//! This crate owns the representation of program structure above the
//! expression level and the derived information the type checker asks of
//! it: class attribute tables, constructor-installed implicit attributes,
//! property and decorator recognition, stub-file merging, and the
//! desugaring preambles that expose the protocol calls behind `for`,
//! `with`, and `try`.
//!
//! Everything here is pure and in-memory: the parser produces located
//! [`statement::Statement`] nodes, derivations build new nodes without
//! mutating their inputs, and all tables preserve source order so output
//! is deterministic.

pub mod attribute;
pub mod classes;
pub mod define;
pub mod expression;
pub mod location;
pub mod preamble;
pub mod printer;
pub mod recognized;
pub mod statement;

pub use attribute::{Attribute, AttributeMap, AttributeName};
pub use expression::{Access, Argument, Expression, Segment};
pub use location::{Location, Node, Position};
pub use printer::{pretty_print, pretty_print_module, to_json};
pub use recognized::RecognizedNames;
pub use statement::{
    assume, extract_docstring, terminates, Assert, Assign, Class, Define, For, Handler, If,
    Import, ImportEntry, Parameter, Statement, Stub, Try, While, With,
};
