//! Acceptance tests for the Plume interpreter
//!
//! These tests build trees by hand (there is no surface parser) and run them
//! through an `InterpreterSession` with scripted input.

pub mod test_acceptance_conditionals;
pub mod test_acceptance_io;
pub mod test_gallery_programs;

use plume_ast::Node;

pub(crate) fn num(value: i64) -> Node {
    Node::number(value)
}

pub(crate) fn var(name: &str) -> Node {
    Node::reference(name)
}

pub(crate) fn bin(lhs: Node, operator: &str, rhs: Node) -> Node {
    Node::binary(lhs, operator, rhs).unwrap()
}

pub(crate) fn un(operator: &str, expr: Node) -> Node {
    Node::unary(operator, expr).unwrap()
}
