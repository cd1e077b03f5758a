//! Acceptance tests for `read`, `print` and statement sequencing

use super::{bin, num, var};
use crate::error::RuntimeError;
use crate::test_harness::InterpreterSession;
use plume_ast::Node;
use pretty_assertions::assert_eq;

#[test]
fn test_print_writes_a_line_and_passes_the_value_through() {
    let mut session = InterpreterSession::new();

    session
        .assert_evaluates_to_integer(&Node::print(num(42)), 42)
        .unwrap();
    session
        .assert_evaluates_to_integer(&bin(Node::print(num(-3)), "*", num(2)), -6)
        .unwrap();
    session.assert_output(&["42", "-3"]).unwrap();
}

#[test]
fn test_read_binds_and_yields_the_value() {
    let mut session = InterpreterSession::with_input(["12", "-17"]);

    session
        .assert_evaluates_to_integer(&Node::read("a"), 12)
        .unwrap();
    session
        .assert_evaluates_to_integer(&Node::read("b"), -17)
        .unwrap();
    session
        .assert_evaluates_to_integer(&bin(var("a"), "+", var("b")), -5)
        .unwrap();
}

#[test]
fn test_read_tolerates_surrounding_whitespace() {
    let mut session = InterpreterSession::with_input(["  42 \t"]);

    session
        .assert_evaluates_to_integer(&Node::read("x"), 42)
        .unwrap();
}

#[test]
fn test_read_overwrites_an_existing_binding() {
    let mut session = InterpreterSession::with_input(["1", "2"]);

    session.run(&[Node::read("x"), Node::read("x")]).unwrap();
    session
        .assert_evaluates_to_integer(&var("x"), 2)
        .unwrap();
}

#[test]
fn test_read_rejects_non_integers() {
    let mut session = InterpreterSession::with_input(["abc", "1.5", ""]);

    for line in ["abc", "1.5", ""] {
        assert_eq!(
            session.evaluate(&Node::read("x")),
            Err(RuntimeError::parse_error("x", line))
        );
    }
    assert_eq!(session.get("x"), Err(RuntimeError::name_not_found("x")));
}

#[test]
fn test_read_at_end_of_input() {
    let mut session = InterpreterSession::new();

    assert_eq!(
        session.evaluate(&Node::read("x")),
        Err(RuntimeError::end_of_input("x"))
    );
}

#[test]
fn test_reference_to_unbound_name() {
    let mut session = InterpreterSession::new();

    assert_eq!(
        session.evaluate(&var("nope")),
        Err(RuntimeError::name_not_found("nope"))
    );
}

#[test]
fn test_failing_statement_aborts_the_sequence() {
    let mut session = InterpreterSession::new();

    let result = session.run(&[
        Node::print(num(1)),
        var("missing"),
        Node::print(num(2)),
    ]);
    assert_eq!(result, Err(RuntimeError::name_not_found("missing")));
    session.assert_output(&["1"]).unwrap();
}

#[test]
fn test_sequence_yields_last_statement() {
    let mut session = InterpreterSession::new();

    assert_eq!(
        session.run(&[num(1), num(2), num(3)]).unwrap(),
        Some(crate::value::Value::Integer(3))
    );
    assert_eq!(session.run(&[]).unwrap(), None);
}
