//! Acceptance tests for conditionals and truthiness

use super::{bin, num, var};
use crate::error::RuntimeError;
use crate::test_harness::InterpreterSession;
use plume_ast::{Function, Node};

fn print_one_or_two(condition: Node) -> Node {
    Node::conditional(
        condition,
        vec![Node::print(num(1))],
        Some(vec![Node::print(num(2))]),
    )
}

#[test]
fn test_zero_takes_the_else_branch() {
    let mut session = InterpreterSession::new();

    session
        .assert_evaluates_to_integer(&print_one_or_two(num(0)), 2)
        .unwrap();
    session.assert_output(&["2"]).unwrap();
}

#[test]
fn test_nonzero_takes_the_true_branch() {
    let mut session = InterpreterSession::new();

    for condition in [5, -1, i64::MIN] {
        session
            .assert_evaluates_to_integer(&print_one_or_two(num(condition)), 1)
            .unwrap();
        session.assert_output(&["1"]).unwrap();
    }
}

#[test]
fn test_comparison_as_condition() {
    let mut session = InterpreterSession::new();

    session
        .run(&[print_one_or_two(bin(num(2), "==", num(3)))])
        .unwrap();
    session.assert_output(&["2"]).unwrap();
}

#[test]
fn test_missing_or_empty_branch_yields_nothing() {
    let mut session = InterpreterSession::new();

    session
        .assert_evaluates_to_nothing(&Node::conditional(num(0), vec![num(1)], None))
        .unwrap();
    session
        .assert_evaluates_to_nothing(&Node::conditional(num(0), vec![num(1)], Some(vec![])))
        .unwrap();
    session
        .assert_evaluates_to_nothing(&Node::conditional(num(1), vec![], Some(vec![num(1)])))
        .unwrap();
}

#[test]
fn test_branch_yields_its_last_statement() {
    let mut session = InterpreterSession::new();

    let conditional = Node::conditional(
        num(1),
        vec![Node::print(num(10)), num(20), num(30)],
        None,
    );
    session.assert_evaluates_to_integer(&conditional, 30).unwrap();
    session.assert_output(&["10"]).unwrap();
}

#[test]
fn test_branches_run_in_the_enclosing_scope() {
    let mut session = InterpreterSession::with_input(["3"]);

    session
        .run(&[Node::conditional(num(1), vec![Node::read("x")], None)])
        .unwrap();
    session
        .assert_evaluates_to_integer(&bin(var("x"), "*", num(2)), 6)
        .unwrap();
}

#[test]
fn test_condition_is_evaluated_once_before_the_branch() {
    let mut session = InterpreterSession::new();

    session
        .run(&[print_one_or_two(Node::print(num(0)))])
        .unwrap();
    session.assert_output(&["0", "2"]).unwrap();
}

#[test]
fn test_function_condition_is_rejected() {
    let mut session = InterpreterSession::new();

    let condition = Node::function(Function::nullary(vec![]));
    assert_eq!(
        session.evaluate(&print_one_or_two(condition)),
        Err(RuntimeError::type_mismatch("number", "function"))
    );
    session.assert_output(&[]).unwrap();
}

#[test]
fn test_absent_condition_is_rejected() {
    let mut session = InterpreterSession::new();

    let condition = Node::conditional(num(1), vec![], None);
    assert_eq!(
        session.evaluate(&print_one_or_two(condition)),
        Err(RuntimeError::type_mismatch("number", "nothing"))
    );
}
