//! Running the gallery programs end to end

use super::num;
use crate::console::ScriptedConsole;
use crate::error::RuntimeError;
use crate::test_harness::InterpreterSession;
use crate::value::Value;
use plume_ast::{gallery, Node};
use pretty_assertions::assert_eq;

fn run_gallery(name: &str, input: &[&str]) -> (Result<(), RuntimeError>, Vec<String>) {
    let program = gallery::find(name).unwrap();
    let mut session = InterpreterSession::with_input(input.iter().copied());
    let result = session.run(&program.statements()).map(|_| ());
    (result, session.take_output())
}

#[test]
fn test_factorial_run_prints_the_factorial_of_its_input() {
    let (result, output) = run_gallery("factorial-run", &["5"]);
    result.unwrap();
    assert_eq!(output, vec!["120"]);

    let (result, output) = run_gallery("factorial-run", &["0"]);
    result.unwrap();
    assert_eq!(output, vec!["1"]);
}

#[test]
fn test_arithmetic_program() {
    let (result, output) = run_gallery("arithmetic", &["5"]);
    result.unwrap();
    assert_eq!(output, vec!["13"]);
}

#[test]
fn test_factorial_program_only_defines() {
    let (result, output) = run_gallery("factorial", &[]);
    result.unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_main_reads_prints_and_falls_through_to_the_else_branch() {
    let mut session = InterpreterSession::with_input(["4"]);
    session.run(&[gallery::main()]).unwrap();

    // 2 == 3 is false, so the else branch calls the undefined `exit`
    let result = session.evaluate(&Node::call(Node::reference("main"), vec![num(7)]));
    assert_eq!(result, Err(RuntimeError::name_not_found("exit")));
    session.assert_output(&["4"]).unwrap();
}

#[test]
fn test_main_with_exit_defined() {
    let mut session = InterpreterSession::with_input(["4"]);
    let exit = Node::function_definition(
        "exit",
        plume_ast::Function::new(["code"], vec![Node::print(Node::reference("code"))]),
    );

    session.run(&[gallery::main(), exit]).unwrap();
    session
        .assert_evaluates_to_integer(&Node::call(Node::reference("main"), vec![num(7)]), -7)
        .unwrap();
    session.assert_output(&["4", "-7"]).unwrap();
}

#[test]
fn test_factorial_of_a_negative_number_hits_the_call_limit() {
    let mut session = InterpreterSession::with_input(["-1"]);

    assert_eq!(
        session.run(&gallery::factorial_run()),
        Err(RuntimeError::stack_overflow(crate::MAX_CALL_DEPTH))
    );
    session.assert_output(&[]).unwrap();
}

#[test]
fn test_run_program_uses_a_fresh_scope() {
    let mut console = ScriptedConsole::new(["4"]);

    let result = crate::run_program(&gallery::factorial_run(), &mut console).unwrap();
    assert_eq!(result, Some(Value::Integer(24)));
    assert_eq!(console.output().to_vec(), vec!["24"]);

    let mut console = ScriptedConsole::default();
    assert_eq!(
        crate::run_program(&[Node::reference("factorial")], &mut console),
        Err(RuntimeError::name_not_found("factorial"))
    );
}
