//! Interpreter session for exercising Plume programs
//!
//! This module provides an interpreter session that allows:
//! - Evaluate hand-built trees against a persistent top-level scope
//! - Script the lines `read` will consume and capture what `print` writes
//! - Assert on evaluated results and printed output

use crate::console::ScriptedConsole;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::Value;
use miette::Diagnostic;
use plume_ast::Node;
use thiserror::Error;

/// Errors that can occur during session operations
#[derive(Debug, Error, Diagnostic)]
pub enum TestHarnessError {
    #[error("Evaluation error: {source}")]
    Evaluation {
        #[from]
        source: RuntimeError,
    },

    #[error("Assertion failed: expected {expected}, but got {actual}")]
    AssertionFailed { expected: String, actual: String },
}

/// REPL-like session over a scripted console
#[derive(Debug)]
pub struct InterpreterSession {
    interpreter: Interpreter<ScriptedConsole>,
}

impl InterpreterSession {
    /// Create a session with no input lines
    pub fn new() -> Self {
        Self::with_input(Vec::<String>::new())
    }

    /// Create a session whose `read` statements consume `input` in order
    pub fn with_input<S: Into<String>>(input: impl IntoIterator<Item = S>) -> Self {
        Self {
            interpreter: Interpreter::new(ScriptedConsole::new(input)),
        }
    }

    /// Cap nested calls at `max_depth`
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.interpreter = self.interpreter.with_max_depth(max_depth);
        self
    }

    /// Queue another input line
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.interpreter.console_mut().push_input(line);
    }

    /// Evaluate a node in the session's top-level scope
    pub fn evaluate(&mut self, node: &Node) -> Result<Option<Value>, RuntimeError> {
        self.interpreter.evaluate(node)
    }

    /// Execute statements in order in the session's top-level scope
    pub fn run(&mut self, statements: &[Node]) -> Result<Option<Value>, RuntimeError> {
        self.interpreter.run(statements)
    }

    /// Look up a top-level binding
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        self.interpreter.globals().get(name)
    }

    /// Lines printed so far
    pub fn output(&self) -> &[String] {
        self.interpreter.console().output()
    }

    /// Take the lines printed so far
    pub fn take_output(&mut self) -> Vec<String> {
        self.interpreter.console_mut().take_output()
    }

    /// Assert that a node evaluates to the given integer
    pub fn assert_evaluates_to_integer(
        &mut self,
        node: &Node,
        expected: i64,
    ) -> Result<(), TestHarnessError> {
        match self.evaluate(node)? {
            Some(Value::Integer(actual)) if actual == expected => Ok(()),
            other => Err(TestHarnessError::AssertionFailed {
                expected: expected.to_string(),
                actual: describe(&other),
            }),
        }
    }

    /// Assert that a node evaluates to a function value
    pub fn assert_evaluates_to_function(&mut self, node: &Node) -> Result<(), TestHarnessError> {
        match self.evaluate(node)? {
            Some(Value::Function(_)) => Ok(()),
            other => Err(TestHarnessError::AssertionFailed {
                expected: "function".to_string(),
                actual: describe(&other),
            }),
        }
    }

    /// Assert that a node evaluates without producing a value
    pub fn assert_evaluates_to_nothing(&mut self, node: &Node) -> Result<(), TestHarnessError> {
        match self.evaluate(node)? {
            None => Ok(()),
            other => Err(TestHarnessError::AssertionFailed {
                expected: "nothing".to_string(),
                actual: describe(&other),
            }),
        }
    }

    /// Assert on (and consume) the lines printed since the last take
    pub fn assert_output(&mut self, expected: &[&str]) -> Result<(), TestHarnessError> {
        let actual = self.take_output();
        if actual == expected {
            Ok(())
        } else {
            Err(TestHarnessError::AssertionFailed {
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            })
        }
    }
}

impl Default for InterpreterSession {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(result: &Option<Value>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "nothing".to_string(),
    }
}
