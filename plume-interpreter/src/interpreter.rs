//! Interpreter driver owning a console and a top-level scope.

use crate::console::{Console, StdConsole};
use crate::error::Result;
use crate::evaluator;
use crate::scope::Scope;
use crate::value::Value;
use plume_ast::Node;

/// Evaluates Plume programs against a persistent top-level scope
#[derive(Debug)]
pub struct Interpreter<C: Console> {
    /// Top-level bindings; persist across calls to `evaluate` and `run`
    globals: Scope<'static>,
    /// Channel used by `read` and `print`
    console: C,
}

impl Interpreter<StdConsole> {
    /// Create an interpreter wired to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(StdConsole::stdio())
    }
}

impl<C: Console> Interpreter<C> {
    /// Create an interpreter with an empty top-level scope
    pub fn new(console: C) -> Self {
        Self {
            globals: Scope::new(),
            console,
        }
    }

    /// Cap nested calls at `max_depth`. Top-level bindings are dropped.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.globals = Scope::with_max_depth(max_depth);
        self
    }

    /// Evaluate one node in the top-level scope
    pub fn evaluate(&mut self, node: &Node) -> Result<Option<Value>> {
        evaluator::evaluate(node, &mut self.globals, &mut self.console)
    }

    /// Execute a statement sequence in the top-level scope, yielding the last
    /// result. The first failing statement aborts the rest.
    pub fn run(&mut self, statements: &[Node]) -> Result<Option<Value>> {
        tracing::debug!(statements = statements.len(), "run program");
        evaluator::execute(statements, &mut self.globals, &mut self.console)
    }

    /// The top-level scope
    pub fn globals(&self) -> &Scope<'static> {
        &self.globals
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Drop every top-level binding, keeping the call limit
    pub fn reset(&mut self) {
        self.globals = Scope::with_max_depth(self.globals.max_depth());
    }

    pub fn into_console(self) -> C {
        self.console
    }
}
