//! Plume Interpreter
//!
//! Evaluates hand-built Plume syntax trees against a chained scope.
//!
//! Key points:
//! - A single integer-backed value type; 0 is false, anything else is true
//! - Functions are first-class and run in a child of the *caller's* scope
//! - `&&` and `||` always evaluate both operands
//! - `read`/`print` go through a pluggable [`Console`]
//! - Nested calls are capped (see [`MAX_CALL_DEPTH`]); exceeding the cap is an error

pub mod console;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod scope;
mod stack;
pub mod test_harness;
pub mod value;

// Include tests directory with all test modules
#[cfg(test)]
#[path = "tests/mod.rs"]
pub mod tests;

// Re-export public API
pub use console::{Console, ScriptedConsole, StdConsole, StreamConsole};
pub use error::{Result, RuntimeError};
pub use evaluator::{evaluate, execute};
pub use interpreter::Interpreter;
pub use scope::{Scope, MAX_CALL_DEPTH};
pub use test_harness::{InterpreterSession, TestHarnessError};
pub use value::Value;

/// Evaluate a program with a fresh top-level scope
pub fn run_program(
    statements: &[plume_ast::Node],
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    execute(statements, &mut Scope::new(), console)
}
