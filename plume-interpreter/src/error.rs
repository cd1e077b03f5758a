//! Runtime error types for the Plume interpreter.
//!
//! Every failure aborts the statement sequence it occurs in and propagates
//! straight to the caller of `evaluate`; nothing is recovered internally.

use miette::Diagnostic;
use thiserror::Error;

/// Runtime errors that can occur during evaluation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Name not found: {name}")]
    #[diagnostic(
        code(plume::runtime::name_not_found),
        help("Define `{name}` with `def` or `read` before referring to it")
    )]
    NameNotFound { name: String },

    #[error("Value is not callable: found {found}")]
    #[diagnostic(
        code(plume::runtime::not_callable),
        help("Only functions can be called")
    )]
    NotCallable { found: String },

    #[error("Division by zero in `{operator}`")]
    #[diagnostic(
        code(plume::runtime::division_by_zero),
        help("Ensure the divisor is not zero before dividing")
    )]
    DivisionByZero { operator: &'static str },

    #[error("Type error: expected {expected}, found {found}")]
    #[diagnostic(
        code(plume::runtime::type_mismatch),
        help("Operators, conditions and `print` only work on numbers")
    )]
    TypeMismatch { expected: String, found: String },

    #[error("Integer overflow in `{operation}`")]
    #[diagnostic(
        code(plume::runtime::integer_overflow),
        help("Numbers are 64-bit signed integers")
    )]
    IntegerOverflow { operation: &'static str },

    #[error("Stack overflow: maximum call depth of {max_depth} exceeded")]
    #[diagnostic(
        code(plume::runtime::stack_overflow),
        help("Check that every recursive function has a reachable base case")
    )]
    StackOverflow { max_depth: usize },

    #[error("Invalid input for `read {name}`: {line:?} is not an integer")]
    #[diagnostic(
        code(plume::runtime::parse_error),
        help("Each line read must hold a single base-10 integer")
    )]
    ParseError { name: String, line: String },

    #[error("End of input while evaluating `read {name}`")]
    #[diagnostic(
        code(plume::runtime::end_of_input),
        help("Supply one input line per `read`")
    )]
    EndOfInput { name: String },

    #[error("Console error: {message}")]
    #[diagnostic(code(plume::runtime::io))]
    Io { message: String },
}

impl RuntimeError {
    /// Create a name-not-found error
    pub fn name_not_found(name: &str) -> Self {
        Self::NameNotFound {
            name: name.to_string(),
        }
    }

    /// Create a not-callable error
    pub fn not_callable(found: &str) -> Self {
        Self::NotCallable {
            found: found.to_string(),
        }
    }

    /// Create a division by zero error
    pub fn division_by_zero(operator: &'static str) -> Self {
        Self::DivisionByZero { operator }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Create an integer overflow error
    pub fn integer_overflow(operation: &'static str) -> Self {
        Self::IntegerOverflow { operation }
    }

    /// Create a stack overflow error
    pub fn stack_overflow(max_depth: usize) -> Self {
        Self::StackOverflow { max_depth }
    }

    /// Create an error for an input line that is not an integer
    pub fn parse_error(name: &str, line: &str) -> Self {
        Self::ParseError {
            name: name.to_string(),
            line: line.to_string(),
        }
    }

    /// Create an end-of-input error
    pub fn end_of_input(name: &str) -> Self {
        Self::EndOfInput {
            name: name.to_string(),
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

/// Type alias for interpreter results
pub type Result<T> = std::result::Result<T, RuntimeError>;
