// Plume AST Error Handling
// Construction and rendering failures with miette integration

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building a tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AstError {
    #[error("Unsupported {arity} operator: {operator}")]
    #[diagnostic(
        code(plume::ast::unsupported_operator),
        help("Supported {arity} operators are: {supported}")
    )]
    UnsupportedOperator {
        operator: String,
        arity: &'static str,
        supported: String,
    },
}

/// Errors raised while rendering a tree back to source text
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("{kind} node cannot be rendered on its own")]
    #[diagnostic(
        code(plume::render::unrenderable_node),
        help("Functions only have a textual form as part of a `def`")
    )]
    UnrenderableNode { kind: &'static str },
}

impl AstError {
    /// Create an unsupported operator error listing the accepted tokens
    pub fn unsupported_operator<'a>(
        operator: &str,
        arity: &'static str,
        supported: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnsupportedOperator {
            operator: operator.to_string(),
            arity,
            supported: supported.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

impl RenderError {
    pub fn unrenderable_node(kind: &'static str) -> Self {
        Self::UnrenderableNode { kind }
    }
}

/// Type alias for tree construction results
pub type Result<T> = std::result::Result<T, AstError>;
