// Plume AST Library
// Syntax tree, visitor seam and pretty-printer for the Plume language

pub mod ast;
pub mod error;
pub mod gallery;
pub mod printer;
pub mod visitor;

pub use ast::*;
pub use error::*;
pub use printer::{pretty_print, PrettyPrinter, DEFAULT_INDENT_WIDTH};
pub use visitor::{Visitor, VisitorResult};

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
