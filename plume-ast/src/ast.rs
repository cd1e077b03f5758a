// Plume AST Definitions
// Closed node family shared by the evaluator and the pretty-printer

use crate::error::{AstError, Result};
use std::rc::Rc;
use std::str::FromStr;

/// A node of the syntax tree.
///
/// Nodes own their children exclusively. Function bodies are reference counted
/// so the evaluator can hand a function out as a runtime value without copying
/// or mutating the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(i64),
    Function(Rc<Function>),
    FunctionDefinition(FunctionDefinition),
    Conditional(Conditional),
    Print(Print),
    Read(Read),
    FunctionCall(FunctionCall),
    Reference(Reference),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
}

/// Function value: parameter names plus body statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    pub args: Vec<String>,
    pub body: Vec<Node>,
}

/// Binds `function` under `name` in the evaluating scope
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub function: Rc<Function>,
}

/// `if` with an optional `else` branch
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Box<Node>,
    pub if_true: Vec<Node>,
    pub if_false: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub fun_expr: Box<Node>,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub lhs: Box<Node>,
    pub operator: BinaryOperator,
    pub rhs: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Arithmetic operators
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %

    // Comparison operators
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=

    // Logical operators (both operands are always evaluated)
    LogicalAnd, // &&
    LogicalOr,  // ||
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    pub operator: UnaryOperator,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,      // -
    LogicalNot, // !
}

impl Function {
    pub fn new<S: Into<String>>(args: impl IntoIterator<Item = S>, body: Vec<Node>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            body,
        }
    }

    /// A function taking no parameters
    pub fn nullary(body: Vec<Node>) -> Self {
        Self {
            args: Vec::new(),
            body,
        }
    }
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    pub fn function(function: Function) -> Self {
        Node::Function(Rc::new(function))
    }

    pub fn function_definition(name: impl Into<String>, function: Function) -> Self {
        Node::FunctionDefinition(FunctionDefinition {
            name: name.into(),
            function: Rc::new(function),
        })
    }

    /// Build a conditional. `None` and an empty `else` branch behave the same
    /// at runtime; both are rendered without an `else` clause.
    pub fn conditional(condition: Node, if_true: Vec<Node>, if_false: Option<Vec<Node>>) -> Self {
        Node::Conditional(Conditional {
            condition: Box::new(condition),
            if_true,
            if_false,
        })
    }

    pub fn print(expr: Node) -> Self {
        Node::Print(Print {
            expr: Box::new(expr),
        })
    }

    pub fn read(name: impl Into<String>) -> Self {
        Node::Read(Read { name: name.into() })
    }

    pub fn call(fun_expr: Node, args: Vec<Node>) -> Self {
        Node::FunctionCall(FunctionCall {
            fun_expr: Box::new(fun_expr),
            args,
        })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Node::Reference(Reference { name: name.into() })
    }

    /// Build a binary operation from its source token.
    ///
    /// Unknown tokens are rejected here, so a malformed tree never reaches
    /// evaluation.
    pub fn binary(lhs: Node, operator: &str, rhs: Node) -> Result<Self> {
        Ok(Self::binary_op(lhs, operator.parse()?, rhs))
    }

    pub fn binary_op(lhs: Node, operator: BinaryOperator, rhs: Node) -> Self {
        Node::BinaryOperation(BinaryOperation {
            lhs: Box::new(lhs),
            operator,
            rhs: Box::new(rhs),
        })
    }

    /// Build a unary operation from its source token.
    pub fn unary(operator: &str, expr: Node) -> Result<Self> {
        Ok(Self::unary_op(operator.parse()?, expr))
    }

    pub fn unary_op(operator: UnaryOperator, expr: Node) -> Self {
        Node::UnaryOperation(UnaryOperation {
            operator,
            expr: Box::new(expr),
        })
    }

    /// Human readable name of the node kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "Number",
            Node::Function(_) => "Function",
            Node::FunctionDefinition(_) => "FunctionDefinition",
            Node::Conditional(_) => "Conditional",
            Node::Print(_) => "Print",
            Node::Read(_) => "Read",
            Node::FunctionCall(_) => "FunctionCall",
            Node::Reference(_) => "Reference",
            Node::BinaryOperation(_) => "BinaryOperation",
            Node::UnaryOperation(_) => "UnaryOperation",
        }
    }
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 13] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Modulo,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::Less,
        BinaryOperator::Greater,
        BinaryOperator::LessEqual,
        BinaryOperator::GreaterEqual,
        BinaryOperator::LogicalAnd,
        BinaryOperator::LogicalOr,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 2] = [UnaryOperator::Minus, UnaryOperator::LogicalNot];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::LogicalNot => "!",
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self> {
        BinaryOperator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| {
                AstError::unsupported_operator(
                    s,
                    "binary",
                    BinaryOperator::ALL.iter().map(|op| op.symbol()),
                )
            })
    }
}

impl FromStr for UnaryOperator {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self> {
        UnaryOperator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| {
                AstError::unsupported_operator(
                    s,
                    "unary",
                    UnaryOperator::ALL.iter().map(|op| op.symbol()),
                )
            })
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
