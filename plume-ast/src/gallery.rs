//! Hand-built demonstration programs
//!
//! Plume has no surface parser; these trees stand in for parsed source and
//! back the `plume` binary and the acceptance tests.

use crate::ast::{BinaryOperator, Function, Node, UnaryOperator};

/// A named program in the gallery
#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Vec<Node>,
}

impl Program {
    /// Build a fresh copy of the program's statements
    pub fn statements(&self) -> Vec<Node> {
        (self.build)()
    }
}

/// Every gallery program, in listing order
pub static PROGRAMS: &[Program] = &[
    Program {
        name: "main",
        description: "defines main(arg1): reads x, prints it and branches on 2 == 3",
        build: main_program,
    },
    Program {
        name: "arithmetic",
        description: "reads x and prints (10 - -(3 + (x - x)))",
        build: arithmetic_program,
    },
    Program {
        name: "factorial",
        description: "defines the recursive factorial(n)",
        build: factorial_program,
    },
    Program {
        name: "factorial-run",
        description: "defines factorial, reads n and prints factorial(n)",
        build: factorial_run,
    },
];

/// Look a program up by name
pub fn find(name: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|program| program.name == name)
}

pub fn main() -> Node {
    Node::function_definition(
        "main",
        Function::new(
            ["arg1"],
            vec![
                Node::read("x"),
                Node::print(Node::reference("x")),
                Node::conditional(
                    Node::binary_op(Node::number(2), BinaryOperator::Equal, Node::number(3)),
                    vec![Node::conditional(Node::number(1), vec![], Some(vec![]))],
                    Some(vec![Node::call(
                        Node::reference("exit"),
                        vec![Node::unary_op(UnaryOperator::Minus, Node::reference("arg1"))],
                    )]),
                ),
            ],
        ),
    )
}

pub fn arithmetic() -> Node {
    Node::binary_op(
        Node::number(10),
        BinaryOperator::Subtract,
        Node::unary_op(
            UnaryOperator::Minus,
            Node::binary_op(
                Node::number(3),
                BinaryOperator::Add,
                Node::binary_op(
                    Node::reference("x"),
                    BinaryOperator::Subtract,
                    Node::reference("x"),
                ),
            ),
        ),
    )
}

pub fn factorial() -> Node {
    Node::function_definition(
        "factorial",
        Function::new(
            ["n"],
            vec![Node::conditional(
                Node::unary_op(UnaryOperator::LogicalNot, Node::reference("n")),
                vec![Node::number(1)],
                Some(vec![Node::binary_op(
                    Node::call(
                        Node::reference("factorial"),
                        vec![Node::binary_op(
                            Node::reference("n"),
                            BinaryOperator::Subtract,
                            Node::number(1),
                        )],
                    ),
                    BinaryOperator::Multiply,
                    Node::reference("n"),
                )]),
            )],
        ),
    )
}

fn main_program() -> Vec<Node> {
    vec![main()]
}

fn arithmetic_program() -> Vec<Node> {
    vec![Node::read("x"), Node::print(arithmetic())]
}

fn factorial_program() -> Vec<Node> {
    vec![factorial()]
}

pub fn factorial_run() -> Vec<Node> {
    vec![
        factorial(),
        Node::read("n"),
        Node::print(Node::call(
            Node::reference("factorial"),
            vec![Node::reference("n")],
        )),
    ]
}
