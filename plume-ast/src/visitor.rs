//! Visitor trait for traversing the Plume syntax tree
//!
//! Every node kind has a required visit method, so adding a node kind is a
//! compile error in every pass until the pass handles it. Passes are added by
//! implementing the trait; node definitions never change for a new pass.

use crate::ast::{
    BinaryOperation, Conditional, Function, FunctionCall, FunctionDefinition, Node, Print, Read,
    Reference, UnaryOperation,
};

/// Result type for visitor methods
pub type VisitorResult<V> = Result<<V as Visitor>::Output, <V as Visitor>::Error>;

/// A pass over the tree producing one `Output` per visited node
pub trait Visitor: Sized {
    type Output;
    type Error;

    fn visit_number(&mut self, value: i64) -> VisitorResult<Self>;

    fn visit_function(&mut self, function: &Function) -> VisitorResult<Self>;

    fn visit_function_definition(
        &mut self,
        definition: &FunctionDefinition,
    ) -> VisitorResult<Self>;

    fn visit_conditional(&mut self, conditional: &Conditional) -> VisitorResult<Self>;

    fn visit_print(&mut self, print: &Print) -> VisitorResult<Self>;

    fn visit_read(&mut self, read: &Read) -> VisitorResult<Self>;

    fn visit_function_call(&mut self, call: &FunctionCall) -> VisitorResult<Self>;

    fn visit_reference(&mut self, reference: &Reference) -> VisitorResult<Self>;

    fn visit_binary_operation(&mut self, operation: &BinaryOperation) -> VisitorResult<Self>;

    fn visit_unary_operation(&mut self, operation: &UnaryOperation) -> VisitorResult<Self>;
}

impl Node {
    /// Dispatch to the visit method matching this node's kind
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> VisitorResult<V> {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Function(function) => visitor.visit_function(function),
            Node::FunctionDefinition(definition) => visitor.visit_function_definition(definition),
            Node::Conditional(conditional) => visitor.visit_conditional(conditional),
            Node::Print(print) => visitor.visit_print(print),
            Node::Read(read) => visitor.visit_read(read),
            Node::FunctionCall(call) => visitor.visit_function_call(call),
            Node::Reference(reference) => visitor.visit_reference(reference),
            Node::BinaryOperation(operation) => visitor.visit_binary_operation(operation),
            Node::UnaryOperation(operation) => visitor.visit_unary_operation(operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts nodes, descending into every child
    struct NodeCounter;

    impl NodeCounter {
        fn count_all(&mut self, nodes: &[Node]) -> VisitorResult<Self> {
            nodes.iter().map(|node| node.accept(self)).sum()
        }
    }

    impl Visitor for NodeCounter {
        type Output = usize;
        type Error = std::convert::Infallible;

        fn visit_number(&mut self, _value: i64) -> VisitorResult<Self> {
            Ok(1)
        }

        fn visit_function(&mut self, function: &Function) -> VisitorResult<Self> {
            Ok(1 + self.count_all(&function.body)?)
        }

        fn visit_function_definition(
            &mut self,
            definition: &FunctionDefinition,
        ) -> VisitorResult<Self> {
            Ok(1 + self.visit_function(&definition.function)?)
        }

        fn visit_conditional(&mut self, conditional: &Conditional) -> VisitorResult<Self> {
            let if_false = match &conditional.if_false {
                Some(statements) => self.count_all(statements)?,
                None => 0,
            };
            let condition = conditional.condition.accept(self)?;
            Ok(1 + condition + self.count_all(&conditional.if_true)? + if_false)
        }

        fn visit_print(&mut self, print: &Print) -> VisitorResult<Self> {
            Ok(1 + print.expr.accept(self)?)
        }

        fn visit_read(&mut self, _read: &Read) -> VisitorResult<Self> {
            Ok(1)
        }

        fn visit_function_call(&mut self, call: &FunctionCall) -> VisitorResult<Self> {
            Ok(1 + call.fun_expr.accept(self)? + self.count_all(&call.args)?)
        }

        fn visit_reference(&mut self, _reference: &Reference) -> VisitorResult<Self> {
            Ok(1)
        }

        fn visit_binary_operation(&mut self, operation: &BinaryOperation) -> VisitorResult<Self> {
            Ok(1 + operation.lhs.accept(self)? + operation.rhs.accept(self)?)
        }

        fn visit_unary_operation(&mut self, operation: &UnaryOperation) -> VisitorResult<Self> {
            Ok(1 + operation.expr.accept(self)?)
        }
    }

    #[test]
    fn test_accept_dispatches_every_kind() {
        let tree = Node::function_definition(
            "f",
            Function::new(
                ["a"],
                vec![
                    Node::read("x"),
                    Node::conditional(
                        Node::unary("!", Node::reference("a")).unwrap(),
                        vec![Node::print(Node::number(1))],
                        Some(vec![Node::call(
                            Node::reference("f"),
                            vec![
                                Node::binary(Node::reference("a"), "-", Node::number(1)).unwrap(),
                            ],
                        )]),
                    ),
                ],
            ),
        );

        // def, read, if, !, a, print, 1, call, f, -, a, 1 plus the function itself
        assert_eq!(tree.accept(&mut NodeCounter), Ok(13));
    }
}
