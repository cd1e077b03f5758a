//! Tree-walking evaluator for Plume syntax trees
//!
//! Evaluation is a single exhaustive match over the node kinds. It reads and
//! writes the scope chain and the console but never mutates the tree.
//! Every node yields `Some(value)` except statement sequences that execute
//! nothing, which yield `None`.

use crate::console::Console;
use crate::error::{Result, RuntimeError};
use crate::scope::Scope;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;
use plume_ast::{BinaryOperation, Conditional, FunctionCall, Node, UnaryOperation};

/// Evaluate a node in `scope`
pub fn evaluate(
    node: &Node,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    ensure_sufficient_stack(|| evaluate_node(node, scope, console))
}

fn evaluate_node(
    node: &Node,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    tracing::trace!(kind = node.kind_name(), depth = scope.depth(), "evaluate");

    match node {
        Node::Number(n) => Ok(Some(Value::Integer(*n))),

        Node::Function(function) => Ok(Some(Value::Function(function.clone()))),

        Node::FunctionDefinition(definition) => {
            let function = Value::Function(definition.function.clone());
            tracing::debug!(name = %definition.name, "define function");
            scope.define(definition.name.clone(), function.clone());
            Ok(Some(function))
        }

        Node::Conditional(conditional) => evaluate_conditional(conditional, scope, console),

        Node::Print(print) => {
            let value = expect_value(evaluate(&print.expr, scope, console)?)?;
            console.write_line(&value.as_integer()?.to_string())?;
            Ok(Some(value))
        }

        Node::Read(read) => {
            let line = console
                .read_line()?
                .ok_or_else(|| RuntimeError::end_of_input(&read.name))?;
            let n = line
                .trim()
                .parse::<i64>()
                .map_err(|_| RuntimeError::parse_error(&read.name, &line))?;
            let value = Value::Integer(n);
            tracing::debug!(name = %read.name, value = n, "read");
            scope.define(read.name.clone(), value.clone());
            Ok(Some(value))
        }

        Node::FunctionCall(call) => evaluate_call(call, scope, console),

        Node::Reference(reference) => scope.get(&reference.name).map(Some),

        Node::BinaryOperation(operation) => evaluate_binary(operation, scope, console),

        Node::UnaryOperation(operation) => evaluate_unary(operation, scope, console),
    }
}

/// Execute statements in order in `scope`, yielding the last result
pub fn execute(
    statements: &[Node],
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    let mut result = None;
    for statement in statements {
        result = evaluate(statement, scope, console)?;
    }
    Ok(result)
}

/// Require a result where an operand is needed
fn expect_value(result: Option<Value>) -> Result<Value> {
    result.ok_or_else(|| RuntimeError::type_mismatch("number", "nothing"))
}

fn evaluate_conditional(
    conditional: &Conditional,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    let condition = expect_value(evaluate(&conditional.condition, scope, console)?)?;
    if condition.is_truthy()? {
        execute(&conditional.if_true, scope, console)
    } else {
        execute(conditional.if_false.as_deref().unwrap_or_default(), scope, console)
    }
}

/// Call a function.
///
/// Arguments are evaluated in the caller's scope and the body runs in a fresh
/// child of the caller's scope (not of the scope the function was defined
/// in). Parameters and arguments are paired positionally: surplus arguments
/// are evaluated and dropped, surplus parameters stay unbound. Fails with
/// `StackOverflow` once the scope chain reaches its maximum depth.
#[tracing::instrument(level = "debug", skip_all, fields(args = call.args.len()))]
fn evaluate_call(
    call: &FunctionCall,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    let callee = evaluate(&call.fun_expr, scope, console)?
        .ok_or_else(|| RuntimeError::not_callable("nothing"))?;
    let function = callee.as_function()?.clone();

    let mut args = Vec::with_capacity(call.args.len());
    for arg in &call.args {
        args.push(expect_value(evaluate(arg, scope, console)?)?);
    }

    if args.len() != function.args.len() {
        tracing::debug!(
            params = function.args.len(),
            args = args.len(),
            "argument count differs from parameter count"
        );
    }

    let mut call_scope = Scope::try_child(scope)?;
    for (name, value) in function.args.iter().zip(args) {
        call_scope.define(name.clone(), value);
    }

    execute(&function.body, &mut call_scope, console)
}

fn evaluate_binary(
    operation: &BinaryOperation,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    // Both operands are always evaluated, including for `&&` and `||`
    let lhs = expect_value(evaluate(&operation.lhs, scope, console)?)?;
    let rhs = expect_value(evaluate(&operation.rhs, scope, console)?)?;
    lhs.apply_binary(operation.operator, &rhs).map(Some)
}

fn evaluate_unary(
    operation: &UnaryOperation,
    scope: &mut Scope<'_>,
    console: &mut dyn Console,
) -> Result<Option<Value>> {
    let operand = expect_value(evaluate(&operation.expr, scope, console)?)?;
    operand.apply_unary(operation.operator).map(Some)
}
