//! Pretty-printer rendering a tree back into Plume source
//!
//! Every node renders to one or more lines. Expression nodes end in `;`;
//! when a node is embedded in another one (operands, call arguments,
//! conditions) its first line is used with the trailing `;` removed.

use crate::ast::{
    BinaryOperation, Conditional, Function, FunctionCall, FunctionDefinition, Node, Print, Read,
    Reference, UnaryOperation,
};
use crate::error::RenderError;
use crate::visitor::{Visitor, VisitorResult};

/// Default indentation unit for nested blocks
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Visitor producing the lines of a node's source form
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    indent: String,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }

    /// Render a node to lines. Joining them is up to the caller.
    pub fn render(&mut self, node: &Node) -> Result<Vec<String>, RenderError> {
        node.accept(self)
    }

    fn indented(&self, lines: Vec<String>) -> impl Iterator<Item = String> + '_ {
        lines.into_iter().map(|line| format!("{}{}", self.indent, line))
    }

    fn render_block(&mut self, statements: &[Node]) -> Result<Vec<String>, RenderError> {
        let mut lines = Vec::new();
        for statement in statements {
            lines.extend(statement.accept(self)?);
        }
        Ok(lines)
    }

    fn render_inline(&mut self, node: &Node) -> Result<String, RenderError> {
        let lines = node.accept(self)?;
        let first = lines.into_iter().next().unwrap_or_default();
        Ok(match first.strip_suffix(';') {
            Some(stripped) => stripped.to_string(),
            None => first,
        })
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for PrettyPrinter {
    type Output = Vec<String>;
    type Error = RenderError;

    fn visit_number(&mut self, value: i64) -> VisitorResult<Self> {
        Ok(vec![format!("{};", value)])
    }

    fn visit_function(&mut self, _function: &Function) -> VisitorResult<Self> {
        Err(RenderError::unrenderable_node("Function"))
    }

    fn visit_function_definition(
        &mut self,
        definition: &FunctionDefinition,
    ) -> VisitorResult<Self> {
        let body = self.render_block(&definition.function.body)?;

        let mut lines = vec![format!(
            "def {}({}) {{",
            definition.name,
            definition.function.args.join(",")
        )];
        lines.extend(self.indented(body));
        lines.push("}".to_string());
        Ok(lines)
    }

    fn visit_conditional(&mut self, conditional: &Conditional) -> VisitorResult<Self> {
        let condition = self.render_inline(&conditional.condition)?;
        let if_true = self.render_block(&conditional.if_true)?;
        let if_false = match &conditional.if_false {
            Some(statements) => self.render_block(statements)?,
            None => Vec::new(),
        };

        let mut lines = vec![format!("if {} {{", condition)];
        lines.extend(self.indented(if_true));
        if !if_false.is_empty() {
            lines.push("} else {".to_string());
            lines.extend(self.indented(if_false));
        }
        lines.push("}".to_string());
        Ok(lines)
    }

    fn visit_print(&mut self, print: &Print) -> VisitorResult<Self> {
        // The operand keeps its own trailing `;`
        let expr = print.expr.accept(self)?;
        let first = expr.into_iter().next().unwrap_or_default();
        Ok(vec![format!("print {}", first)])
    }

    fn visit_read(&mut self, read: &Read) -> VisitorResult<Self> {
        Ok(vec![format!("read {};", read.name)])
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> VisitorResult<Self> {
        let callee = self.render_inline(&call.fun_expr)?;
        let args = call
            .args
            .iter()
            .map(|arg| self.render_inline(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![format!("{}({});", callee, args.join(", "))])
    }

    fn visit_reference(&mut self, reference: &Reference) -> VisitorResult<Self> {
        Ok(vec![format!("{};", reference.name)])
    }

    fn visit_binary_operation(&mut self, operation: &BinaryOperation) -> VisitorResult<Self> {
        let lhs = self.render_inline(&operation.lhs)?;
        let rhs = self.render_inline(&operation.rhs)?;
        Ok(vec![format!("({} {} {});", lhs, operation.operator, rhs)])
    }

    fn visit_unary_operation(&mut self, operation: &UnaryOperation) -> VisitorResult<Self> {
        let expr = self.render_inline(&operation.expr)?;
        Ok(vec![format!("{}{};", operation.operator, expr)])
    }
}

/// Render a node with the default printer and join its lines
pub fn pretty_print(node: &Node) -> Result<String, RenderError> {
    Ok(PrettyPrinter::new().render(node)?.join("\n"))
}
