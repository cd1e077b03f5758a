//! Runtime value representation for the Plume interpreter.
//!
//! Plume has a single numeric type: a 64-bit signed integer that doubles as
//! a boolean (0 is false, anything else is true). Functions are first-class
//! and travel alongside integers as values.

use crate::error::{Result, RuntimeError};
use plume_ast::{BinaryOperator, Function, UnaryOperator};
use std::rc::Rc;

/// Runtime values in the Plume interpreter
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer, also used for truth values
    Integer(i64),
    /// Function shared with the tree it was defined in
    Function(Rc<Function>),
}

impl Value {
    /// Normalize a boolean to the integer truth values 0 and 1
    pub fn from_bool(value: bool) -> Self {
        Value::Integer(i64::from(value))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "number",
            Value::Function(_) => "function",
        }
    }

    /// The wrapped integer, or a type error for functions
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            Value::Function(_) => Err(RuntimeError::type_mismatch("number", self.type_name())),
        }
    }

    /// The wrapped function, or a not-callable error for integers
    pub fn as_function(&self) -> Result<&Rc<Function>> {
        match self {
            Value::Function(function) => Ok(function),
            Value::Integer(_) => Err(RuntimeError::not_callable(self.type_name())),
        }
    }

    /// Truthiness: only the integer 0 is false
    pub fn is_truthy(&self) -> Result<bool> {
        Ok(self.as_integer()? != 0)
    }

    // Arithmetic operations

    /// Addition operation
    pub fn add(&self, other: &Value) -> Result<Value> {
        self.as_integer()?
            .checked_add(other.as_integer()?)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow("+"))
    }

    /// Subtraction operation
    pub fn subtract(&self, other: &Value) -> Result<Value> {
        self.as_integer()?
            .checked_sub(other.as_integer()?)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow("-"))
    }

    /// Multiplication operation
    pub fn multiply(&self, other: &Value) -> Result<Value> {
        self.as_integer()?
            .checked_mul(other.as_integer()?)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow("*"))
    }

    /// Floor division: rounds toward negative infinity
    pub fn divide(&self, other: &Value) -> Result<Value> {
        let (a, b) = (self.as_integer()?, other.as_integer()?);
        if b == 0 {
            return Err(RuntimeError::division_by_zero("/"));
        }
        let quotient = a
            .checked_div(b)
            .ok_or_else(|| RuntimeError::integer_overflow("/"))?;
        if a % b != 0 && (a < 0) != (b < 0) {
            Ok(Value::Integer(quotient - 1))
        } else {
            Ok(Value::Integer(quotient))
        }
    }

    /// Floor modulo: the result takes the sign of the divisor
    pub fn modulo(&self, other: &Value) -> Result<Value> {
        let (a, b) = (self.as_integer()?, other.as_integer()?);
        if b == 0 {
            return Err(RuntimeError::division_by_zero("%"));
        }
        // i64::MIN % -1 overflows in Rust but is mathematically 0
        let remainder = a.checked_rem(b).unwrap_or(0);
        if remainder != 0 && (remainder < 0) != (b < 0) {
            Ok(Value::Integer(remainder + b))
        } else {
            Ok(Value::Integer(remainder))
        }
    }

    /// Arithmetic negation
    pub fn negate(&self) -> Result<Value> {
        self.as_integer()?
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow("-"))
    }

    // Logical operations

    /// Logical negation, normalized to 0/1
    pub fn not(&self) -> Result<Value> {
        Ok(Value::from_bool(!self.is_truthy()?))
    }

    /// Apply a binary operator to two already evaluated operands
    pub fn apply_binary(&self, operator: BinaryOperator, other: &Value) -> Result<Value> {
        match operator {
            BinaryOperator::Add => self.add(other),
            BinaryOperator::Subtract => self.subtract(other),
            BinaryOperator::Multiply => self.multiply(other),
            BinaryOperator::Divide => self.divide(other),
            BinaryOperator::Modulo => self.modulo(other),
            BinaryOperator::Equal => self.compare_with(other, |a, b| a == b),
            BinaryOperator::NotEqual => self.compare_with(other, |a, b| a != b),
            BinaryOperator::Less => self.compare_with(other, |a, b| a < b),
            BinaryOperator::Greater => self.compare_with(other, |a, b| a > b),
            BinaryOperator::LessEqual => self.compare_with(other, |a, b| a <= b),
            BinaryOperator::GreaterEqual => self.compare_with(other, |a, b| a >= b),
            BinaryOperator::LogicalAnd => {
                let (a, b) = (self.is_truthy()?, other.is_truthy()?);
                Ok(Value::from_bool(a && b))
            }
            BinaryOperator::LogicalOr => {
                let (a, b) = (self.is_truthy()?, other.is_truthy()?);
                Ok(Value::from_bool(a || b))
            }
        }
    }

    /// Apply a unary operator to an already evaluated operand
    pub fn apply_unary(&self, operator: UnaryOperator) -> Result<Value> {
        match operator {
            UnaryOperator::Minus => self.negate(),
            UnaryOperator::LogicalNot => self.not(),
        }
    }

    fn compare_with(&self, other: &Value, compare: fn(i64, i64) -> bool) -> Result<Value> {
        Ok(Value::from_bool(compare(
            self.as_integer()?,
            other.as_integer()?,
        )))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

// Integers compare by value, functions by identity of their definition
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::Integer(n) => {
                0u8.hash(state);
                n.hash(state);
            }
            Value::Function(function) => {
                1u8.hash(state);
                Rc::as_ptr(function).hash(state);
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Function(function) => write!(f, "<function/{}>", function.args.len()),
        }
    }
}
