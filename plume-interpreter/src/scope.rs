//! Scope chain for the Plume interpreter.
//!
//! Each scope owns its own bindings and borrows its parent, so a child can
//! never outlive the scope it was created from. Lookups walk outward through
//! the chain; definitions always land in the innermost scope.

use crate::error::{Result, RuntimeError};
use crate::value::Value;
use indexmap::IndexMap;

/// Default limit on nested calls
pub const MAX_CALL_DEPTH: usize = 1000;

/// A single scope in the chain
#[derive(Debug)]
pub struct Scope<'p> {
    /// Variable name to value mapping, in definition order
    variables: IndexMap<String, Value>,
    /// Enclosing scope, if any
    parent: Option<&'p Scope<'p>>,
    /// Number of ancestors
    depth: usize,
    /// Deepest scope `try_child` will create; inherited from the root
    max_depth: usize,
}

impl<'p> Scope<'p> {
    /// Create a new top-level scope with the default call limit
    pub fn new() -> Self {
        Self::with_max_depth(MAX_CALL_DEPTH)
    }

    /// Create a new top-level scope allowing `max_depth` nested calls
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            variables: IndexMap::new(),
            parent: None,
            depth: 0,
            max_depth,
        }
    }

    /// Create an empty scope whose lookups fall back to `parent`
    pub fn child(parent: &'p Scope<'p>) -> Self {
        Self {
            variables: IndexMap::new(),
            parent: Some(parent),
            depth: parent.depth + 1,
            max_depth: parent.max_depth,
        }
    }

    /// Like [`Scope::child`], but fails once the chain is already
    /// `max_depth` scopes deep
    pub fn try_child(parent: &'p Scope<'p>) -> Result<Self> {
        if parent.depth >= parent.max_depth {
            return Err(RuntimeError::stack_overflow(parent.max_depth));
        }
        Ok(Self::child(parent))
    }

    /// Number of ancestors (0 = top-level scope)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Bind a name in this scope, replacing any previous local binding.
    /// Ancestors are never written to.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Find a binding, searching from this scope outward
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        match self.variables.get(name) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.lookup(name)),
        }
    }

    /// Get a variable value by name, failing at the root of the chain
    pub fn get(&self, name: &str) -> Result<Value> {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::name_not_found(name))
    }

    /// Check if a name is bound anywhere in the chain
    pub fn exists(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Check if a name is bound in this scope itself
    pub fn is_local(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Bindings of this scope in definition order
    pub fn local_vars(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// All bindings visible from this scope, innermost first (for debugging)
    pub fn all_vars(&self) -> Vec<(String, String)> {
        let mut vars = vec![];
        let mut current = Some(self);
        let mut depth = self.depth;

        while let Some(scope) = current {
            for (name, value) in &scope.variables {
                vars.push((name.clone(), format!("scope {}: {}", depth, value)));
            }
            current = scope.parent;
            depth = depth.saturating_sub(1);
        }

        vars
    }

    /// Number of bindings in this scope
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if this scope has no bindings of its own
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for Scope<'_> {
    fn default() -> Self {
        Self::new()
    }
}
