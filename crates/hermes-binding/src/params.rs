//! Bound parameters for a single call.

use hermes_core::{HermesError, HermesResult};
use indexmap::IndexMap;
use serde_json::Value;

/// The result of binding positional arguments to declared names.
///
/// Created fresh per invocation and discarded after the call completes.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundParams {
    /// The method takes no arguments.
    None,
    /// A single parameter with no explicit declared name is passed through
    /// unwrapped, so single-object-bodied calls carry the object directly.
    Single(Value),
    /// Every declared name mapped to its positional argument.
    Named(NamedParams),
}

impl BoundParams {
    /// Returns the named map, if this binding produced one.
    #[must_use]
    pub fn as_named(&self) -> Option<&NamedParams> {
        match self {
            Self::Named(params) => Some(params),
            _ => None,
        }
    }

    /// Returns the unwrapped single value, if this binding produced one.
    #[must_use]
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            Self::Single(value) => Some(value),
            _ => None,
        }
    }
}

/// A name-to-value parameter map for one call.
///
/// Lookup of a missing key is a programming-contract violation, not a
/// silent absence: it fails naming the requested key and every available
/// key, which is the primary debugging aid for mis-declared endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParams {
    entries: IndexMap<String, Value>,
}

impl NamedParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter value. Duplicate names overwrite: last writer
    /// wins.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Looks up a parameter by name.
    ///
    /// # Errors
    ///
    /// Returns a binding error naming the requested key and the available
    /// keys when the parameter was never bound.
    pub fn get(&self, name: &str) -> HermesResult<&Value> {
        self.entries.get(name).ok_or_else(|| {
            HermesError::binding(format!(
                "Parameter '{name}' not found. Available parameters are [{}]",
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// Returns the parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
