//! Parameter name resolution and binding.

use crate::metadata::ParamSpec;
use crate::params::{BoundParams, NamedParams};
use hermes_core::{HermesError, HermesResult};
use serde_json::Value;

/// An ordered table mapping argument positions to parameter names.
///
/// Built once per method descriptor. Naming resolution per parameter,
/// first match wins:
///
/// 1. the explicitly declared name from endpoint metadata,
/// 2. the introspected source parameter name, when that fallback is
///    enabled in the configuration,
/// 3. the ordinal position rendered as a string (`"0"`, `"1"`, ...).
///
/// Names are not required to be unique; a duplicate overwrites on lookup
/// (last writer wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNameTable {
    names: Vec<String>,
    has_declared_name: bool,
}

impl ParamNameTable {
    /// Resolves the name table for a method's parameter declarations.
    #[must_use]
    pub fn resolve(params: &[ParamSpec], use_source_param_names: bool) -> Self {
        let mut names = Vec::with_capacity(params.len());
        let mut has_declared_name = false;

        for (position, spec) in params.iter().enumerate() {
            let name = match (spec.declared, spec.source_name) {
                (Some(declared), _) => {
                    has_declared_name = true;
                    declared.to_string()
                }
                (None, Some(source)) if use_source_param_names => source.to_string(),
                _ => position.to_string(),
            };
            names.push(name);
        }

        Self {
            names,
            has_declared_name,
        }
    }

    /// Returns the method arity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the method declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if any parameter carried an explicitly declared name.
    #[must_use]
    pub fn has_declared_name(&self) -> bool {
        self.has_declared_name
    }

    /// Returns the resolved name for an argument position.
    #[must_use]
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Binds positional argument values to their resolved names.
    ///
    /// - No declared parameters produces an absent binding.
    /// - A single parameter with no explicit declared name anywhere passes
    ///   its argument through unwrapped.
    /// - Otherwise every declared name is populated from the corresponding
    ///   positional argument.
    ///
    /// # Errors
    ///
    /// Returns a binding error when the argument count differs from the
    /// declared arity.
    pub fn bind(&self, args: &[Value]) -> HermesResult<BoundParams> {
        if self.names.is_empty() {
            return Ok(BoundParams::None);
        }
        if args.len() != self.names.len() {
            return Err(HermesError::binding(format!(
                "expected {} argument(s), got {}",
                self.names.len(),
                args.len()
            )));
        }
        if !self.has_declared_name && self.names.len() == 1 {
            return Ok(BoundParams::Single(args[0].clone()));
        }

        let mut params = NamedParams::new();
        for (name, value) in self.names.iter().zip(args) {
            params.insert(name.clone(), value.clone());
        }
        Ok(BoundParams::Named(params))
    }
}
