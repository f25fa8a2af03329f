//! Per-method descriptors.

use crate::metadata::{EndpointMetadata, MapperMetadata, ReturnKind, DEFAULT_CONTENT_TYPE};
use crate::names::ParamNameTable;
use crate::params::BoundParams;
use hermes_core::{HermesError, HermesResult};
use http::Method;
use serde_json::Value;

/// Immutable per-method invocation metadata.
///
/// Resolved at most once per method identity; the registry's per-interface
/// cache is the single source of truth, so concurrent first calls observe
/// one winning descriptor.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: &'static str,
    url: String,
    verb: Method,
    content_type: &'static str,
    returns: ReturnKind,
    params: ParamNameTable,
}

impl MethodDescriptor {
    /// Resolves the descriptor for `method` from the mapper's metadata.
    ///
    /// The URL template is the method path appended to the effective base:
    /// the mapper-level base URL when non-empty, else the globally
    /// configured base, else the path alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the method is unknown to the
    /// mapper metadata or declares an empty path.
    pub fn resolve(
        mapper: &MapperMetadata,
        method: &str,
        global_base_url: Option<&str>,
        use_source_param_names: bool,
    ) -> HermesResult<Self> {
        let endpoint = mapper.endpoint(method).ok_or_else(|| {
            HermesError::configuration(format!(
                "Invalid method '{method}' for mapper '{}'",
                mapper.name
            ))
        })?;
        if endpoint.path.is_empty() {
            return Err(HermesError::configuration(format!(
                "Method '{method}' on mapper '{}' declares no path",
                mapper.name
            )));
        }

        let base = if mapper.base_url.is_empty() {
            global_base_url.filter(|base| !base.is_empty()).unwrap_or("")
        } else {
            mapper.base_url
        };

        Ok(Self {
            name: endpoint.name,
            url: format!("{base}{}", endpoint.path),
            verb: endpoint.verb.clone(),
            content_type: effective_content_type(endpoint),
            returns: endpoint.returns,
            params: ParamNameTable::resolve(endpoint.params, use_source_param_names),
        })
    }

    /// Returns the method name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the resolved URL template.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Returns the declared content type.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Returns the declared return shape.
    #[must_use]
    pub fn returns(&self) -> ReturnKind {
        self.returns
    }

    /// Returns the parameter name table.
    #[must_use]
    pub fn params(&self) -> &ParamNameTable {
        &self.params
    }

    /// Binds positional arguments for one invocation of this method.
    pub fn bind(&self, args: &[Value]) -> HermesResult<BoundParams> {
        self.params.bind(args)
    }
}

fn effective_content_type(endpoint: &EndpointMetadata) -> &'static str {
    if endpoint.content_type.is_empty() {
        DEFAULT_CONTENT_TYPE
    } else {
        endpoint.content_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ParamSpec;

    static API: MapperMetadata = MapperMetadata {
        name: "UserApi",
        base_url: "http://users.example.com",
        endpoints: &[
            EndpointMetadata {
                name: "get_user",
                verb: Method::GET,
                path: "/users/{id}",
                content_type: "application/json",
                params: &[ParamSpec::source("id")],
                returns: ReturnKind::Object,
            },
            EndpointMetadata {
                name: "broken",
                verb: Method::GET,
                path: "",
                content_type: "",
                params: &[],
                returns: ReturnKind::Void,
            },
        ],
    };

    static RELATIVE_API: MapperMetadata = MapperMetadata {
        name: "RelativeApi",
        base_url: "",
        endpoints: &[EndpointMetadata {
            name: "ping",
            verb: Method::GET,
            path: "/ping",
            content_type: "",
            params: &[],
            returns: ReturnKind::Void,
        }],
    };

    #[test]
    fn test_mapper_base_url_wins() {
        let descriptor =
            MethodDescriptor::resolve(&API, "get_user", Some("http://global"), true).unwrap();
        assert_eq!(descriptor.url(), "http://users.example.com/users/{id}");
    }

    #[test]
    fn test_global_base_url_fallback() {
        let descriptor =
            MethodDescriptor::resolve(&RELATIVE_API, "ping", Some("http://global"), true).unwrap();
        assert_eq!(descriptor.url(), "http://global/ping");
    }

    #[test]
    fn test_path_alone_when_no_base() {
        let descriptor = MethodDescriptor::resolve(&RELATIVE_API, "ping", None, true).unwrap();
        assert_eq!(descriptor.url(), "/ping");

        let descriptor = MethodDescriptor::resolve(&RELATIVE_API, "ping", Some(""), true).unwrap();
        assert_eq!(descriptor.url(), "/ping");
    }

    #[test]
    fn test_unknown_method_is_configuration_error() {
        let err = MethodDescriptor::resolve(&API, "nope", None, true).unwrap_err();
        assert_eq!(err.kind(), hermes_core::ErrorKind::Configuration);
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_empty_path_is_configuration_error() {
        let err = MethodDescriptor::resolve(&API, "broken", None, true).unwrap_err();
        assert_eq!(err.kind(), hermes_core::ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_content_type_defaults_to_json() {
        let descriptor = MethodDescriptor::resolve(&RELATIVE_API, "ping", None, true).unwrap();
        assert_eq!(descriptor.content_type(), DEFAULT_CONTENT_TYPE);
    }
}
