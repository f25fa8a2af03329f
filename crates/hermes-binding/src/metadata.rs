//! Static endpoint metadata.
//!
//! Metadata is an explicit, separately-declared constant set describing
//! verb, path, content type, and parameter names per method. It is
//! consumed once at descriptor-resolution time; nothing is introspected at
//! call time.
//!
//! # Example
//!
//! ```
//! use hermes_binding::{EndpointMetadata, MapperMetadata, ParamSpec, ReturnKind};
//! use http::Method;
//!
//! static USER_API: MapperMetadata = MapperMetadata {
//!     name: "UserApi",
//!     base_url: "http://api.example.com",
//!     endpoints: &[EndpointMetadata {
//!         name: "get_user",
//!         verb: Method::GET,
//!         path: "/users/{id}",
//!         content_type: "application/json",
//!         params: &[ParamSpec::source("id")],
//!         returns: ReturnKind::Object,
//!     }],
//! };
//!
//! assert!(USER_API.endpoint("get_user").is_some());
//! ```

use http::Method;

/// Default content type applied when an endpoint declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Per-interface endpoint metadata.
///
/// Created once when an interface type is registered and immutable
/// thereafter.
#[derive(Debug)]
pub struct MapperMetadata {
    /// The mapper interface name, used in diagnostics and registry errors.
    pub name: &'static str,
    /// Base URL prepended to every endpoint path. May be empty, in which
    /// case the globally configured base URL applies.
    pub base_url: &'static str,
    /// Endpoint metadata for every declared method.
    pub endpoints: &'static [EndpointMetadata],
}

impl MapperMetadata {
    /// Looks up the endpoint metadata for a method name.
    #[must_use]
    pub fn endpoint(&self, method: &str) -> Option<&'static EndpointMetadata> {
        self.endpoints.iter().find(|e| e.name == method)
    }
}

/// Per-method endpoint metadata.
#[derive(Debug)]
pub struct EndpointMetadata {
    /// The method name, the identity under which descriptors are cached.
    pub name: &'static str,
    /// The HTTP verb.
    pub verb: Method,
    /// The path template, appended to the effective base URL.
    pub path: &'static str,
    /// The declared content type. An empty string falls back to
    /// [`DEFAULT_CONTENT_TYPE`].
    pub content_type: &'static str,
    /// Parameter declarations, in positional order.
    pub params: &'static [ParamSpec],
    /// The declared return shape.
    pub returns: ReturnKind,
}

/// A single parameter declaration.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Explicitly declared parameter name, the strongest naming source.
    pub declared: Option<&'static str>,
    /// The source-code parameter name, used as a fallback when enabled in
    /// the configuration.
    pub source_name: Option<&'static str>,
}

impl ParamSpec {
    /// A parameter with an explicitly declared name.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            declared: Some(name),
            source_name: None,
        }
    }

    /// A parameter known only by its source-code name.
    #[must_use]
    pub const fn source(name: &'static str) -> Self {
        Self {
            declared: None,
            source_name: Some(name),
        }
    }

    /// A parameter with no naming information; it binds by position.
    #[must_use]
    pub const fn positional() -> Self {
        Self {
            declared: None,
            source_name: None,
        }
    }
}

/// The declared return shape of a mapper method.
///
/// The distinction matters at decode time: a primitive return cannot
/// legally be absent, while an object return decodes `null` into its
/// optional form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// The method returns nothing; the response body is ignored.
    Void,
    /// A primitive value type; a missing response body is a binding error.
    Primitive,
    /// A reference, object, or generic type; absence decodes to its
    /// optional form.
    Object,
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIXTURE: MapperMetadata = MapperMetadata {
        name: "OrderApi",
        base_url: "",
        endpoints: &[
            EndpointMetadata {
                name: "list_orders",
                verb: Method::GET,
                path: "/orders",
                content_type: "application/json",
                params: &[],
                returns: ReturnKind::Object,
            },
            EndpointMetadata {
                name: "count_orders",
                verb: Method::GET,
                path: "/orders/count",
                content_type: "application/json",
                params: &[],
                returns: ReturnKind::Primitive,
            },
        ],
    };

    #[test]
    fn test_endpoint_lookup() {
        assert!(FIXTURE.endpoint("list_orders").is_some());
        assert!(FIXTURE.endpoint("missing").is_none());
    }

    #[test]
    fn test_param_spec_constructors() {
        let named = ParamSpec::named("id");
        assert_eq!(named.declared, Some("id"));
        assert_eq!(named.source_name, None);

        let source = ParamSpec::source("user_id");
        assert_eq!(source.declared, None);
        assert_eq!(source.source_name, Some("user_id"));

        let positional = ParamSpec::positional();
        assert_eq!(positional.declared, None);
        assert_eq!(positional.source_name, None);
    }

    #[test]
    fn test_return_kind_equality() {
        assert_eq!(
            FIXTURE.endpoint("count_orders").unwrap().returns,
            ReturnKind::Primitive
        );
    }
}
