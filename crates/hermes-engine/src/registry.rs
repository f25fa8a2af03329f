//! The mapper registry.

use crate::config::HermesConfig;
use crate::dispatcher::MapperClient;
use hermes_binding::MapperMetadata;
use hermes_core::{HermesError, HermesResult};
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Ties a mapper interface type to its static endpoint metadata.
///
/// Implemented by the marker type for each declared interface; the
/// metadata is the constant-set stand-in for runtime annotation
/// introspection.
///
/// # Example
///
/// ```
/// use hermes_binding::{EndpointMetadata, MapperMetadata, ParamSpec, ReturnKind};
/// use hermes_engine::Mapper;
/// use http::Method;
///
/// struct UserApi;
///
/// static USER_API: MapperMetadata = MapperMetadata {
///     name: "UserApi",
///     base_url: "",
///     endpoints: &[EndpointMetadata {
///         name: "get_user",
///         verb: Method::GET,
///         path: "/users/{id}",
///         content_type: "application/json",
///         params: &[ParamSpec::source("id")],
///         returns: ReturnKind::Object,
///     }],
/// };
///
/// impl Mapper for UserApi {
///     fn metadata() -> &'static MapperMetadata {
///         &USER_API
///     }
/// }
/// ```
pub trait Mapper: 'static {
    /// Returns the static endpoint metadata for this interface.
    fn metadata() -> &'static MapperMetadata;
}

/// Maps registered interface types to their dispatcher-backed clients.
///
/// Registration happens at setup time; resolution is the per-use lookup.
/// Each type registers at most once, and every resolution of a type
/// shares one client (and therefore one method-descriptor cache).
pub struct MapperRegistry {
    config: Arc<HermesConfig>,
    known: RwLock<HashMap<TypeId, Arc<MapperClient>>>,
}

impl MapperRegistry {
    /// Creates a registry over a frozen configuration.
    #[must_use]
    pub fn new(config: Arc<HermesConfig>) -> Self {
        Self {
            config,
            known: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a mapper interface type.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the type is already registered
    /// or its metadata is malformed (empty interface name, duplicate
    /// endpoint names).
    pub fn register<M: Mapper>(&self) -> HermesResult<()> {
        let metadata = M::metadata();
        validate(metadata)?;

        let mut known = self.known.write();
        if known.contains_key(&TypeId::of::<M>()) {
            return Err(HermesError::configuration(format!(
                "Type '{}' is already known to the mapper registry",
                metadata.name
            )));
        }
        known.insert(
            TypeId::of::<M>(),
            Arc::new(MapperClient::new(metadata, self.config.clone())),
        );
        Ok(())
    }

    /// Resolves the dispatcher-backed client for a registered type.
    ///
    /// Construction performs no I/O; the returned client is ready to
    /// invoke.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the type was never registered.
    pub fn resolve<M: Mapper>(&self) -> HermesResult<Arc<MapperClient>> {
        self.known
            .read()
            .get(&TypeId::of::<M>())
            .cloned()
            .ok_or_else(|| {
                HermesError::configuration(format!(
                    "Type '{}' is not known to the mapper registry",
                    M::metadata().name
                ))
            })
    }

    /// Returns `true` if the type has been registered.
    #[must_use]
    pub fn is_registered<M: Mapper>(&self) -> bool {
        self.known.read().contains_key(&TypeId::of::<M>())
    }

    /// Returns the names of all registered mappers.
    #[must_use]
    pub fn mappers(&self) -> Vec<&'static str> {
        self.known
            .read()
            .values()
            .map(|client| client.mapper_name())
            .collect()
    }
}

fn validate(metadata: &MapperMetadata) -> HermesResult<()> {
    if metadata.name.is_empty() {
        return Err(HermesError::configuration(
            "mapper metadata declares no interface name",
        ));
    }
    for (i, endpoint) in metadata.endpoints.iter().enumerate() {
        if metadata.endpoints[..i].iter().any(|e| e.name == endpoint.name) {
            return Err(HermesError::configuration(format!(
                "mapper '{}' declares endpoint '{}' more than once",
                metadata.name, endpoint.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_binding::{EndpointMetadata, ParamSpec, ReturnKind};
    use hermes_core::{
        RequestEnvelope, ResponseEnvelope, Transport, TransportError,
    };
    use http::{HeaderMap, Method, StatusCode};

    struct NullTransport;
    impl Transport for NullTransport {
        fn execute(&self, _request: &RequestEnvelope) -> Result<ResponseEnvelope, TransportError> {
            Ok(ResponseEnvelope::new(StatusCode::OK, HeaderMap::new(), None))
        }
    }

    fn registry() -> MapperRegistry {
        let config = HermesConfig::builder()
            .transport(std::sync::Arc::new(NullTransport))
            .build()
            .unwrap();
        MapperRegistry::new(Arc::new(config))
    }

    struct UserApi;
    static USER_API: MapperMetadata = MapperMetadata {
        name: "UserApi",
        base_url: "",
        endpoints: &[EndpointMetadata {
            name: "get_user",
            verb: Method::GET,
            path: "/users/{id}",
            content_type: "application/json",
            params: &[ParamSpec::source("id")],
            returns: ReturnKind::Object,
        }],
    };
    impl Mapper for UserApi {
        fn metadata() -> &'static MapperMetadata {
            &USER_API
        }
    }

    struct BrokenApi;
    static BROKEN_API: MapperMetadata = MapperMetadata {
        name: "",
        base_url: "",
        endpoints: &[],
    };
    impl Mapper for BrokenApi {
        fn metadata() -> &'static MapperMetadata {
            &BROKEN_API
        }
    }

    struct DuplicateEndpointApi;
    static DUPLICATE_API: MapperMetadata = MapperMetadata {
        name: "DuplicateEndpointApi",
        base_url: "",
        endpoints: &[
            EndpointMetadata {
                name: "ping",
                verb: Method::GET,
                path: "/ping",
                content_type: "application/json",
                params: &[],
                returns: ReturnKind::Void,
            },
            EndpointMetadata {
                name: "ping",
                verb: Method::POST,
                path: "/ping",
                content_type: "application/json",
                params: &[],
                returns: ReturnKind::Void,
            },
        ],
    };
    impl Mapper for DuplicateEndpointApi {
        fn metadata() -> &'static MapperMetadata {
            &DUPLICATE_API
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = registry();
        assert!(!registry.is_registered::<UserApi>());

        registry.register::<UserApi>().unwrap();
        assert!(registry.is_registered::<UserApi>());

        let client = registry.resolve::<UserApi>().unwrap();
        assert_eq!(client.mapper_name(), "UserApi");
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = registry();
        registry.register::<UserApi>().unwrap();

        let err = registry.register::<UserApi>().unwrap_err();
        assert_eq!(err.kind(), hermes_core::ErrorKind::Configuration);
        assert!(err.to_string().contains("already known"));
    }

    #[test]
    fn test_resolve_unregistered_fails() {
        let registry = registry();
        let err = registry.resolve::<UserApi>().unwrap_err();
        assert_eq!(err.kind(), hermes_core::ErrorKind::Configuration);
        assert!(err.to_string().contains("not known"));
    }

    #[test]
    fn test_malformed_metadata_rejected() {
        let registry = registry();
        assert!(registry.register::<BrokenApi>().is_err());
        assert!(registry.register::<DuplicateEndpointApi>().is_err());
    }

    #[test]
    fn test_resolved_clients_share_one_instance() {
        let registry = registry();
        registry.register::<UserApi>().unwrap();

        let a = registry.resolve::<UserApi>().unwrap();
        let b = registry.resolve::<UserApi>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_mappers_lists_registered_names() {
        let registry = registry();
        registry.register::<UserApi>().unwrap();
        assert_eq!(registry.mappers(), vec!["UserApi"]);
    }
}
