//! # Hermes
//!
//! A declarative HTTP client mapper: declare an interface's endpoints as
//! static metadata, register the interface once, and invoke its methods
//! through a dispatcher that binds arguments, builds the request, runs a
//! path-matched interceptor chain, executes the transport, and decodes
//! the response into the declared return type.
//!
//! # Example
//!
//! ```no_run
//! use hermes::{
//!     EndpointMetadata, HermesConfig, Mapper, MapperMetadata, MapperRegistry, ParamSpec,
//!     ReturnKind, Transport,
//! };
//! use http::Method;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct UserApi;
//!
//! static USER_API: MapperMetadata = MapperMetadata {
//!     name: "UserApi",
//!     base_url: "http://users.example.com",
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
//! impl Mapper for UserApi {
//!     fn metadata() -> &'static MapperMetadata {
//!         &USER_API
//!     }
//! }
//!
//! # fn transport() -> Arc<dyn Transport> { unimplemented!() }
//! let config = HermesConfig::builder().transport(transport()).build().unwrap();
//! let registry = MapperRegistry::new(Arc::new(config));
//! registry.register::<UserApi>().unwrap();
//!
//! let client = registry.resolve::<UserApi>().unwrap();
//! let user: User = client.invoke("get_user", vec![json!(42)]).unwrap();
//! ```

#![doc(html_root_url = "https://docs.rs/hermes/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use hermes_binding::{
    BoundParams, EndpointMetadata, MapperMetadata, MethodDescriptor, NamedParams, ParamNameTable,
    ParamSpec, ReturnKind, DEFAULT_CONTENT_TYPE,
};
pub use hermes_core::{
    BodyMap, Codec, CodecError, ErrorKind, HermesError, HermesResult, InterceptorError, JsonCodec,
    RequestEnvelope, ResponseEnvelope, Transport, TransportError, FORM_URLENCODED,
};
pub use hermes_engine::{HermesConfig, HermesConfigBuilder, Mapper, MapperClient, MapperRegistry};
pub use hermes_intercept::{Interceptor, InterceptorChain, InterceptorSet, MappedInterceptor};
pub use hermes_pattern::{lookup_path, GlobMatcher, PathMatcher};
