//! The dispatcher backing every registered mapper interface.
//!
//! A [`MapperClient`] is the dispatch-table counterpart of a runtime
//! proxy: one instance per registered interface, holding a
//! method-identity-keyed cache of resolved [`MethodDescriptor`]s and the
//! interceptor chain matched to each method's lookup path. Hand-written
//! wrapper types embed a client and forward each interface method to
//! [`MapperClient::invoke`].

use crate::config::HermesConfig;
use crate::request;
use hermes_binding::{MapperMetadata, MethodDescriptor, ReturnKind};
use hermes_core::{CodecError, HermesError, HermesResult, ResponseEnvelope};
use hermes_intercept::InterceptorChain;
use hermes_pattern::lookup_path;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A resolved method plus its path-matched interceptor chain.
///
/// Both are derived entirely from static metadata and setup-time
/// configuration, so they are computed once and shared by every call.
struct CachedMethod {
    descriptor: MethodDescriptor,
    chain: InterceptorChain,
}

/// The dispatcher-backed implementation of one mapper interface.
///
/// Obtained from [`MapperRegistry::resolve`](crate::MapperRegistry::resolve);
/// every resolved handle shares the same descriptor cache.
pub struct MapperClient {
    metadata: &'static MapperMetadata,
    config: Arc<HermesConfig>,
    methods: RwLock<HashMap<&'static str, Arc<CachedMethod>>>,
}

impl std::fmt::Debug for MapperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperClient")
            .field("name", &self.metadata.name)
            .finish_non_exhaustive()
    }
}

impl MapperClient {
    pub(crate) fn new(metadata: &'static MapperMetadata, config: Arc<HermesConfig>) -> Self {
        Self {
            metadata,
            config,
            methods: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the mapper interface name.
    #[must_use]
    pub fn mapper_name(&self) -> &'static str {
        self.metadata.name
    }

    /// Invokes a declared method with positional arguments, decoding the
    /// response body into the declared return type.
    ///
    /// Exactly one transport call happens per invocation. The call is
    /// terminal on the first error: binding, hook, transport, and codec
    /// failures all propagate unchanged.
    pub fn invoke<T: DeserializeOwned>(&self, method: &str, args: Vec<Value>) -> HermesResult<T> {
        let cached = self.cached_method(method)?;
        let descriptor = &cached.descriptor;

        let bound = descriptor.bind(&args)?;
        let mut req = request::build(descriptor, &bound, &args, self.config.codec())?;

        cached.chain.on_request(&mut req)?;
        // Hooks may have rewritten the content-type header or the body;
        // re-apply the content-type and read-verb rules to the current
        // envelope state.
        request::normalize(&mut req, &bound, self.config.codec())?;

        tracing::debug!(
            method = descriptor.name(),
            verb = %req.verb(),
            url = %req.url(),
            params = %req.body(),
            headers = ?req.headers(),
            "dispatching request"
        );

        let mut response = self.config.transport().execute(&req)?;

        tracing::debug!(
            method = descriptor.name(),
            status = %response.status(),
            body = %response.body().map(ToString::to_string).unwrap_or_default(),
            "received response"
        );

        cached.chain.on_response(&req, &mut response)?;

        self.decode_response(descriptor, response)
    }

    /// Returns the cached method entry, resolving it on first use.
    ///
    /// Racing first calls both resolve, but the cache retains a single
    /// winning entry: the write lock re-checks before inserting.
    fn cached_method(&self, method: &str) -> HermesResult<Arc<CachedMethod>> {
        if let Some(cached) = self.methods.read().get(method) {
            return Ok(cached.clone());
        }

        let mut methods = self.methods.write();
        if let Some(cached) = methods.get(method) {
            return Ok(cached.clone());
        }

        let descriptor = MethodDescriptor::resolve(
            self.metadata,
            method,
            self.config.base_url(),
            self.config.use_source_param_names(),
        )?;
        let chain = self
            .config
            .interceptors()
            .resolve(lookup_path(descriptor.url()), self.config.path_matcher());

        let cached = Arc::new(CachedMethod { descriptor, chain });
        methods.insert(cached.descriptor.name(), cached.clone());
        Ok(cached)
    }

    fn decode_response<T: DeserializeOwned>(
        &self,
        descriptor: &MethodDescriptor,
        response: ResponseEnvelope,
    ) -> HermesResult<T> {
        match response.into_body() {
            Some(body) => decode_body(self.config.codec(), body),
            None => {
                if descriptor.returns() == ReturnKind::Primitive {
                    return Err(HermesError::binding(format!(
                        "Mapper method '{}' attempted to return an absent body as a primitive \
                         return type ({})",
                        descriptor.url(),
                        std::any::type_name::<T>()
                    )));
                }
                serde_json::from_value(Value::Null).map_err(|e| {
                    CodecError::with_source(
                        format!(
                            "response for '{}' had no body and the declared return type \
                             has no absent form",
                            descriptor.url()
                        ),
                        e,
                    )
                    .into()
                })
            }
        }
    }
}

/// Decodes a response body into the declared return type.
///
/// A body whose shape already satisfies the declared type converts
/// directly. A string payload that does not is treated as an encoded
/// document: parsed via the codec, then converted.
fn decode_body<T: DeserializeOwned>(
    codec: &dyn hermes_core::Codec,
    body: Value,
) -> HermesResult<T> {
    match body {
        Value::String(raw) => match serde_json::from_value(Value::String(raw.clone())) {
            Ok(value) => Ok(value),
            Err(_) => {
                let parsed = codec.parse(&raw)?;
                serde_json::from_value(parsed).map_err(|e| {
                    CodecError::with_source("failed to decode string payload", e).into()
                })
            }
        },
        other => serde_json::from_value(other)
            .map_err(|e| CodecError::with_source("failed to decode response body", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::JsonCodec;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct User {
        id: u64,
        name: String,
    }

    #[test]
    fn test_decode_structured_body() {
        let user: User = decode_body(&JsonCodec::new(), json!({"id": 1, "name": "joe"})).unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "joe".to_string()
            }
        );
    }

    #[test]
    fn test_decode_string_body_as_declared_string() {
        let text: String = decode_body(&JsonCodec::new(), json!("plain text")).unwrap();
        assert_eq!(text, "plain text");
    }

    #[test]
    fn test_decode_string_payload_parses_into_object() {
        let user: User =
            decode_body(&JsonCodec::new(), json!(r#"{"id": 2, "name": "ann"}"#)).unwrap();
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_decode_raw_value_passthrough() {
        let value: Value = decode_body(&JsonCodec::new(), json!({"anything": [1, 2]})).unwrap();
        assert_eq!(value, json!({"anything": [1, 2]}));
    }

    #[test]
    fn test_decode_mismatched_body_is_codec_error() {
        let err = decode_body::<User>(&JsonCodec::new(), json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), hermes_core::ErrorKind::Codec);
    }
}
