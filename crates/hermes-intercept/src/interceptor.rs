//! Core interceptor trait.

use hermes_core::{InterceptorError, RequestEnvelope, ResponseEnvelope};

/// Pre/post hooks around a single mapper call.
///
/// Interceptors are stateless with respect to individual calls; one
/// instance is shared across every call whose lookup path it matches.
///
/// # Invariants
///
/// - `on_request` runs before execution, in registration order, and may
///   mutate the outgoing request; mutation is visible to later hooks and
///   to execution.
/// - `on_response` runs after execution, in reverse registration order.
/// - The first hook error aborts the remaining hooks of that phase and
///   the whole call.
///
/// # Example
///
/// ```
/// use hermes_core::{InterceptorError, RequestEnvelope, ResponseEnvelope};
/// use hermes_intercept::Interceptor;
///
/// struct ApiKeyInterceptor;
///
/// impl Interceptor for ApiKeyInterceptor {
///     fn on_request(&self, request: &mut RequestEnvelope) -> Result<(), InterceptorError> {
///         request
///             .headers_mut()
///             .insert("x-api-key", "secret".parse().unwrap());
///         Ok(())
///     }
/// }
/// ```
pub trait Interceptor: Send + Sync {
    /// Called with the mutable request before execution.
    fn on_request(&self, request: &mut RequestEnvelope) -> Result<(), InterceptorError> {
        let _ = request;
        Ok(())
    }

    /// Called with the original request and the mutable response after
    /// execution, before final decoding.
    fn on_response(
        &self,
        request: &RequestEnvelope,
        response: &mut ResponseEnvelope,
    ) -> Result<(), InterceptorError> {
        let _ = (request, response);
        Ok(())
    }
}
