//! Resolved interceptor execution chain.

use crate::interceptor::Interceptor;
use hermes_core::{InterceptorError, RequestEnvelope, ResponseEnvelope};
use std::sync::Arc;

/// The ordered interceptors that apply to one endpoint's lookup path.
///
/// Resolved once per method descriptor, outside the hot call path, and
/// shared read-only by every call to that method afterwards.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interceptor to the chain.
    pub fn push(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Returns the number of interceptors in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns `true` if no interceptors matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Runs the request phase in registration order.
    ///
    /// Each hook may mutate the request; the first error aborts the phase.
    pub fn on_request(&self, request: &mut RequestEnvelope) -> Result<(), InterceptorError> {
        for interceptor in &self.interceptors {
            interceptor.on_request(request)?;
        }
        Ok(())
    }

    /// Runs the response phase in reverse registration order.
    ///
    /// The first error aborts the phase.
    pub fn on_response(
        &self,
        request: &RequestEnvelope,
        response: &mut ResponseEnvelope,
    ) -> Result<(), InterceptorError> {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.on_response(request, response)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method, StatusCode};
    use std::sync::Mutex;

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        fail_on_request: bool,
    }

    impl Interceptor for Recording {
        fn on_request(&self, _request: &mut RequestEnvelope) -> Result<(), InterceptorError> {
            if self.fail_on_request {
                return Err(InterceptorError::new(format!("{} rejected", self.name)));
            }
            self.log.lock().unwrap().push(format!("req:{}", self.name));
            Ok(())
        }

        fn on_response(
            &self,
            _request: &RequestEnvelope,
            _response: &mut ResponseEnvelope,
        ) -> Result<(), InterceptorError> {
            self.log.lock().unwrap().push(format!("res:{}", self.name));
            Ok(())
        }
    }

    fn chain_of(entries: Vec<Recording>) -> InterceptorChain {
        let mut chain = InterceptorChain::new();
        for entry in entries {
            chain.push(Arc::new(entry));
        }
        chain
    }

    #[test]
    fn test_request_phase_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = chain_of(vec![
            Recording {
                name: "a",
                log: log.clone(),
                fail_on_request: false,
            },
            Recording {
                name: "b",
                log: log.clone(),
                fail_on_request: false,
            },
        ]);

        let mut request = RequestEnvelope::new(Method::GET, "/x");
        chain.on_request(&mut request).unwrap();

        let mut response = ResponseEnvelope::new(StatusCode::OK, HeaderMap::new(), None);
        chain.on_response(&request, &mut response).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["req:a", "req:b", "res:b", "res:a"]
        );
    }

    #[test]
    fn test_failing_hook_aborts_phase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = chain_of(vec![
            Recording {
                name: "a",
                log: log.clone(),
                fail_on_request: true,
            },
            Recording {
                name: "b",
                log: log.clone(),
                fail_on_request: false,
            },
        ]);

        let mut request = RequestEnvelope::new(Method::GET, "/x");
        let err = chain.on_request(&mut request).unwrap_err();
        assert!(err.message.contains("a rejected"));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_chain() {
        let chain = InterceptorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);

        let mut request = RequestEnvelope::new(Method::GET, "/x");
        assert!(chain.on_request(&mut request).is_ok());
    }
}
