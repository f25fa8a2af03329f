//! Call-scoped request and response envelopes.
//!
//! Envelopes are mutable value objects owned exclusively by a single
//! in-flight call. Interceptors receive them by mutable reference and may
//! rewrite the URL, headers, and body before execution; they are never
//! shared across calls or threads, so no locking is required.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Content type for URL-encoded form bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// An insertion-ordered, multi-valued body container.
///
/// Each parameter name maps to one or more values. Iteration order is the
/// order in which names were first inserted, so the outgoing body is
/// deterministic for a given binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyMap {
    entries: IndexMap<String, Vec<Value>>,
}

impl BodyMap {
    /// Creates an empty body map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all values for `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), vec![value]);
    }

    /// Replaces entries from an iterator of single values, keeping other
    /// existing entries untouched.
    pub fn set_all<I, K>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (name, value) in values {
            self.set(name, value);
        }
    }

    /// Appends a value for `name`, preserving existing values.
    pub fn add(&mut self, name: impl Into<String>, value: Value) {
        self.entries.entry(name.into()).or_default().push(value);
    }

    /// Returns the first value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(|values| values.first())
    }

    /// Returns all values for `name`.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&[Value]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Iterates over `(name, values)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Applies `f` to every value in place.
    pub fn map_values_in_place(&mut self, mut f: impl FnMut(&str, &mut Value)) {
        for (name, values) in &mut self.entries {
            for value in values {
                f(name, value);
            }
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for BodyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if values.len() == 1 {
                write!(f, "{name}={}", values[0])?;
            } else {
                write!(f, "{name}={values:?}")?;
            }
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for BodyMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.set_all(iter);
        map
    }
}

/// The outgoing request under construction.
///
/// Created fresh per invocation by the request builder and discarded when
/// the call completes.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    verb: Method,
    url: String,
    headers: HeaderMap,
    body: BodyMap,
}

impl RequestEnvelope {
    /// Creates a request envelope.
    #[must_use]
    pub fn new(verb: Method, url: impl Into<String>) -> Self {
        Self {
            verb,
            url: url.into(),
            headers: HeaderMap::new(),
            body: BodyMap::new(),
        }
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Replaces the HTTP verb.
    pub fn set_verb(&mut self, verb: Method) {
        self.verb = verb;
    }

    /// Returns the request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the request URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the request headers for mutation.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Sets the `Content-Type` header, replacing any existing value.
    pub fn set_content_type(&mut self, content_type: &str) {
        if let Ok(value) = HeaderValue::from_str(content_type) {
            self.headers.insert(CONTENT_TYPE, value);
        }
    }

    /// Returns the current `Content-Type` header value, if readable.
    ///
    /// Interceptors may rewrite the header mid-call, so callers re-read it
    /// rather than caching the declared content type.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Returns `true` if the current content type is URL-encoded form data.
    #[must_use]
    pub fn is_form_urlencoded(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.starts_with(FORM_URLENCODED))
    }

    /// Returns the request body.
    #[must_use]
    pub fn body(&self) -> &BodyMap {
        &self.body
    }

    /// Returns the request body for mutation.
    pub fn body_mut(&mut self) -> &mut BodyMap {
        &mut self.body
    }
}

impl fmt::Display for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {},{},{:?}>", self.verb, self.url, self.body, self.headers)
    }
}

/// The decoded response handed to post-hooks and the final decode step.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Value>,
}

impl ResponseEnvelope {
    /// Creates a response envelope.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Option<Value>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Replaces the HTTP status.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Returns the response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the response headers for mutation.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the response body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Replaces the response body.
    pub fn set_body(&mut self, body: Option<Value>) {
        self.body = body;
    }

    /// Consumes the envelope, returning the body.
    #[must_use]
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Indicates whether this response has a body.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.status)?;
        if let Some(body) = &self.body {
            write!(f, ",{body}")?;
        }
        write!(f, ",{:?}>", self.headers)
    }
}
