//! Engine configuration.
//!
//! Configuration is constructed once via [`HermesConfigBuilder`] and
//! frozen before the first call is dispatched. Every component receives
//! it by shared reference; there is no global mutable state.

use hermes_core::{Codec, HermesError, HermesResult, JsonCodec, Transport};
use hermes_intercept::InterceptorSet;
use hermes_pattern::{GlobMatcher, PathMatcher};
use std::sync::Arc;

/// Frozen configuration for the invocation engine.
///
/// # Example
///
/// ```no_run
/// use hermes_engine::HermesConfig;
/// use hermes_core::Transport;
/// use std::sync::Arc;
///
/// # fn transport() -> Arc<dyn Transport> { unimplemented!() }
/// let config = HermesConfig::builder()
///     .base_url("http://api.example.com")
///     .transport(transport())
///     .build()
///     .unwrap();
/// ```
pub struct HermesConfig {
    base_url: Option<String>,
    use_source_param_names: bool,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn Codec>,
    interceptors: InterceptorSet,
    path_matcher: Arc<dyn PathMatcher>,
}

impl std::fmt::Debug for HermesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HermesConfig")
            .field("base_url", &self.base_url)
            .field("use_source_param_names", &self.use_source_param_names)
            .finish_non_exhaustive()
    }
}

impl HermesConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> HermesConfigBuilder {
        HermesConfigBuilder::new()
    }

    /// Returns the globally configured base URL, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Returns `true` if introspected source parameter names are used as
    /// a naming fallback.
    #[must_use]
    pub fn use_source_param_names(&self) -> bool {
        self.use_source_param_names
    }

    /// Returns the transport collaborator.
    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Returns the codec collaborator.
    #[must_use]
    pub fn codec(&self) -> &dyn Codec {
        self.codec.as_ref()
    }

    /// Returns the registered interceptor entries.
    #[must_use]
    pub fn interceptors(&self) -> &InterceptorSet {
        &self.interceptors
    }

    /// Returns the default path matcher.
    #[must_use]
    pub fn path_matcher(&self) -> &dyn PathMatcher {
        self.path_matcher.as_ref()
    }
}

/// Builder for [`HermesConfig`].
pub struct HermesConfigBuilder {
    base_url: Option<String>,
    use_source_param_names: bool,
    transport: Option<Arc<dyn Transport>>,
    codec: Arc<dyn Codec>,
    interceptors: InterceptorSet,
    path_matcher: Arc<dyn PathMatcher>,
}

impl HermesConfigBuilder {
    /// Creates a builder with the default codec, matcher, and an empty
    /// interceptor set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: None,
            use_source_param_names: true,
            transport: None,
            codec: Arc::new(JsonCodec::new()),
            interceptors: InterceptorSet::new(),
            path_matcher: Arc::new(GlobMatcher::new()),
        }
    }

    /// Sets the global base URL applied to mappers that declare none.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Enables or disables the source-parameter-name fallback. Enabled by
    /// default.
    #[must_use]
    pub fn use_source_param_names(mut self, enabled: bool) -> Self {
        self.use_source_param_names = enabled;
        self
    }

    /// Sets the transport collaborator. Required.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the default JSON codec.
    #[must_use]
    pub fn codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = codec;
        self
    }

    /// Supplies the assembled interceptor entries.
    #[must_use]
    pub fn interceptors(mut self, interceptors: InterceptorSet) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Replaces the default glob path matcher.
    #[must_use]
    pub fn path_matcher(mut self, matcher: Arc<dyn PathMatcher>) -> Self {
        self.path_matcher = matcher;
        self
    }

    /// Freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no transport was supplied.
    pub fn build(self) -> HermesResult<HermesConfig> {
        let transport = self
            .transport
            .ok_or_else(|| HermesError::configuration("a transport is required"))?;
        Ok(HermesConfig {
            base_url: self.base_url,
            use_source_param_names: self.use_source_param_names,
            transport,
            codec: self.codec,
            interceptors: self.interceptors,
            path_matcher: self.path_matcher,
        })
    }
}

impl Default for HermesConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
