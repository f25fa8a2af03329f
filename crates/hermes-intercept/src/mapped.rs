//! Path-mapped interceptor entries.

use crate::interceptor::Interceptor;
use hermes_pattern::PathMatcher;
use std::sync::Arc;

/// An interceptor together with the path patterns that scope it.
///
/// Immutable once the containing set is assembled. Matching rules:
///
/// - any matching exclude pattern disqualifies the entry outright,
///   independent of include patterns;
/// - with no include patterns configured the entry matches every path;
/// - otherwise at least one include pattern must match.
pub struct MappedInterceptor {
    include_patterns: Option<Vec<String>>,
    exclude_patterns: Option<Vec<String>>,
    interceptor: Arc<dyn Interceptor>,
    path_matcher: Option<Arc<dyn PathMatcher>>,
}

impl MappedInterceptor {
    /// Maps an interceptor to every path.
    #[must_use]
    pub fn global(interceptor: Arc<dyn Interceptor>) -> Self {
        Self {
            include_patterns: None,
            exclude_patterns: None,
            interceptor,
            path_matcher: None,
        }
    }

    /// Maps an interceptor to the given include patterns.
    #[must_use]
    pub fn on_paths(
        interceptor: Arc<dyn Interceptor>,
        include_patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            include_patterns: Some(include_patterns.into_iter().map(Into::into).collect()),
            exclude_patterns: None,
            interceptor,
            path_matcher: None,
        }
    }

    /// Adds exclude patterns; a matching exclude wins over any include.
    #[must_use]
    pub fn excluding(
        mut self,
        exclude_patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_patterns = Some(exclude_patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the path matcher for this entry alone.
    ///
    /// Only needed when this entry's patterns use a syntax other than the
    /// default glob style.
    #[must_use]
    pub fn with_path_matcher(mut self, matcher: Arc<dyn PathMatcher>) -> Self {
        self.path_matcher = Some(matcher);
        self
    }

    /// Returns the mapped interceptor instance.
    #[must_use]
    pub fn interceptor(&self) -> &Arc<dyn Interceptor> {
        &self.interceptor
    }

    /// Returns the include patterns, if any were configured.
    #[must_use]
    pub fn include_patterns(&self) -> Option<&[String]> {
        self.include_patterns.as_deref()
    }

    /// Returns `true` if this entry applies to the given lookup path.
    #[must_use]
    pub fn matches(&self, lookup_path: &str, default_matcher: &dyn PathMatcher) -> bool {
        let matcher = self
            .path_matcher
            .as_deref()
            .unwrap_or(default_matcher);

        if let Some(excludes) = &self.exclude_patterns {
            if excludes.iter().any(|p| matcher.matches(p, lookup_path)) {
                return false;
            }
        }
        match &self.include_patterns {
            None => true,
            Some(includes) => includes.iter().any(|p| matcher.matches(p, lookup_path)),
        }
    }
}
