//! The registered interceptor set.

use crate::chain::InterceptorChain;
use crate::mapped::MappedInterceptor;
use hermes_pattern::PathMatcher;

/// The ordered list of registered interceptor entries.
///
/// Assembled once by the surrounding configuration layer, outside the
/// call path, then treated as read-only. Resolution produces the ordered
/// subsequence of entries matching a lookup path.
#[derive(Default)]
pub struct InterceptorSet {
    entries: Vec<MappedInterceptor>,
}

impl InterceptorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entry. Registration order is execution order for the
    /// request phase and reverse execution order for the response phase.
    pub fn register(&mut self, entry: MappedInterceptor) {
        self.entries.push(entry);
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the chain of entries matching `lookup_path`.
    ///
    /// Matching is independent of per-call argument values, so the chain
    /// for a given path is deterministic.
    #[must_use]
    pub fn resolve(
        &self,
        lookup_path: &str,
        default_matcher: &dyn PathMatcher,
    ) -> InterceptorChain {
        let mut chain = InterceptorChain::new();
        for entry in &self.entries {
            if entry.matches(lookup_path, default_matcher) {
                chain.push(entry.interceptor().clone());
            }
        }
        chain
    }
}

impl FromIterator<MappedInterceptor> for InterceptorSet {
    fn from_iter<I: IntoIterator<Item = MappedInterceptor>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
