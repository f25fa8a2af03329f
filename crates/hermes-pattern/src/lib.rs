//! # Hermes Pattern
//!
//! Hierarchical glob path-pattern matching for the Hermes mapper.
//!
//! Patterns use the conventional glob semantics for URL paths:
//!
//! - literal segments match exactly (`/api/users`)
//! - `*` matches exactly one path segment, and acts as a wildcard within a
//!   segment (`/files/report-*`)
//! - `**` matches zero or more path segments (`/api/**`)
//!
//! The matcher is stateless; a single [`GlobMatcher`] instance can be
//! shared freely across threads.

#![doc(html_root_url = "https://docs.rs/hermes-pattern/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod glob;

pub use glob::GlobMatcher;

/// Decides whether a path pattern applies to a request lookup path.
///
/// A custom implementation can be attached to an individual interceptor
/// entry when its patterns use a syntax other than the default glob style.
pub trait PathMatcher: Send + Sync {
    /// Returns `true` if `pattern` matches `path`.
    fn matches(&self, pattern: &str, path: &str) -> bool;
}

/// Normalizes a URL or URL template to its path component.
///
/// Interceptor patterns are written against request paths, while endpoint
/// URL templates usually carry a scheme and authority. This strips the
/// scheme, authority, query, and fragment, leaving the lookup path used
/// for pattern matching.
///
/// # Example
///
/// ```
/// use hermes_pattern::lookup_path;
///
/// assert_eq!(lookup_path("http://api.example.com/users/{id}?x=1"), "/users/{id}");
/// assert_eq!(lookup_path("/users/{id}"), "/users/{id}");
/// assert_eq!(lookup_path("http://api.example.com"), "/");
/// ```
#[must_use]
pub fn lookup_path(url: &str) -> &str {
    let after_scheme = url
        .find("://")
        .map_or(url, |scheme_end| {
            let authority = &url[scheme_end + 3..];
            authority
                .find('/')
                .map_or("/", |path_start| &authority[path_start..])
        });
    let end = after_scheme
        .find(['?', '#'])
        .unwrap_or(after_scheme.len());
    let path = &after_scheme[..end];
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
