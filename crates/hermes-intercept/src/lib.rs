//! # Hermes Intercept
//!
//! Path-mapped pre/post hooks around mapper calls.
//!
//! Interceptors are registered once at setup time as an ordered
//! [`InterceptorSet`] of [`MappedInterceptor`] entries, each scoped by
//! optional include/exclude glob patterns. Resolving a lookup path yields
//! an [`InterceptorChain`]: the matching entries in registration order,
//! whose request hooks run forward and whose response hooks run in
//! reverse.

#![doc(html_root_url = "https://docs.rs/hermes-intercept/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chain;
mod interceptor;
mod mapped;
mod set;

pub use chain::InterceptorChain;
pub use interceptor::Interceptor;
pub use mapped::MappedInterceptor;
pub use set::InterceptorSet;
