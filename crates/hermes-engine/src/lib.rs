//! # Hermes Engine
//!
//! The invocation engine behind declared mapper interfaces.
//!
//! Given an interface registered with static endpoint metadata, the
//! engine produces a callable [`MapperClient`] that, per method call:
//!
//! 1. binds positional arguments to declared parameter names,
//! 2. builds the outgoing request (URL expansion, headers, body),
//! 3. runs the path-matched interceptor chain's request hooks,
//! 4. re-applies content-type and read-verb normalization,
//! 5. executes the transport call,
//! 6. runs the response hooks in reverse order,
//! 7. decodes the body into the declared return type, and
//! 8. rejects an absent body for primitive returns.
//!
//! Exactly one transport call happens per invocation, and every failure
//! propagates as a distinguishable [`HermesError`](hermes_core::HermesError)
//! kind.

#![doc(html_root_url = "https://docs.rs/hermes-engine/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dispatcher;
pub mod request;
mod registry;

pub use config::{HermesConfig, HermesConfigBuilder};
pub use dispatcher::MapperClient;
pub use registry::{Mapper, MapperRegistry};
