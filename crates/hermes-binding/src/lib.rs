//! # Hermes Binding
//!
//! Endpoint metadata, parameter binding, and method descriptors for the
//! Hermes declarative HTTP mapper.
//!
//! This crate turns static per-method metadata into the immutable
//! [`MethodDescriptor`] the invocation engine caches, and binds positional
//! call arguments into the [`BoundParams`] the request builder consumes:
//!
//! - [`MapperMetadata`] / [`EndpointMetadata`] - Constant endpoint declarations
//! - [`ParamNameTable`] - Position-to-name resolution with declared/source/ordinal fallback
//! - [`NamedParams`] - Loud-failure parameter lookup for a single call
//! - [`MethodDescriptor`] - Resolved URL template, verb, content type, and return shape

#![doc(html_root_url = "https://docs.rs/hermes-binding/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod descriptor;
mod metadata;
mod names;
mod params;

pub use descriptor::MethodDescriptor;
pub use metadata::{
    EndpointMetadata, MapperMetadata, ParamSpec, ReturnKind, DEFAULT_CONTENT_TYPE,
};
pub use names::ParamNameTable;
pub use params::{BoundParams, NamedParams};
