//! # Hermes Core
//!
//! Core types and collaborator traits for the Hermes declarative HTTP
//! mapper.
//!
//! This crate provides the foundational types used throughout Hermes:
//!
//! - [`RequestEnvelope`] / [`ResponseEnvelope`] - Mutable, call-scoped request and response values
//! - [`BodyMap`] - Insertion-ordered multi-valued body container
//! - [`Transport`] - The synchronous execute collaborator
//! - [`Codec`] / [`JsonCodec`] - Payload parsing and form flattening
//! - [`HermesError`] - Standard error taxonomy

#![doc(html_root_url = "https://docs.rs/hermes-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod envelope;
mod error;
mod transport;

pub use codec::{Codec, JsonCodec};
pub use envelope::{BodyMap, RequestEnvelope, ResponseEnvelope, FORM_URLENCODED};
pub use error::{
    CodecError, ErrorKind, HermesError, HermesResult, InterceptorError, TransportError,
};
pub use transport::Transport;
