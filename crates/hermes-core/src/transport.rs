//! Transport collaborator trait.
//!
//! The transport is supplied as an already-configured building block by the
//! host application. Connection pooling, retries, TLS, authentication, and
//! timeout or cancellation semantics all live behind this trait; the engine
//! performs exactly one `execute` per call and propagates failures
//! unchanged.

use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::error::TransportError;

/// Executes a fully built request and produces a decoded response.
///
/// `execute` is synchronous and is the only operation in the engine that
/// may block. Implementations must be safe to share across caller threads.
pub trait Transport: Send + Sync {
    /// Executes the request, returning status, headers, and body.
    fn execute(&self, request: &RequestEnvelope) -> Result<ResponseEnvelope, TransportError>;
}
