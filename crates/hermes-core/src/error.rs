//! Error types for Hermes.
//!
//! This module provides the [`HermesError`] type, the standard error type
//! used throughout the Hermes mapper engine.
//!
//! Every failure surfaces to the caller as a distinguishable [`ErrorKind`]
//! so that calling code can branch on category. The engine recovers no
//! errors locally: transport, codec, and interceptor failures propagate
//! unchanged, carrying the original cause.

use thiserror::Error;

/// Result type alias using [`HermesError`].
pub type HermesResult<T> = Result<T, HermesError>;

/// Categories of errors for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid endpoint metadata, duplicate registration,
    /// unregistered type lookup.
    Configuration,
    /// Missing named parameter, arity mismatch, or a missing body for a
    /// primitive return type.
    Binding,
    /// Network or transport failure from the execute step.
    Transport,
    /// Malformed payload that cannot be decoded or encoded.
    Codec,
    /// A hook-raised error from the interceptor chain.
    Interceptor,
}

impl ErrorKind {
    /// Returns the category name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Binding => "binding",
            Self::Transport => "transport",
            Self::Codec => "codec",
            Self::Interceptor => "interceptor",
        }
    }
}

/// Standard error type for Hermes.
///
/// # Example
///
/// ```
/// use hermes_core::{ErrorKind, HermesError};
///
/// let err = HermesError::binding("Parameter 'id' not found");
/// assert_eq!(err.kind(), ErrorKind::Binding);
/// ```
#[derive(Error, Debug)]
pub enum HermesError {
    /// Endpoint metadata or registry state is invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human-readable error message.
        message: String,
    },

    /// Parameter binding or return-type binding failed.
    #[error("Binding error: {message}")]
    Binding {
        /// Human-readable error message.
        message: String,
    },

    /// The transport collaborator failed to execute the request.
    #[error("Transport error")]
    Transport {
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The codec collaborator failed to decode or encode a payload.
    #[error("Codec error")]
    Codec {
        /// The underlying codec failure.
        #[source]
        source: CodecError,
    },

    /// An interceptor hook raised an error.
    #[error("Interceptor error")]
    Interceptor {
        /// The underlying hook failure.
        #[source]
        source: InterceptorError,
    },
}

impl HermesError {
    /// Creates a configuration error with a message.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a binding error with a message.
    #[must_use]
    pub fn binding(message: impl Into<String>) -> Self {
        Self::Binding {
            message: message.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Binding { .. } => ErrorKind::Binding,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Codec { .. } => ErrorKind::Codec,
            Self::Interceptor { .. } => ErrorKind::Interceptor,
        }
    }
}

impl From<TransportError> for HermesError {
    fn from(source: TransportError) -> Self {
        Self::Transport { source }
    }
}

impl From<CodecError> for HermesError {
    fn from(source: CodecError) -> Self {
        Self::Codec { source }
    }
}

impl From<InterceptorError> for HermesError {
    fn from(source: InterceptorError) -> Self {
        Self::Interceptor { source }
    }
}

/// A failure raised by the transport collaborator.
///
/// Transport errors are propagated unchanged to the caller and never
/// retried by the engine; retry policy belongs to the transport itself.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl TransportError {
    /// Creates a transport error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error with an underlying cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure raised by the codec collaborator.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CodecError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl CodecError {
    /// Creates a codec error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a codec error with an underlying cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An error raised by an interceptor hook.
///
/// The first failing hook aborts the remaining hooks of its phase and the
/// whole call.
#[derive(Debug)]
pub struct InterceptorError {
    /// Error message.
    pub message: String,
}

impl InterceptorError {
    /// Creates an interceptor error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InterceptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hook error: {}", self.message)
    }
}

impl std::error::Error for InterceptorError {}
