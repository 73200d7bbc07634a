//! Error types for the animales API client.
//!
//! # Design
//! Callers treat every variant as "the request failed": views show one
//! generic message per action. The variants exist so logs can say what went
//! wrong, not so callers can branch on them.

use thiserror::Error;

/// Errors returned by `AnimalClient` parse methods and by transports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
