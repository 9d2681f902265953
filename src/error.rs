//! Unified error type for the gateway.
//!
//! Every component funnels its failures into [`Error`], which carries enough
//! context for the HTTP layer to pick a status code via [`Error::http_status`]
//! and to decide what the caller is allowed to see.

use std::fmt;

/// Unified error type covering all failure modes in reelgate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required request parameter is missing or invalid.
    #[error("{0}")]
    Client(String),

    /// A call to the upstream provider failed, returned a non-success status
    /// or a body that could not be decoded.
    #[error("Upstream error [{operation}]: {source}")]
    Upstream {
        /// Name of the provider operation (e.g. "core_record").
        operation: &'static str,
        /// The underlying cause. Never shown to callers.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A locally owned entity could not be found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity (e.g. "game").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Catch-all for shaping or assembly defects.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    ///
    /// Upstream failures are always 500, including an upstream 404.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Client(_) => 400,
            Error::NotFound { .. } => 404,
            Error::Upstream { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Message safe to expose in a response body.
    pub fn public_message(&self) -> String {
        match self {
            Error::Client(msg) => msg.clone(),
            Error::NotFound { entity, .. } => format!("{} not found", capitalize(entity)),
            Error::Upstream { .. } | Error::Internal(_) => "Internal Server Error".to_string(),
        }
    }

    /// Convenience constructor for [`Error::Upstream`].
    pub fn upstream(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Upstream {
            operation,
            source: source.into(),
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Client`].
    pub fn client(message: impl Into<String>) -> Self {
        Error::Client(message.into())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
