//! Error types for the PetMap client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire PetMap client.
///
/// Gateways translate transport failures and HTTP status codes into one of
/// these variants. The marker store and the normalizer never produce or
/// swallow them; they travel to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PetMapError {
    /// The request never reached the server (connect failure, timeout, DNS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server rejected the credentials (401/403)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The request was rejected as invalid (400), or failed local validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The resource already exists (409, sign-up only)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other unexpected status, or a payload that could not be understood
    #[error("Server error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Server {
        status: Option<u16>,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl PetMapError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a Server error carrying the HTTP status that caused it
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a Server error for a response body that could not be understood
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Server {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The message meant for the end user, without the variant prefix.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(m)
            | Self::Auth(m)
            | Self::Validation(m)
            | Self::Conflict(m)
            | Self::Config(m) => m,
            Self::Server { message, .. } | Self::Io { message } => message,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PetMapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, PetMapError>`.
pub type Result<T> = std::result::Result<T, PetMapError>;
