//! Domain errors - error types shared by the adapters and the reconciler

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Remote API Errors
    // =========================================================================
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("{service} responded with status {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Unexpected {service} response shape: {message}")]
    Shape {
        service: &'static str,
        message: String,
    },

    // =========================================================================
    // Credentials
    // =========================================================================
    #[error("Token unavailable: {0}")]
    Token(String),

    // =========================================================================
    // Local Persistence
    // =========================================================================
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl DomainError {
    /// Create a transport error
    pub fn transport(service: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            service,
            message: message.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(service: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            service,
            status,
            body: body.into(),
        }
    }

    /// Create a response shape error
    pub fn shape(service: &'static str, message: impl Into<String>) -> Self {
        Self::Shape {
            service,
            message: message.into(),
        }
    }

    /// Get an error code string for logs and reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Status { .. } => "HTTP_STATUS_ERROR",
            Self::Shape { .. } => "SHAPE_ERROR",
            Self::Token(_) => "TOKEN_ERROR",
            Self::Snapshot(_) => "SNAPSHOT_ERROR",
        }
    }

    /// Check if a response arrived but did not have the expected structure
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }

    /// HTTP status, when the error came from a non-success response
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
