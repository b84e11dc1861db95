//! Service layer error types
//!
//! Provides a unified error type for sync operations.

use std::fmt;
use std::path::PathBuf;

use roster_common::AppError;
use roster_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Port call failed
    Domain(DomainError),

    /// Snapshot file could not be written
    Snapshot { path: PathBuf, source: std::io::Error },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Snapshot { path, source } => {
                write!(f, "Failed to write snapshot {}: {source}", path.display())
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Snapshot { source, .. } => Some(source),
            Self::Internal(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a snapshot error
    pub fn snapshot(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Snapshot {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error code for log records
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Snapshot { .. } => "SNAPSHOT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Snapshot { path, source } => AppError::Domain(DomainError::Snapshot(
                format!("{}: {source}", path.display()),
            )),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
