//! Unified error handling for Reconchain Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Reconchain Core operations.
#[derive(Debug, Error, Clone)]
pub enum ReconError {
    /// Errors from the domain layer (invalid input values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, external tools, input).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl ReconError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input.
    Validation,
    /// An external tool exited unsuccessfully or could not be started.
    ExternalTool,
    /// Filesystem or other system failure.
    Internal,
}

/// Convenient result type alias.
pub type ReconResult<T> = Result<T, ReconError>;
