//! Unified error handling for Intgen Core.
//!
//! A single enum wraps domain errors (malformed input) and application
//! errors (infrastructure failure). All failures propagate synchronously to
//! the caller of `generate`: no retries, no partial-success reporting - the
//! caller sees success or the first fatal error in step order.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Intgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum IntgenError {
    /// Malformed model input (unparsable namespace, unsafe resource name).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure failure (filesystem write, lock poisoning).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// Convenient result type alias.
pub type IntgenResult<T> = Result<T, IntgenError>;
