//! Application layer errors.
//!
//! These errors represent infrastructure failures during orchestration, not
//! malformed input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while driving generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. Fatal: aborts the remaining generation
    /// steps (files already written in this run stay on disk).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A shared adapter lock was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}
