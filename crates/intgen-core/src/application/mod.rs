//! Application layer for intgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ArtifactGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All path-derivation and escaping rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export the orchestrator
pub use services::{ArtifactGenerator, GeneratorConfig};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
