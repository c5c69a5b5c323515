use thiserror::Error;

/// Root domain error type.
///
/// Domain errors describe malformed *input* to generation. They abort
/// resolution for the offending artifact before any byte of it is written;
/// they never describe I/O failures (those are `ApplicationError`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An additional class carries no parsable namespace declaration.
    #[error("class '{class}' has no parsable namespace declaration")]
    MissingNamespace { class: String },

    /// A namespace declares segments that do not form a valid directory
    /// path (empty segments, separators, parent-dir traversal).
    #[error("class '{class}' declares invalid namespace '{namespace}'")]
    InvalidNamespace { class: String, namespace: String },

    /// A class name would escape the source root.
    #[error("class name '{name}' escapes the source root")]
    UnsafeClassName { name: String },

    /// A resource name would escape the resources root.
    #[error("resource name '{name}' escapes the resources root")]
    UnsafeResourceName { name: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}
