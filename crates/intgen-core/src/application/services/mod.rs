//! Application services - use-case orchestration.

pub mod generator;

pub use generator::{ArtifactGenerator, GeneratorConfig};
