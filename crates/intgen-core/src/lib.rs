//! Intgen Core - integration-project artifact generation
//!
//! This crate provides the domain and application layers of the intgen
//! generator: an in-memory [`BuildModel`](domain::BuildModel) describing a
//! generated integration application (route-handling classes, auxiliary
//! classes, resources, configuration, pre-generation hooks) is materialized
//! into a runnable project tree on disk by the
//! [`ArtifactGenerator`](application::ArtifactGenerator).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              Caller                     │
//! │   builds a BuildModel, picks a Flavor   │
//! └──────────────────┬──────────────────────┘
//!                    │ generate(model, flavor, output_root)
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ArtifactGenerator              │
//! │  runs hooks, resolves paths, writes     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Filesystem)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    intgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use intgen_core::{
//!     application::{ArtifactGenerator, GeneratorConfig},
//!     domain::{BuildModel, Flavor, Resource, SourceClass},
//! };
//! # fn filesystem() -> Box<dyn intgen_core::application::ports::Filesystem> { unimplemented!() }
//!
//! // 1. Build the model
//! let mut model = BuildModel::new();
//! model.add_primary_class(SourceClass::new("MyRoute", "package a.b.c;\n..."));
//! model.add_resource(Resource::new("routes/my-route.xml", "<routes/>"));
//!
//! // 2. Generate (with an injected filesystem adapter)
//! let generator = ArtifactGenerator::new(filesystem(), GeneratorConfig::new("a.b.c"));
//! generator.generate(&mut model, Flavor::Standard, "./output".as_ref()).unwrap();
//! ```

// Domain layer (model, paths, flavors - pure logic)
pub mod domain;

// Application layer (orchestration + ports)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactGenerator, GeneratorConfig,
        ports::Filesystem,
    };
    pub use crate::domain::{
        BuildModel, Conventions, Flavor, Hook, RelativePath, Resource, SourceClass,
        paths::PathResolver,
    };
    pub use crate::error::{IntgenError, IntgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
