//! Core domain layer for intgen.
//!
//! Pure business logic with no I/O: the build model and its contents, the
//! flavor conventions table, path resolution, and the properties codec. All
//! filesystem concerns go through ports (traits) defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Append-only model**: mutation surfaces add, never remove

pub mod entities;
pub mod error;
pub mod flavor;
pub mod paths;
pub mod properties;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    model::{BuildModel, Hook},
    resource::Resource,
    source::SourceClass,
};

pub use error::DomainError;

pub use flavor::{Conventions, Flavor, NATIVE_RESOURCE_SEPARATOR};

pub use validation::missing_imports;

#[cfg(test)]
mod tests {
    use super::*;
    use super::paths::PathResolver;
    use std::path::Path;

    // Cross-cutting checks: model contents flowing through the resolver the
    // way the generator drives them.

    #[test]
    fn hook_added_resource_resolves_like_any_other() {
        let mut model = BuildModel::new();
        model.add_hook(|m| m.add_resource(Resource::new("late/file.txt", "added in hook")));

        while let Some(hook) = model.take_next_hook() {
            hook.run(&mut model);
        }

        let resolver = PathResolver::new(Flavor::Standard.conventions(), "a.b");
        let path = resolver.resource_path(&model.resources()[0]).unwrap();
        assert_eq!(path.as_path(), Path::new("src/main/resources/late/file.txt"));
    }

    #[test]
    fn native_key_accumulates_in_model_configuration() {
        let mut model = BuildModel::new();
        let key = Flavor::Native.conventions().native_resource_key.unwrap();
        model.append_property(key, "first.txt", NATIVE_RESOURCE_SEPARATOR);
        model.append_property(key, "second.txt", NATIVE_RESOURCE_SEPARATOR);

        assert_eq!(model.property(key), Some("first.txt,second.txt"));
        // and it serializes as a single escaped line
        let text = properties::serialize(model.configuration());
        assert_eq!(
            text,
            "quarkus.native.resources.includes=first.txt,second.txt\n"
        );
    }

    #[test]
    fn two_classes_may_collide_on_path() {
        // Conflicting paths are not a domain error; the writer's
        // last-write-wins policy handles them.
        let resolver = PathResolver::new(Flavor::Standard.conventions(), "a.b");
        let one = SourceClass::with_namespace("Dup", "x.y", "class Dup { int one; }");
        let two = SourceClass::with_namespace("Dup", "x.y", "class Dup { int two; }");
        assert_eq!(
            resolver.additional_class_path(&one).unwrap(),
            resolver.additional_class_path(&two).unwrap()
        );
    }
}
