//! On-disk path resolution for generated artifacts.
//!
//! The asymmetry between the two class rules is intentional: primary classes
//! are entry points whose namespace is dictated by the enclosing
//! application's configured group id, while additional classes are
//! free-standing units that declare their own namespace inline.

use std::path::{Component, Path};

use crate::domain::{
    Conventions,
    entities::{common::RelativePath, resource::Resource, source::SourceClass},
    error::DomainError,
};

/// Maps model artifacts to paths relative to the output root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    conventions: &'static Conventions,
    app_group_id: String,
}

impl PathResolver {
    pub fn new(conventions: &'static Conventions, app_group_id: impl Into<String>) -> Self {
        Self {
            conventions,
            app_group_id: app_group_id.into(),
        }
    }

    /// The configured root namespace primary classes are placed under.
    pub fn app_group_id(&self) -> &str {
        &self.app_group_id
    }

    /// Path for an entry-point class:
    /// `<source_root>/<group id as dirs>/<Name>.<suffix>`.
    ///
    /// Fails when the configured group id does not form a valid namespace
    /// or the class name would escape the source root.
    pub fn primary_class_path(&self, class: &SourceClass) -> Result<RelativePath, DomainError> {
        self.class_path(&self.app_group_id, class.name())
    }

    /// Path for a self-declaring class:
    /// `<source_root>/<declared namespace as dirs>/<Name>.<suffix>`.
    ///
    /// Fails with [`DomainError::MissingNamespace`] when the class neither
    /// carries an explicit namespace nor declares one in its content; the
    /// generator must not write any file for it in that case.
    pub fn additional_class_path(&self, class: &SourceClass) -> Result<RelativePath, DomainError> {
        self.class_path(class.namespace()?, class.name())
    }

    /// Path for a resource: `<resources_root>/<name>`, subpaths preserved.
    ///
    /// Names that are absolute or contain parent-directory segments would
    /// escape the resources root and are rejected with
    /// [`DomainError::UnsafeResourceName`].
    pub fn resource_path(&self, resource: &Resource) -> Result<RelativePath, DomainError> {
        let name = Path::new(resource.name());
        let escapes = name.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes || resource.name().is_empty() {
            return Err(DomainError::UnsafeResourceName {
                name: resource.name().to_string(),
            });
        }
        RelativePath::new(self.conventions.resources_root).join(name)
    }

    /// Path of the serialized configuration file.
    pub fn config_file_path(&self) -> RelativePath {
        RelativePath::new(
            Path::new(self.conventions.resources_root).join(self.conventions.config_file),
        )
    }

    fn class_path(&self, namespace: &str, name: &str) -> Result<RelativePath, DomainError> {
        // A namespace like "." or "a..b" would turn into root or traversal
        // segments once the dots become separators.
        let segments_ok = !namespace.is_empty()
            && namespace
                .split('.')
                .all(|seg| !seg.is_empty() && !seg.contains(['/', '\\']));
        if !segments_ok {
            return Err(DomainError::InvalidNamespace {
                class: name.to_string(),
                namespace: namespace.to_string(),
            });
        }

        // The declared name is one plain file-name component, same rule the
        // resolver applies to resource names.
        let name_ok = !name.is_empty()
            && Path::new(name).components().count() == 1
            && Path::new(name)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !name_ok {
            return Err(DomainError::UnsafeClassName {
                name: name.to_string(),
            });
        }

        RelativePath::new(self.conventions.source_root)
            .join(namespace.replace('.', "/"))?
            .join(format!("{name}.{}", self.conventions.source_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Flavor;

    fn resolver() -> PathResolver {
        PathResolver::new(Flavor::Standard.conventions(), "com.example.app")
    }

    #[test]
    fn primary_path_uses_group_id() {
        let class = SourceClass::new("MainRoute", "package ignored.here;\nclass MainRoute {}");
        assert_eq!(
            resolver().primary_class_path(&class).unwrap().as_path(),
            Path::new("src/main/java/com/example/app/MainRoute.java")
        );
    }

    #[test]
    fn degenerate_namespace_is_an_error_not_a_panic() {
        // "." would become the filesystem root once dots turn into
        // separators; "a..b" would carry an empty segment.
        for content in ["package .;\nclass Foo {}", "package a..b;\nclass Foo {}"] {
            let class = SourceClass::new("Foo", content);
            assert!(
                matches!(
                    resolver().additional_class_path(&class),
                    Err(DomainError::InvalidNamespace { .. })
                ),
                "expected rejection for {content:?}"
            );
        }
    }

    #[test]
    fn namespace_with_separators_is_rejected() {
        let class = SourceClass::with_namespace("Foo", "x/../y.z", "class Foo {}");
        assert!(matches!(
            resolver().additional_class_path(&class),
            Err(DomainError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn degenerate_group_id_is_an_error_not_a_panic() {
        let resolver = PathResolver::new(Flavor::Standard.conventions(), ".");
        let class = SourceClass::new("MainRoute", "package a.b;\nclass MainRoute {}");
        assert!(matches!(
            resolver.primary_class_path(&class),
            Err(DomainError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn class_name_with_traversal_is_rejected() {
        for name in ["../../Evil", "a/b", "/Abs", "..", ""] {
            let class = SourceClass::with_namespace(name, "x.y", "class Evil {}");
            assert!(
                matches!(
                    resolver().additional_class_path(&class),
                    Err(DomainError::UnsafeClassName { .. })
                ),
                "expected rejection for {name:?}"
            );
        }
    }

    #[test]
    fn additional_path_uses_declared_namespace() {
        let class = SourceClass::new("Foo", "package x.y.z;\nclass Foo {}");
        assert_eq!(
            resolver().additional_class_path(&class).unwrap().as_path(),
            Path::new("src/main/java/x/y/z/Foo.java")
        );
    }

    #[test]
    fn additional_path_prefers_explicit_namespace() {
        let class = SourceClass::with_namespace("Foo", "a.b", "class Foo {}");
        assert_eq!(
            resolver().additional_class_path(&class).unwrap().as_path(),
            Path::new("src/main/java/a/b/Foo.java")
        );
    }

    #[test]
    fn additional_path_fails_without_namespace() {
        let class = SourceClass::new("Foo", "class Foo {}");
        assert!(matches!(
            resolver().additional_class_path(&class),
            Err(DomainError::MissingNamespace { .. })
        ));
    }

    #[test]
    fn resource_path_preserves_subdirs() {
        let resource = Resource::new("routes/main.xml", "<routes/>");
        assert_eq!(
            resolver().resource_path(&resource).unwrap().as_path(),
            Path::new("src/main/resources/routes/main.xml")
        );
    }

    #[test]
    fn resource_path_rejects_traversal() {
        for name in ["../escape.txt", "a/../../b.txt", "/etc/passwd", ""] {
            let resource = Resource::new(name, "");
            assert!(
                matches!(
                    resolver().resource_path(&resource),
                    Err(DomainError::UnsafeResourceName { .. })
                ),
                "expected rejection for {name:?}"
            );
        }
    }

    #[test]
    fn config_file_sits_under_resources_root() {
        assert_eq!(
            resolver().config_file_path().as_path(),
            Path::new("src/main/resources/application.properties")
        );
    }
}
