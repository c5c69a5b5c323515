//! Artifact generator - main application orchestrator.
//!
//! Coordinates the whole generation run:
//! 1. Run pre-generation hooks against the live model
//! 2. Create the conventional directory skeleton
//! 3. Write primary classes, additional classes, resources
//! 4. Serialize the configuration file
//!
//! All steps are side-effecting and none is reversible: there is no
//! transactional rollback, and the first fatal error aborts the remaining
//! steps leaving earlier writes in place. Two artifacts resolving to the
//! same path are not an error; the later write silently wins.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        BuildModel, Flavor, NATIVE_RESOURCE_SEPARATOR, RelativePath, missing_imports,
        paths::PathResolver, properties,
    },
    error::IntgenResult,
};

/// Application-level generation settings.
///
/// `app_group_id` is the root namespace (e.g. `com.example.app`) that every
/// primary class is placed under, regardless of what its own source text
/// declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    app_group_id: String,
}

impl GeneratorConfig {
    pub fn new(app_group_id: impl Into<String>) -> Self {
        Self {
            app_group_id: app_group_id.into(),
        }
    }

    pub fn app_group_id(&self) -> &str {
        &self.app_group_id
    }
}

/// Materializes a [`BuildModel`] into a project file tree.
///
/// Single-threaded and synchronous. Not reentrant-safe for the same output
/// root from concurrent callers (no locking around directory/file creation);
/// disjoint output roots are safe. Re-running with an unchanged model
/// reproduces byte-identical files; stale files from earlier runs are left
/// untouched (no pruning).
pub struct ArtifactGenerator {
    filesystem: Box<dyn Filesystem>,
    config: GeneratorConfig,
}

impl ArtifactGenerator {
    /// Create a generator with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>, config: GeneratorConfig) -> Self {
        Self { filesystem, config }
    }

    /// Generate the full file tree for `model` under `output_root`.
    #[instrument(
        skip_all,
        fields(
            flavor = %flavor,
            output_root = %output_root.display()
        )
    )]
    pub fn generate(
        &self,
        model: &mut BuildModel,
        flavor: Flavor,
        output_root: &Path,
    ) -> IntgenResult<()> {
        info!(
            group_id = %self.config.app_group_id,
            "Generating integration project"
        );

        // 1. Hooks observe and mutate the live model, strictly before any
        //    file is written. Hooks queued by running hooks execute too.
        self.run_hooks(model);

        let conventions = flavor.conventions();
        let resolver = PathResolver::new(conventions, self.config.app_group_id());

        // 2. Conventional skeleton, idempotent.
        self.filesystem
            .create_dir_all(&output_root.join(conventions.source_root))?;
        self.filesystem
            .create_dir_all(&output_root.join(conventions.resources_root))?;

        // 3-5. Classes, then resources (with the flavor side effect).
        self.write_primary_classes(model, &resolver, output_root)?;
        self.write_additional_classes(model, &resolver, output_root)?;
        self.write_resources(model, &resolver, output_root, conventions.native_resource_key)?;

        // 6. Configuration file, only when there is something to serialize.
        self.write_configuration(model, &resolver, output_root)?;

        info!("Generation completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal steps, in run order
    // -------------------------------------------------------------------------

    fn run_hooks(&self, model: &mut BuildModel) {
        let mut executed = 0usize;
        while let Some(hook) = model.take_next_hook() {
            hook.run(model);
            executed += 1;
        }
        if executed > 0 {
            debug!(hooks = executed, "Pre-generation hooks applied");
        }
    }

    fn write_primary_classes(
        &self,
        model: &BuildModel,
        resolver: &PathResolver,
        output_root: &Path,
    ) -> IntgenResult<()> {
        // Producer-side contract: content is written verbatim, so imports
        // for foreign-namespace additional classes must already be present.
        for qualified in missing_imports(model, self.config.app_group_id()) {
            warn!(
                import = %qualified,
                "Primary class references an additional class without importing it"
            );
        }

        for class in model.primary_classes() {
            let path = resolver.primary_class_path(class)?;
            self.write_at(output_root, &path, class.content())?;
            debug!(class = class.name(), path = %path, "Primary class written");
        }
        Ok(())
    }

    fn write_additional_classes(
        &self,
        model: &BuildModel,
        resolver: &PathResolver,
        output_root: &Path,
    ) -> IntgenResult<()> {
        for class in model.additional_classes() {
            // An unresolvable namespace aborts before any byte of this
            // class's file hits disk.
            let path = resolver.additional_class_path(class)?;
            self.write_at(output_root, &path, class.content())?;
            debug!(class = class.name(), path = %path, "Additional class written");
        }
        Ok(())
    }

    fn write_resources(
        &self,
        model: &mut BuildModel,
        resolver: &PathResolver,
        output_root: &Path,
        native_resource_key: Option<&'static str>,
    ) -> IntgenResult<()> {
        for idx in 0..model.resources().len() {
            let resource = model.resources()[idx].clone();
            let path = resolver.resource_path(&resource)?;
            self.write_at(output_root, &path, resource.content())?;
            debug!(resource = resource.name(), path = %path, "Resource written");

            if let Some(key) = native_resource_key {
                model.append_property(key, resource.name(), NATIVE_RESOURCE_SEPARATOR);
            }
        }
        Ok(())
    }

    fn write_configuration(
        &self,
        model: &BuildModel,
        resolver: &PathResolver,
        output_root: &Path,
    ) -> IntgenResult<()> {
        if model.configuration().is_empty() {
            debug!("Configuration empty, skipping properties file");
            return Ok(());
        }
        let text = properties::serialize(model.configuration());
        let path = resolver.config_file_path();
        self.write_at(output_root, &path, &text)?;
        debug!(entries = model.configuration().len(), path = %path, "Configuration written");
        Ok(())
    }

    /// Write verbatim content at `output_root`/`path`, creating parents.
    fn write_at(&self, output_root: &Path, path: &RelativePath, content: &str) -> IntgenResult<()> {
        let full = output_root.join(path.as_path());
        if let Some(parent) = full.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&full, content)
    }
}
