//! The in-memory build model.
//!
//! A [`BuildModel`] is the full description of one generated integration
//! application: its entry-point classes, auxiliary classes, resource files,
//! flat key/value configuration, and the hooks to run right before
//! generation. It is pure data plus accessors - all generation logic lives
//! in the application layer.

use std::collections::BTreeMap;
use std::fmt;

use super::{resource::Resource, source::SourceClass};

/// A deferred mutation applied to the model immediately before any file is
/// written.
///
/// Plain callable, no trait hierarchy: a hook receives a mutable handle to
/// the *same* model instance the generator subsequently serializes and may
/// call any of its mutation methods. It sees neither the output root nor the
/// flavor, and runs exactly once.
pub struct Hook(Box<dyn FnOnce(&mut BuildModel) + Send>);

impl Hook {
    pub fn new(f: impl FnOnce(&mut BuildModel) + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Consume the hook, applying it to the model.
    pub fn run(self, model: &mut BuildModel) {
        (self.0)(model)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// In-memory representation of the application being generated.
///
/// Collections are append-only: there is one mutation method per collection
/// and no removal operations. Configuration keys are unique; insertion order
/// is irrelevant (a `BTreeMap` keeps serialization deterministic so repeated
/// generation runs reproduce byte-identical files).
///
/// Owned by the caller until handed to generation; the generator reads it
/// and, through hooks, triggers further mutation of the same instance. Not
/// meant to be shared across threads during a run.
#[derive(Debug, Default)]
pub struct BuildModel {
    primary_classes: Vec<SourceClass>,
    additional_classes: Vec<SourceClass>,
    resources: Vec<Resource>,
    configuration: BTreeMap<String, String>,
    hooks: Vec<Hook>,
}

impl BuildModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ── mutation surface (one method per collection) ─────────────────────

    /// Append an entry-point class. Its namespace is dictated by the
    /// configured application group id, not by its own source text.
    pub fn add_primary_class(&mut self, class: SourceClass) {
        self.primary_classes.push(class);
    }

    /// Append a free-standing class that declares its own namespace.
    pub fn add_additional_class(&mut self, class: SourceClass) {
        self.additional_classes.push(class);
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Insert or replace a configuration entry.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.configuration.insert(key.into(), value.into());
    }

    /// Merge a value into a configuration entry.
    ///
    /// Creates the entry when absent; otherwise appends `separator` followed
    /// by `value` to the existing value. Values accumulate in call order and
    /// are not deduplicated.
    pub fn append_property(&mut self, key: impl Into<String>, value: &str, separator: &str) {
        self.configuration
            .entry(key.into())
            .and_modify(|existing| {
                existing.push_str(separator);
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Register a pre-generation hook. Hooks run in registration order,
    /// strictly before any file is written.
    pub fn add_hook(&mut self, f: impl FnOnce(&mut BuildModel) + Send + 'static) {
        self.hooks.push(Hook::new(f));
    }

    // ── read accessors ───────────────────────────────────────────────────

    pub fn primary_classes(&self) -> &[SourceClass] {
        &self.primary_classes
    }

    pub fn additional_classes(&self) -> &[SourceClass] {
        &self.additional_classes
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn configuration(&self) -> &BTreeMap<String, String> {
        &self.configuration
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.configuration.get(key).map(String::as_str)
    }

    /// Remove and return the next queued hook.
    ///
    /// Popping from the front keeps registration order and lets hooks queued
    /// *by* a running hook execute in the same drain, still ahead of any
    /// file write.
    pub fn take_next_hook(&mut self) -> Option<Hook> {
        if self.hooks.is_empty() {
            None
        } else {
            Some(self.hooks.remove(0))
        }
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_property_replaces_existing_value() {
        let mut model = BuildModel::new();
        model.set_property("key", "old");
        model.set_property("key", "new");
        assert_eq!(model.property("key"), Some("new"));
    }

    #[test]
    fn append_property_creates_then_joins() {
        let mut model = BuildModel::new();
        model.append_property("includes", "a.txt", ",");
        model.append_property("includes", "b.txt", ",");
        model.append_property("includes", "a.txt", ",");
        // order preserved, no dedup
        assert_eq!(model.property("includes"), Some("a.txt,b.txt,a.txt"));
    }

    #[test]
    fn hooks_drain_in_registration_order() {
        let mut model = BuildModel::new();
        model.add_hook(|m| m.set_property("first", "1"));
        model.add_hook(|m| m.set_property("second", "2"));

        let mut seen = Vec::new();
        while let Some(hook) = model.take_next_hook() {
            hook.run(&mut model);
            seen.push(model.configuration().len());
        }
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(model.hook_count(), 0);
    }

    #[test]
    fn hook_registered_by_hook_still_runs() {
        let mut model = BuildModel::new();
        model.add_hook(|m| {
            m.add_hook(|inner| inner.set_property("late", "yes"));
        });

        while let Some(hook) = model.take_next_hook() {
            hook.run(&mut model);
        }
        assert_eq!(model.property("late"), Some("yes"));
    }
}
