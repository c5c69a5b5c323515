//! Producer-side contract checks.

use crate::domain::entities::model::BuildModel;

/// Imports a primary class needs but does not carry.
///
/// Primary-class content is written verbatim, so it is the model producer's
/// job to emit `import` statements for any additional class the primary
/// source references. This check finds the gaps: for every additional class
/// living in a namespace other than the application group id whose name
/// appears in a primary class's text, the fully qualified
/// `<namespace>.<Name>` must already be imported there.
///
/// Returns the fully qualified names that are referenced but not imported.
/// Additional classes with no resolvable namespace are skipped here; path
/// resolution reports those separately.
pub fn missing_imports(model: &BuildModel, app_group_id: &str) -> Vec<String> {
    let mut missing = Vec::new();
    for additional in model.additional_classes() {
        let Ok(namespace) = additional.namespace() else {
            continue;
        };
        if namespace == app_group_id {
            continue;
        }
        let qualified = format!("{namespace}.{}", additional.name());
        let import_stmt = format!("import {qualified};");
        for primary in model.primary_classes() {
            if primary.content().contains(additional.name())
                && !primary.content().contains(&import_stmt)
            {
                missing.push(qualified.clone());
            }
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::source::SourceClass;

    const GROUP_ID: &str = "com.example.app";

    fn model_with(primary_content: &str) -> BuildModel {
        let mut model = BuildModel::new();
        model.add_primary_class(SourceClass::new("MainRoute", primary_content));
        model.add_additional_class(SourceClass::new(
            "Helper",
            "package x.y.z;\npublic class Helper {}\n",
        ));
        model
    }

    #[test]
    fn detects_referenced_but_unimported_class() {
        let model = model_with("package com.example.app;\nclass MainRoute { Helper h; }\n");
        assert_eq!(missing_imports(&model, GROUP_ID), vec!["x.y.z.Helper"]);
    }

    #[test]
    fn satisfied_import_passes() {
        let model = model_with(
            "package com.example.app;\nimport x.y.z.Helper;\nclass MainRoute { Helper h; }\n",
        );
        assert!(missing_imports(&model, GROUP_ID).is_empty());
    }

    #[test]
    fn unreferenced_class_needs_no_import() {
        let model = model_with("package com.example.app;\nclass MainRoute {}\n");
        assert!(missing_imports(&model, GROUP_ID).is_empty());
    }

    #[test]
    fn same_namespace_needs_no_import() {
        let mut model = BuildModel::new();
        model.add_primary_class(SourceClass::new(
            "MainRoute",
            "package com.example.app;\nclass MainRoute { Helper h; }\n",
        ));
        model.add_additional_class(SourceClass::with_namespace(
            "Helper",
            GROUP_ID,
            "class Helper {}",
        ));
        assert!(missing_imports(&model, GROUP_ID).is_empty());
    }
}
