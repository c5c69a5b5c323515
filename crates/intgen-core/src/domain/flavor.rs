//! Target runtime flavors and their file-layout conventions.
//!
//! Flavor-specific behavior is a strategy table, not branching scattered
//! through the writer: each variant maps to one static [`Conventions`]
//! record (directory layout + optional post-resource-write configuration
//! side effect). Adding a flavor means adding a variant and a const here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator used when multiple resource names accumulate under the
/// native-resource-inclusion key.
pub const NATIVE_RESOURCE_SEPARATOR: &str = ",";

/// The target runtime packaging mode.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// Conventional JVM packaging.
    Standard,
    /// Native-compilable packaging: resources written during generation must
    /// also be registered for inclusion in the native image.
    Native,
}

impl Flavor {
    /// Layout conventions and side effects for this flavor.
    pub fn conventions(self) -> &'static Conventions {
        match self {
            Flavor::Standard => &STANDARD,
            Flavor::Native => &NATIVE,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Standard => write!(f, "standard"),
            Flavor::Native => write!(f, "native"),
        }
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Flavor::Standard),
            "native" | "native-compilable" => Ok(Flavor::Native),
            other => Err(format!("unknown flavor: {other}")),
        }
    }
}

/// Per-flavor file-placement conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Root of the generated source tree, relative to the output root.
    pub source_root: &'static str,
    /// Root of the resources tree, relative to the output root.
    pub resources_root: &'static str,
    /// Suffix appended to every written class file.
    pub source_suffix: &'static str,
    /// Name of the serialized configuration file under `resources_root`.
    pub config_file: &'static str,
    /// Configuration key that written resources are registered under, when
    /// the flavor requires native-image inclusion.
    pub native_resource_key: Option<&'static str>,
}

static STANDARD: Conventions = Conventions {
    source_root: "src/main/java",
    resources_root: "src/main/resources",
    source_suffix: "java",
    config_file: "application.properties",
    native_resource_key: None,
};

static NATIVE: Conventions = Conventions {
    source_root: "src/main/java",
    resources_root: "src/main/resources",
    source_suffix: "java",
    config_file: "application.properties",
    native_resource_key: Some("quarkus.native.resources.includes"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn flavor_parses_correctly() {
        assert_eq!(Flavor::from_str("standard").unwrap(), Flavor::Standard);
        assert_eq!(Flavor::from_str("Native").unwrap(), Flavor::Native);
        assert_eq!(
            Flavor::from_str("native-compilable").unwrap(),
            Flavor::Native
        );
        assert!(Flavor::from_str("jvmish").is_err());
    }

    #[test]
    fn only_native_registers_resources() {
        assert!(Flavor::Standard.conventions().native_resource_key.is_none());
        assert_eq!(
            Flavor::Native.conventions().native_resource_key,
            Some("quarkus.native.resources.includes")
        );
    }

    #[test]
    fn layout_is_shared_across_flavors() {
        let std = Flavor::Standard.conventions();
        let native = Flavor::Native.conventions();
        assert_eq!(std.source_root, native.source_root);
        assert_eq!(std.resources_root, native.resources_root);
        assert_eq!(std.config_file, native.config_file);
    }
}
