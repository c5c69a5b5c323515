//! Generated source units.
//!
//! A [`SourceClass`] is one complete source file of the generated
//! application: full source text plus the base name the file will carry on
//! disk. The namespace can be supplied explicitly; when it is not, it is
//! recovered from the `package …;` declaration embedded in the text, the way
//! generated class text has always carried it.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Token opening a namespace declaration inside source text.
const NAMESPACE_TOKEN: &str = "package ";
/// Statement terminator closing the declaration.
const NAMESPACE_TERMINATOR: char = ';';

/// One generated source file: its on-disk base name and full content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceClass {
    name: String,
    content: String,
    /// Explicit namespace. `None` means "parse it out of `content` on
    /// demand" - the compatibility path for producers that only hand over
    /// raw source text.
    namespace: Option<String>,
}

impl SourceClass {
    /// Create a source class whose namespace lives only in its content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            namespace: None,
        }
    }

    /// Create a source class with an explicitly declared namespace.
    ///
    /// The explicit value always wins over anything parsable from the
    /// content.
    pub fn with_namespace(
        name: impl Into<String>,
        namespace: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            namespace: Some(namespace.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The namespace this class belongs to.
    ///
    /// Returns the explicit field if set, otherwise falls back to parsing
    /// the declaration out of the source text. Fails with
    /// [`DomainError::MissingNamespace`] when neither yields one.
    pub fn namespace(&self) -> Result<&str, DomainError> {
        if let Some(ns) = &self.namespace {
            return Ok(ns);
        }
        parse_namespace(&self.content).ok_or_else(|| DomainError::MissingNamespace {
            class: self.name.clone(),
        })
    }
}

/// Extract the namespace identifier from a `package a.b.c;` declaration.
///
/// Reads the identifier between the declaration token and the statement
/// terminator. Returns `None` when the token is absent, unterminated, or the
/// identifier is empty.
fn parse_namespace(content: &str) -> Option<&str> {
    let start = content.find(NAMESPACE_TOKEN)? + NAMESPACE_TOKEN.len();
    let rest = &content[start..];
    let end = rest.find(NAMESPACE_TERMINATOR)?;
    let ns = rest[..end].trim();
    if ns.is_empty() { None } else { Some(ns) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_parsed_from_content() {
        let class = SourceClass::new("Foo", "package x.y.z;\n\npublic class Foo {}\n");
        assert_eq!(class.namespace().unwrap(), "x.y.z");
    }

    #[test]
    fn explicit_namespace_wins_over_content() {
        let class = SourceClass::with_namespace("Foo", "a.b", "package x.y.z;\nclass Foo {}");
        assert_eq!(class.namespace().unwrap(), "a.b");
    }

    #[test]
    fn namespace_tolerates_leading_comment() {
        let class = SourceClass::new("Foo", "// generated\npackage com.acme;\nclass Foo {}");
        assert_eq!(class.namespace().unwrap(), "com.acme");
    }

    #[test]
    fn missing_declaration_is_an_error() {
        let class = SourceClass::new("Foo", "public class Foo {}");
        assert_eq!(
            class.namespace(),
            Err(DomainError::MissingNamespace {
                class: "Foo".into()
            })
        );
    }

    #[test]
    fn unterminated_declaration_is_an_error() {
        let class = SourceClass::new("Foo", "package x.y.z");
        assert!(class.namespace().is_err());
    }

    #[test]
    fn empty_identifier_is_an_error() {
        let class = SourceClass::new("Foo", "package ;");
        assert!(class.namespace().is_err());
    }
}
