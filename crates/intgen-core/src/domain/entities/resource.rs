use serde::{Deserialize, Serialize};

/// A named blob destined for the generated project's resources directory.
///
/// `name` is the path relative to the resources root and may itself contain
/// separators (`routes/my-route.xml`); the intermediate directories are
/// created at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    name: String,
    content: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
