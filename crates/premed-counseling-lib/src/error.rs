use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for catalog lookups.
pub type Result<T> = std::result::Result<T, NotFoundError>;

/// The catalog an entity lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Resource,
    Prompt,
    Tool,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Resource => "resource",
            EntityKind::Prompt => "prompt",
            EntityKind::Tool => "tool",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a read-resource, get-prompt, or call-tool request names an
/// entity that is absent from its catalog.
///
/// This is the only error the library produces. Malformed or missing
/// arguments degrade into defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Unknown {kind}: {name}")]
pub struct NotFoundError {
    /// Which catalog was searched.
    pub kind: EntityKind,
    /// The offending URI or name, exactly as requested.
    pub name: String,
}

impl NotFoundError {
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn resource(uri: impl Into<String>) -> Self {
        Self::new(EntityKind::Resource, uri)
    }

    pub fn prompt(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Prompt, name)
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Tool, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind_and_identifier() {
        let err = NotFoundError::resource("premed://resources/unknown");
        assert_eq!(err.to_string(), "Unknown resource: premed://resources/unknown");

        let err = NotFoundError::tool("unknown-tool");
        assert_eq!(err.to_string(), "Unknown tool: unknown-tool");
    }

    #[test]
    fn serializes_kind_in_lowercase() {
        let err = NotFoundError::prompt("unknown-prompt");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "prompt");
        assert_eq!(json["name"], "unknown-prompt");
    }
}
