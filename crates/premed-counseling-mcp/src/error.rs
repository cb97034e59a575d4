//! Error types and RFC 9457-style problem details for the MCP server
//!
//! Library lookups fail with [`NotFoundError`]. This module lifts that into a
//! problem-details [`Error`] and converts it into the JSON-RPC error object
//! the transport sends back to the client.

use premed_counseling_lib::{EntityKind, NotFoundError};
use rmcp::ErrorData;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Result type for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// MCP Server error type implementing RFC 9457 Problem Details
#[derive(Debug, Error, Serialize, Clone)]
#[error("{message}")]
pub struct Error {
    /// HTTP status-like code (e.g., 404, 500)
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Machine-readable problem type URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Additional error context (e.g., entity kind and name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Catalog the failed lookup was made against
    #[serde(skip)]
    pub entity: EntityKind,
}

impl Error {
    /// Create a new error with a code and message
    pub fn new(entity: EntityKind, code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            r#type: None,
            context: None,
            entity,
        }
    }

    /// Add a problem type URI
    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.r#type = Some(type_uri.into());
        self
    }

    /// Add context information as JSON
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Catalog entity not found
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(kind, 404, format!("Unknown {}: {}", kind, name))
            .with_type(format!("https://premed.local/errors/{}-not-found", kind))
            .with_context(json!({
                "kind": kind,
                "name": name,
            }))
    }

    fn problem_details(&self) -> Option<Value> {
        serde_json::to_value(self).ok()
    }
}

impl From<NotFoundError> for Error {
    fn from(err: NotFoundError) -> Self {
        Error::not_found(err.kind, err.name)
    }
}

impl From<Error> for ErrorData {
    fn from(err: Error) -> Self {
        let data = err.problem_details();
        match err.entity {
            EntityKind::Resource => ErrorData::resource_not_found(err.message, data),
            EntityKind::Prompt | EntityKind::Tool => ErrorData::invalid_params(err.message, data),
        }
    }
}
