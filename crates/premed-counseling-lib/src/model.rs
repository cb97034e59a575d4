//! Request/response shapes returned by the [`Router`](crate::Router).
//!
//! These mirror the MCP result payloads (camelCase on the wire) without
//! depending on any transport crate. The MCP adapter converts them into
//! `rmcp` model types.

use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// RESOURCES
// ============================================================================

/// Resource metadata as listed by `resources/list` (body excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// One text body returned by `resources/read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResourceResponse {
    pub contents: Vec<ResourceContents>,
}

// ============================================================================
// PROMPTS
// ============================================================================

/// Declared parameter of a prompt template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptArgumentInfo {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Prompt metadata as listed by `prompts/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptInfo {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgumentInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single content block, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: ContentBlock,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: ContentBlock::text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPromptResponse {
    pub description: String,
    pub messages: Vec<PromptMessage>,
}

// ============================================================================
// TOOLS
// ============================================================================

/// Tool metadata as listed by `tools/list`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    /// JSON Schema object describing the accepted arguments
    pub input_schema: Map<String, Value>,
}
