//! Immutable server configuration
//!
//! The [`Registry`] is built once at startup. It owns the three catalogs and
//! name-keyed lookup tables from entity name to handler. Nothing in it is
//! mutated afterwards, so it is shared across requests behind an `Arc`.

use std::collections::HashMap;

use tracing::info;

use crate::content::{ContentStore, Resource};
use crate::prompts::{self, PromptTemplate};
use crate::tools::{self, ToolDefinition};
use crate::{NotFoundError, Result};

#[derive(Debug, Clone)]
pub struct Registry {
    content: ContentStore,
    prompts: Vec<PromptTemplate>,
    tools: Vec<ToolDefinition>,
    prompt_index: HashMap<&'static str, usize>,
    tool_index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build the registry with the built-in documents, prompts, and tools.
    pub fn new() -> Self {
        Self::from_parts(ContentStore::new(), prompts::catalog(), tools::catalog())
    }

    /// Build a registry from explicit catalogs.
    ///
    /// Later entries with a duplicate name shadow earlier ones in lookups but
    /// still appear in listings.
    pub fn from_parts(
        content: ContentStore,
        prompts: Vec<PromptTemplate>,
        tools: Vec<ToolDefinition>,
    ) -> Self {
        let prompt_index = prompts
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name, i))
            .collect();
        let tool_index = tools.iter().enumerate().map(|(i, t)| (t.name, i)).collect();

        info!(
            "Registry built with {} resources, {} prompts, {} tools",
            content.len(),
            prompts.len(),
            tools.len()
        );

        Self {
            content,
            prompts,
            tools,
            prompt_index,
            tool_index,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn prompts(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn resource(&self, uri: &str) -> Result<&Resource> {
        self.content.fetch(uri)
    }

    pub fn prompt(&self, name: &str) -> Result<&PromptTemplate> {
        self.prompt_index
            .get(name)
            .map(|&i| &self.prompts[i])
            .ok_or_else(|| NotFoundError::prompt(name))
    }

    pub fn tool(&self, name: &str) -> Result<&ToolDefinition> {
        self.tool_index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| NotFoundError::tool(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
