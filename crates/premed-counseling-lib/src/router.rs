//! Request routing and handler dispatch
//!
//! The [`Router`] exposes one operation per request kind. List operations
//! never fail; read/get/call look the entity up by URI or name in the
//! injected [`Registry`] and return [`NotFoundError`](crate::NotFoundError)
//! when it is absent.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::arguments::Arguments;
use crate::model::{
    ContentBlock, GetPromptResponse, PromptInfo, ReadResourceResponse, ResourceInfo, ToolInfo,
};
use crate::registry::Registry;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Router {
    registry: Arc<Registry>,
}

impl Router {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Metadata for every resource, in catalog order.
    pub fn list_resources(&self) -> Vec<ResourceInfo> {
        debug!("Listing resources");
        self.registry.content().enumerate()
    }

    /// Full contents of a resource.
    #[instrument(name = "router.read_resource", skip(self))]
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResponse> {
        let resource = self.registry.resource(uri).inspect_err(|e| warn!("{e}"))?;
        Ok(ReadResourceResponse {
            contents: vec![resource.contents()],
        })
    }

    /// Metadata for every prompt, in catalog order.
    pub fn list_prompts(&self) -> Vec<PromptInfo> {
        debug!("Listing prompts");
        self.registry.prompts().iter().map(|p| p.info()).collect()
    }

    /// Render a prompt. Required parameters are not validated.
    #[instrument(name = "router.get_prompt", skip(self, arguments))]
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<GetPromptResponse> {
        let template = self.registry.prompt(name).inspect_err(|e| warn!("{e}"))?;
        let messages = (template.render)(&Arguments::from(arguments));
        debug!("Rendered {} message(s)", messages.len());

        Ok(GetPromptResponse {
            description: template.description.to_string(),
            messages,
        })
    }

    /// Metadata for every tool, including its input schema.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        debug!("Listing tools");
        self.registry.tools().iter().map(|t| t.info()).collect()
    }

    /// Execute a tool. Argument interpretation is left to the tool.
    #[instrument(name = "router.call_tool", skip(self, arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<Vec<ContentBlock>> {
        let tool = self.registry.tool(name).inspect_err(|e| warn!("{e}"))?;
        Ok((tool.execute)(&Arguments::from(arguments)))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Arc::new(Registry::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityKind, AAMC_GUIDE_URI};
    use serde_json::json;

    #[test]
    fn test_read_resource_wraps_single_content() {
        let router = Router::default();
        let response = router.read_resource(AAMC_GUIDE_URI).unwrap();
        assert_eq!(response.contents.len(), 1);
        assert_eq!(response.contents[0].uri, AAMC_GUIDE_URI);
    }

    #[test]
    fn test_get_prompt_without_arguments() {
        let router = Router::default();
        let response = router.get_prompt("interview-prep", None).unwrap();
        assert_eq!(
            response.description,
            "Targeted preparation for different interview formats"
        );
        assert!(response.messages[0]
            .content
            .as_text()
            .contains("interview at medical school."));
    }

    #[test]
    fn test_call_tool_without_arguments() {
        let router = Router::default();
        let blocks = router.call_tool("school-matcher", None).unwrap();
        assert!(blocks[0].as_text().contains("Below typical competitive range"));
    }

    #[test]
    fn test_unknown_names_report_kind() {
        let router = Router::default();
        let args = json!({}).as_object().cloned().unwrap();

        let err = router.get_prompt("unknown-prompt", Some(&args)).unwrap_err();
        assert_eq!(err.kind, EntityKind::Prompt);

        let err = router.call_tool("unknown-tool", Some(&args)).unwrap_err();
        assert_eq!(err.kind, EntityKind::Tool);
    }
}
