//! MCP protocol adapter
//!
//! [`PremedServer`] implements the rmcp [`ServerHandler`] trait. The transport
//! selects a handler method by request kind; each method forwards to the
//! library [`Router`] and converts its result into rmcp model types.

use std::sync::Arc;

use premed_counseling_lib::{
    ContentBlock, GetPromptResponse, PromptInfo, ReadResourceResponse, Registry, ResourceInfo,
    Role, Router, ToolInfo,
};
use rmcp::model::AnnotateAble;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::Error;

/// Name reported in `serverInfo` during the initialize handshake.
pub const SERVER_NAME: &str = "premed-counseling-assistant";

const INSTRUCTIONS: &str = "Pre-med counseling assistant. Resources: \
premed://resources/aamc-guide (AAMC admissions overview) and \
premed://resources/counseling-playbook (counseling frameworks). Tools: \
find-relevant-guidance (topic guidance) and school-matcher (GPA/MCAT \
competitiveness and school tiers). Prompts: school-selection-strategy, \
application-timeline, interview-prep.";

/// The pre-med counseling MCP server
#[derive(Debug, Clone)]
pub struct PremedServer {
    router: Router,
}

impl PremedServer {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn handle_list_resources(&self) -> ListResourcesResult {
        ListResourcesResult {
            resources: self.router.list_resources().into_iter().map(to_resource).collect(),
            next_cursor: None,
            meta: None,
        }
    }

    pub fn handle_read_resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        self.router
            .read_resource(uri)
            .map(to_read_resource_result)
            .map_err(|e| Error::from(e).into())
    }

    pub fn handle_list_prompts(&self) -> ListPromptsResult {
        ListPromptsResult {
            prompts: self.router.list_prompts().into_iter().map(to_prompt).collect(),
            next_cursor: None,
            meta: None,
        }
    }

    pub fn handle_get_prompt(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<GetPromptResult, McpError> {
        self.router
            .get_prompt(name, arguments)
            .map(to_get_prompt_result)
            .map_err(|e| Error::from(e).into())
    }

    pub fn handle_list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.router.list_tools().into_iter().map(to_tool).collect(),
            next_cursor: None,
            meta: None,
        }
    }

    pub fn handle_call_tool(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<CallToolResult, McpError> {
        self.router
            .call_tool(name, arguments)
            .map(|blocks| CallToolResult::success(blocks.into_iter().map(to_content).collect()))
            .map_err(|e| Error::from(e).into())
    }
}

impl Default for PremedServer {
    fn default() -> Self {
        Self::new(Router::new(Arc::new(Registry::new())))
    }
}

impl ServerHandler for PremedServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Pre-Med Counseling Assistant".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("resources/list");
        Ok(self.handle_list_resources())
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!(uri = %request.uri, "resources/read");
        self.handle_read_resource(&request.uri)
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("prompts/list");
        Ok(self.handle_list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!(name = %request.name, "prompts/get");
        self.handle_get_prompt(&request.name, request.arguments.as_ref())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("tools/list");
        Ok(self.handle_list_tools())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!(name = %request.name, "tools/call");
        self.handle_call_tool(&request.name, request.arguments.as_ref())
    }
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn run_server(server: PremedServer) -> anyhow::Result<()> {
    let service = server.serve(rmcp::transport::stdio()).await?;
    info!("Pre-Med Counseling MCP server running on stdio");
    service.waiting().await?;
    info!("Client disconnected, shutting down");
    Ok(())
}

// ============================================================================
// CONVERSIONS
// ============================================================================

fn to_resource(info: ResourceInfo) -> Resource {
    RawResource {
        uri: info.uri,
        name: info.name,
        title: None,
        description: Some(info.description),
        mime_type: Some(info.mime_type),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

fn to_read_resource_result(response: ReadResourceResponse) -> ReadResourceResult {
    ReadResourceResult {
        contents: response
            .contents
            .into_iter()
            .map(|c| ResourceContents::TextResourceContents {
                uri: c.uri,
                mime_type: Some(c.mime_type),
                text: c.text,
                meta: None,
            })
            .collect(),
    }
}

fn to_prompt(info: PromptInfo) -> Prompt {
    Prompt {
        name: info.name.into(),
        title: None,
        description: Some(info.description.into()),
        arguments: Some(
            info.arguments
                .into_iter()
                .map(|a| PromptArgument {
                    name: a.name.into(),
                    title: None,
                    description: Some(a.description.into()),
                    required: Some(a.required),
                })
                .collect(),
        ),
        icons: None,
        meta: None,
    }
}

fn to_get_prompt_result(response: GetPromptResponse) -> GetPromptResult {
    GetPromptResult {
        description: Some(response.description),
        messages: response
            .messages
            .into_iter()
            .map(|m| {
                let role = match m.role {
                    Role::User => PromptMessageRole::User,
                };
                PromptMessage::new_text(role, m.content.as_text())
            })
            .collect(),
    }
}

fn to_tool(info: ToolInfo) -> Tool {
    Tool::new(info.name, info.description, Arc::new(info.input_schema))
}

fn to_content(block: ContentBlock) -> Content {
    match block {
        ContentBlock::Text { text } => Content::text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn server() -> PremedServer {
        PremedServer::default()
    }

    fn text_of(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }

    #[test]
    fn test_list_resources_wire_shape() {
        let value = serde_json::to_value(server().handle_list_resources()).unwrap();
        let resources = value["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["uri"], "premed://resources/aamc-guide");
        assert_eq!(resources[0]["mimeType"], "text/markdown");
        assert_eq!(resources[1]["name"], "Pre-Med Counseling Playbook");
    }

    #[test]
    fn test_read_resource_wire_shape() {
        let result = server()
            .handle_read_resource("premed://resources/counseling-playbook")
            .unwrap();
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["contents"][0]["mimeType"], "text/plain");
        assert!(value["contents"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Pre-Med Counseling Playbook"));
    }

    #[test]
    fn test_read_unknown_resource_error() {
        let err = server()
            .handle_read_resource("premed://resources/unknown")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("premed://resources/unknown"));
    }

    #[test]
    fn test_list_prompts_wire_shape() {
        let value = serde_json::to_value(server().handle_list_prompts()).unwrap();
        let prompts = value["prompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 3);
        assert_eq!(prompts[0]["name"], "school-selection-strategy");
        assert_eq!(prompts[0]["arguments"][0]["name"], "gpa");
        assert_eq!(prompts[0]["arguments"][0]["required"], true);
        assert_eq!(prompts[0]["arguments"][2]["required"], false);
    }

    #[test]
    fn test_get_prompt_wire_shape() {
        let args = json!({ "interview_type": "MMI" }).as_object().cloned().unwrap();
        let result = server().handle_get_prompt("interview-prep", Some(&args)).unwrap();
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"]["type"], "text");
        assert!(value["messages"][0]["content"]["text"]
            .as_str()
            .unwrap()
            .contains("MMI interview at medical school"));
    }

    #[test]
    fn test_list_tools_wire_shape() {
        let value = serde_json::to_value(server().handle_list_tools()).unwrap();
        let tools = value["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "find-relevant-guidance");
        assert_eq!(tools[1]["inputSchema"]["type"], "object");
        assert!(tools[1]["inputSchema"]["properties"]["gpa"].is_object());
    }

    #[test]
    fn test_call_tool() {
        let args = json!({ "gpa": 3.8, "mcat": 520, "state": "CA" })
            .as_object()
            .cloned()
            .unwrap();
        let result = server().handle_call_tool("school-matcher", Some(&args)).unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(text_of(&result).contains("Highly competitive"));
    }

    #[test]
    fn test_call_unknown_tool_error() {
        let err = server().handle_call_tool("unknown-tool", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool: unknown-tool"));
    }

    #[test]
    fn test_get_unknown_prompt_error() {
        let err = server().handle_get_prompt("unknown-prompt", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        let data = err.data.unwrap();
        assert_eq!(data["context"]["name"], "unknown-prompt");
        assert_eq!(data["context"]["kind"], "prompt");
    }
}
