use std::sync::Arc;

use anyhow::Result;
use premed_counseling_lib::{Registry, Router};
use premed_counseling_mcp::logging::{init_logging, LoggingConfig};
use premed_counseling_mcp::{run_server, PremedServer};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging MUST go to stderr; stdout carries the protocol
    init_logging(&LoggingConfig::from_env())?;

    let router = Router::new(Arc::new(Registry::new()));
    let result = run_server(PremedServer::new(router)).await;
    if let Err(e) = &result {
        error!("MCP server failed: {e:#}");
    }
    result
}
