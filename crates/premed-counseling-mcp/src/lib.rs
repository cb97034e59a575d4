//! MCP (Model Context Protocol) server for pre-med counseling
//!
//! This crate exposes the static counseling documents, prompt templates, and
//! guidance tools from `premed-counseling-lib` to AI assistants via the Model
//! Context Protocol.
//!
//! # Architecture
//!
//! - `server`: rmcp `ServerHandler` adapter and stdio lifecycle
//! - `error`: Error types and RFC 9457 problem details
//! - `logging`: stderr tracing setup
//!
//! # Transport
//!
//! The server communicates via stdio using JSON-RPC 2.0 message format
//! as specified by the MCP specification. All logging is redirected to
//! stderr to prevent stdout protocol corruption.

pub mod error;
pub mod logging;
pub mod server;

pub use error::{Error, Result};
pub use server::{run_server, PremedServer, SERVER_NAME};
