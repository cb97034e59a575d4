//! Pre-med counseling library entry points.
//!
//! This crate holds everything the counseling server serves: the static
//! reference documents, the prompt templates, the two guidance rule sets, and
//! the [`Router`] that dispatches list/read/get/call requests against an
//! immutable [`Registry`]. Transport concerns (JSON-RPC framing, stdio) live
//! in the `premed-counseling-mcp` crate; consumers should only depend on the
//! items exported here instead of reimplementing catalog lookups.

pub mod arguments;
pub mod content;
pub mod error;
pub mod guidance;
pub mod model;
pub mod prompts;
pub mod registry;
pub mod router;
pub mod tools;

pub use arguments::Arguments;
pub use content::{Resource, AAMC_GUIDE_URI, COUNSELING_PLAYBOOK_URI};
pub use error::{EntityKind, NotFoundError, Result};
pub use guidance::{school_match, topic_guidance, CompetitivenessTier, GuidanceTopic, Score};
pub use model::{
    ContentBlock, GetPromptResponse, PromptArgumentInfo, PromptInfo, PromptMessage,
    ReadResourceResponse, ResourceContents, ResourceInfo, Role, ToolInfo,
};
pub use registry::Registry;
pub use router::Router;
