//! Tool descriptors and handlers
//!
//! This module defines the two tools exposed by the server:
//! - find-relevant-guidance: canned guidance for a counseling topic
//! - school-matcher: competitiveness tier and school list for a profile
//!
//! Input schemas are generated from the typed input structs below. Handlers
//! read arguments leniently through [`Arguments`], so missing values degrade
//! instead of failing.

use schemars::{schema_for, JsonSchema};
use serde_json::{Map, Value};
use tracing::debug;

use crate::arguments::Arguments;
use crate::guidance::{self, Score};
use crate::model::{ContentBlock, ToolInfo};

pub const FIND_RELEVANT_GUIDANCE: &str = "find-relevant-guidance";
pub const SCHOOL_MATCHER: &str = "school-matcher";

// ============================================================================
// TOOL INPUTS
// ============================================================================

/// Input for the find-relevant-guidance tool
#[derive(Debug, Clone, JsonSchema)]
pub struct FindGuidanceInput {
    /// The topic you need guidance on (e.g., MCAT prep, research, volunteering)
    pub topic: String,

    /// Brief description of the student's current situation
    pub student_situation: Option<String>,
}

/// Input for the school-matcher tool
#[derive(Debug, Clone, JsonSchema)]
pub struct SchoolMatcherInput {
    /// Student's GPA
    pub gpa: f64,

    /// Student's MCAT score
    pub mcat: f64,

    /// State of residency
    pub state: String,

    /// Any specific preferences (location, program type, etc.)
    pub preferences: Option<String>,
}

// ============================================================================
// CATALOG
// ============================================================================

/// Executes a tool against the caller's arguments.
pub type ExecuteFn = fn(&Arguments<'_>) -> Vec<ContentBlock>;

/// A named tool, its argument schema, and its handler
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Map<String, Value>,
    pub execute: ExecuteFn,
}

impl ToolDefinition {
    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema.clone(),
        }
    }
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

/// JSON Schema object for `T`, without the `$schema` meta key.
fn input_schema<T: JsonSchema>() -> Map<String, Value> {
    let mut schema = match serde_json::to_value(schema_for!(T)) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    schema.remove("$schema");
    schema.entry("type").or_insert_with(|| Value::from("object"));
    schema
}

/// All tools, in listing order.
pub fn catalog() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: FIND_RELEVANT_GUIDANCE,
            description: "Find specific guidance from pre-med counseling resources",
            input_schema: input_schema::<FindGuidanceInput>(),
            execute: find_relevant_guidance,
        },
        ToolDefinition {
            name: SCHOOL_MATCHER,
            description: "Match student profile to appropriate medical schools",
            input_schema: input_schema::<SchoolMatcherInput>(),
            execute: school_matcher,
        },
    ]
}

fn find_relevant_guidance(args: &Arguments<'_>) -> Vec<ContentBlock> {
    let topic = args.text_or("topic", "");
    let situation = args.text_or("student_situation", "");
    debug!(topic = %topic, "Selecting topic guidance");

    let block = guidance::topic_guidance(&topic, &situation);
    vec![ContentBlock::text(format!(
        "Based on your question about \"{topic}\" and situation: \"{situation}\"\n\n\
         Here's relevant guidance from our pre-med counseling resources:\n\n\
         {block}"
    ))]
}

fn school_matcher(args: &Arguments<'_>) -> Vec<ContentBlock> {
    let gpa_text = args.text_or("gpa", "");
    let mcat_text = args.text_or("mcat", "");
    let gpa = Score::new(&gpa_text, args.number("gpa"));
    let mcat = Score::new(&mcat_text, args.number("mcat"));
    let state = args.text_or("state", "");
    let preferences = args.text_or("preferences", "");
    debug!(gpa = ?gpa.value, mcat = ?mcat.value, state = %state, "Matching school profile");

    vec![ContentBlock::text(guidance::school_match(
        gpa,
        mcat,
        &state,
        &preferences,
    ))]
}
