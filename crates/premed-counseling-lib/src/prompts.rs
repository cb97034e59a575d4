//! Prompt templates for common counseling scenarios
//!
//! Each template renders a single user message asking the calling agent for
//! a structured piece of advice: a school list, an application timeline, or
//! interview preparation. Rendering is plain interpolation; absent optional
//! arguments take a documented default and absent required arguments render
//! as empty text.

use crate::arguments::Arguments;
use crate::model::{PromptArgumentInfo, PromptInfo, PromptMessage};

/// Renders a template from the caller's arguments.
pub type RenderFn = fn(&Arguments<'_>) -> Vec<PromptMessage>;

/// Declared parameter of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A named, parameterized prompt and its renderer
#[derive(Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [PromptParameter],
    pub render: RenderFn,
}

impl PromptTemplate {
    pub fn info(&self) -> PromptInfo {
        PromptInfo {
            name: self.name.to_string(),
            description: self.description.to_string(),
            arguments: self
                .parameters
                .iter()
                .map(|p| PromptArgumentInfo {
                    name: p.name.to_string(),
                    description: p.description.to_string(),
                    required: p.required,
                })
                .collect(),
        }
    }
}

impl std::fmt::Debug for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptTemplate")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

pub const SCHOOL_SELECTION_STRATEGY: &str = "school-selection-strategy";
pub const APPLICATION_TIMELINE: &str = "application-timeline";
pub const INTERVIEW_PREP: &str = "interview-prep";

/// All templates, in listing order.
pub fn catalog() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: SCHOOL_SELECTION_STRATEGY,
            description: "Create personalized medical school application list",
            parameters: &[
                PromptParameter {
                    name: "gpa",
                    description: "Student GPA",
                    required: true,
                },
                PromptParameter {
                    name: "mcat",
                    description: "MCAT score",
                    required: true,
                },
                PromptParameter {
                    name: "state",
                    description: "State of residence",
                    required: false,
                },
                PromptParameter {
                    name: "preferences",
                    description: "Any specific preferences",
                    required: false,
                },
            ],
            render: render_school_selection_strategy,
        },
        PromptTemplate {
            name: APPLICATION_TIMELINE,
            description: "Month-by-month planning for application cycle",
            parameters: &[
                PromptParameter {
                    name: "current_year",
                    description: "Current academic year (freshman, sophomore, etc.)",
                    required: true,
                },
                PromptParameter {
                    name: "target_cycle",
                    description: "Target application cycle year",
                    required: true,
                },
            ],
            render: render_application_timeline,
        },
        PromptTemplate {
            name: INTERVIEW_PREP,
            description: "Targeted preparation for different interview formats",
            parameters: &[
                PromptParameter {
                    name: "interview_type",
                    description: "Type of interview (traditional, MMI, etc.)",
                    required: true,
                },
                PromptParameter {
                    name: "school_name",
                    description: "Name of the school",
                    required: false,
                },
            ],
            render: render_interview_prep,
        },
    ]
}

fn render_school_selection_strategy(args: &Arguments<'_>) -> Vec<PromptMessage> {
    let gpa = args.text_or("gpa", "");
    let mcat = args.text_or("mcat", "");
    let state = args.text_or("state", "Unknown");
    let preferences = args.text_or("preferences", "");

    vec![PromptMessage::user(format!(
        r#"Create a personalized medical school application strategy for a pre-med student with the following profile:

GPA: {gpa}
MCAT: {mcat}
State of Residence: {state}
Preferences: {preferences}

Please provide:
1. Competitiveness assessment
2. School categories (safety, target, reach)
3. Specific school recommendations
4. Application strategy advice
5. Areas for improvement if needed

Base your recommendations on AAMC data and current admissions trends."#
    ))]
}

fn render_application_timeline(args: &Arguments<'_>) -> Vec<PromptMessage> {
    let current_year = args.text_or("current_year", "");
    let target_cycle = args.text_or("target_cycle", "");

    vec![PromptMessage::user(format!(
        r#"Create a detailed month-by-month timeline for a {current_year} student targeting the {target_cycle} application cycle.

Include:
1. MCAT preparation and testing timeline
2. Application preparation milestones
3. Experience building opportunities
4. Key deadlines and dates
5. Backup planning considerations

Provide specific actionable steps for each time period."#
    ))]
}

fn render_interview_prep(args: &Arguments<'_>) -> Vec<PromptMessage> {
    let interview_type = args.text_or("interview_type", "");
    let school_name = args.text_or("school_name", "medical school");

    vec![PromptMessage::user(format!(
        r#"Prepare comprehensive interview guidance for a {interview_type} interview at {school_name}.

Include:
1. Format-specific preparation strategies
2. Common questions and how to approach them
3. School-specific research points
4. Practice exercises
5. Day-of-interview logistics

Tailor the advice to the specific interview format and school if provided."#
    ))]
}
