//! Rule-based counseling guidance.
//!
//! Two pure functions back the server's tools:
//! - [`topic_guidance`] classifies a free-text topic against an ordered
//!   keyword table and returns a canned guidance block.
//! - [`school_match`] places a GPA/MCAT profile in one of four competitiveness
//!   bands and renders a school-matching report.
//!
//! Both tables are evaluated first-match-wins, so their order is significant.

/// Category selected for a guidance topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceTopic {
    Mcat,
    Research,
    Clinical,
    GapYear,
    General,
}

struct TopicRule {
    keywords: &'static [&'static str],
    topic: GuidanceTopic,
}

/// Ordered keyword table. A topic matches a row when its lower-cased text
/// contains any of the row's keywords. Rows are checked top to bottom.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        keywords: &["mcat"],
        topic: GuidanceTopic::Mcat,
    },
    TopicRule {
        keywords: &["research"],
        topic: GuidanceTopic::Research,
    },
    TopicRule {
        keywords: &["volunteer", "clinical"],
        topic: GuidanceTopic::Clinical,
    },
    TopicRule {
        keywords: &["gap year"],
        topic: GuidanceTopic::GapYear,
    },
];

impl GuidanceTopic {
    /// Classify a topic string. Always yields a topic; unmatched text falls
    /// back to [`GuidanceTopic::General`].
    pub fn classify(topic: &str) -> Self {
        let lowered = topic.to_lowercase();
        TOPIC_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
            .map(|rule| rule.topic)
            .unwrap_or(GuidanceTopic::General)
    }

    /// Fixed guidance text for this topic, starting with its heading.
    pub fn block(self) -> &'static str {
        match self {
            GuidanceTopic::Mcat => {
                "MCAT Preparation Guidance:
- Start 3-6 months before test date
- Use combination of prep books, practice tests, and review courses
- Focus on weak areas identified in diagnostic tests
- Take full-length practice tests under timed conditions
- Consider retaking if score is below target school ranges"
            }
            GuidanceTopic::Research => {
                "Research Experience Guidance:
- Start reaching out to faculty early in undergraduate career
- Look for opportunities in areas of interest
- Demonstrate commitment through sustained involvement
- Aim for meaningful contributions, not just hours
- Consider presenting at conferences or co-authoring publications"
            }
            GuidanceTopic::Clinical => {
                "Clinical Experience Guidance:
- Gain direct patient contact through volunteering or work
- Shadow physicians in various specialties
- Demonstrate long-term commitment to healthcare
- Reflect on experiences in applications and interviews
- Consider EMT, CNA, or medical scribe positions"
            }
            GuidanceTopic::GapYear => {
                "Gap Year Planning:
- Use time strategically to strengthen application
- Consider post-baccalaureate programs if GPA needs improvement
- Gain meaningful work or research experience
- Retake MCAT if needed
- Continue clinical and volunteer activities"
            }
            GuidanceTopic::General => {
                "General Pre-Med Guidance:
- Maintain strong academic performance
- Build diverse experiences (clinical, research, service, leadership)
- Develop meaningful relationships with mentors
- Start early with planning and preparation
- Stay committed to long-term goals while remaining flexible"
            }
        }
    }
}

/// Guidance block for a topic.
///
/// The student's situation is accepted for symmetry with the tool's inputs
/// but never changes which block is selected.
pub fn topic_guidance(topic: &str, _situation: &str) -> &'static str {
    GuidanceTopic::classify(topic).block()
}

/// Competitiveness band for a GPA/MCAT profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitivenessTier {
    HighlyCompetitive,
    Competitive,
    ModeratelyCompetitive,
    BelowRange,
}

/// Ordered band table: `(min_gpa, min_mcat, tier)`. Bounds are inclusive and
/// the first row whose two conditions both hold wins.
const BANDS: &[(f64, f64, CompetitivenessTier)] = &[
    (3.7, 515.0, CompetitivenessTier::HighlyCompetitive),
    (3.5, 510.0, CompetitivenessTier::Competitive),
    (3.2, 505.0, CompetitivenessTier::ModeratelyCompetitive),
];

impl CompetitivenessTier {
    /// Place a profile in a band. Absent or NaN scores fail every comparison
    /// and land in [`CompetitivenessTier::BelowRange`].
    pub fn from_scores(gpa: Option<f64>, mcat: Option<f64>) -> Self {
        let (Some(gpa), Some(mcat)) = (gpa, mcat) else {
            return CompetitivenessTier::BelowRange;
        };

        BANDS
            .iter()
            .find(|(min_gpa, min_mcat, _)| gpa >= *min_gpa && mcat >= *min_mcat)
            .map(|(_, _, tier)| *tier)
            .unwrap_or(CompetitivenessTier::BelowRange)
    }

    /// One-line assessment shown in the report.
    pub fn assessment(self) -> &'static str {
        match self {
            CompetitivenessTier::HighlyCompetitive => {
                "Highly competitive - excellent stats for top-tier schools"
            }
            CompetitivenessTier::Competitive => {
                "Competitive - good stats for many medical schools"
            }
            CompetitivenessTier::ModeratelyCompetitive => {
                "Moderately competitive - consider broad application strategy"
            }
            CompetitivenessTier::BelowRange => {
                "Below typical competitive range - consider strengthening application"
            }
        }
    }

    /// School recommendation lines; state-school suggestions name `state`.
    pub fn recommendations(self, state: &str) -> String {
        match self {
            CompetitivenessTier::HighlyCompetitive => format!(
                "Reach Schools: Harvard, Johns Hopkins, UCSF, Washington University
Target Schools: Emory, Vanderbilt, Northwestern, Case Western
Safety Schools: State schools in {state}, regional private schools"
            ),
            CompetitivenessTier::Competitive => format!(
                "Target Schools: State schools in {state}, mid-tier private schools
Safety Schools: Lower-tier state schools, DO schools
Reach Schools: Top-tier schools with mission fit"
            ),
            CompetitivenessTier::ModeratelyCompetitive => format!(
                "Focus on: State schools in {state}, DO schools, Caribbean schools
Consider: Post-baccalaureate programs, MCAT retake
Safety Schools: Less competitive MD and DO programs"
            ),
            CompetitivenessTier::BelowRange => "Recommendations: \n\
- Consider post-baccalaureate program to improve GPA
- Retake MCAT if below 500
- Focus on DO schools and less competitive MD programs
- Consider gap year to strengthen application"
                .to_string(),
        }
    }
}

/// A score as the caller sent it, with its numeric value when it has one.
///
/// The report echoes `raw`; only `value` takes part in band placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score<'a> {
    pub raw: &'a str,
    pub value: Option<f64>,
}

impl<'a> Score<'a> {
    pub fn new(raw: &'a str, value: Option<f64>) -> Self {
        Self { raw, value }
    }
}

/// Render the school-matching report for a profile.
pub fn school_match(gpa: Score<'_>, mcat: Score<'_>, state: &str, preferences: &str) -> String {
    let tier = CompetitivenessTier::from_scores(gpa.value, mcat.value);

    format!(
        "Medical School Matching Analysis\n\n\
         Profile: GPA {gpa}, MCAT {mcat}, {state} resident\n\
         Preferences: {preferences}\n\n\
         Competitiveness Assessment: {assessment}\n\n\
         School Recommendations:\n{recommendations}\n\n\
         Application Strategy:\n\
         - Apply to 15-25 schools across all categories\n\
         - Submit applications early in cycle\n\
         - Strong personal statement highlighting your journey\n\
         - Letters of recommendation from clinical and academic mentors\n\
         - Demonstrate genuine interest in each school through research",
        gpa = gpa.raw,
        mcat = mcat.raw,
        assessment = tier.assessment(),
        recommendations = tier.recommendations(state),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_table_order() {
        assert_eq!(GuidanceTopic::classify("MCAT scores"), GuidanceTopic::Mcat);
        assert_eq!(GuidanceTopic::classify("Research labs"), GuidanceTopic::Research);
        assert_eq!(GuidanceTopic::classify("volunteering"), GuidanceTopic::Clinical);
        assert_eq!(GuidanceTopic::classify("Clinical hours"), GuidanceTopic::Clinical);
        assert_eq!(GuidanceTopic::classify("taking a GAP YEAR"), GuidanceTopic::GapYear);
        assert_eq!(GuidanceTopic::classify("something unrelated"), GuidanceTopic::General);
        assert_eq!(GuidanceTopic::classify(""), GuidanceTopic::General);
    }

    #[test]
    fn classify_first_match_wins() {
        // mcat row precedes research row
        assert_eq!(GuidanceTopic::classify("research vs MCAT prep"), GuidanceTopic::Mcat);
        // research row precedes clinical row
        assert_eq!(GuidanceTopic::classify("clinical research"), GuidanceTopic::Research);
        // clinical row precedes gap year row
        assert_eq!(
            GuidanceTopic::classify("gap year volunteer work"),
            GuidanceTopic::Clinical
        );
    }

    #[test]
    fn topic_guidance_ignores_situation() {
        let a = topic_guidance("mcat", "junior with 3.9 GPA");
        let b = topic_guidance("mcat", "");
        assert_eq!(a, b);
        assert!(a.starts_with("MCAT Preparation Guidance:"));
    }

    #[test]
    fn bands_are_inclusive_at_boundaries() {
        use CompetitivenessTier::*;
        assert_eq!(CompetitivenessTier::from_scores(Some(3.7), Some(515.0)), HighlyCompetitive);
        assert_eq!(CompetitivenessTier::from_scores(Some(3.69), Some(515.0)), Competitive);
        assert_eq!(CompetitivenessTier::from_scores(Some(3.7), Some(514.0)), Competitive);
        assert_eq!(CompetitivenessTier::from_scores(Some(3.5), Some(510.0)), Competitive);
        assert_eq!(
            CompetitivenessTier::from_scores(Some(3.2), Some(505.0)),
            ModeratelyCompetitive
        );
        assert_eq!(CompetitivenessTier::from_scores(Some(3.19), Some(520.0)), BelowRange);
    }

    #[test]
    fn absent_or_nan_scores_fall_to_lowest_band() {
        use CompetitivenessTier::*;
        assert_eq!(CompetitivenessTier::from_scores(None, Some(520.0)), BelowRange);
        assert_eq!(CompetitivenessTier::from_scores(Some(4.0), None), BelowRange);
        assert_eq!(CompetitivenessTier::from_scores(Some(f64::NAN), Some(528.0)), BelowRange);
    }

    #[test]
    fn school_match_report_layout() {
        let report = school_match(
            Score::new("3.8", Some(3.8)),
            Score::new("520", Some(520.0)),
            "CA",
            "",
        );
        assert!(report.starts_with("Medical School Matching Analysis\n\nProfile: GPA 3.8, MCAT 520, CA resident\n"));
        assert!(report.contains("Preferences: \n\nCompetitiveness Assessment: Highly competitive"));
        assert!(report.contains("Safety Schools: State schools in CA, regional private schools"));
        assert!(report.contains("\n\nApplication Strategy:\n- Apply to 15-25 schools"));
    }

    #[test]
    fn school_match_below_range() {
        let report = school_match(
            Score::new("3.0", Some(3.0)),
            Score::new("500", Some(500.0)),
            "CA",
            "rural",
        );
        assert!(report.contains("Below typical competitive range"));
        assert!(report.contains("- Retake MCAT if below 500"));
        assert!(report.contains("Preferences: rural"));
    }

    #[test]
    fn school_match_absent_scores_render_empty() {
        let report = school_match(Score::new("", None), Score::new("", None), "", "");
        assert!(report.contains("Profile: GPA , MCAT ,  resident"));
        assert!(report.contains("Below typical competitive range"));
    }

    #[test]
    fn school_match_echoes_raw_scores() {
        let report = school_match(
            Score::new("N/A", None),
            Score::new("3.80", Some(3.8)),
            "CA",
            "",
        );
        assert!(report.contains("Profile: GPA N/A, MCAT 3.80, CA resident\n"));
        assert!(report.contains("Below typical competitive range"));
    }
}
