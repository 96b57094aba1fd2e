use crate::maturity::scorer::{ADVANCED_THRESHOLD, ESTABLISHED_THRESHOLD};

const FOUNDATIONAL: &[&str] = &[
    "Consider implementing basic cost allocation and tagging strategies",
    "Establish foundational cost monitoring practices",
];

const AUTOMATION: &[&str] = &[
    "Focus on automating cost optimization processes",
    "Implement advanced reporting and forecasting",
];

const PREDICTIVE: &[&str] = &[
    "Consider AI-driven optimization strategies",
    "Explore predictive analytics for cost management",
];

/// Next steps for an overall maturity score. Basic and Developing share the foundational advice.
pub fn recommendations(overall_score: f64) -> &'static [&'static str] {
    if overall_score >= ADVANCED_THRESHOLD {
        PREDICTIVE
    } else if overall_score >= ESTABLISHED_THRESHOLD {
        AUTOMATION
    } else {
        FOUNDATIONAL
    }
}
