use crate::domain::maturity::{Dimension, MaturityAnswers, MaturityResult};
use crate::error::IncompleteAnswersError;
use crate::maturity::{recommendations, require_complete, score};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub result: MaturityResult,
    pub recommendations: &'static [&'static str],
}

/// Scores an assessment and attaches the matching recommendations.
///
/// With `allow_partial == false` the answers must cover every question.
pub fn assess(
    answers: &MaturityAnswers,
    dimensions: &[Dimension],
    allow_partial: bool,
) -> Result<AssessmentReport, IncompleteAnswersError> {
    if !allow_partial {
        require_complete(answers, dimensions)?;
    }

    let result = score(answers, dimensions);
    tracing::debug!(
        answered = answers.len(),
        overall_score = result.overall_score,
        maturity_level = %result.maturity_level,
        "scored maturity assessment"
    );

    Ok(AssessmentReport {
        recommendations: recommendations(result.overall_score),
        result,
    })
}
