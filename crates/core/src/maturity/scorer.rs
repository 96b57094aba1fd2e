use crate::domain::maturity::{
    Dimension, DimensionScore, MaturityAnswers, MaturityLevel, MaturityResult,
};

pub const ADVANCED_THRESHOLD: f64 = 3.5;
pub const ESTABLISHED_THRESHOLD: f64 = 2.5;
pub const DEVELOPING_THRESHOLD: f64 = 1.5;

/// Scores answers per dimension and overall.
///
/// Unanswered questions count as 0, so partial answer sets are scored lower rather than
/// rejected. Use [`crate::maturity::require_complete`] first when that is not wanted.
pub fn score(answers: &MaturityAnswers, dimensions: &[Dimension]) -> MaturityResult {
    let dimension_scores: Vec<DimensionScore> = dimensions
        .iter()
        .map(|dimension| DimensionScore {
            dimension_name: dimension.name.clone(),
            score: mean(
                dimension
                    .question_ids
                    .iter()
                    .map(|qid| f64::from(answers.get(qid).unwrap_or(0))),
            ),
        })
        .collect();

    let overall_score = mean(dimension_scores.iter().map(|d| d.score));

    MaturityResult {
        dimension_scores,
        overall_score,
        maturity_level: maturity_level(overall_score),
    }
}

/// Inclusive lower bounds, checked highest first.
pub fn maturity_level(overall_score: f64) -> MaturityLevel {
    if overall_score >= ADVANCED_THRESHOLD {
        MaturityLevel::Advanced
    } else if overall_score >= ESTABLISHED_THRESHOLD {
        MaturityLevel::Established
    } else if overall_score >= DEVELOPING_THRESHOLD {
        MaturityLevel::Developing
    } else {
        MaturityLevel::Basic
    }
}

// Empty input scores 0.0 instead of NaN.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
