use chrono::NaiveDate;
use std::fmt;

/// User-facing input error. Blocks computation until the input is corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingSpend,
    InvalidSpend { raw: String },
    NonPositiveSpend { value: f64 },
    InvalidUtilization { raw: String },
    UtilizationOutOfRange { value: i64 },
    ProjectionOutOfRange { anchor: NaiveDate },
    UnknownQuestion { question_id: String },
    AnswerOutOfRange { question_id: String, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSpend => write!(f, "Please enter your current monthly spend"),
            Self::InvalidSpend { raw } => {
                write!(f, "Monthly spend must be a number (got {raw:?})")
            }
            Self::NonPositiveSpend { .. } => write!(f, "Monthly spend must be greater than 0"),
            Self::InvalidUtilization { raw } => {
                write!(f, "Utilization rate must be a whole number (got {raw:?})")
            }
            Self::UtilizationOutOfRange { value } => write!(
                f,
                "Utilization rate must be between 0 and 100 (got {value})"
            ),
            Self::ProjectionOutOfRange { anchor } => write!(
                f,
                "projection starting at {anchor} runs past the supported calendar range"
            ),
            Self::UnknownQuestion { question_id } => {
                write!(f, "unknown assessment question: {question_id}")
            }
            Self::AnswerOutOfRange { question_id, value } => write!(
                f,
                "answer for {question_id} must be between 1 and 4 (got {value})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raised by the completeness gate when an assessment is scored before every question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteAnswersError {
    pub missing: Vec<String>,
}

impl fmt::Display for IncompleteAnswersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "assessment is incomplete: {} unanswered question(s): {}",
            self.missing.len(),
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for IncompleteAnswersError {}
