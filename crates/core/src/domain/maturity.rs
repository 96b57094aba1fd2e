use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 4;

/// Answers keyed by question id. Filled in one question at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaturityAnswers(BTreeMap<String, u8>);

impl MaturityAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer for `question_id`.
    pub fn answer(
        &mut self,
        question_id: impl Into<String>,
        value: u8,
    ) -> Result<(), ValidationError> {
        let question_id = question_id.into();
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(ValidationError::AnswerOutOfRange {
                question_id,
                value: i64::from(value),
            });
        }
        self.0.insert(question_id, value);
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A named cluster of questions scored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,
    pub question_ids: Vec<String>,
}

impl Dimension {
    pub fn new<I, S>(name: impl Into<String>, question_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            question_ids: question_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Basic,
    Developing,
    Established,
    Advanced,
}

impl MaturityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            MaturityLevel::Basic => "Basic",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Established => "Established",
            MaturityLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension_name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityResult {
    pub dimension_scores: Vec<DimensionScore>,
    pub overall_score: f64,
    pub maturity_level: MaturityLevel,
}
