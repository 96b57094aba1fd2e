use crate::domain::maturity::{Dimension, MaturityAnswers};
use crate::domain::savings::{Provider, ResourceType, SavingsInput};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_UTILIZATION_RATE: u8 = 50;

/// Calculator form payload as submitted. Numeric fields may arrive as JSON numbers or as the raw
/// text of a form control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRequest {
    #[serde(default)]
    pub current_spend: Option<Value>,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub utilization_rate: Option<Value>,
}

impl SavingsRequest {
    pub fn validate_and_into_input(self) -> Result<SavingsInput, ValidationError> {
        let current_spend = parse_spend(self.current_spend.as_ref())?;
        let utilization_rate = parse_utilization(self.utilization_rate.as_ref())?;

        Ok(SavingsInput {
            current_spend,
            provider: self.provider,
            resource_type: self.resource_type,
            utilization_rate,
        })
    }
}

fn parse_spend(raw: Option<&Value>) -> Result<f64, ValidationError> {
    let value = match raw {
        None | Some(Value::Null) => return Err(ValidationError::MissingSpend),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ValidationError::MissingSpend);
            }
            s.parse::<f64>().map_err(|_| ValidationError::InvalidSpend {
                raw: s.to_string(),
            })?
        }
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ValidationError::InvalidSpend {
            raw: n.to_string(),
        })?,
        Some(other) => {
            return Err(ValidationError::InvalidSpend {
                raw: other.to_string(),
            })
        }
    };

    if !value.is_finite() {
        return Err(ValidationError::InvalidSpend {
            raw: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveSpend { value });
    }
    Ok(value)
}

fn parse_utilization(raw: Option<&Value>) -> Result<u8, ValidationError> {
    let whole = match raw {
        None | Some(Value::Null) => return Ok(DEFAULT_UTILIZATION_RATE),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(DEFAULT_UTILIZATION_RATE),
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => v,
                Err(_) => truncate(s.parse::<f64>().ok(), s)?,
            }
        }
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => v,
            None => truncate(n.as_f64(), &n.to_string())?,
        },
        Some(other) => {
            return Err(ValidationError::InvalidUtilization {
                raw: other.to_string(),
            })
        }
    };

    if !(0..=100).contains(&whole) {
        return Err(ValidationError::UtilizationOutOfRange { value: whole });
    }
    u8::try_from(whole).map_err(|_| ValidationError::UtilizationOutOfRange { value: whole })
}

// Slider values can come through as "42.0"; keep the integer part.
fn truncate(value: Option<f64>, raw: &str) -> Result<i64, ValidationError> {
    match value {
        Some(v) if v.is_finite() => Ok(v.trunc() as i64),
        _ => Err(ValidationError::InvalidUtilization {
            raw: raw.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub answers: BTreeMap<String, i64>,
}

impl AssessmentSubmission {
    /// Checks every answer against the known questions and the 1..=4 scale.
    pub fn validate_and_into_answers(
        self,
        dimensions: &[Dimension],
    ) -> Result<MaturityAnswers, ValidationError> {
        let known: BTreeSet<&str> = dimensions
            .iter()
            .flat_map(|d| d.question_ids.iter().map(String::as_str))
            .collect();

        let mut answers = MaturityAnswers::new();
        for (question_id, value) in self.answers {
            let question_id = question_id.trim().to_string();
            if !known.contains(question_id.as_str()) {
                return Err(ValidationError::UnknownQuestion { question_id });
            }
            let value = u8::try_from(value)
                .map_err(|_| ValidationError::AnswerOutOfRange {
                    question_id: question_id.clone(),
                    value,
                })?;
            answers.answer(question_id, value)?;
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SavingsRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_numeric_and_text_spend() {
        let input = request(json!({"currentSpend": 1000, "provider": "azure"}))
            .validate_and_into_input()
            .unwrap();
        assert_eq!(input.current_spend, 1000.0);
        assert_eq!(input.provider, Provider::Azure);
        assert_eq!(input.resource_type, ResourceType::Compute);
        assert_eq!(input.utilization_rate, DEFAULT_UTILIZATION_RATE);

        let input = request(json!({
            "currentSpend": " 2500.50 ",
            "resourceType": "storage",
            "utilizationRate": "75",
        }))
        .validate_and_into_input()
        .unwrap();
        assert_eq!(input.current_spend, 2500.5);
        assert_eq!(input.resource_type, ResourceType::Storage);
        assert_eq!(input.utilization_rate, 75);
    }

    #[test]
    fn rejects_missing_spend() {
        for body in [json!({}), json!({"currentSpend": null}), json!({"currentSpend": "  "})] {
            let err = request(body).validate_and_into_input().unwrap_err();
            assert_eq!(err, ValidationError::MissingSpend);
        }
    }

    #[test]
    fn rejects_non_numeric_spend() {
        let err = request(json!({"currentSpend": "lots"}))
            .validate_and_into_input()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSpend { .. }));

        let err = request(json!({"currentSpend": [1, 2]}))
            .validate_and_into_input()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSpend { .. }));
    }

    #[test]
    fn rejects_zero_and_negative_spend() {
        for spend in [json!(0), json!(-5), json!("-0.01")] {
            let err = request(json!({"currentSpend": spend}))
                .validate_and_into_input()
                .unwrap_err();
            assert!(matches!(err, ValidationError::NonPositiveSpend { .. }));
        }
    }

    #[test]
    fn utilization_is_truncated_and_range_checked() {
        let input = request(json!({"currentSpend": 10, "utilizationRate": 42.9}))
            .validate_and_into_input()
            .unwrap();
        assert_eq!(input.utilization_rate, 42);

        let err = request(json!({"currentSpend": 10, "utilizationRate": 101}))
            .validate_and_into_input()
            .unwrap_err();
        assert_eq!(err, ValidationError::UtilizationOutOfRange { value: 101 });

        let err = request(json!({"currentSpend": 10, "utilizationRate": "half"}))
            .validate_and_into_input()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUtilization { .. }));
    }

    #[test]
    fn unknown_provider_fails_deserialization() {
        let parsed = serde_json::from_value::<SavingsRequest>(json!({
            "currentSpend": 100,
            "provider": "oracle",
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn submission_checks_question_ids_and_scale() {
        let dims = vec![
            Dimension::new("A", ["a1", "a2"]),
            Dimension::new("B", ["b1"]),
        ];

        let answers = serde_json::from_value::<AssessmentSubmission>(json!({
            "answers": {"a1": 2, "b1": 4},
        }))
        .unwrap()
        .validate_and_into_answers(&dims)
        .unwrap();
        assert_eq!(answers.get("a1"), Some(2));
        assert_eq!(answers.get("b1"), Some(4));
        assert!(!answers.contains("a2"));

        let err = serde_json::from_value::<AssessmentSubmission>(json!({
            "answers": {"zz": 2},
        }))
        .unwrap()
        .validate_and_into_answers(&dims)
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownQuestion {
                question_id: "zz".to_string()
            }
        );

        let err = serde_json::from_value::<AssessmentSubmission>(json!({
            "answers": {"a1": -1},
        }))
        .unwrap()
        .validate_and_into_answers(&dims)
        .unwrap_err();
        assert!(matches!(err, ValidationError::AnswerOutOfRange { value: -1, .. }));
    }
}
