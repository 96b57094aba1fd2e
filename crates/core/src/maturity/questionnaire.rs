use crate::domain::maturity::{Dimension, MaturityAnswers};
use crate::error::IncompleteAnswersError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: [AnswerOption; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub questions: &'static [Question],
}

impl Section {
    pub fn to_dimension(&self) -> Dimension {
        Dimension::new(self.title, self.questions.iter().map(|q| q.id))
    }
}

const fn options(labels: [&'static str; 4]) -> [AnswerOption; 4] {
    [
        AnswerOption { value: 1, label: labels[0] },
        AnswerOption { value: 2, label: labels[1] },
        AnswerOption { value: 3, label: labels[2] },
        AnswerOption { value: 4, label: labels[3] },
    ]
}

static SECTIONS: [Section; 3] = [
    Section {
        title: "Cost Visibility & Allocation",
        questions: &[
            Question {
                id: "cv1",
                text: "Do you have complete visibility into cloud costs across all providers?",
                options: options([
                    "Limited visibility",
                    "Basic reporting in place",
                    "Comprehensive dashboards",
                    "Advanced analytics with forecasting",
                ]),
            },
            Question {
                id: "cv2",
                text: "How effectively are costs allocated to business units?",
                options: options([
                    "No allocation",
                    "Basic tagging strategy",
                    "Automated allocation",
                    "Full chargeback implementation",
                ]),
            },
        ],
    },
    Section {
        title: "Optimization Practices",
        questions: &[
            Question {
                id: "op1",
                text: "How do you manage resource provisioning?",
                options: options([
                    "Manual provisioning",
                    "Basic automation",
                    "Infrastructure as Code",
                    "Full automation with optimization",
                ]),
            },
            Question {
                id: "op2",
                text: "What is your approach to Reserved Instances/Savings Plans?",
                options: options([
                    "No commitments",
                    "Basic commitments",
                    "Strategic commitment planning",
                    "Automated commitment optimization",
                ]),
            },
        ],
    },
    Section {
        title: "Governance & Automation",
        questions: &[
            Question {
                id: "ga1",
                text: "How mature are your cost control policies?",
                options: options([
                    "No policies",
                    "Basic budgets",
                    "Automated alerts",
                    "Predictive controls",
                ]),
            },
            Question {
                id: "ga2",
                text: "What level of automation exists in your cost management?",
                options: options([
                    "Manual processes",
                    "Some automation",
                    "Extensive automation",
                    "AI-driven optimization",
                ]),
            },
        ],
    },
];

/// The built-in FinOps maturity questionnaire, in presentation order.
pub fn questionnaire() -> &'static [Section] {
    &SECTIONS
}

pub fn dimensions() -> Vec<Dimension> {
    SECTIONS.iter().map(Section::to_dimension).collect()
}

/// Question ids with no recorded answer, in questionnaire order.
pub fn missing_questions(answers: &MaturityAnswers, dimensions: &[Dimension]) -> Vec<String> {
    dimensions
        .iter()
        .flat_map(|d| d.question_ids.iter())
        .filter(|qid| !answers.contains(qid))
        .cloned()
        .collect()
}

pub fn require_complete(
    answers: &MaturityAnswers,
    dimensions: &[Dimension],
) -> Result<(), IncompleteAnswersError> {
    let missing = missing_questions(answers, dimensions);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IncompleteAnswersError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn three_sections_of_two_questions() {
        let dims = dimensions();
        assert_eq!(dims.len(), 3);
        assert!(dims.iter().all(|d| d.question_ids.len() == 2));
        assert_eq!(dims[1].name, "Optimization Practices");
        assert_eq!(dims[2].question_ids, ["ga1", "ga2"]);
    }

    #[test]
    fn question_ids_are_unique_and_options_cover_scale() {
        let mut seen = BTreeSet::new();
        for section in questionnaire() {
            for q in section.questions {
                assert!(seen.insert(q.id), "duplicate question id {}", q.id);
                let values: Vec<u8> = q.options.iter().map(|o| o.value).collect();
                assert_eq!(values, [1, 2, 3, 4]);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn gate_reports_missing_in_order() {
        let dims = dimensions();
        let mut answers = MaturityAnswers::new();
        answers.answer("cv1", 2).unwrap();
        answers.answer("ga1", 3).unwrap();

        let err = require_complete(&answers, &dims).unwrap_err();
        assert_eq!(err.missing, ["cv2", "op1", "op2", "ga2"]);

        for qid in ["cv2", "op1", "op2", "ga2"] {
            answers.answer(qid, 1).unwrap();
        }
        assert!(require_complete(&answers, &dims).is_ok());
        assert!(missing_questions(&answers, &dims).is_empty());
    }
}
