pub mod questionnaire;
pub mod recommendations;
pub mod report;
pub mod scorer;

pub use questionnaire::{missing_questions, questionnaire, require_complete};
pub use recommendations::recommendations;
pub use report::{assess, AssessmentReport};
pub use scorer::{maturity_level, score};
