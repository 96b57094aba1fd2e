pub mod best_practices;
pub mod estimator;
pub mod tips;

pub use best_practices::{best_practices, filter_practices, Level, Practice, PracticeCategory};
pub use estimator::{estimate, estimate_at, savings_rate};
pub use tips::{optimization_tips, ResourceTips};
