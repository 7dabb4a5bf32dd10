pub mod criteria;
pub mod engine;
pub mod grade;
pub mod validation;

pub use criteria::{Criteria, Priority, Usage};
pub use engine::{calculate_score, score, FactorContribution, ScoreBreakdown, ScoreResult, MAX_SCORE};
pub use grade::Grade;
pub use validation::{score_checked, validate_criteria, validate_vehicle, ScoreError};
