pub mod engine;
pub mod rating;
pub mod rules;
pub mod suggestions;

pub use engine::{calculate_score, RuleContribution, ScoreResult};
pub use rating::Rating;
pub use rules::{Category, RangeOp};
pub use suggestions::{suggestions_for, Suggestion, PERFORMS_WELL_MESSAGE};
