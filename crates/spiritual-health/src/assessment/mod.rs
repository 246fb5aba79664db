//! Questionnaire catalog and the scoring core.
//!
//! Answers flow from the catalog through the scoring engine into the
//! recommendation rules, and come out as an [`AssessmentReport`]. Every step is a
//! pure function of its inputs; the only shared data is the read-only reference
//! catalog.

pub mod answers;
pub mod catalog;
pub mod domain;
pub mod recommendations;
pub mod report;
pub mod scoring;
pub mod session;

pub use answers::{AnswerSet, MAX_ANSWER, MIN_ANSWER};
pub use catalog::{Question, QuestionCatalog, QuestionView};
pub use domain::{aspect_label, domain_label, Aspect, Domain, QuestionSetKind};
pub use recommendations::{recommend, Recommendation, RecommendationScope};
pub use report::{assess, AssessmentReport};
pub use scoring::{
    compute_scores, score_level, ScoreAggregate, ScoreBreakdown, ScoreLevel, ScoringEngine,
};
pub use session::AssessmentSession;

/// Precondition failures raised before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answer {value} for question '{question_id}' is outside the 1-6 scale")]
    InvalidAnswerValue { question_id: String, value: i32 },
    #[error("no questions configured for the {} question set", if *religious { "religious" } else { "non-religious" })]
    EmptyQuestionSet { religious: bool },
    #[error("unknown domain or aspect key '{0}'")]
    UnknownKey(String),
    #[error("question '{0}' is not part of the active question set")]
    UnknownQuestion(String),
}
