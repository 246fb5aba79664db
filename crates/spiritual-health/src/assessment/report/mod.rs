mod summary;
pub mod views;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::answers::AnswerSet;
use super::domain::{Aspect, Domain, QuestionSetKind};
use super::recommendations::{recommend, Recommendation};
use super::scoring::{ScoreAggregate, ScoreBreakdown, ScoringEngine};
use super::AssessmentError;

/// Report payload handed to the presentation layer and stored with a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub question_set: QuestionSetKind,
    pub domain_scores: BTreeMap<Domain, ScoreAggregate>,
    pub aspect_scores: BTreeMap<Aspect, ScoreAggregate>,
    pub overall_score: ScoreAggregate,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub fn from_breakdown(breakdown: ScoreBreakdown, question_set: QuestionSetKind) -> Self {
        let recommendations = recommend(&breakdown, question_set);
        let ScoreBreakdown {
            domain_scores,
            aspect_scores,
            overall_score,
        } = breakdown;

        Self {
            question_set,
            domain_scores,
            aspect_scores,
            overall_score,
            recommendations,
        }
    }

    pub fn is_religious(&self) -> bool {
        self.question_set.is_religious()
    }
}

impl ScoringEngine<'_> {
    /// Scores the answers and attaches recommendations.
    pub fn assess(
        &self,
        answers: &AnswerSet,
        kind: QuestionSetKind,
    ) -> Result<AssessmentReport, AssessmentError> {
        let breakdown = self.compute_scores(answers, kind)?;
        Ok(AssessmentReport::from_breakdown(breakdown, kind))
    }
}

/// Full report against the reference catalog.
pub fn assess(answers: &AnswerSet, is_religious: bool) -> Result<AssessmentReport, AssessmentError> {
    ScoringEngine::standard().assess(answers, QuestionSetKind::from_flag(is_religious))
}
