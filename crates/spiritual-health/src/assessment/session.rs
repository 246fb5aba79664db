use serde::{Deserialize, Serialize};

use super::answers::{is_valid_answer, AnswerSet};
use super::catalog::Question;
use super::domain::QuestionSetKind;
use super::report::AssessmentReport;
use super::scoring::ScoringEngine;
use super::AssessmentError;

/// Caller-owned questionnaire state for one respondent.
///
/// The scoring core keeps nothing between calls; everything a questionnaire
/// needs to resume lives here and can be serialized by whoever holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSession {
    question_set: QuestionSetKind,
    answers: AnswerSet,
}

impl AssessmentSession {
    pub fn new(is_religious: bool) -> Self {
        Self::for_question_set(QuestionSetKind::from_flag(is_religious))
    }

    pub fn for_question_set(question_set: QuestionSetKind) -> Self {
        Self {
            question_set,
            answers: AnswerSet::new(),
        }
    }

    pub fn question_set(&self) -> QuestionSetKind {
        self.question_set
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn questions<'c>(&self, engine: &ScoringEngine<'c>) -> &'c [Question] {
        engine.catalog().question_set(self.question_set)
    }

    /// Records or overwrites an answer for a question in the active set.
    pub fn record_answer(
        &mut self,
        engine: &ScoringEngine<'_>,
        question_id: &str,
        value: i32,
    ) -> Result<(), AssessmentError> {
        if engine.catalog().find(self.question_set, question_id).is_none() {
            return Err(AssessmentError::UnknownQuestion(question_id.to_string()));
        }
        if !is_valid_answer(value) {
            return Err(AssessmentError::InvalidAnswerValue {
                question_id: question_id.to_string(),
                value,
            });
        }

        self.answers.insert(question_id, value);
        Ok(())
    }

    pub fn clear_answer(&mut self, question_id: &str) -> Option<i32> {
        self.answers.remove(question_id)
    }

    /// Switching question sets discards answers given to the previous set.
    pub fn switch_question_set(&mut self, question_set: QuestionSetKind) {
        if self.question_set != question_set {
            self.question_set = question_set;
            self.answers = AnswerSet::new();
        }
    }

    pub fn answered(&self, engine: &ScoringEngine<'_>) -> usize {
        self.questions(engine)
            .iter()
            .filter(|question| self.answers.contains(&question.id))
            .count()
    }

    /// Fraction of the active set answered, between 0 and 1.
    pub fn progress(&self, engine: &ScoringEngine<'_>) -> f64 {
        let total = self.questions(engine).len();
        if total == 0 {
            return 0.0;
        }
        self.answered(engine) as f64 / total as f64
    }

    pub fn is_complete(&self, engine: &ScoringEngine<'_>) -> bool {
        let questions = self.questions(engine);
        !questions.is_empty()
            && questions
                .iter()
                .all(|question| self.answers.contains(&question.id))
    }

    /// First unanswered question in catalog order.
    pub fn next_question<'c>(&self, engine: &ScoringEngine<'c>) -> Option<&'c Question> {
        self.questions(engine)
            .iter()
            .find(|question| !self.answers.contains(&question.id))
    }

    /// Produces the report. Unanswered questions score zero.
    pub fn finish(&self, engine: &ScoringEngine<'_>) -> Result<AssessmentReport, AssessmentError> {
        engine.assess(&self.answers, self.question_set)
    }
}
