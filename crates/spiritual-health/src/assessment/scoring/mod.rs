mod aggregate;

pub use aggregate::{score_level, ScoreAggregate, ScoreLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::answers::AnswerSet;
use super::catalog::{Question, QuestionCatalog};
use super::domain::{Aspect, Domain, QuestionSetKind};
use super::AssessmentError;

/// Domain, aspect, and overall aggregates for one answer set.
///
/// Groups with no questions in the active set are left out of the maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub domain_scores: BTreeMap<Domain, ScoreAggregate>,
    pub aspect_scores: BTreeMap<Aspect, ScoreAggregate>,
    pub overall_score: ScoreAggregate,
}

/// Stateless scorer over a question catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'c> {
    catalog: &'c QuestionCatalog,
}

impl ScoringEngine<'static> {
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }
}

impl<'c> ScoringEngine<'c> {
    pub fn new(catalog: &'c QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c QuestionCatalog {
        self.catalog
    }

    pub fn compute_scores(
        &self,
        answers: &AnswerSet,
        kind: QuestionSetKind,
    ) -> Result<ScoreBreakdown, AssessmentError> {
        answers.validate()?;

        let questions = self.catalog.question_set(kind);
        let overall_score = aggregate(questions.iter(), answers).ok_or(
            AssessmentError::EmptyQuestionSet {
                religious: kind.is_religious(),
            },
        )?;

        let domain_scores = Domain::ordered()
            .into_iter()
            .filter_map(|domain| {
                aggregate(questions.iter().filter(|q| q.domain() == domain), answers)
                    .map(|score| (domain, score))
            })
            .collect();

        let aspect_scores = Aspect::ordered()
            .into_iter()
            .filter_map(|aspect| {
                aggregate(questions.iter().filter(|q| q.aspect == aspect), answers)
                    .map(|score| (aspect, score))
            })
            .collect();

        debug!(
            question_set = ?kind,
            answered = answers.len(),
            questions = questions.len(),
            overall_percentage = overall_score.percentage,
            "computed assessment scores"
        );

        Ok(ScoreBreakdown {
            domain_scores,
            aspect_scores,
            overall_score,
        })
    }
}

/// Scores against the reference catalog.
pub fn compute_scores(
    answers: &AnswerSet,
    is_religious: bool,
) -> Result<ScoreBreakdown, AssessmentError> {
    ScoringEngine::standard().compute_scores(answers, QuestionSetKind::from_flag(is_religious))
}

fn aggregate<'q>(
    questions: impl Iterator<Item = &'q Question>,
    answers: &AnswerSet,
) -> Option<ScoreAggregate> {
    let (raw_total, count) = questions.fold((0u32, 0u32), |(total, count), question| {
        (total + answers.contribution(&question.id), count + 1)
    });
    ScoreAggregate::from_totals(raw_total, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::Question;

    fn all_answered(kind: QuestionSetKind, value: i32) -> AnswerSet {
        QuestionCatalog::standard()
            .question_set(kind)
            .iter()
            .map(|question| (question.id.clone(), value))
            .collect()
    }

    #[test]
    fn uniform_answers_give_uniform_aggregates() {
        let answers = all_answered(QuestionSetKind::NonReligious, 6);
        let breakdown = compute_scores(&answers, false).expect("scores");

        assert_eq!(breakdown.domain_scores.len(), 4);
        assert_eq!(breakdown.aspect_scores.len(), 7);
        assert_eq!(breakdown.overall_score.raw_total, 42);
        assert_eq!(breakdown.overall_score.max_possible, 42);
        assert_eq!(breakdown.overall_score.percentage, 100.0);
        for score in breakdown.domain_scores.values() {
            assert_eq!(score.average, 6.0);
        }
    }

    #[test]
    fn domain_groups_follow_aspect_mapping() {
        let answers = all_answered(QuestionSetKind::Religious, 3);
        let breakdown = compute_scores(&answers, true).expect("scores");

        let self_domain = breakdown.domain_scores[&Domain::SelfRelation];
        assert_eq!(self_domain.question_count, 3);
        assert_eq!(self_domain.raw_total, 9);
        assert_eq!(breakdown.domain_scores[&Domain::Others].question_count, 2);
        assert_eq!(breakdown.domain_scores[&Domain::Nature].question_count, 1);
    }

    #[test]
    fn answers_from_the_other_set_are_ignored() {
        let answers = all_answered(QuestionSetKind::Religious, 5);
        let breakdown = compute_scores(&answers, false).expect("scores");
        assert_eq!(breakdown.overall_score.raw_total, 0);
    }

    #[test]
    fn out_of_range_answer_refuses_to_score() {
        let mut answers = all_answered(QuestionSetKind::NonReligious, 4);
        answers.insert("q3", 9);
        assert!(matches!(
            compute_scores(&answers, false),
            Err(AssessmentError::InvalidAnswerValue { value: 9, .. })
        ));
    }

    #[test]
    fn empty_question_set_fails_loudly() {
        let catalog = QuestionCatalog::new(
            vec![Question::new("r1", "prompt", Aspect::HopeFaith)],
            Vec::new(),
        );
        let engine = ScoringEngine::new(&catalog);

        match engine.compute_scores(&AnswerSet::new(), QuestionSetKind::NonReligious) {
            Err(AssessmentError::EmptyQuestionSet { religious }) => assert!(!religious),
            other => panic!("expected empty question set, got {other:?}"),
        }
    }

    #[test]
    fn ragged_catalog_omits_uncovered_groups() {
        let questions = vec![
            Question::new("a", "first", Aspect::SelfAwareness),
            Question::new("b", "second", Aspect::SelfAwareness),
            Question::new("c", "third", Aspect::LoveEmpathy),
        ];
        let catalog = QuestionCatalog::new(questions.clone(), questions);
        let engine = ScoringEngine::new(&catalog);
        let answers: AnswerSet = [("a", 2), ("b", 4), ("c", 6)].into_iter().collect();

        let breakdown = engine
            .compute_scores(&answers, QuestionSetKind::Religious)
            .expect("scores");

        assert_eq!(breakdown.aspect_scores.len(), 2);
        assert_eq!(breakdown.domain_scores.len(), 2);
        let awareness = breakdown.aspect_scores[&Aspect::SelfAwareness];
        assert_eq!(awareness.average, 3.0);
        assert_eq!(awareness.max_possible, 12);
        assert!(!breakdown.domain_scores.contains_key(&Domain::Nature));
    }
}
