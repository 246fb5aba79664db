use serde::Serialize;

use crate::assessment::domain::{Aspect, Domain, QuestionSetKind};
use crate::assessment::recommendations::Recommendation;
use crate::assessment::scoring::{ScoreAggregate, ScoreLevel};

#[derive(Debug, Clone, Serialize)]
pub struct AspectScoreEntry {
    pub aspect: Aspect,
    pub aspect_label: &'static str,
    pub score: ScoreAggregate,
    pub level: ScoreLevel,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainScoreEntry {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub score: ScoreAggregate,
    pub level: ScoreLevel,
    pub level_label: &'static str,
    pub aspects: Vec<AspectScoreEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallScoreEntry {
    pub score: ScoreAggregate,
    pub level: ScoreLevel,
    pub level_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReportSummary {
    pub question_set: QuestionSetKind,
    pub question_set_label: &'static str,
    pub overall: OverallScoreEntry,
    pub domains: Vec<DomainScoreEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest_domain: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest_domain: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<Recommendation>,
}
