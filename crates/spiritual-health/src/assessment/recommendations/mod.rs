mod tables;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::domain::{Aspect, Domain, QuestionSetKind};
use super::scoring::{ScoreAggregate, ScoreBreakdown};
use tables::{aspect_guidance, domain_guidance, Guidance};

/// Groups scoring strictly below this percentage trigger a recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationScope {
    Domain,
    Aspect,
}

/// Fixed guidance targeted at the weakest domain or aspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub scope: RecommendationScope,
    pub key: String,
    pub label: String,
    pub title: String,
    pub suggestions: Vec<String>,
}

impl Recommendation {
    fn from_guidance(
        scope: RecommendationScope,
        key: &str,
        label: &str,
        guidance: Guidance,
    ) -> Self {
        Self {
            scope,
            key: key.to_string(),
            label: label.to_string(),
            title: guidance.title.to_string(),
            suggestions: guidance
                .suggestions
                .iter()
                .map(|suggestion| suggestion.to_string())
                .collect(),
        }
    }

    pub fn summary(&self) -> String {
        format!("{}: {}", self.label, self.title)
    }
}

/// At most one domain and one aspect recommendation, in that order.
pub fn recommend(breakdown: &ScoreBreakdown, kind: QuestionSetKind) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(2);

    if let Some((domain, _)) = weakest(Domain::ordered(), &breakdown.domain_scores)
        .filter(|(_, score)| below_threshold(score))
    {
        recommendations.push(Recommendation::from_guidance(
            RecommendationScope::Domain,
            domain.key(),
            domain.label(),
            domain_guidance(domain, kind),
        ));
    }

    if let Some((aspect, _)) = weakest(Aspect::ordered(), &breakdown.aspect_scores)
        .filter(|(_, score)| below_threshold(score))
    {
        recommendations.push(Recommendation::from_guidance(
            RecommendationScope::Aspect,
            aspect.key(),
            aspect.label(),
            aspect_guidance(aspect),
        ));
    }

    recommendations
}

/// Lowest percentage in `order`; ties keep the earliest key.
pub fn weakest<K, const N: usize>(
    order: [K; N],
    scores: &BTreeMap<K, ScoreAggregate>,
) -> Option<(K, ScoreAggregate)>
where
    K: Ord + Copy,
{
    order
        .into_iter()
        .filter_map(|key| scores.get(&key).map(|score| (key, *score)))
        .fold(None, |lowest, candidate| match lowest {
            Some((_, current)) if candidate.1.percentage >= current.percentage => lowest,
            _ => Some(candidate),
        })
}

/// Highest percentage in `order`; ties keep the earliest key.
pub fn strongest<K, const N: usize>(
    order: [K; N],
    scores: &BTreeMap<K, ScoreAggregate>,
) -> Option<(K, ScoreAggregate)>
where
    K: Ord + Copy,
{
    order
        .into_iter()
        .filter_map(|key| scores.get(&key).map(|score| (key, *score)))
        .fold(None, |highest, candidate| match highest {
            Some((_, current)) if candidate.1.percentage <= current.percentage => highest,
            _ => Some(candidate),
        })
}

fn below_threshold(score: &ScoreAggregate) -> bool {
    score.percentage < RECOMMENDATION_THRESHOLD
}
