use super::views::{
    AspectScoreEntry, AssessmentReportSummary, DomainScoreEntry, OverallScoreEntry,
};
use super::AssessmentReport;
use crate::assessment::domain::{Aspect, Domain};
use crate::assessment::recommendations::{strongest, weakest};
use crate::assessment::scoring::ScoreAggregate;

impl AssessmentReport {
    /// Labelled view of the report in stable domain and aspect order.
    pub fn summary(&self) -> AssessmentReportSummary {
        let domains = Domain::ordered()
            .into_iter()
            .filter_map(|domain| {
                self.domain_scores.get(&domain).map(|score| DomainScoreEntry {
                    domain,
                    domain_label: domain.label(),
                    score: *score,
                    level: score.level(),
                    level_label: score.level().label(),
                    aspects: self.aspect_entries(domain),
                })
            })
            .collect();

        let overall = OverallScoreEntry {
            score: self.overall_score,
            level: self.overall_score.level(),
            level_label: self.overall_score.level().label(),
        };

        AssessmentReportSummary {
            question_set: self.question_set,
            question_set_label: self.question_set.label(),
            overall,
            domains,
            strongest_domain: strongest(Domain::ordered(), &self.domain_scores)
                .map(|(domain, _)| domain.label()),
            weakest_domain: weakest(Domain::ordered(), &self.domain_scores)
                .map(|(domain, _)| domain.label()),
            recommendations: self.recommendations.clone(),
        }
    }

    fn aspect_entries(&self, domain: Domain) -> Vec<AspectScoreEntry> {
        domain
            .aspects()
            .into_iter()
            .filter_map(|aspect| {
                self.aspect_scores
                    .get(&aspect)
                    .map(|score| aspect_entry(aspect, score))
            })
            .collect()
    }
}

fn aspect_entry(aspect: Aspect, score: &ScoreAggregate) -> AspectScoreEntry {
    AspectScoreEntry {
        aspect,
        aspect_label: aspect.label(),
        score: *score,
        level: score.level(),
        level_label: score.level().label(),
    }
}
