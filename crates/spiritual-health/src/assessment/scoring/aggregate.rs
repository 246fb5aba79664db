use serde::{Deserialize, Serialize};

use crate::assessment::answers::MAX_ANSWER;

/// Totals for one group of questions (an aspect, a domain, or the whole set).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreAggregate {
    pub raw_total: u32,
    pub max_possible: u32,
    pub question_count: u32,
    pub percentage: f64,
    pub average: f64,
}

impl ScoreAggregate {
    /// Returns `None` for an empty group so callers never see a NaN.
    pub fn from_totals(raw_total: u32, question_count: u32) -> Option<Self> {
        if question_count == 0 {
            return None;
        }

        let max_possible = question_count * MAX_ANSWER as u32;
        Some(Self {
            raw_total,
            max_possible,
            question_count,
            percentage: f64::from(raw_total) / f64::from(max_possible) * 100.0,
            average: f64::from(raw_total) / f64::from(question_count),
        })
    }

    pub fn level(&self) -> ScoreLevel {
        ScoreLevel::from_percentage(self.percentage)
    }
}

/// Three-tier qualitative band derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    High,
    Medium,
    Low,
}

pub const HIGH_THRESHOLD: f64 = 80.0;
pub const MEDIUM_THRESHOLD: f64 = 60.0;

impl ScoreLevel {
    /// Bands are inclusive at their lower bound.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Self::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "高",
            Self::Medium => "中",
            Self::Low => "低",
        }
    }
}

pub fn score_level(percentage: f64) -> ScoreLevel {
    ScoreLevel::from_percentage(percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_has_no_aggregate() {
        assert!(ScoreAggregate::from_totals(0, 0).is_none());
    }

    #[test]
    fn totals_produce_exact_ratios() {
        let aggregate = ScoreAggregate::from_totals(10, 3).expect("non-empty");
        assert_eq!(aggregate.max_possible, 18);
        assert!((aggregate.percentage - 55.555_555_555).abs() < 1e-6);
        assert!((aggregate.average - 3.333_333_333).abs() < 1e-6);
        assert_eq!(aggregate.level(), ScoreLevel::Low);
    }

    #[test]
    fn level_bands_are_inclusive_at_lower_bound() {
        assert_eq!(score_level(100.0), ScoreLevel::High);
        assert_eq!(score_level(80.0), ScoreLevel::High);
        assert_eq!(score_level(79.999), ScoreLevel::Medium);
        assert_eq!(score_level(60.0), ScoreLevel::Medium);
        assert_eq!(score_level(59.999), ScoreLevel::Low);
        assert_eq!(score_level(0.0), ScoreLevel::Low);
    }
}
