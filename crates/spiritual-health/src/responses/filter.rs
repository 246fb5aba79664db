use serde::{Deserialize, Serialize};

use super::domain::ResponseRecord;
use super::profile::BiologicalGender;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    Other,
}

impl GenderFilter {
    fn matches(self, gender: BiologicalGender) -> bool {
        match self {
            Self::All => true,
            Self::Male => gender == BiologicalGender::Male,
            Self::Female => gender == BiologicalGender::Female,
            Self::Other => gender == BiologicalGender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    #[default]
    All,
    /// Under 30.
    Young,
    /// 30 to 49.
    Middle,
    /// 50 and over.
    Senior,
}

impl AgeBracket {
    pub fn matches(self, age: u16) -> bool {
        match self {
            Self::All => true,
            Self::Young => age < 30,
            Self::Middle => (30..50).contains(&age),
            Self::Senior => age >= 50,
        }
    }
}

/// Admin list criteria. Every criterion must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub gender: GenderFilter,
    #[serde(default)]
    pub age: AgeBracket,
}

impl ResponseFilter {
    pub fn matches(&self, record: &ResponseRecord) -> bool {
        self.matches_search(record)
            && self.gender.matches(record.profile.biological_gender)
            && self.age.matches(record.profile.age)
    }

    // Case-insensitive substring over name and e-mail; blank search matches all.
    fn matches_search(&self, record: &ResponseRecord) -> bool {
        let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        else {
            return true;
        };

        let term = term.to_lowercase();
        record.profile.name.to_lowercase().contains(&term)
            || record.profile.email.to_lowercase().contains(&term)
    }

    pub fn apply(&self, records: Vec<ResponseRecord>) -> Vec<ResponseRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub male: usize,
    pub female: usize,
    pub other: usize,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatistics {
    pub total: usize,
    /// Mean of the overall 1-6 averages; zero when there are no responses.
    pub average_overall_score: f64,
    pub religious: usize,
    pub gender_distribution: GenderDistribution,
}

impl ResponseStatistics {
    pub fn from_records(records: &[ResponseRecord]) -> Self {
        let total = records.len();
        let average_overall_score = if total == 0 {
            0.0
        } else {
            records.iter().map(ResponseRecord::overall_average).sum::<f64>() / total as f64
        };

        let mut gender_distribution = GenderDistribution::default();
        for record in records {
            match record.profile.biological_gender {
                BiologicalGender::Male => gender_distribution.male += 1,
                BiologicalGender::Female => gender_distribution.female += 1,
                BiologicalGender::Other => gender_distribution.other += 1,
            }
        }

        Self {
            total,
            average_overall_score,
            religious: records.iter().filter(|record| record.is_religious).count(),
            gender_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_brackets_split_at_thirty_and_fifty() {
        assert!(AgeBracket::Young.matches(29));
        assert!(!AgeBracket::Young.matches(30));
        assert!(AgeBracket::Middle.matches(30));
        assert!(AgeBracket::Middle.matches(49));
        assert!(!AgeBracket::Middle.matches(50));
        assert!(AgeBracket::Senior.matches(50));
        assert!(AgeBracket::All.matches(1));
    }

    #[test]
    fn filter_deserializes_from_sparse_query() {
        let filter: ResponseFilter =
            serde_json::from_str(r#"{"gender": "female"}"#).expect("parses");
        assert_eq!(filter.gender, GenderFilter::Female);
        assert_eq!(filter.age, AgeBracket::All);
        assert!(filter.search.is_none());
    }

    #[test]
    fn empty_statistics_average_is_zero() {
        let stats = ResponseStatistics::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_overall_score, 0.0);
    }
}
