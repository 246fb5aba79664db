use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::profile::RespondentProfile;
use crate::assessment::{AnswerSet, AssessmentReport};

/// Sequential identifier for a stored response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(pub u64);

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scoring request with no profile attached; nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSet,
    #[serde(default)]
    pub is_religious: bool,
}

/// Completed questionnaire plus profile, as sent by the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub profile: RespondentProfile,
    pub answers: AnswerSet,
    #[serde(default)]
    pub is_religious: bool,
}

/// Stored response as listed and exported by the admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: ResponseId,
    #[serde(with = "timestamp_format")]
    pub submitted_at: NaiveDateTime,
    pub profile: RespondentProfile,
    pub is_religious: bool,
    pub answers: AnswerSet,
    pub report: AssessmentReport,
}

impl ResponseRecord {
    pub fn overall_average(&self) -> f64 {
        self.report.overall_score.average
    }
}

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub(super) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
