use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AssessmentError;

pub const MIN_ANSWER: i32 = 1;
pub const MAX_ANSWER: i32 = 6;

/// Answers keyed by question id. Absent keys are unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, i32>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answer as given; range checks happen when scoring.
    pub fn insert(&mut self, question_id: impl Into<String>, value: i32) -> Option<i32> {
        self.0.insert(question_id.into(), value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<i32> {
        self.0.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }

    /// Contribution of one question to a raw total; unanswered scores zero.
    pub(crate) fn contribution(&self, question_id: &str) -> u32 {
        self.get(question_id)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0)
    }

    /// Rejects the first present answer outside the Likert range.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        match self.0.iter().find(|(_, value)| !is_valid_answer(**value)) {
            Some((question_id, value)) => Err(AssessmentError::InvalidAnswerValue {
                question_id: question_id.clone(),
                value: *value,
            }),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

pub fn is_valid_answer(value: i32) -> bool {
    (MIN_ANSWER..=MAX_ANSWER).contains(&value)
}
