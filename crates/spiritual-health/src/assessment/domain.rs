use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AssessmentError;

/// Top-level relational categories that group the aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[serde(rename = "self")]
    SelfRelation,
    Others,
    Nature,
    Transcendent,
}

impl Domain {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SelfRelation,
            Self::Others,
            Self::Nature,
            Self::Transcendent,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SelfRelation => "self",
            Self::Others => "others",
            Self::Nature => "nature",
            Self::Transcendent => "transcendent",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfRelation => "與自己的關係",
            Self::Others => "與他人的關係",
            Self::Nature => "與自然的關係",
            Self::Transcendent => "與超越者的關係",
        }
    }

    /// Aspects grouped under this domain, in catalog order.
    pub fn aspects(self) -> Vec<Aspect> {
        Aspect::ordered()
            .into_iter()
            .filter(|aspect| aspect.domain() == self)
            .collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Domain {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|domain| domain.key() == value.trim())
            .ok_or_else(|| AssessmentError::UnknownKey(value.to_string()))
    }
}

/// Finer-grained constructs scored by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    SelfAwareness,
    MeaningInLife,
    InnerPeace,
    GratitudeForgiveness,
    LoveEmpathy,
    HumilityAwe,
    HopeFaith,
}

impl Aspect {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::SelfAwareness,
            Self::MeaningInLife,
            Self::InnerPeace,
            Self::GratitudeForgiveness,
            Self::LoveEmpathy,
            Self::HumilityAwe,
            Self::HopeFaith,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SelfAwareness => "self_awareness",
            Self::MeaningInLife => "meaning_in_life",
            Self::InnerPeace => "inner_peace",
            Self::GratitudeForgiveness => "gratitude_forgiveness",
            Self::LoveEmpathy => "love_empathy",
            Self::HumilityAwe => "humility_awe",
            Self::HopeFaith => "hope_faith",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfAwareness => "自我覺察",
            Self::MeaningInLife => "生命意義",
            Self::InnerPeace => "內在平靜",
            Self::GratitudeForgiveness => "感恩與寬恕",
            Self::LoveEmpathy => "愛與同理",
            Self::HumilityAwe => "謙卑與敬畏",
            Self::HopeFaith => "盼望與信心",
        }
    }

    /// Fixed many-to-one mapping; a question's domain always comes from here.
    pub const fn domain(self) -> Domain {
        match self {
            Self::SelfAwareness | Self::MeaningInLife | Self::InnerPeace => Domain::SelfRelation,
            Self::GratitudeForgiveness | Self::LoveEmpathy => Domain::Others,
            Self::HumilityAwe => Domain::Nature,
            Self::HopeFaith => Domain::Transcendent,
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Aspect {
    type Err = AssessmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|aspect| aspect.key() == value.trim())
            .ok_or_else(|| AssessmentError::UnknownKey(value.to_string()))
    }
}

/// Which of the two parallel question sets is active for a respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSetKind {
    Religious,
    NonReligious,
}

impl QuestionSetKind {
    pub const fn from_flag(is_religious: bool) -> Self {
        if is_religious {
            Self::Religious
        } else {
            Self::NonReligious
        }
    }

    pub const fn is_religious(self) -> bool {
        matches!(self, Self::Religious)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Religious => "有宗教信仰",
            Self::NonReligious => "沒有宗教信仰",
        }
    }
}

/// Label lookup by raw key, for callers holding untyped identifiers.
pub fn domain_label(key: &str) -> Result<&'static str, AssessmentError> {
    key.parse::<Domain>().map(Domain::label)
}

/// Label lookup by raw key, for callers holding untyped identifiers.
pub fn aspect_label(key: &str) -> Result<&'static str, AssessmentError> {
    key.parse::<Aspect>().map(Aspect::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_owns_at_least_one_aspect() {
        for domain in Domain::ordered() {
            assert!(!domain.aspects().is_empty(), "{domain} has no aspects");
        }
        let total: usize = Domain::ordered()
            .into_iter()
            .map(|domain| domain.aspects().len())
            .sum();
        assert_eq!(total, Aspect::ordered().len());
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for domain in Domain::ordered() {
            assert_eq!(domain.key().parse::<Domain>().expect("known key"), domain);
        }
        for aspect in Aspect::ordered() {
            assert_eq!(aspect.key().parse::<Aspect>().expect("known key"), aspect);
        }
    }

    #[test]
    fn label_lookups_reject_unknown_keys() {
        assert_eq!(domain_label("nature").expect("known"), "與自然的關係");
        assert_eq!(aspect_label("hope_faith").expect("known"), "盼望與信心");

        match domain_label("spirit") {
            Err(AssessmentError::UnknownKey(key)) => assert_eq!(key, "spirit"),
            other => panic!("expected unknown key, got {other:?}"),
        }
        assert!(matches!(
            aspect_label("self"),
            Err(AssessmentError::UnknownKey(_))
        ));
    }

    #[test]
    fn serde_uses_source_keys() {
        let json = serde_json::to_string(&Domain::SelfRelation).expect("serializes");
        assert_eq!(json, "\"self\"");
        let aspect: Aspect = serde_json::from_str("\"gratitude_forgiveness\"").expect("parses");
        assert_eq!(aspect, Aspect::GratitudeForgiveness);
    }
}
