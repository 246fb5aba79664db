use serde::Serialize;
use std::sync::OnceLock;

use super::domain::{Aspect, Domain, QuestionSetKind};

/// A single Likert prompt. The domain is derived from the aspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub aspect: Aspect,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, aspect: Aspect) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            aspect,
        }
    }

    pub fn domain(&self) -> Domain {
        self.aspect.domain()
    }

    pub fn to_view(&self) -> QuestionView {
        QuestionView {
            id: self.id.clone(),
            text: self.text.clone(),
            domain: self.domain(),
            domain_label: self.domain().label(),
            aspect: self.aspect,
            aspect_label: self.aspect.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub domain: Domain,
    pub domain_label: &'static str,
    pub aspect: Aspect,
    pub aspect_label: &'static str,
}

/// Read-only registry holding the religious and non-religious question sets.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    religious: Vec<Question>,
    non_religious: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(religious: Vec<Question>, non_religious: Vec<Question>) -> Self {
        Self {
            religious,
            non_religious,
        }
    }

    /// The reference questionnaire, built once and shared by every caller.
    pub fn standard() -> &'static QuestionCatalog {
        static STANDARD: OnceLock<QuestionCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(religious_questions(), non_religious_questions()))
    }

    pub fn question_set(&self, kind: QuestionSetKind) -> &[Question] {
        match kind {
            QuestionSetKind::Religious => &self.religious,
            QuestionSetKind::NonReligious => &self.non_religious,
        }
    }

    pub fn questions_for(&self, is_religious: bool) -> &[Question] {
        self.question_set(QuestionSetKind::from_flag(is_religious))
    }

    pub fn find(&self, kind: QuestionSetKind, id: &str) -> Option<&Question> {
        self.question_set(kind)
            .iter()
            .find(|question| question.id == id)
    }
}

fn non_religious_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1",
            "我能清楚地意識到自己當下的情緒、想法和身體感受。",
            Aspect::SelfAwareness,
        ),
        Question::new(
            "q2",
            "我覺得我的生活有明確的目標和意義。",
            Aspect::MeaningInLife,
        ),
        Question::new(
            "q3",
            "即使面對壓力和挑戰，我內心仍能保持平靜和穩定。",
            Aspect::InnerPeace,
        ),
        Question::new(
            "q4",
            "我時常對生活中的人事物心存感激，並且能夠原諒曾經傷害過我的人。",
            Aspect::GratitudeForgiveness,
        ),
        Question::new(
            "q5",
            "我能夠真誠地關心他人，並從他人的角度理解他們。",
            Aspect::LoveEmpathy,
        ),
        Question::new(
            "q6",
            "當我身處大自然中時，我會感到一種敬畏和連結感。",
            Aspect::HumilityAwe,
        ),
        Question::new(
            "q7",
            "我相信宇宙或生命本身有一種超越個人的力量或秩序。",
            Aspect::HopeFaith,
        ),
    ]
}

fn religious_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1_r",
            "我能清楚地意識到聖靈/內在神性在我內心的引導。",
            Aspect::SelfAwareness,
        ),
        Question::new(
            "q2_r",
            "我相信我的生命是上帝/神聖計畫的一部分，並為此而活。",
            Aspect::MeaningInLife,
        ),
        Question::new(
            "q3_r",
            "透過祈禱、默想或讀經，我的內心能獲得從神而來的平安。",
            Aspect::InnerPeace,
        ),
        Question::new(
            "q4_r",
            "我感謝神所賜予的一切，並願意遵從祂的教導去寬恕他人。",
            Aspect::GratitudeForgiveness,
        ),
        Question::new(
            "q5_r",
            "我努力以神的愛去愛人，並在他人身上看見神的面容。",
            Aspect::LoveEmpathy,
        ),
        Question::new(
            "q6_r",
            "在神的創造中，我看見自己的渺小，並對祂的偉大感到敬畏。",
            Aspect::HumilityAwe,
        ),
        Question::new(
            "q7_r",
            "我對我的信仰有堅定的信心，相信祂會帶領我走過人生的所有高山低谷。",
            Aspect::HopeFaith,
        ),
    ]
}
