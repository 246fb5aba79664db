use serde::{Deserialize, Serialize};

/// Demographic details collected after the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub name: String,
    pub age: u16,
    pub biological_gender: BiologicalGender,
    pub email: String,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    pub city: String,
    pub occupation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalGender {
    Male,
    Female,
    Other,
}

impl BiologicalGender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
            Self::Other => "其他",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

pub const MIN_AGE: u16 = 1;
pub const MAX_AGE: u16 = 120;

/// Nationality codes offered by the profile form, with display labels.
pub const NATIONALITIES: &[(&str, &str)] = &[
    ("ROC", "中華民國"),
    ("PRC", "中華人民共和國"),
    ("USA", "美國"),
    ("JPN", "日本"),
    ("KOR", "韓國"),
    ("SGP", "新加坡"),
    ("MYS", "馬來西亞"),
    ("THA", "泰國"),
    ("VNM", "越南"),
    ("PHL", "菲律賓"),
    ("IDN", "印尼"),
    ("IND", "印度"),
    ("AUS", "澳洲"),
    ("CAN", "加拿大"),
    ("GBR", "英國"),
    ("FRA", "法國"),
    ("DEU", "德國"),
    ("OTHER", "其他"),
];

fn default_nationality() -> String {
    "ROC".to_string()
}

pub fn nationality_label(code: &str) -> Option<&'static str> {
    NATIONALITIES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

/// First problem found in a submitted profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("profile field '{0}' is required")]
    EmptyField(&'static str),
    #[error("age must be between 1 and 120, got {0}")]
    AgeOutOfRange(u16),
    #[error("'{0}' is not a valid e-mail address")]
    InvalidEmail(String),
    #[error("unsupported nationality code '{0}'")]
    UnknownNationality(String),
}

impl RespondentProfile {
    pub fn validate(&self) -> Result<(), ProfileViolation> {
        if self.name.trim().is_empty() {
            return Err(ProfileViolation::EmptyField("name"));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ProfileViolation::AgeOutOfRange(self.age));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ProfileViolation::EmptyField("email"));
        }
        if !is_plausible_email(email) {
            return Err(ProfileViolation::InvalidEmail(email.to_string()));
        }

        if self.nationality.trim().is_empty() {
            return Err(ProfileViolation::EmptyField("nationality"));
        }
        if nationality_label(self.nationality.trim()).is_none() {
            return Err(ProfileViolation::UnknownNationality(
                self.nationality.clone(),
            ));
        }

        if self.city.trim().is_empty() {
            return Err(ProfileViolation::EmptyField("city"));
        }

        if self.occupation.trim().is_empty() {
            return Err(ProfileViolation::EmptyField("occupation"));
        }

        Ok(())
    }
}

// local@domain.tld with no whitespace and a single '@'.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
