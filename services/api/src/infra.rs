use chrono::{NaiveDate, NaiveDateTime};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use spiritual_health::assessment::AnswerSet;
use spiritual_health::error::AppError;
use spiritual_health::responses::{
    AssessmentService, AssessmentSubmission, BiologicalGender, RepositoryError,
    RespondentProfile, ResponseId, ResponseRecord, ResponseRepository,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryResponseRepository {
    records: Arc<Mutex<BTreeMap<ResponseId, ResponseRecord>>>,
}

impl ResponseRepository for InMemoryResponseRepository {
    fn insert(&self, record: ResponseRecord) -> Result<ResponseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: ResponseId) -> Result<Option<ResponseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, id: ResponseId) -> Result<ResponseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(&id).ok_or(RepositoryError::NotFound)
    }
}

pub(crate) type ResponseService = AssessmentService<InMemoryResponseRepository>;

pub(crate) fn response_service(seed_demo_data: bool) -> Result<Arc<ResponseService>, AppError> {
    let repository = Arc::new(InMemoryResponseRepository::default());
    let service = Arc::new(AssessmentService::new(repository));
    if seed_demo_data {
        seed_demo_responses(&service)?;
    }
    Ok(service)
}

/// Stores the two sample respondents the admin view starts with.
pub(crate) fn seed_demo_responses(service: &ResponseService) -> Result<(), AppError> {
    for (submission, submitted_at) in demo_submissions()? {
        service.submit_at(submission, submitted_at)?;
    }
    Ok(())
}

fn demo_submissions() -> Result<Vec<(AssessmentSubmission, NaiveDateTime)>, AppError> {
    Ok(vec![
        (
            AssessmentSubmission {
                profile: RespondentProfile {
                    name: "張小明".to_string(),
                    age: 25,
                    biological_gender: BiologicalGender::Male,
                    email: "zhang@example.com".to_string(),
                    nationality: "ROC".to_string(),
                    city: "台北市".to_string(),
                    occupation: "工程師".to_string(),
                },
                answers: [
                    ("q1_r", 5),
                    ("q2_r", 4),
                    ("q3_r", 5),
                    ("q4_r", 4),
                    ("q5_r", 4),
                    ("q6_r", 4),
                    ("q7_r", 5),
                ]
                .into_iter()
                .collect(),
                is_religious: true,
            },
            demo_timestamp((2024, 1, 15), (14, 30, 0))?,
        ),
        (
            AssessmentSubmission {
                profile: RespondentProfile {
                    name: "李小華".to_string(),
                    age: 32,
                    biological_gender: BiologicalGender::Female,
                    email: "li@example.com".to_string(),
                    nationality: "ROC".to_string(),
                    city: "新北市".to_string(),
                    occupation: "教師".to_string(),
                },
                answers: [
                    ("q1", 3),
                    ("q2", 4),
                    ("q3", 4),
                    ("q4", 4),
                    ("q5", 5),
                    ("q6", 4),
                    ("q7", 4),
                ]
                .into_iter()
                .collect(),
                is_religious: false,
            },
            demo_timestamp((2024, 1, 16), (9, 15, 0))?,
        ),
    ])
}

fn demo_timestamp(
    (year, month, day): (i32, u32, u32),
    (hour, minute, second): (u32, u32, u32),
) -> Result<NaiveDateTime, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| AppError::Parse {
            input: format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"),
            reason: "not a valid calendar timestamp".to_string(),
        })
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| AppError::Parse {
        input: path.display().to_string(),
        reason: err.to_string(),
    })
}

pub(crate) fn read_answers(path: &Path) -> Result<AnswerSet, AppError> {
    read_json_file(path)
}

/// Parses a snake_case enum value the way query strings do.
pub(crate) fn parse_keyword<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_ascii_lowercase()))
        .map_err(|err| format!("unsupported value '{raw}' ({err})"))
}
