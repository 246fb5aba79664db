use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::assessment::AnswerSet;
use crate::responses::domain::{AssessmentSubmission, ResponseId, ResponseRecord};
use crate::responses::profile::{BiologicalGender, RespondentProfile};
use crate::responses::repository::{RepositoryError, ResponseRepository};
use crate::responses::{assessment_router, AssessmentService};

pub(super) fn profile(name: &str, age: u16, gender: BiologicalGender) -> RespondentProfile {
    RespondentProfile {
        name: name.to_string(),
        age,
        biological_gender: gender,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        nationality: "ROC".to_string(),
        city: "台北市".to_string(),
        occupation: "工程師".to_string(),
    }
}

pub(super) fn uniform_answers(value: i32, is_religious: bool) -> AnswerSet {
    let suffix = if is_religious { "_r" } else { "" };
    (1..=7).map(|n| (format!("q{n}{suffix}"), value)).collect()
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        profile: profile("Mei Chen", 28, BiologicalGender::Female),
        answers: uniform_answers(4, false),
        is_religious: false,
    }
}

pub(super) fn submission_for(
    name: &str,
    age: u16,
    gender: BiologicalGender,
    answer: i32,
    is_religious: bool,
) -> AssessmentSubmission {
    AssessmentSubmission {
        profile: profile(name, age, gender),
        answers: uniform_answers(answer, is_religious),
        is_religious,
    }
}

pub(super) fn submitted_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|date| date.and_hms_opt(14, 30, 0))
        .expect("valid timestamp")
}

pub(super) fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid date")
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone());
    (service, repository)
}

/// Three responses covering both question sets, every gender, and all age brackets.
pub(super) fn seeded_service() -> AssessmentService<MemoryRepository> {
    let (service, _) = build_service();
    for submission in [
        submission_for("Mei Chen", 28, BiologicalGender::Female, 4, false),
        submission_for("Wei Lin", 35, BiologicalGender::Male, 6, true),
        submission_for("Alex Wu", 52, BiologicalGender::Other, 2, false),
    ] {
        service
            .submit_at(submission, submitted_at())
            .expect("seed submission succeeds");
    }
    service
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<ResponseId, ResponseRecord>>>,
}

impl ResponseRepository for MemoryRepository {
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

pub(super) struct UnavailableRepository;

impl ResponseRepository for UnavailableRepository {
    fn insert(&self, _record: ResponseRecord) -> Result<ResponseRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: ResponseId) -> Result<Option<ResponseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: ResponseId) -> Result<ResponseRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
