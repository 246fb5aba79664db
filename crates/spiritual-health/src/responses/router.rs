use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSubmission, ResponseId, ScoreRequest};
use super::export::ExportFormat;
use super::filter::{AgeBracket, GenderFilter, ResponseFilter};
use super::repository::{RepositoryError, ResponseRepository};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::assessment::QuestionSetKind;

/// Router builder exposing the questionnaire, scoring, and admin endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: ResponseRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<R>))
        .route("/api/v1/assessments", post(submit_handler::<R>))
        .route("/api/v1/assessments/score", post(score_handler::<R>))
        .route("/api/v1/responses", get(list_handler::<R>))
        .route("/api/v1/responses/statistics", get(statistics_handler::<R>))
        .route("/api/v1/responses/export", get(export_handler::<R>))
        .route(
            "/api/v1/responses/:response_id",
            get(fetch_handler::<R>).delete(delete_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    religious: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExportQuery {
    #[serde(default)]
    format: ExportFormat,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    gender: GenderFilter,
    #[serde(default)]
    age: AgeBracket,
}

impl ExportQuery {
    fn filter(&self) -> ResponseFilter {
        ResponseFilter {
            search: self.search.clone(),
            gender: self.gender,
            age: self.age,
        }
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<QuestionsQuery>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    let kind = QuestionSetKind::from_flag(query.religious);
    let payload = json!({
        "question_set": kind,
        "question_set_label": kind.label(),
        "questions": service.questions(kind),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.score(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(filter): Query<ResponseFilter>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.list(&filter) {
        Ok(records) => {
            let payload = json!({
                "total": records.len(),
                "responses": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn statistics_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.statistics() {
        Ok(statistics) => (StatusCode::OK, axum::Json(statistics)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<ExportQuery>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    let today = Local::now().date_naive();
    match service.export(query.format, &query.filter(), today) {
        Ok(payload) => {
            let disposition = format!("attachment; filename=\"{}\"", payload.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, payload.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                payload.body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(response_id): Path<u64>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.get(ResponseId(response_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(response_id): Path<u64>,
) -> Response
where
    R: ResponseRepository + 'static,
{
    match service.delete(ResponseId(response_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Assessment(_) | AssessmentServiceError::Profile(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
