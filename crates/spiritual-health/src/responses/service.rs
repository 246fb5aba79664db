use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use super::domain::{AssessmentSubmission, ResponseId, ResponseRecord, ScoreRequest};
use super::export::{export_records, ExportError, ExportFormat, ExportPayload};
use super::filter::{ResponseFilter, ResponseStatistics};
use super::profile::ProfileViolation;
use super::repository::{RepositoryError, ResponseRepository};
use crate::assessment::{
    AssessmentError, AssessmentReport, QuestionSetKind, QuestionView, ScoringEngine,
};

/// Service composing profile validation, the scoring engine, and response storage.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: ScoringEngine<'static>,
    sequence: AtomicU64,
}

impl<R> AssessmentService<R>
where
    R: ResponseRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, ScoringEngine::standard())
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine<'static>) -> Self {
        Self {
            repository,
            engine,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> ScoringEngine<'static> {
        self.engine
    }

    fn next_response_id(&self) -> ResponseId {
        ResponseId(self.sequence.fetch_add(1, Ordering::Relaxed))
    }

    /// Questions of one set in presentation order.
    pub fn questions(&self, kind: QuestionSetKind) -> Vec<QuestionView> {
        self.engine
            .catalog()
            .question_set(kind)
            .iter()
            .map(|question| question.to_view())
            .collect()
    }

    /// Score answers without storing anything.
    pub fn score(&self, request: &ScoreRequest) -> Result<AssessmentReport, AssessmentServiceError> {
        let kind = QuestionSetKind::from_flag(request.is_religious);
        let report = self.engine.assess(&request.answers, kind)?;
        debug!(
            question_set = kind.label(),
            overall = report.overall_score.percentage,
            "assessment scored"
        );
        Ok(report)
    }

    /// Validate, score, and store a completed questionnaire.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<ResponseRecord, AssessmentServiceError> {
        self.submit_at(submission, Local::now().naive_local())
    }

    pub fn submit_at(
        &self,
        submission: AssessmentSubmission,
        submitted_at: NaiveDateTime,
    ) -> Result<ResponseRecord, AssessmentServiceError> {
        submission.profile.validate()?;

        let kind = QuestionSetKind::from_flag(submission.is_religious);
        let report = self.engine.assess(&submission.answers, kind)?;

        let record = ResponseRecord {
            id: self.next_response_id(),
            submitted_at,
            profile: submission.profile,
            is_religious: submission.is_religious,
            answers: submission.answers,
            report,
        };

        let stored = self.repository.insert(record)?;
        info!(
            response_id = %stored.id,
            religious = stored.is_religious,
            overall = stored.report.overall_score.percentage,
            "assessment response stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: ResponseId) -> Result<ResponseRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn delete(&self, id: ResponseId) -> Result<ResponseRecord, AssessmentServiceError> {
        let removed = self.repository.delete(id)?;
        info!(response_id = %id, "assessment response deleted");
        Ok(removed)
    }

    /// Stored responses matching the filter, oldest first.
    pub fn list(
        &self,
        filter: &ResponseFilter,
    ) -> Result<Vec<ResponseRecord>, AssessmentServiceError> {
        let records = self.repository.list()?;
        Ok(filter.apply(records))
    }

    pub fn statistics(&self) -> Result<ResponseStatistics, AssessmentServiceError> {
        let records = self.repository.list()?;
        Ok(ResponseStatistics::from_records(&records))
    }

    pub fn export(
        &self,
        format: ExportFormat,
        filter: &ResponseFilter,
        on: NaiveDate,
    ) -> Result<ExportPayload, AssessmentServiceError> {
        let records = self.list(filter)?;
        let payload = export_records(&records, format, on)?;
        info!(
            %format,
            records = records.len(),
            filename = %payload.filename,
            "responses exported"
        );
        Ok(payload)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
