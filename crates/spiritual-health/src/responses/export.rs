use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::{ResponseRecord, TIMESTAMP_FORMAT};
use crate::assessment::Domain;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unsupported export format '{other}' (expected json or csv)")),
        }
    }
}

/// Rendered export ready to be written to disk or returned over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to flush export buffer: {0}")]
    Io(#[from] std::io::Error),
}

pub fn export_filename(format: ExportFormat, on: NaiveDate) -> String {
    format!(
        "spiritual-health-data-{}.{}",
        on.format("%Y-%m-%d"),
        format.extension()
    )
}

pub fn export_records(
    records: &[ResponseRecord],
    format: ExportFormat,
    on: NaiveDate,
) -> Result<ExportPayload, ExportError> {
    let body = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(records)?,
        ExportFormat::Csv => render_csv(records)?,
    };

    Ok(ExportPayload {
        filename: export_filename(format, on),
        content_type: format.content_type(),
        body,
    })
}

const CSV_HEADER: [&str; 17] = [
    "id",
    "submitted_at",
    "name",
    "age",
    "biological_gender",
    "email",
    "nationality",
    "city",
    "occupation",
    "is_religious",
    "overall_average",
    "overall_percentage",
    "overall_level",
    "self_average",
    "others_average",
    "nature_average",
    "transcendent_average",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u64,
    submitted_at: String,
    name: &'a str,
    age: u16,
    biological_gender: &'static str,
    email: &'a str,
    nationality: &'a str,
    city: &'a str,
    occupation: &'a str,
    is_religious: bool,
    overall_average: f64,
    overall_percentage: f64,
    overall_level: &'static str,
    self_average: Option<f64>,
    others_average: Option<f64>,
    nature_average: Option<f64>,
    transcendent_average: Option<f64>,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a ResponseRecord) -> Self {
        let domain_average = |domain: Domain| {
            record
                .report
                .domain_scores
                .get(&domain)
                .map(|score| score.average)
        };
        let overall = record.report.overall_score;

        Self {
            id: record.id.0,
            submitted_at: record.submitted_at.format(TIMESTAMP_FORMAT).to_string(),
            name: &record.profile.name,
            age: record.profile.age,
            biological_gender: record.profile.biological_gender.key(),
            email: &record.profile.email,
            nationality: &record.profile.nationality,
            city: &record.profile.city,
            occupation: &record.profile.occupation,
            is_religious: record.is_religious,
            overall_average: overall.average,
            overall_percentage: overall.percentage,
            overall_level: overall.level().label(),
            self_average: domain_average(Domain::SelfRelation),
            others_average: domain_average(Domain::Others),
            nature_average: domain_average(Domain::Nature),
            transcendent_average: domain_average(Domain::Transcendent),
        }
    }
}

fn render_csv(records: &[ResponseRecord]) -> Result<Vec<u8>, ExportError> {
    // serialize() only emits headers alongside a first row.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(CsvRow::from_record(record))?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}
