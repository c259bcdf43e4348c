use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::JobState;

pub const UNKNOWN_POSITION: &str = "Unknown Position";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const NO_JOB_URL_FOUND: &str = "No job URL found";

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Keyword source error: {0}")]
    KeywordSource(String),
}

/// A job application record inferred from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParsedJob {
    pub job_url: String,
    pub job_title: String,
    #[serde(default)]
    pub job_state: JobState,
    pub contact_name: Option<String>,
    pub contact_linkedin: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtractionFailure {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Ok,
    Error,
}

/// Result envelope handed back to the caller.
///
/// Serializes as `{ "job": {...}, "company_name": "..." }` on success and
/// `{ "job": { "error": "..." }, "code": "ERROR" }` when nothing trackable was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ExtractionResult {
    Extracted {
        job: ParsedJob,
        company_name: String,
    },
    Failed {
        job: ExtractionFailure,
        code: ResponseCode,
    },
}

impl ExtractionResult {
    pub fn missing_job_url() -> Self {
        ExtractionResult::Failed {
            job: ExtractionFailure {
                error: NO_JOB_URL_FOUND.to_string(),
            },
            code: ResponseCode::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Failed { .. })
    }

    pub fn job(&self) -> Option<&ParsedJob> {
        match self {
            ExtractionResult::Extracted { job, .. } => Some(job),
            ExtractionResult::Failed { .. } => None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match self {
            ExtractionResult::Extracted { company_name, .. } => Some(company_name),
            ExtractionResult::Failed { .. } => None,
        }
    }
}
