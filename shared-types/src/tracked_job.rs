use serde::{Deserialize, Serialize};
use ts_rs::TS;
use url::Url;

use crate::{ExtractionError, ExtractionResult, ParsedJob};

/// Payload handed to the tracking store once an extraction has been reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackJobRequest {
    pub company_name: String,
    pub job: ParsedJob,
}

impl TrackJobRequest {
    pub fn from_extraction(result: ExtractionResult) -> Option<Self> {
        match result {
            ExtractionResult::Extracted { job, company_name } => {
                Some(Self { company_name, job })
            }
            ExtractionResult::Failed { .. } => None,
        }
    }

    /// Companies are keyed case-insensitively by the store.
    pub fn normalized_company_name(&self) -> String {
        self.company_name.trim().to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.company_name.trim().is_empty() {
            return Err(ExtractionError::InvalidInput(
                "company_name is required".to_string(),
            ));
        }
        if self.job.job_url.trim().is_empty() {
            return Err(ExtractionError::InvalidInput(
                "job_url is required".to_string(),
            ));
        }
        Url::parse(&self.job.job_url).map_err(|e| {
            ExtractionError::InvalidInput(format!("Invalid job_url {}: {}", self.job.job_url, e))
        })?;
        if self.job.job_title.trim().is_empty() {
            return Err(ExtractionError::InvalidInput(
                "job_title is required".to_string(),
            ));
        }
        if let Some(name) = &self.job.contact_name {
            if !name
                .chars()
                .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
            {
                return Err(ExtractionError::InvalidInput(format!(
                    "Contact name must contain only letters: {}",
                    name
                )));
            }
        }
        Ok(())
    }
}
