use shared_types::{ExtractionResult, ParsedJob, UNKNOWN_COMPANY, UNKNOWN_POSITION};
use tracing::debug;

use super::classifier::LineAccumulator;
use super::company::company_from_job_url;
use super::helpers::{is_linkedin_host, parse_absolute_url};

/// Turns classified lines into the result envelope.
pub fn resolve(acc: LineAccumulator) -> ExtractionResult {
    let Some(job_url) = acc.job_url else {
        debug!("No job URL among {} classified lines", acc.lines.len());
        return ExtractionResult::missing_job_url();
    };

    let linkedin_posting = parse_absolute_url(&job_url)
        .map(|url| is_linkedin_host(&url))
        .unwrap_or(false);

    let company_name = if linkedin_posting {
        pick_company_name(&acc.potential_company_names, acc.contact_name.as_deref())
    } else {
        company_from_job_url(&job_url)
    };

    let job = ParsedJob {
        job_url,
        job_title: acc
            .job_title
            .unwrap_or_else(|| UNKNOWN_POSITION.to_string()),
        job_state: acc.job_state,
        contact_name: acc.contact_name,
        contact_linkedin: acc.contact_linkedin,
        contact_email: acc.contact_email,
    };

    ExtractionResult::Extracted { job, company_name }
}

/// First candidate that isn't the contact's own name.
pub fn pick_company_name(candidates: &[String], contact_name: Option<&str>) -> String {
    candidates
        .iter()
        .find(|name| Some(name.as_str()) != contact_name)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}
