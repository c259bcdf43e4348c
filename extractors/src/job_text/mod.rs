//! Free-text job application extraction.
//!
//! Turns a pasted block of text (a LinkedIn job page, an email thread, notes)
//! into a [`ParsedJob`](shared_types::ParsedJob) plus a company name. Lines are
//! classified by an ordered rule table, folded into a [`LineAccumulator`], then
//! resolved. Non-LinkedIn postings take their company from the job URL.

mod classifier;
mod company;
mod helpers;
mod keywords;
mod resolver;

pub use classifier::{classify, classify_line, ClassifiedLine, LineAccumulator, LineKind, LineTag};
pub use company::{company_from_job_url, create_ats_patterns, AtsPattern};
pub use helpers::{is_url, linkedin_display_name, match_job_state};
pub use keywords::{
    fallback_keywords, normalize_keywords, resolve_job_title_keywords, FallbackKeywords,
    JobTitleKeywordSource, JobTitleKeywordsPayload, JsonFileKeywords, StaticKeywords,
    FALLBACK_JOB_TITLE_KEYWORDS,
};
pub use resolver::{pick_company_name, resolve};

use shared_types::ExtractionResult;
use std::sync::Arc;
use tracing::info;

pub struct JobTextExtractor {
    keyword_source: Arc<dyn JobTitleKeywordSource>,
}

impl JobTextExtractor {
    pub fn new(keyword_source: Arc<dyn JobTitleKeywordSource>) -> Self {
        Self { keyword_source }
    }

    pub fn with_fallback_keywords() -> Self {
        Self::new(Arc::new(FallbackKeywords))
    }

    /// Fetches the keyword list once, then extracts synchronously.
    pub async fn extract(&self, text: &str) -> ExtractionResult {
        let keywords = resolve_job_title_keywords(self.keyword_source.as_ref()).await;
        let result = extract_with_keywords(text, &keywords);

        match &result {
            ExtractionResult::Extracted { job, company_name } => info!(
                "Extracted job {} ({}) at {}",
                job.job_title, job.job_state, company_name
            ),
            ExtractionResult::Failed { job, .. } => info!("Extraction failed: {}", job.error),
        }

        result
    }
}

impl Default for JobTextExtractor {
    fn default() -> Self {
        Self::with_fallback_keywords()
    }
}

/// Pure extraction against a known keyword list.
pub fn extract_with_keywords(text: &str, keywords: &[String]) -> ExtractionResult {
    let keywords = normalize_keywords(keywords);
    resolve(classify(text, &keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{JobState, ParsedJob, UNKNOWN_COMPANY, UNKNOWN_POSITION};

    const FINONEX_POST: &str = "https://www.linkedin.com/jobs/view/4324949336
finonex
https://www.linkedin.com/in/amirdar/
applied
senior backend software engineer";

    fn keywords() -> Vec<String> {
        vec!["senior".to_string(), "engineer".to_string()]
    }

    fn extracted(result: ExtractionResult) -> (ParsedJob, String) {
        match result {
            ExtractionResult::Extracted { job, company_name } => (job, company_name),
            ExtractionResult::Failed { job, .. } => panic!("Expected job, got {}", job.error),
        }
    }

    #[test]
    fn test_linkedin_post_with_contact() {
        let (job, company) = extracted(extract_with_keywords(FINONEX_POST, &keywords()));

        assert_eq!(company, "finonex");
        assert_eq!(job.job_url, "https://www.linkedin.com/jobs/view/4324949336");
        assert_eq!(job.job_state, JobState::Applied);
        assert_eq!(job.job_title, "senior backend software engineer");
        assert_eq!(
            job.contact_linkedin.as_deref(),
            Some("https://www.linkedin.com/in/amirdar/")
        );
        assert_eq!(job.contact_name.as_deref(), Some("Amirdar"));
        assert!(job.contact_email.is_none());
    }

    #[test]
    fn test_missing_title_line() {
        let text = FINONEX_POST.replace("senior backend software engineer", "");
        let (job, company) = extracted(extract_with_keywords(&text, &keywords()));

        assert_eq!(job.job_title, UNKNOWN_POSITION);
        assert_eq!(company, "finonex");
        assert_eq!(job.job_url, "https://www.linkedin.com/jobs/view/4324949336");
        assert_eq!(job.job_state, JobState::Applied);
        assert_eq!(
            job.contact_linkedin.as_deref(),
            Some("https://www.linkedin.com/in/amirdar/")
        );
        assert_eq!(job.contact_name.as_deref(), Some("Amirdar"));
        assert!(job.contact_email.is_none());
    }

    #[test]
    fn test_colon_line_parses_as_job_url() {
        // Any absolute URL counts, including schemes without a host.
        let text = "https://jobs.lever.co/acme\nLocation: Tel Aviv";
        let (job, company) = extracted(extract_with_keywords(text, &keywords()));

        assert_eq!(job.job_url, "Location: Tel Aviv");
        assert_eq!(company, UNKNOWN_COMPANY);
    }

    #[test]
    fn test_lever_posting_ignores_free_text() {
        let text = "https://jobs.lever.co/acme-corp\nGlobex\nInitech Holdings";
        let (job, company) = extracted(extract_with_keywords(text, &keywords()));

        assert_eq!(company, "Acme-corp");
        assert_eq!(job.job_url, "https://jobs.lever.co/acme-corp");
    }

    #[test]
    fn test_no_url_is_error_envelope() {
        let text = "finonex\nsenior backend software engineer\napplied\nrecruiter@finonex.com";
        let result = extract_with_keywords(text, &keywords());

        assert_eq!(result, ExtractionResult::missing_job_url());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "job": { "error": "No job URL found" }, "code": "ERROR" })
        );
    }

    #[test]
    fn test_empty_input_is_error_envelope() {
        assert!(extract_with_keywords("", &keywords()).is_error());
        assert!(extract_with_keywords("\n   \n", &keywords()).is_error());
    }

    #[test]
    fn test_contact_name_not_used_as_company() {
        let text = "https://www.linkedin.com/jobs/view/1
https://www.linkedin.com/in/jane-doe-4821
Jane Doe
Globex";
        let (job, company) = extracted(extract_with_keywords(text, &keywords()));

        assert_eq!(job.contact_name.as_deref(), Some("Jane Doe"));
        assert_eq!(company, "Globex");
    }

    #[test]
    fn test_email_and_state_are_captured() {
        let text = "https://www.comeet.com/jobs/monday/A1.B2/qa-engineer/C3
qa engineer
Message_Sent
talent@monday.com";
        let (job, company) = extracted(extract_with_keywords(text, &keywords()));

        assert_eq!(company, "Monday");
        assert_eq!(job.job_title, "qa engineer");
        assert_eq!(job.job_state, JobState::MessageSent);
        assert_eq!(job.contact_email.as_deref(), Some("talent@monday.com"));
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let text = "https://www.linkedin.com/jobs/view/9\nStaff Platform Lead";
        let keywords = vec!["STAFF".to_string()];
        let (job, _) = extracted(extract_with_keywords(text, &keywords));
        assert_eq!(job.job_title, "Staff Platform Lead");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_with_keywords(FINONEX_POST, &keywords());
        let second = extract_with_keywords(FINONEX_POST, &keywords());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_extractor_uses_keyword_source() {
        let extractor = JobTextExtractor::new(Arc::new(StaticKeywords::new(["backend"])));
        let (job, _) = extracted(extractor.extract(FINONEX_POST).await);
        assert_eq!(job.job_title, "senior backend software engineer");

        let extractor = JobTextExtractor::new(Arc::new(StaticKeywords::new(["designer"])));
        let (job, company) = extracted(extractor.extract(FINONEX_POST).await);
        assert_eq!(job.job_title, UNKNOWN_POSITION);
        assert_eq!(company, "finonex");
    }

    #[tokio::test]
    async fn test_default_extractor_uses_fallback_keywords() {
        let extractor = JobTextExtractor::default();
        let (job, _) = extracted(extractor.extract(FINONEX_POST).await);
        assert_eq!(job.job_title, "senior backend software engineer");
    }
}
