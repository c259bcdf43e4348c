use async_trait::async_trait;
use extractors::job_text::{
    FallbackKeywords, JobTitleKeywordSource, JobTitleKeywordsPayload, JsonFileKeywords,
};
use shared_types::ExtractionError;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::KeywordsConfig;

/// Fetches the job titles payload from the backend.
pub struct HttpKeywords {
    client: reqwest::Client,
    url: String,
}

impl HttpKeywords {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ExtractionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractionError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl JobTitleKeywordSource for HttpKeywords {
    async fn job_title_keywords(&self) -> Result<Vec<String>, ExtractionError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ExtractionError::KeywordSource(format!("GET {} failed: {}", self.url, e)))?;

        let payload: JobTitleKeywordsPayload = response
            .json()
            .await
            .map_err(|e| ExtractionError::ParseError(format!("Invalid keywords payload: {}", e)))?;

        Ok(payload.into_keywords())
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Picks one source: backend URL first, then a local file, then the built-in list.
pub fn build_keyword_source(
    config: &KeywordsConfig,
) -> Result<Arc<dyn JobTitleKeywordSource>, ExtractionError> {
    if let Some(url) = &config.url {
        info!("Using job title keywords from {}", url);
        let source = HttpKeywords::new(url.clone(), Duration::from_secs(config.timeout_secs))?;
        return Ok(Arc::new(source));
    }

    if let Some(path) = &config.file {
        info!("Using job title keywords from {}", path.display());
        return Ok(Arc::new(JsonFileKeywords::new(path.clone())));
    }

    Ok(Arc::new(FallbackKeywords))
}
