use async_trait::async_trait;
use serde::Deserialize;
use shared_types::ExtractionError;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const FALLBACK_JOB_TITLE_KEYWORDS: [&str; 8] = [
    "senior",
    "junior",
    "manager",
    "engineer",
    "analyst",
    "administrator",
    "designer",
    "writer",
];

/// Supplies the vocabulary used to recognize job title lines.
#[async_trait]
pub trait JobTitleKeywordSource: Send + Sync {
    async fn job_title_keywords(&self) -> Result<Vec<String>, ExtractionError>;

    fn name(&self) -> &str;
}

/// Shape of the job titles config served by the backend.
#[derive(Debug, Default, Deserialize)]
pub struct JobTitleKeywordsPayload {
    #[serde(default)]
    pub software_engineer: Vec<String>,
    #[serde(default)]
    pub general: Vec<String>,
}

impl JobTitleKeywordsPayload {
    pub fn into_keywords(self) -> Vec<String> {
        let mut keywords = self.software_engineer;
        keywords.extend(self.general);
        keywords
    }

    pub fn from_json(content: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(content)
            .map_err(|e| ExtractionError::ParseError(format!("Invalid job titles payload: {}", e)))
    }
}

pub fn fallback_keywords() -> Vec<String> {
    FALLBACK_JOB_TITLE_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Trims and lowercases keywords, dropping blanks.
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Fetches keywords once, substituting the fallback list on failure or an empty payload.
pub async fn resolve_job_title_keywords(source: &dyn JobTitleKeywordSource) -> Vec<String> {
    match source.job_title_keywords().await {
        Ok(keywords) => {
            let keywords = normalize_keywords(&keywords);
            if keywords.is_empty() {
                warn!(
                    "Keyword source {} returned no keywords, using fallback list",
                    source.name()
                );
                fallback_keywords()
            } else {
                debug!("Loaded {} job title keywords from {}", keywords.len(), source.name());
                keywords
            }
        }
        Err(e) => {
            warn!(
                "Keyword source {} failed, using fallback list: {}",
                source.name(),
                e
            );
            fallback_keywords()
        }
    }
}

pub struct StaticKeywords {
    keywords: Vec<String>,
}

impl StaticKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl JobTitleKeywordSource for StaticKeywords {
    async fn job_title_keywords(&self) -> Result<Vec<String>, ExtractionError> {
        Ok(self.keywords.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

pub struct FallbackKeywords;

#[async_trait]
impl JobTitleKeywordSource for FallbackKeywords {
    async fn job_title_keywords(&self) -> Result<Vec<String>, ExtractionError> {
        Ok(fallback_keywords())
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

/// Reads a `job_titles.json` file from disk on every call.
pub struct JsonFileKeywords {
    path: PathBuf,
}

impl JsonFileKeywords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobTitleKeywordSource for JsonFileKeywords {
    async fn job_title_keywords(&self) -> Result<Vec<String>, ExtractionError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ExtractionError::KeywordSource(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(JobTitleKeywordsPayload::from_json(&content)?.into_keywords())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
