//! Extractors Crate
//!
//! This crate infers structured job-application records from free text a user
//! pastes (a LinkedIn job page, an email thread, notes). Wire types live in the
//! `shared-types` crate; this crate holds the decision logic.
//!
//! # Available Extractors
//!
//! - `JobTextExtractor`: Extracts one job application from a pasted text block
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::JobTextExtractor;
//!
//! let extractor = JobTextExtractor::with_fallback_keywords();
//! let result = extractor.extract(&pasted_text).await;
//! ```

pub mod job_text;

// Re-export commonly used types
pub use job_text::{
    extract_with_keywords, JobTextExtractor, JobTitleKeywordSource, JsonFileKeywords,
    StaticKeywords,
};

pub use shared_types::{ExtractionError, ExtractionResult, ParsedJob};
