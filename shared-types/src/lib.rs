pub mod extraction;
pub mod job_state;
pub mod tracked_job;

pub use extraction::{
    ExtractionError, ExtractionFailure, ExtractionResult, ParsedJob, ResponseCode,
    NO_JOB_URL_FOUND, UNKNOWN_COMPANY, UNKNOWN_POSITION,
};
pub use job_state::JobState;
pub use tracked_job::TrackJobRequest;
