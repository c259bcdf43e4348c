use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Where a job application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    ConnectionRequested,
    MessageSent,
    EmailSent,
    Applied,
    #[default]
    Unknown,
}

impl JobState {
    pub const ALL: [JobState; 5] = [
        JobState::ConnectionRequested,
        JobState::MessageSent,
        JobState::EmailSent,
        JobState::Applied,
        JobState::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::ConnectionRequested => "CONNECTION_REQUESTED",
            JobState::MessageSent => "MESSAGE_SENT",
            JobState::EmailSent => "EMAIL_SENT",
            JobState::Applied => "APPLIED",
            JobState::Unknown => "UNKNOWN",
        }
    }

    /// Numeric code used by the tracking store.
    pub fn code(&self) -> u8 {
        match self {
            JobState::ConnectionRequested => 1,
            JobState::MessageSent => 2,
            JobState::EmailSent => 3,
            JobState::Applied => 4,
            JobState::Unknown => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.code() == code)
    }

    /// States a user can pick when recording progress on a job.
    pub fn trackable() -> Vec<JobState> {
        Self::ALL
            .into_iter()
            .filter(|state| *state != JobState::Unknown)
            .collect()
    }

    pub fn parse_lenient(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobState {
    type Err = crate::ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| crate::ExtractionError::ParseError(format!("Unknown job state: {}", s)))
    }
}
