use thiserror::Error;

/// User-visible text shown for every failed analysis.
pub const GENERIC_FAILURE: &str = "Gagal menganalisa";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    #[error("failed to reach analysis service: {0}")]
    Transport(String),
    #[error("analysis service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse analysis response: {0}")]
    Parse(String),
}

impl AnalyzeError {
    /// True for failures to reach the service or non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, AnalyzeError::Transport(_) | AnalyzeError::Status { .. })
    }

    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(value: serde_json::Error) -> Self {
        AnalyzeError::Parse(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid service base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
