use thiserror::Error;

/// Ways an assistant call can fail. The gateway collapses every variant into the fallback
/// answer, so these only ever surface in logs and tests.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant api key is not configured")]
    MissingApiKey,
    #[error("invalid assistant endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },
    #[error("assistant transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("assistant service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed assistant response: {0}")]
    Malformed(String),
    #[error("assistant response contained no text")]
    EmptyAnswer,
}

impl AssistantError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AssistantError::Transport(err) if err.is_timeout())
    }
}
