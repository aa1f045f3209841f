use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failure of the downstream completion capability.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Request timed out: {message}")]
    Timeout {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),
}

impl LlmError {
    /// HTTP status reported by the provider, if the failure came with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Timeout { .. })
    }
}
