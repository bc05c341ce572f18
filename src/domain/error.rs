use thiserror::Error;

/// The three failure kinds a pipeline invocation can terminate in.
///
/// Every variant carries a human-readable detail message; [`user_message`]
/// maps each kind to the text shown to end users.
///
/// [`user_message`]: DomainError::user_message
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// User-facing message for each failure kind.
    ///
    /// Configuration problems are actionable (set up the API key), service
    /// problems are transient (try again later), and malformed responses name
    /// the content that could not be read.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(_) => {
                "The AI service is not configured. Please set up your API key and try again."
                    .to_string()
            }
            Self::ServiceUnavailable(_) => {
                "Unable to reach the AI service. Please try again later.".to_string()
            }
            Self::MalformedResponse(detail) => {
                format!("The AI service returned an unreadable response: {detail}")
            }
        }
    }
}
