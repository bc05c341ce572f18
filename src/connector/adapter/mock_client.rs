use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::GenerativeClient;
use crate::domain::{DomainError, GroundedReply, RawCitation};

/// In-memory [`GenerativeClient`] for tests.
///
/// Replays a canned reply (or a canned failure) and records every prompt it
/// receives, so use cases can be exercised without a live service.
pub struct MockGenerativeClient {
    text: String,
    citations: Vec<RawCitation>,
    error: Option<DomainError>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            citations: Vec::new(),
            error: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Reply with the given text on every call.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new()
        }
    }

    /// Fail every call with the given error.
    pub fn failing(error: DomainError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    pub fn with_citations(mut self, citations: Vec<RawCitation>) -> Self {
        self.citations = citations;
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn record(&self, prompt: &str) -> Result<(), DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_grounded(&self, prompt: &str) -> Result<GroundedReply, DomainError> {
        self.record(prompt)?;
        Ok(GroundedReply::new(
            self.text.clone(),
            self.citations.clone(),
        ))
    }

    async fn generate_structured(
        &self,
        prompt: &str,
        _schema: &Value,
    ) -> Result<String, DomainError> {
        self.record(prompt)?;
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_text_and_records_prompts() {
        let client = MockGenerativeClient::replying("canned");

        let reply = client.generate_grounded("first").await.unwrap();
        assert_eq!(reply.text(), "canned");

        let body = client
            .generate_structured("second", &serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(body, "canned");

        assert_eq!(client.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_mock_failure_propagates() {
        let client = MockGenerativeClient::failing(DomainError::unavailable("down"));
        let err = client.generate_grounded("q").await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
